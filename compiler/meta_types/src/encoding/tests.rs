use pretty_assertions::assert_eq;

use super::*;

#[test]
fn tags_follow_table_order() {
    for (i, encoding) in TypeEncoding::ALL.iter().enumerate() {
        assert_eq!(usize::from(encoding.tag()), i, "{encoding:?} out of order");
        assert_eq!(TypeEncoding::from_tag(encoding.tag()), Some(*encoding));
    }
    assert_eq!(TypeEncoding::from_tag(33), None);
    assert_eq!(TypeEncoding::from_tag(u8::MAX), None);
}

#[test]
fn fixed_tag_values() {
    // Shared with the runtime reader; these must never move.
    assert_eq!(TypeEncoding::Void.tag(), 2);
    assert_eq!(TypeEncoding::Bool.tag(), 3);
    assert_eq!(TypeEncoding::Int.tag(), 6);
    assert_eq!(TypeEncoding::Double.tag(), 17);
    assert_eq!(TypeEncoding::Pointer.tag(), 21);
    assert_eq!(TypeEncoding::Protocol.tag(), 26);
    assert_eq!(TypeEncoding::AnonymousUnion.tag(), 32);
}

#[test]
fn introspection_symbols() {
    let expected = [
        (TypeEncoding::Void, "v"),
        (TypeEncoding::Bool, "B"),
        (TypeEncoding::Short, "s"),
        (TypeEncoding::UShort, "S"),
        (TypeEncoding::Int, "i"),
        (TypeEncoding::UInt, "I"),
        (TypeEncoding::Long, "l"),
        (TypeEncoding::ULong, "L"),
        (TypeEncoding::LongLong, "q"),
        (TypeEncoding::ULongLong, "Q"),
        (TypeEncoding::SignedChar, "c"),
        (TypeEncoding::UnsignedChar, "C"),
        (TypeEncoding::Float, "f"),
        (TypeEncoding::Double, "d"),
        (TypeEncoding::Protocol, "@"),
        (TypeEncoding::Selector, ":"),
        (TypeEncoding::Class, "#"),
        (TypeEncoding::CString, "*"),
    ];
    for (encoding, symbol) in expected {
        assert_eq!(encoding.symbol(), symbol, "symbol for {encoding:?}");
    }
}

#[test]
fn scalar_range() {
    assert!(TypeEncoding::Void.is_scalar());
    assert!(TypeEncoding::Double.is_scalar());
    assert!(!TypeEncoding::VaList.is_scalar());
    assert!(!TypeEncoding::Pointer.is_scalar());
    assert!(!TypeEncoding::Protocol.is_scalar());
}
