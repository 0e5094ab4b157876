//! Errors raised by the type model.

/// Encoding was requested for a type that has no ABI mapping.
///
/// Callers are expected to check support first; hitting this means a type
/// slipped past the support filter.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error("unmapped type `{ty}`: no ABI encoding exists for it")]
    UnmappedType { ty: String },
}
