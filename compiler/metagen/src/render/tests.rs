use pretty_assertions::assert_eq;

use meta_decl::{DeclKind, FunctionFlags};
use meta_types::RecordField;

use super::*;

fn fq(name: &str) -> FqName {
    FqName::new("UIKit", name)
}

#[test]
fn interface_with_members() {
    let mut pool = TypePool::new();
    let rect = pool.struct_ref(FqName::new("CoreGraphics", "CGRect"));
    let view = Declaration::new(
        fq("UIView"),
        DeclKind::Interface(InterfaceDecl {
            base: Some(fq("UIResponder")),
            protocols: vec![fq("NSCoding")],
            categories: Vec::new(),
            members: Members {
                instance_methods: vec![
                    Method::new("setNeedsLayout", vec![TypeId::VOID]),
                    Method::new("convertPoint:toView:", vec![TypeId::INT, TypeId::INT, TypeId::ID]),
                ],
                static_methods: vec![Method::new("new", vec![TypeId::INSTANCETYPE])],
                properties: vec![
                    Property::new("frame", rect).with_flags(PropertyFlags::READONLY),
                    Property::new("tag", TypeId::LONG),
                ],
            },
        }),
    );

    assert_eq!(
        render_declaration(&pool, &view),
        "INTERFACE_DECLARATION: UIView : UIResponder <NSCoding>\n\
         \x20 + (instancetype) new()\n\
         \x20 - (void) setNeedsLayout()\n\
         \x20 - (int) convertPoint:toView:(int, id)\n\
         \x20 @property (readonly) struct CGRect frame\n\
         \x20 @property long tag\n"
    );
}

#[test]
fn root_interface_has_no_base() {
    let pool = TypePool::new();
    let object = Declaration::new(
        FqName::new("ObjectiveC.NSObject", "NSObject"),
        DeclKind::Interface(InterfaceDecl::default()),
    );
    assert_eq!(render_declaration(&pool, &object), "INTERFACE_DECLARATION: NSObject\n");
}

#[test]
fn protocol_and_category_headers() {
    let pool = TypePool::new();
    let protocol = Declaration::new(
        fq("UITableViewDataSource"),
        DeclKind::Protocol(ProtocolDecl {
            protocols: vec![fq("NSObject")],
            members: Members {
                instance_methods: vec![Method::new("numberOfSections", vec![TypeId::LONG])
                    .with_flags(MethodFlags::OPTIONAL)],
                ..Members::default()
            },
        }),
    );
    let category = Declaration::new(
        fq("UIViewGeometry"),
        DeclKind::Category(CategoryDecl::new(fq("UIView"))),
    );

    assert_eq!(
        render_declaration(&pool, &protocol),
        "PROTOCOL_DECLARATION: UITableViewDataSource <NSObject>\n\
         \x20 - (long) numberOfSections() @optional\n"
    );
    assert_eq!(
        render_declaration(&pool, &category),
        "CATEGORY_DECLARATION: UIView (UIViewGeometry)\n"
    );
}

#[test]
fn records_functions_and_vars() {
    let mut pool = TypePool::new();
    let string = pool.interface(FqName::new("Foundation", "NSString"), Vec::new());
    let point = Declaration::new(
        FqName::new("CoreGraphics", "CGPoint"),
        DeclKind::Struct(RecordDecl {
            fields: vec![
                RecordField::new("x", TypeId::DOUBLE),
                RecordField::new("y", TypeId::DOUBLE),
            ],
        }),
    );
    let function = Declaration::new(
        fq("UIApplicationMain"),
        DeclKind::Function(FunctionDecl {
            signature: vec![TypeId::INT, TypeId::INT, TypeId::CSTRING],
            flags: FunctionFlags::empty(),
        }),
    );
    let nullary = Declaration::new(
        fq("UIAccessibilityIsBoldTextEnabled"),
        DeclKind::Function(FunctionDecl {
            signature: vec![TypeId::BOOL],
            flags: FunctionFlags::empty(),
        }),
    );
    let var = Declaration::new(
        fq("UIKeyboardDidShowNotification"),
        DeclKind::Var(VarDecl { ty: string }),
    );

    let rendered: Vec<String> = [&point, &function, &nullary, &var]
        .iter()
        .map(|decl| render_declaration(&pool, decl))
        .collect();
    assert_eq!(
        rendered,
        vec![
            "STRUCT_DECLARATION: CGPoint\n  double x;\n  double y;\n",
            "FUNCTION_DECLARATION: int UIApplicationMain(int, char *)\n",
            "FUNCTION_DECLARATION: bool UIAccessibilityIsBoldTextEnabled(void)\n",
            "VAR_DECLARATION: NSString *UIKeyboardDidShowNotification\n",
        ]
    );
}

#[test]
fn members_do_not_leak_into_next_declaration() {
    let pool = TypePool::new();
    let protocol = Declaration::new(
        fq("P"),
        DeclKind::Protocol(ProtocolDecl {
            protocols: Vec::new(),
            members: Members {
                instance_methods: vec![Method::new("run", vec![TypeId::VOID])],
                ..Members::default()
            },
        }),
    );
    let var = Declaration::new(fq("count"), DeclKind::Var(VarDecl { ty: TypeId::INT }));

    let mut printer = DeclarationPrinter::new(&pool);
    protocol.accept(&mut printer);
    var.accept(&mut printer);
    assert_eq!(
        printer.finish(),
        "PROTOCOL_DECLARATION: P\n  - (void) run()\nVAR_DECLARATION: int count\n"
    );
}
