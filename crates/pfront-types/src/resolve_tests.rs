use std::sync::Arc;

use crate::{
    EnumDecl, Error, ResolverConfig, Type, TypeExpr, TypeKind, TypeResolver, TypeScope,
};

fn name(n: &str) -> TypeExpr {
    TypeExpr::name(n)
}

fn with_fuel(scope: &TypeScope, fuel: Option<u32>) -> TypeResolver<'_> {
    TypeResolver::with_config(scope, ResolverConfig::new().recursion_fuel(fuel))
}

fn scope_with_events(events: &[&str]) -> TypeScope {
    let mut scope = TypeScope::new();
    for event in events {
        scope.declare_event(*event).unwrap();
    }
    scope
}

#[test]
fn primitives_resolve_to_themselves() {
    let scope = TypeScope::new();
    let mut resolver = TypeResolver::new(&scope);

    assert_eq!(resolver.resolve(&name("int")).unwrap(), Type::INT);
    assert_eq!(
        resolver.resolve(&TypeExpr::seq(name("machine"))).unwrap(),
        Type::seq(Type::MACHINE)
    );
}

#[test]
fn composite_expressions() {
    let scope = TypeScope::new();
    let mut resolver = TypeResolver::new(&scope);

    let expr = TypeExpr::map(
        name("string"),
        TypeExpr::NamedTuple(vec![
            ("id".to_owned(), name("int")),
            ("tags".to_owned(), TypeExpr::set(name("string"))),
        ]),
    );
    let ty = resolver.resolve(&expr).unwrap();
    let repr = ty.original_representation();
    insta::assert_snapshot!(repr, @"map[string, (id: int, tags: set[string])]");

    let tuple = resolver
        .resolve(&TypeExpr::Tuple(vec![name("bool"), name("float")]))
        .unwrap();
    assert_eq!(tuple, Type::tuple([Type::BOOL, Type::FLOAT]));
}

#[test]
fn typedefs_resolve_in_any_order() {
    let mut scope = TypeScope::new();
    scope
        .declare_typedef("Grid", TypeExpr::seq(name("Row")))
        .unwrap();
    scope
        .declare_typedef("Row", TypeExpr::seq(name("int")))
        .unwrap();

    let mut resolver = TypeResolver::new(&scope);
    let grid = resolver.resolve(&name("Grid")).unwrap();

    assert_eq!(grid.kind(), TypeKind::TypeDef);
    assert_eq!(grid.original_representation(), "Grid");
    assert_eq!(grid.canonical_representation(), "seq[seq[int]]");
}

#[test]
fn typedefs_are_shared_between_references() {
    let mut scope = TypeScope::new();
    scope.declare_typedef("Id", name("int")).unwrap();

    let mut resolver = TypeResolver::new(&scope);
    let a = resolver.resolve(&name("Id")).unwrap();
    let b = resolver.resolve(&TypeExpr::seq(name("Id"))).unwrap();

    let (Type::TypeDef(a), Type::Sequence(b)) = (&a, &b) else {
        panic!("expected typedef and sequence");
    };
    let Type::TypeDef(b) = &**b else {
        panic!("expected typedef element");
    };
    assert!(Arc::ptr_eq(a, b));
}

#[test]
fn resolve_typedefs_reports_in_declaration_order() {
    let mut scope = TypeScope::new();
    scope.declare_typedef("B", name("A")).unwrap();
    scope.declare_typedef("A", name("bool")).unwrap();
    scope.declare_foreign("Handle").unwrap();

    let mut resolver = TypeResolver::new(&scope);
    let decls = resolver.resolve_typedefs().unwrap();
    let names: Vec<_> = decls.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["B", "A"]);
    assert_eq!(decls[0].target.canonical_representation(), "bool");
}

#[test]
fn direct_cycle() {
    let mut scope = TypeScope::new();
    scope.declare_typedef("Loop", name("Loop")).unwrap();

    let mut resolver = TypeResolver::new(&scope);
    let err = resolver.resolve(&name("Loop")).unwrap_err();
    assert_eq!(err, Error::CyclicTypeDef(vec!["Loop".into(), "Loop".into()]));
}

#[test]
fn indirect_cycle_through_structure() {
    let mut scope = TypeScope::new();
    scope
        .declare_typedef("Tree", TypeExpr::seq(name("Forest")))
        .unwrap();
    scope
        .declare_typedef("Forest", TypeExpr::map(name("int"), name("Tree")))
        .unwrap();

    let mut resolver = TypeResolver::new(&scope);
    let err = resolver.resolve(&name("Tree")).unwrap_err();
    insta::assert_snapshot!(err, @"cyclic typedef: Tree -> Forest -> Tree");
}

#[test]
fn unknown_type() {
    let scope = TypeScope::new();
    let mut resolver = TypeResolver::new(&scope);
    let err = resolver.resolve(&TypeExpr::seq(name("Missing"))).unwrap_err();
    assert_eq!(err, Error::UnknownType("Missing".into()));
}

#[test]
fn enums_and_foreign_types() {
    let mut scope = TypeScope::new();
    scope
        .declare_enum(EnumDecl::new("Phase", ["Init", "Done"]))
        .unwrap();
    scope.declare_foreign("Handle").unwrap();

    let mut resolver = TypeResolver::new(&scope);
    let phase = resolver.resolve(&name("Phase")).unwrap();
    let handle = resolver.resolve(&name("Handle")).unwrap();

    assert_eq!(phase.kind(), TypeKind::Enum);
    assert_eq!(handle.kind(), TypeKind::Foreign);
    assert!(phase.is_assignable_from(&resolver.resolve(&name("Phase")).unwrap()));
}

#[test]
fn interfaces_become_permissions() {
    let mut scope = scope_with_events(&["ePing", "eStop"]);
    scope
        .declare_interface("Server", ["ePing", "eStop"])
        .unwrap();

    let mut resolver = TypeResolver::new(&scope);
    let server = resolver.resolve(&name("Server")).unwrap();
    let ping_only = resolver
        .resolve(&TypeExpr::AnyOf(vec!["ePing".into()]))
        .unwrap();

    assert_eq!(server.kind(), TypeKind::Permission);
    assert_eq!(server.original_representation(), "Server");
    assert_eq!(server.canonical_representation(), "any<ePing, eStop>");
    assert!(ping_only.is_assignable_from(&server));
}

#[test]
fn undeclared_event_in_permission() {
    let scope = scope_with_events(&["ePing"]);
    let expr = TypeExpr::AnyOf(vec!["ePing".into(), "eGhost".into()]);

    let mut strict = TypeResolver::new(&scope);
    assert_eq!(
        strict.resolve(&expr).unwrap_err(),
        Error::UnknownEvent("eGhost".into())
    );

    let mut lenient = TypeResolver::with_config(&scope, ResolverConfig::new().check_events(false));
    assert!(lenient.resolve(&expr).is_ok());
}

#[test]
fn duplicate_and_reserved_declarations() {
    let mut scope = TypeScope::new();
    scope.declare_typedef("Id", name("int")).unwrap();

    assert_eq!(
        scope.declare_foreign("Id"),
        Err(Error::DuplicateDeclaration("Id".into()))
    );
    assert_eq!(
        scope.declare_typedef("int", name("bool")),
        Err(Error::ReservedName("int".into()))
    );

    scope.declare_event("eStart").unwrap();
    assert_eq!(
        scope.declare_event("eStart"),
        Err(Error::DuplicateDeclaration("eStart".into()))
    );
    assert!(scope.contains("Id"));
    assert!(!scope.contains("eStart"));
}

#[test]
fn recursion_fuel_limits_nesting() {
    let mut expr = name("int");
    for _ in 0..10 {
        expr = TypeExpr::seq(expr);
    }
    let scope = TypeScope::new();

    let mut limited = with_fuel(&scope, Some(5));
    assert_eq!(
        limited.resolve(&expr).unwrap_err(),
        Error::RecursionLimitExceeded
    );

    let mut unlimited = with_fuel(&scope, None);
    let ty = unlimited.resolve(&expr).unwrap();
    assert_eq!(
        ty.canonical_representation(),
        format!("{}int{}", "seq[".repeat(10), "]".repeat(10))
    );
}

#[test]
fn recursion_fuel_counts_typedef_expansion() {
    let mut scope = TypeScope::new();
    scope
        .declare_typedef("A", TypeExpr::seq(name("B")))
        .unwrap();
    scope
        .declare_typedef("B", TypeExpr::seq(name("C")))
        .unwrap();
    scope
        .declare_typedef("C", TypeExpr::seq(name("int")))
        .unwrap();

    let mut limited = with_fuel(&scope, Some(4));
    assert_eq!(
        limited.resolve(&name("A")).unwrap_err(),
        Error::RecursionLimitExceeded
    );

    let mut resolver = TypeResolver::new(&scope);
    assert_eq!(
        resolver.resolve(&name("A")).unwrap().canonical_representation(),
        "seq[seq[seq[int]]]"
    );
}

#[test]
fn resolver_recovers_after_error() {
    let mut scope = TypeScope::new();
    scope.declare_typedef("Bad", name("Nope")).unwrap();
    scope.declare_typedef("Good", name("string")).unwrap();

    let mut resolver = TypeResolver::new(&scope);
    assert!(resolver.resolve(&name("Bad")).is_err());
    assert_eq!(
        resolver.resolve(&name("Good")).unwrap().canonical_representation(),
        "string"
    );
}

#[test]
fn shared_typedef_still_counts_toward_fuel() {
    let mut scope = TypeScope::new();
    scope
        .declare_typedef("T", TypeExpr::seq(name("int")))
        .unwrap();
    let deep = TypeExpr::seq(TypeExpr::seq(name("T")));

    let mut fresh = with_fuel(&scope, Some(3));
    let fresh_result = fresh.resolve(&deep);

    let mut warmed = with_fuel(&scope, Some(3));
    warmed.resolve(&name("T")).unwrap();
    let warmed_result = warmed.resolve(&deep);

    assert_eq!(fresh_result, Err(Error::RecursionLimitExceeded));
    assert_eq!(warmed_result, fresh_result);

    let mut roomy = with_fuel(&scope, Some(5));
    roomy.resolve(&name("T")).unwrap();
    assert!(roomy.resolve(&deep).is_ok());
}

#[test]
fn shared_typedef_depth_propagates_to_enclosing_typedefs() {
    let mut scope = TypeScope::new();
    scope
        .declare_typedef("Inner", TypeExpr::seq(name("int")))
        .unwrap();
    scope
        .declare_typedef("Outer", TypeExpr::seq(name("Inner")))
        .unwrap();
    let wrapped = TypeExpr::seq(name("Outer"));

    let mut fresh = with_fuel(&scope, Some(5));
    let fresh_result = fresh.resolve(&wrapped);

    let mut warmed = with_fuel(&scope, Some(5));
    warmed.resolve(&name("Inner")).unwrap();
    assert!(warmed.resolve(&name("Outer")).is_ok());
    let warmed_result = warmed.resolve(&wrapped);

    assert_eq!(fresh_result, Err(Error::RecursionLimitExceeded));
    assert_eq!(warmed_result, fresh_result);
}

#[test]
fn empty_tuples_are_rejected() {
    let scope = TypeScope::new();
    let mut resolver = TypeResolver::new(&scope);

    assert_eq!(
        resolver.resolve(&TypeExpr::Tuple(Vec::new())),
        Err(Error::EmptyTuple)
    );
    assert_eq!(
        resolver.resolve(&TypeExpr::NamedTuple(Vec::new())),
        Err(Error::EmptyTuple)
    );
    assert_eq!(
        resolver
            .resolve(&TypeExpr::seq(TypeExpr::Tuple(Vec::new())))
            .unwrap_err()
            .to_string(),
        "tuple type must have at least one element"
    );
}

#[test]
fn enum_identity_within_one_scope() {
    let mut scope = TypeScope::new();
    scope
        .declare_enum(EnumDecl::new("Color", ["Red", "Green"]))
        .unwrap();
    assert_eq!(
        scope.declare_enum(EnumDecl::new("Color", ["Blue"])),
        Err(Error::DuplicateDeclaration("Color".into()))
    );

    let mut resolver = TypeResolver::new(&scope);
    let a = resolver.resolve(&name("Color")).unwrap();
    let b = resolver.resolve(&TypeExpr::seq(name("Color"))).unwrap();
    let b = b.element_type().unwrap();

    assert!(a.is_same_type(b));
    assert!(a.is_assignable_from(b) && b.is_assignable_from(&a));
}
