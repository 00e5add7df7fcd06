use crate::types::BuiltinScalar;
use crate::types::TypeAnnotation;

#[test]
fn parse_named_annotations() {
    let nullable = TypeAnnotation::parse("String").expect("parses");
    assert!(nullable.nullable());
    assert_eq!(nullable.to_string(), "String");
    assert_eq!(
        nullable.innermost_named_type_annotation().builtin_scalar(),
        Some(BuiltinScalar::String),
    );

    let non_null = TypeAnnotation::parse(" User ! ").expect("parses");
    assert!(!non_null.nullable());
    assert_eq!(non_null.to_string(), "User!");
    assert_eq!(
        non_null.innermost_named_type_annotation().builtin_scalar(),
        None,
    );
}

#[test]
fn parse_list_annotations_with_inner_and_outer_nullability() {
    let annot = TypeAnnotation::parse("[ ID! ]!").expect("parses");
    let list = annot.as_list_annotation().expect("is a list");

    assert!(!list.nullable());
    assert!(!list.inner_type_annotation().nullable());
    assert_eq!(annot.to_string(), "[ID!]!");

    let nested = TypeAnnotation::parse("[[Int]]").expect("parses");
    assert_eq!(nested.to_string(), "[[Int]]");
    assert_eq!(
        nested.innermost_named_type_annotation().graphql_type_name(),
        "Int",
    );
}

#[test]
fn parse_rejects_malformed_annotations() {
    assert_eq!(TypeAnnotation::parse(""), None);
    assert_eq!(TypeAnnotation::parse("[String"), None);
    assert_eq!(TypeAnnotation::parse("1Bad"), None);
    assert_eq!(TypeAnnotation::parse("Two Words"), None);
    assert_eq!(TypeAnnotation::parse("!"), None);
}

#[test]
fn equivalence_ignores_nothing_but_formatting() {
    let a = TypeAnnotation::parse("[String!]").unwrap();
    let b = TypeAnnotation::list(TypeAnnotation::named("String", false), true);
    let c = TypeAnnotation::parse("[String]").unwrap();

    assert!(a.is_equivalent_to(&b));
    assert!(!a.is_equivalent_to(&c));
    assert!(!a.is_equivalent_to(&TypeAnnotation::named("String", false)));
}
