use crate::schema::EntityKind;
use crate::schema::EntityTable;
use crate::schema::MemberTypeRef;
use crate::schema::PendingResolutionKind;
use crate::schema::SchemaGrammar;
use crate::types::BuiltinScalar;

mod recognize {
    use super::*;

    #[test]
    fn object_with_builtin_and_forward_member_types() {
        let grammar = SchemaGrammar::new();
        let parsed = grammar.recognize(
            "type User { id: ID! displayName: String bestFriend: User posts(first: Int = 10): [Post!]! }",
            &EntityTable::new(),
        ).expect("recognized");

        let user = parsed.entity();
        assert_eq!(user.kind(), EntityKind::Object);
        assert_eq!(user.name(), "User");
        assert_eq!(
            user.members().iter().map(|m| m.protocol_name()).collect::<Vec<_>>(),
            vec!["id", "displayName", "bestFriend", "posts"],
        );

        let display_name = user.member("displayName").expect("member exists");
        assert_eq!(display_name.declared_name(), "display_name");
        assert_eq!(
            display_name.member_type(),
            &MemberTypeRef::Builtin(BuiltinScalar::String),
        );
        assert!(!display_name.is_required());

        let posts = user.member("posts").expect("member exists");
        assert!(posts.is_collection());
        assert!(posts.is_required());
        assert!(posts.is_element_required());
        assert_eq!(posts.type_name(), "Post");

        // `User` isn't in the table yet either, so both entity-typed members
        // are forward references.
        let forward: Vec<_> =
            parsed.forward_references().iter()
                .map(|fwd| (fwd.type_name(), fwd.kind().clone()))
                .collect();
        assert_eq!(forward, vec![
            ("User", PendingResolutionKind::MemberType { member_index: 2 }),
            ("Post", PendingResolutionKind::MemberType { member_index: 3 }),
        ]);
    }

    #[test]
    fn known_member_types_resolve_immediately() {
        let grammar = SchemaGrammar::new();
        let mut table = EntityTable::new();
        let address = grammar.recognize("type Address { city: String }", &table)
            .expect("recognized");
        let address_id = table.insert(address.entity).expect("inserted");

        let parsed = grammar.recognize(
            "type User implements Node & Entity { home: Address }",
            &table,
        ).expect("recognized");

        assert_eq!(
            parsed.entity().member("home").map(|m| m.member_type()),
            Some(&MemberTypeRef::Entity(address_id)),
        );
        let forward: Vec<_> =
            parsed.forward_references().iter()
                .map(|fwd| (fwd.type_name(), fwd.kind().clone()))
                .collect();
        assert_eq!(forward, vec![
            ("Node", PendingResolutionKind::Implements),
            ("Entity", PendingResolutionKind::Implements),
        ]);
    }

    #[test]
    fn enum_input_union_and_scalar() {
        let grammar = SchemaGrammar::new();
        let table = EntityTable::new();

        let color = grammar.recognize("enum Color { RED GREEN @deprecated BLUE }", &table)
            .expect("recognized");
        assert_eq!(color.entity().kind(), EntityKind::Enum);
        assert_eq!(color.entity().enum_values(), &["RED", "GREEN", "BLUE"]);

        let filter = grammar.recognize(
            "input UserFilter { nameContains: String, limit: Int = 20 }",
            &table,
        ).expect("recognized");
        assert_eq!(filter.entity().kind(), EntityKind::Input);
        assert_eq!(filter.entity().members().len(), 2);

        let search = grammar.recognize("union SearchResult = | User | Post", &table)
            .expect("recognized");
        assert_eq!(search.entity().kind(), EntityKind::Union);
        assert_eq!(
            search.entity().possible_types().iter().map(|t| t.name()).collect::<Vec<_>>(),
            vec!["User", "Post"],
        );
        assert_eq!(
            search.forward_references()[1].kind(),
            &PendingResolutionKind::UnionMembership { possible_type_index: 1 },
        );

        let date = grammar.recognize(
            r#"scalar Date @specifiedBy(url: "https://tools.ietf.org/html/rfc3339")"#,
            &table,
        ).expect("recognized");
        assert_eq!(date.entity().kind(), EntityKind::Scalar);
        assert!(date.entity().members().is_empty());
    }

    #[test]
    fn arguments_and_directives_with_nested_parentheses() {
        let grammar = SchemaGrammar::new();
        let table = EntityTable::new();

        let account = grammar.recognize(
            concat!(
                "type Account { ",
                "f(x: Int @deprecated(reason: \"old\")): String ",
                "balance(currency: String @tag(name: \"(iso)\"), at: Int = 0): Float ",
                "id: ID! @key(fields: \"id\") ",
                "}",
            ),
            &table,
        ).expect("recognized");
        assert_eq!(
            account.entity().members().iter()
                .map(|m| (m.protocol_name(), m.type_name()))
                .collect::<Vec<_>>(),
            vec![("f", "String"), ("balance", "Float"), ("id", "ID")],
        );

        let tier = grammar.recognize(
            "enum Tier { GOLD @deprecated(reason: \"(legacy)\") SILVER }",
            &table,
        ).expect("recognized");
        assert_eq!(tier.entity().enum_values(), &["GOLD", "SILVER"]);

        let unbalanced = grammar.recognize("type A { f(x: Int: String }", &table)
            .expect_err("unclosed argument list");
        assert!(unbalanced.reason().contains("malformed member"));
    }

    #[test]
    fn unrecognized_shapes_are_mismatches() {
        let grammar = SchemaGrammar::new();
        let table = EntityTable::new();

        let extension = grammar.recognize("extend type User { age: Int }", &table)
            .expect_err("extensions aren't recognized");
        assert!(extension.reason().contains("type extensions are not supported"));
        assert_eq!(extension.declaration(), "extend type User { age: Int }");

        let garbage = grammar.recognize("type User { id ID }", &table)
            .expect_err("malformed member");
        assert!(garbage.reason().contains("malformed member"));
    }
}

mod filtering {
    use super::*;

    #[test]
    fn default_root_types_and_directives_are_filtered() {
        let grammar = SchemaGrammar::new();
        assert!(grammar.is_filtered("type Query { me: User }"));
        assert!(grammar.is_filtered("type Mutation { noop: Boolean }"));
        assert!(grammar.is_filtered("directive @auth(role: String) on FIELD_DEFINITION"));
        assert!(!grammar.is_filtered("type User { id: ID }"));
    }

    #[test]
    fn schema_block_renames_root_types() {
        let mut grammar = SchemaGrammar::new();
        assert!(grammar.learn_root_types("schema { query: RootQuery mutation: RootMutation }"));
        assert!(!grammar.learn_root_types("type RootQuery { me: User }"));

        assert!(grammar.is_filtered("type RootQuery { me: User }"));
        assert!(grammar.is_filtered("schema { query: RootQuery }"));
        assert!(grammar.root_type_names().any(|name| name == "RootMutation"));
    }
}
