use crate::schema::EntityKind;
use crate::schema::MemberTypeRef;
use crate::schema::ResolvedMemberType;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::schema::UnresolvedReferenceError;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod loading {
    use super::*;

    #[test]
    fn build_without_load_is_empty() -> Result<()> {
        let graph = SchemaBuilder::new().build();
        assert_eq!(graph.entities().count(), 0);
        assert!(graph.skipped_declarations().is_empty());
        Ok(())
    }

    #[test]
    fn comments_and_descriptions_are_ignored() -> Result<()> {
        let graph = SchemaBuilder::new()
            .load_str(None, concat!(
                "# Users of the system\n",
                "\"\"\"A registered user\"\"\"\n",
                "type User {\n",
                "  \"The user's id\"\n",
                "  id: ID! # never null\n",
                "  nickname: String\n",
                "}\n",
            ))?
            .build();

        let user = graph.entity("User").expect("User was loaded");
        assert_eq!(user.kind(), EntityKind::Object);
        assert_eq!(
            user.members().iter().map(|m| m.protocol_name()).collect::<Vec<_>>(),
            vec!["id", "nickname"],
        );
        Ok(())
    }

    #[test]
    fn root_operation_types_are_not_entities() -> Result<()> {
        let graph = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: RootQuery }\n",
                "directive @auth(role: String) on FIELD_DEFINITION\n",
                "type RootQuery { me: User }\n",
                "type Mutation { rename(name: String!): User }\n",
                "type User { id: ID! }\n",
            ))?
            .build();

        assert!(graph.entity("RootQuery").is_none());
        assert!(graph.entity("Mutation").is_none());
        assert_eq!(
            graph.entities().map(|e| e.name()).collect::<Vec<_>>(),
            vec!["User"],
        );
        assert!(graph.skipped_declarations().is_empty());
        Ok(())
    }

    #[test]
    fn argument_directives_keep_the_declaration() -> Result<()> {
        let graph = SchemaBuilder::new()
            .load_str(None, "type A { f(x: Int @deprecated(reason: \"old\")): String id: ID }")?
            .build();

        assert!(graph.skipped_declarations().is_empty());
        let a = graph.entity("A").expect("A was loaded");
        assert_eq!(
            a.members().iter().map(|m| m.protocol_name()).collect::<Vec<_>>(),
            vec!["f", "id"],
        );
        Ok(())
    }

    #[test]
    fn root_types_named_by_a_later_schema_block_are_not_entities() -> Result<()> {
        let graph = SchemaBuilder::new()
            .load_str(Some("types.graphql"), concat!(
                "type RootQuery { me: User }\n",
                "type User { id: ID! }\n",
            ))?
            .load_str(Some("schema.graphql"), "schema { query: RootQuery }")?
            .build();

        assert_eq!(
            graph.entities().map(|e| e.name()).collect::<Vec<_>>(),
            vec!["User"],
        );
        assert!(graph.unresolved_references().is_empty());
        Ok(())
    }

    #[test]
    fn mismatched_declarations_are_skipped_and_reported() -> Result<()> {
        let builder = SchemaBuilder::new()
            .load_str(Some("users.graphql"), concat!(
                "type User { id: ID! }\n",
                "extend type User { age: Int }\n",
                "enum Role { ADMIN }\n",
            ))?;

        assert_eq!(builder.mismatches().len(), 1);
        let mismatch = &builder.mismatches()[0];
        assert_eq!(mismatch.source_name(), Some("users.graphql"));
        assert_eq!(mismatch.declaration(), "extend type User { age: Int }");

        let graph = builder.build();
        assert_eq!(graph.skipped_declarations().len(), 1);
        assert!(graph.entity("Role").is_some());
        Ok(())
    }

    #[test]
    fn duplicate_entity_names_fail_the_load() {
        let result = SchemaBuilder::new()
            .load_str(None, "type User { id: ID! }")
            .and_then(|builder| builder.load_str(None, "input User { id: ID! }"));

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateEntityDefinition { entity_name })
                if entity_name == "User",
        ));
    }

    #[test]
    fn load_files_reads_each_file() -> Result<()> {
        let dir = std::env::temp_dir().join(format!(
            "libgqlgen-schema-builder-{}",
            std::process::id(),
        ));
        std::fs::create_dir_all(&dir).expect("temp dir is writable");
        let user_path = dir.join("user.graphql");
        let post_path = dir.join("post.graphql");
        std::fs::write(&user_path, "type User { posts: [Post!]! }")
            .expect("temp file is writable");
        std::fs::write(&post_path, "type Post { author: User! }")
            .expect("temp file is writable");

        let graph = SchemaBuilder::new()
            .load_files([&user_path, &post_path])?
            .build();
        let _ = std::fs::remove_dir_all(&dir);

        assert!(graph.entity("User").is_some());
        assert!(graph.entity("Post").is_some());
        Ok(())
    }

    #[test]
    fn load_files_reports_unreadable_files() {
        let missing = std::env::temp_dir().join("libgqlgen-definitely-missing.graphql");
        let result = SchemaBuilder::new().load_files([&missing]);

        assert!(matches!(
            result,
            Err(SchemaBuildError::SchemaFileReadError { file, .. }) if file == missing,
        ));
    }
}

mod forward_references {
    use super::*;

    #[test]
    fn mutually_referencing_entities_resolve_at_build() -> Result<()> {
        let builder = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Author { books: [Book!]! }\n",
                "type Book { author: Author! }\n",
            ))?;

        // `Book` was unknown while `Author` was parsed; `Author` was already
        // known while `Book` was parsed.
        assert_eq!(builder.pending_resolutions().num_callbacks(), 1);
        assert_eq!(builder.pending_resolutions().get("Book").len(), 1);

        let author_books = builder.table()
            .get_by_name("Author")
            .and_then(|author| author.member("books"))
            .expect("member exists");
        assert!(matches!(author_books.member_type(), MemberTypeRef::Delayed(_)));

        let graph = builder.build();
        let author = graph.entity("Author").expect("Author was loaded");
        let book = graph.entity("Book").expect("Book was loaded");

        let books = author.member("books").expect("member exists");
        assert_eq!(
            books.resolve_type(graph.table()),
            Ok(ResolvedMemberType::Entity(book.id())),
        );
        assert_eq!(graph.member_entity(books).map(|e| e.name()), Some("Book"));

        let book_author = book.member("author").expect("member exists");
        assert_eq!(
            book_author.member_type(),
            &MemberTypeRef::Entity(author.id()),
        );
        Ok(())
    }

    #[test]
    fn references_resolve_across_batches() -> Result<()> {
        let graph = SchemaBuilder::new()
            .load_str(Some("a.graphql"), "type Order { customer: Customer }")?
            .load_str(Some("b.graphql"), "type Customer { id: ID! }")?
            .build();

        let order = graph.entity("Order").expect("Order was loaded");
        let customer = order.member("customer").expect("member exists");
        assert_eq!(graph.member_entity(customer).map(|e| e.name()), Some("Customer"));
        Ok(())
    }

    #[test]
    fn interfaces_declared_later_are_recorded() -> Result<()> {
        let graph = SchemaBuilder::new()
            .load_str(None, concat!(
                "type User implements Node & Named { id: ID! name: String }\n",
                "interface Node { id: ID! }\n",
                "interface Named { name: String }\n",
            ))?
            .build();

        let user = graph.entity("User").expect("User was loaded");
        assert_eq!(graph.implemented_interface_names(user), vec!["Node", "Named"]);
        Ok(())
    }

    #[test]
    fn union_members_record_the_union_regardless_of_order() -> Result<()> {
        let graph = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Photo { url: String }\n",
                "union Media = Photo | Video\n",
                "type Video { length: Int }\n",
            ))?
            .build();

        let media = graph.entity("Media").expect("Media was loaded");
        assert!(media.possible_types().iter().all(|t| t.resolved_id().is_some()));

        for member_name in ["Photo", "Video"] {
            let member = graph.entity(member_name).expect("member was loaded");
            assert_eq!(graph.implemented_interface_names(member), vec!["Media"]);
        }
        Ok(())
    }

    #[test]
    fn undefined_references_drop_only_their_dependents() -> Result<()> {
        let graph = SchemaBuilder::new()
            .load_str(None, concat!(
                "type User { pet: Pet groups: [Group] }\n",
                "type Admin implements Staff { id: ID }\n",
                "type Team { lead: User members: [Member!]! }\n",
                "type Member { id: ID! }\n",
                "type Audit { team: Team }\n",
            ))?
            .build();

        assert_eq!(
            graph.entities().map(|e| e.name()).collect::<Vec<_>>(),
            vec!["Member"],
        );
        assert_eq!(graph.unresolved_references(), [
            UnresolvedReferenceError {
                referenced_by: "User".to_string(),
                type_name: "Pet".to_string(),
            },
            UnresolvedReferenceError {
                referenced_by: "User".to_string(),
                type_name: "Group".to_string(),
            },
            UnresolvedReferenceError {
                referenced_by: "Admin".to_string(),
                type_name: "Staff".to_string(),
            },
            UnresolvedReferenceError {
                referenced_by: "Team".to_string(),
                type_name: "User".to_string(),
            },
            UnresolvedReferenceError {
                referenced_by: "Audit".to_string(),
                type_name: "Team".to_string(),
            },
        ]);
        assert_eq!(
            graph.unresolved_references()[0].to_string(),
            "`User` references the undefined type `Pet`",
        );
        Ok(())
    }

    #[test]
    fn unrelated_entities_survive_a_dangling_reference() -> Result<()> {
        let graph = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Order { item: Missing }\n",
                "type Customer { id: ID orders: [Customer] }\n",
            ))?
            .build();

        assert!(graph.entity("Order").is_none());
        let customer = graph.entity("Customer").expect("Customer survives");
        let orders = customer.member("orders").expect("member exists");
        assert_eq!(graph.member_entity(orders).map(|e| e.name()), Some("Customer"));
        assert_eq!(graph.unresolved_references().len(), 1);
        Ok(())
    }

    #[test]
    fn surviving_references_are_remapped_after_drops() -> Result<()> {
        let graph = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Broken { ghost: Ghost }\n",
                "union Media = Photo | Video\n",
                "type Photo implements Node { id: ID! next: Video }\n",
                "interface Node { id: ID! }\n",
                "type Video { id: ID! }\n",
            ))?
            .build();

        let photo = graph.entity("Photo").expect("Photo survives");
        let next = photo.member("next").expect("member exists");
        assert_eq!(graph.member_entity(next).map(|e| e.name()), Some("Video"));
        assert_eq!(graph.implemented_interface_names(photo), vec!["Media", "Node"]);
        for entity in graph.entities() {
            assert_eq!(graph.entity(entity.name()).map(|e| e.id()), Some(entity.id()));
        }
        Ok(())
    }

    #[test]
    fn dropping_a_union_member_drops_the_union_only() -> Result<()> {
        let graph = SchemaBuilder::new()
            .load_str(None, concat!(
                "union Media = Photo | Clip\n",
                "type Photo { url: String }\n",
                "type Clip { codec: Codec }\n",
            ))?
            .build();

        assert!(graph.entity("Clip").is_none());
        assert!(graph.entity("Media").is_none());
        let photo = graph.entity("Photo").expect("Photo survives");
        assert!(graph.implemented_interface_names(photo).is_empty());
        Ok(())
    }
}
