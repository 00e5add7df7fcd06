use crate::model::ModelCatalog;
use crate::operation::SelectionSetSynthesizer;
use crate::operation::SynthesisOptions;
use crate::schema::EntityGraph;
use crate::schema::SchemaBuilder;
use crate::TypeDescriptor;

fn storefront_graph() -> EntityGraph {
    SchemaBuilder::new()
        .load_str(None, concat!(
            "type Customer {\n",
            "  id: ID!\n",
            "  firstName: String\n",
            "  referrals: [Customer!]!\n",
            "  address: Address\n",
            "}\n",
            "type Address { city: String! }\n",
            "enum Tier { GOLD SILVER }\n",
            "union Party = Customer | Address\n",
        ))
        .map(|builder| builder.build())
        .expect("schema is valid")
}

#[test]
fn objects_describe_their_members() {
    let graph = storefront_graph();
    let customer = graph.describe(&"Customer".into()).expect("Customer is a model");

    let names: Vec<_> =
        customer.members().iter()
            .map(|m| (m.declared_name(), m.protocol_name()))
            .collect();
    assert_eq!(names, vec![
        ("id", "id"),
        ("first_name", "firstName"),
        ("referrals", "referrals"),
        ("address", "address"),
    ]);

    let id = &customer.members()[0];
    assert!(id.markers().field);
    assert!(id.markers().id);
    assert!(id.markers().non_null);
    assert!(!id.markers().with_selection_set);

    let referrals = &customer.members()[2];
    assert_eq!(
        referrals.member_type(),
        &TypeDescriptor::list_of("Customer".into()),
    );
    assert!(referrals.markers().non_null);
    assert!(referrals.markers().with_selection_set);

    assert!(customer.members()[3].markers().with_selection_set);
    assert!(!customer.members()[3].markers().non_null);
}

#[test]
fn enums_are_not_models_and_unions_select_their_typename() {
    let graph = storefront_graph();
    assert!(graph.describe(&"Tier".into()).is_none());
    assert!(graph.describe(&"Unknown".into()).is_none());

    let party = graph.describe(&"Party".into()).expect("Party is a model");
    assert_eq!(
        party.members().iter().map(|m| m.protocol_name()).collect::<Vec<_>>(),
        vec!["__typename"],
    );
}

#[test]
fn selection_sets_synthesize_from_a_schema() {
    let graph = storefront_graph();
    let options = SynthesisOptions::new();
    let selection = SelectionSetSynthesizer::new(&graph, &options)
        .synthesize(&"Customer".into())
        .expect("Customer has members");

    assert_eq!(
        selection,
        "{id firstName referrals{id firstName address{city}} address{city}}",
    );
}
