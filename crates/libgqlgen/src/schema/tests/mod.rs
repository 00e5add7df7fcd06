mod entity_graph_tests;
mod schema_builder_tests;
mod schema_grammar_tests;
