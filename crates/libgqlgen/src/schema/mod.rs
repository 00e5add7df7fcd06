mod declaration_splitter;
mod entity_graph;
mod entity_table;
mod member_descriptor;
mod pending_resolution;
mod resolved_entity;
mod schema_build_error;
pub(crate) mod schema_builder;
mod schema_grammar;

pub use declaration_splitter::split_declarations;
pub use entity_graph::EntityGraph;
pub use entity_table::EntityId;
pub use entity_table::EntityTable;
pub use member_descriptor::DelayedTypeRef;
pub use member_descriptor::MemberDescriptor;
pub use member_descriptor::MemberTypeRef;
pub use member_descriptor::ResolvedMemberType;
pub use pending_resolution::PendingResolution;
pub use pending_resolution::PendingResolutionKind;
pub use resolved_entity::EntityKind;
pub use resolved_entity::ResolvedEntity;
pub use schema_build_error::GrammarMismatchError;
pub use schema_build_error::SchemaBuildError;
pub use schema_build_error::UnresolvedReferenceError;
pub use schema_builder::SchemaBuilder;
pub use schema_grammar::ForwardReference;
pub use schema_grammar::ParsedDeclaration;
pub use schema_grammar::SchemaGrammar;

#[cfg(test)]
mod tests;
