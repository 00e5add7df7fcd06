use std::path::PathBuf;
use thiserror::Error;

/// A top-level declaration that matched none of the recognized schema shapes.
///
/// This is a recoverable error: the declaration is dropped and the rest of the
/// batch continues to load. Mismatches are available from
/// [`SchemaBuilder::mismatches()`](crate::schema::SchemaBuilder::mismatches)
/// and, after the build, from
/// [`EntityGraph::skipped_declarations()`](crate::schema::EntityGraph::skipped_declarations).
#[derive(Clone, Debug, Error, PartialEq)]
#[error("Skipped a schema declaration that matched no known shape ({reason}): `{declaration}`")]
pub struct GrammarMismatchError {
    pub(crate) declaration: String,
    pub(crate) reason: String,
    pub(crate) source_name: Option<String>,
}
impl GrammarMismatchError {
    pub(crate) fn new(
        declaration: &str,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            declaration: declaration.trim().to_string(),
            reason: reason.into(),
            source_name: None,
        }
    }

    pub fn declaration(&self) -> &str {
        self.declaration.as_str()
    }

    pub fn reason(&self) -> &str {
        self.reason.as_str()
    }

    /// The name of the file (or other source) the declaration came from, if
    /// one was given when it was loaded.
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }
}

/// A type name that was referenced by an entity but never defined anywhere in
/// the batch (or defined only by an entity that was itself dropped).
///
/// Fatal to the referencing entity alone: it is left out of the
/// [`EntityGraph`](crate::schema::EntityGraph) and the error is kept in
/// [`EntityGraph::unresolved_references()`](crate::schema::EntityGraph::unresolved_references).
#[derive(Clone, Debug, Error, PartialEq)]
#[error("`{referenced_by}` references the undefined type `{type_name}`")]
pub struct UnresolvedReferenceError {
    pub(crate) referenced_by: String,
    pub(crate) type_name: String,
}
impl UnresolvedReferenceError {
    /// The name of the entity whose definition contains the reference.
    pub fn referenced_by(&self) -> &str {
        self.referenced_by.as_str()
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple entities were defined with the name `{entity_name}`")]
    DuplicateEntityDefinition {
        entity_name: String,
    },

    #[error("Failed to read schema file {file:?}: {err}")]
    SchemaFileReadError {
        file: PathBuf,
        err: String,
    },
}
