use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SynthesisError {
    #[error(
        "Variable `${variable_name}` was declared more than once with \
        different definitions (`{definition1}` vs `{definition2}`)"
    )]
    ConflictingVariableDefinition {
        definition1: String,
        definition2: String,
        variable_name: String,
    },

    #[error("`{type_name}` has no selectable members")]
    EmptySelection {
        type_name: String,
    },

    #[error("No root field was specified for the document")]
    MissingRootField,

    #[error("No selection set type was specified for the document's root field")]
    MissingSelectionSet,

    #[error("`{type_name}` is not described by the model catalog")]
    UnknownModelType {
        type_name: String,
    },
}
