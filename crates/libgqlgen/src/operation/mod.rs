mod argument;
mod breaking_policy;
mod cycle_tracker;
mod document;
mod document_builder;
mod member_collection;
mod operation_kind;
mod selection_set_synthesizer;
mod synthesis_error;
mod synthesis_options;
mod value_serializer;
mod variable;

pub use argument::Argument;
pub use breaking_policy::BreakAtFirstOccurrence;
pub use breaking_policy::BreakAtNestingLevel;
pub use breaking_policy::BreakAtRepeat;
pub use breaking_policy::BreakingPolicy;
pub use cycle_tracker::CycleTracker;
pub use cycle_tracker::LoopRecord;
pub use cycle_tracker::TrackerState;
pub use document::Document;
pub use document_builder::DocumentBuilder;
pub use operation_kind::OperationKind;
pub use selection_set_synthesizer::SelectionSetSynthesizer;
pub use synthesis_error::SynthesisError;
pub use synthesis_options::SynthesisOptions;
pub use value_serializer::escape_string;
pub use value_serializer::unescape_string_literal;
pub use value_serializer::ValueSerializer;
pub use value_serializer::VariableCollector;
pub use variable::Variable;

#[cfg(test)]
mod tests;
