use crate::commands::build_graph;
use crate::command::SchemaFiles;
use crate::command::SchemaFilesCommand;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgqlgen::Value;
use libgqlgen::model::AllMembers;
use libgqlgen::model::SkipNullValues;
use libgqlgen::operation::BreakAtNestingLevel;
use libgqlgen::operation::DocumentBuilder;
use libgqlgen::operation::OperationKind;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct QueryCmd {
    #[arg(
        help="A root-field argument in `name=value` form. The value is parsed \
             as JSON when possible and used as a plain string otherwise.",
        long="arg",
        value_name="NAME=VALUE",
    )]
    args: Vec<String>,

    #[arg(help="Alias for the root field.", long)]
    alias: Option<String>,

    #[arg(
        help="Name of the root field of the operation.",
        long,
        required=true,
    )]
    field: String,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Print the document as a `{\"variables\":..,\"query\":..}` JSON \
             envelope instead of plain GraphQL.",
        long,
    )]
    json: bool,

    #[arg(
        help="Stop descending into recursive types this many levels past the \
             first occurrence of a repeated type.",
        long,
    )]
    max_nesting: Option<usize>,

    #[arg(conflicts_with="subscription", help="Emit a mutation.", long)]
    mutation: bool,

    #[arg(help="Name of the operation.", long)]
    operation_name: Option<String>,

    #[arg(help="Drop arguments whose value renders as `null`.", long)]
    skip_nulls: bool,

    #[arg(help="Emit a subscription.", long)]
    subscription: bool,

    #[arg(
        help="Name of the type to synthesize the selection set for.",
        long="type",
        required=true,
    )]
    type_name: String,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl SchemaFilesCommand for QueryCmd {
    fn file_or_dir_paths(&self) -> &[PathBuf] {
        self.file_or_dir_paths.as_slice()
    }

    fn graphql_file_exts(&self) -> &[String] {
        self.graphql_file_exts.as_slice()
    }
}
impl QueryCmd {
    fn operation_kind(&self) -> OperationKind {
        if self.mutation {
            OperationKind::Mutation
        } else if self.subscription {
            OperationKind::Subscription
        } else {
            OperationKind::Query
        }
    }

    fn parsed_args(&self) -> anyhow::Result<Vec<(String, Value)>> {
        self.args.iter()
            .map(|arg| {
                let (name, raw_value) = arg.split_once('=').ok_or_else(|| {
                    anyhow::anyhow!("Expected `--arg NAME=VALUE` but got `{arg}`.")
                })?;
                Ok((name.trim().to_string(), parse_arg_value(raw_value)))
            })
            .collect()
    }
}

/// Parse a command-line argument value as JSON, falling back to treating the
/// whole text as a string.
fn parse_arg_value(raw_value: &str) -> Value {
    match serde_json::from_str::<serde_json::Value>(raw_value) {
        Ok(json) => json_to_value(json),
        Err(_) => Value::String(raw_value.to_string()),
    }
}

fn json_to_value(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(boolean) => Value::Bool(boolean),
        serde_json::Value::Number(num) => match num.as_i64() {
            Some(int) => Value::Int(int),
            None => num.as_f64().map(Value::Float).unwrap_or(Value::Null),
        },
        serde_json::Value::String(text) => Value::String(text),
        serde_json::Value::Array(items) =>
            Value::List(items.into_iter().map(json_to_value).collect()),
        serde_json::Value::Object(entries) => Value::map(
            entries.into_iter().map(|(key, value)| (key, json_to_value(value))),
        ),
    }
}

#[inherent::inherent]
impl RunnableCommand for QueryCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let args = match self.parsed_args() {
            Ok(args) => args,
            Err(err) => return err.into(),
        };
        let SchemaFiles { files, .. } = match self.read_schema_files() {
            Ok(schema_files) => schema_files,
            Err(err) => return err.into(),
        };
        let graph = match build_graph(&files) {
            Ok(graph) => graph,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Errors loading the schema: {err:#}",
                output_utils::RED_X,
            )),
        };
        if graph.entity(&self.type_name).is_none() {
            return CommandResult::stderr(format_args!(
                "{} The schema does not define a type named `{}`.",
                output_utils::RED_X,
                self.type_name,
            ));
        }

        let mut builder =
            DocumentBuilder::new(self.operation_kind(), &graph)
                .marking_policy(AllMembers)
                .root_field(self.field.as_str())
                .selection(self.type_name.as_str());
        for (name, value) in args {
            builder = builder.argument(name, value);
        }
        if let Some(alias) = &self.alias {
            builder = builder.root_alias(alias.as_str());
        }
        if let Some(operation_name) = &self.operation_name {
            builder = builder.operation_name(operation_name.as_str());
        }
        if let Some(max_nesting) = self.max_nesting {
            builder = builder.breaking_policy(BreakAtNestingLevel(max_nesting));
        }
        if self.skip_nulls {
            builder = builder.value_picking_policy(SkipNullValues);
        }

        match builder.build() {
            Ok(document) if self.json =>
                CommandResult::stdout(format_args!("{}", document.to_transport_json())),
            Ok(document) =>
                CommandResult::stdout(format_args!("{}", document.to_graphql_string())),
            Err(err) => CommandResult::stderr(format_args!(
                "{} Failed to synthesize the document: {err}",
                output_utils::RED_X,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_arg_value;
    use libgqlgen::Value;

    #[test]
    fn arg_values_parse_as_json_when_possible() {
        assert_eq!(parse_arg_value("42"), Value::Int(42));
        assert_eq!(parse_arg_value("true"), Value::Bool(true));
        assert_eq!(parse_arg_value("null"), Value::Null);
        assert_eq!(parse_arg_value("\"quoted\""), Value::String("quoted".to_string()));
        assert_eq!(
            parse_arg_value("[1, \"a\"]"),
            Value::List(vec![Value::Int(1), Value::String("a".to_string())]),
        );
    }

    #[test]
    fn non_json_arg_values_are_plain_strings() {
        assert_eq!(parse_arg_value("user-42"), Value::String("user-42".to_string()));
    }
}
