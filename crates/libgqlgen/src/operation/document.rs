use crate::operation::OperationKind;

/// A synthesized, ready-to-send GraphQL document.
///
/// Produced by [`DocumentBuilder::build()`](crate::operation::DocumentBuilder::build).
/// Everything is rendered eagerly at build time, so a [`Document`] holds no
/// references to the catalog or policies it was built with.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub(crate) arguments: Vec<(String, String)>,
    pub(crate) operation_kind: OperationKind,
    pub(crate) operation_name: Option<String>,
    pub(crate) root_alias: Option<String>,
    pub(crate) root_field: String,
    pub(crate) selection_set: String,
    pub(crate) variable_definitions: Vec<String>,
    pub(crate) variable_values: serde_json::Map<String, serde_json::Value>,
}
impl Document {
    /// The rendered `(name, literal)` pairs of the root field's arguments.
    pub fn arguments(&self) -> &[(String, String)] {
        self.arguments.as_slice()
    }

    pub fn operation_kind(&self) -> OperationKind {
        self.operation_kind
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    pub fn root_alias(&self) -> Option<&str> {
        self.root_alias.as_deref()
    }

    pub fn root_field(&self) -> &str {
        self.root_field.as_str()
    }

    pub fn selection_set(&self) -> &str {
        self.selection_set.as_str()
    }

    /// The operation's variable declarations (`$name:Type[=default]`), in
    /// order of first appearance.
    pub fn variable_definitions(&self) -> &[String] {
        self.variable_definitions.as_slice()
    }

    /// The values bound to the operation's variables, keyed by variable name.
    pub fn variable_values(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.variable_values
    }

    /// The compact GraphQL text of the document, e.g.
    /// `query($id:ID!){user(id:$id){id name}}`.
    pub fn to_graphql_string(&self) -> String {
        let mut text = self.operation_kind.keyword().to_string();
        if let Some(operation_name) = &self.operation_name {
            text.push(' ');
            text.push_str(operation_name);
        }
        if !self.variable_definitions.is_empty() {
            text.push('(');
            text.push_str(&self.variable_definitions.join(","));
            text.push(')');
        }

        text.push('{');
        if let Some(root_alias) = &self.root_alias {
            text.push_str(root_alias);
            text.push(':');
        }
        text.push_str(&self.root_field);
        if !self.arguments.is_empty() {
            let arguments: Vec<String> =
                self.arguments.iter()
                    .map(|(name, value)| format!("{name}:{value}"))
                    .collect();
            text.push('(');
            text.push_str(&arguments.join(","));
            text.push(')');
        }
        text.push_str(&self.selection_set);
        text.push('}');
        text
    }

    /// The document wrapped in a JSON transport envelope:
    /// `{"query":"..."}`, or `{"variables":{...},"query":"..."}` when the
    /// operation declares variables.
    pub fn to_transport_json(&self) -> String {
        let mut envelope = serde_json::Map::new();
        if !self.variable_values.is_empty() {
            envelope.insert(
                "variables".to_string(),
                serde_json::Value::Object(self.variable_values.clone()),
            );
        }
        envelope.insert(
            "query".to_string(),
            serde_json::Value::String(self.to_graphql_string()),
        );
        serde_json::Value::Object(envelope).to_string()
    }
}
impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_graphql_string())
    }
}
