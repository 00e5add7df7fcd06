use crate::model::MemberMarkingPolicy;
use crate::model::MemberPickingPolicy;
use crate::model::ModelCatalog;
use crate::model::ModelInstance;
use crate::model::ValuePickingPolicy;
use crate::operation::Argument;
use crate::operation::BreakingPolicy;
use crate::operation::Document;
use crate::operation::OperationKind;
use crate::operation::SelectionSetSynthesizer;
use crate::operation::SynthesisError;
use crate::operation::SynthesisOptions;
use crate::operation::ValueSerializer;
use crate::operation::VariableCollector;
use crate::type_descriptor::TypeDescriptor;
use crate::value::Value;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, SynthesisError>;

/// Assembles a [`Document`]: the operation kind and name, the root field with
/// its arguments, and the selection set synthesized for a model type.
///
/// ```
/// use libgqlgen::model::ModelDescription;
/// use libgqlgen::model::ModelMember;
/// use libgqlgen::model::StaticModelCatalog;
/// use libgqlgen::operation::DocumentBuilder;
///
/// let catalog = StaticModelCatalog::new().with(
///     ModelDescription::new("User")
///         .with_member(ModelMember::new("id", "ID").field())
///         .with_member(ModelMember::new("display_name", "String")
///             .with_protocol_name("displayName")
///             .field()),
/// );
///
/// let document = DocumentBuilder::query(&catalog)
///     .root_field("user")
///     .argument("id", "42")
///     .selection("User")
///     .build()?;
///
/// assert_eq!(
///     document.to_graphql_string(),
///     r#"query{user(id:"42"){id displayName}}"#,
/// );
/// # Ok::<(), libgqlgen::operation::SynthesisError>(())
/// ```
pub struct DocumentBuilder<'a> {
    argument_object: Option<ModelInstance>,
    arguments: Vec<Argument>,
    catalog: &'a dyn ModelCatalog,
    operation_kind: OperationKind,
    operation_name: Option<String>,
    options: SynthesisOptions<'a>,
    root_alias: Option<String>,
    root_field: Option<String>,
    selection: Option<TypeDescriptor>,
}
impl<'a> DocumentBuilder<'a> {
    pub fn new(operation_kind: OperationKind, catalog: &'a dyn ModelCatalog) -> Self {
        Self {
            argument_object: None,
            arguments: vec![],
            catalog,
            operation_kind,
            operation_name: None,
            options: SynthesisOptions::new(),
            root_alias: None,
            root_field: None,
            selection: None,
        }
    }

    pub fn mutation(catalog: &'a dyn ModelCatalog) -> Self {
        Self::new(OperationKind::Mutation, catalog)
    }

    pub fn query(catalog: &'a dyn ModelCatalog) -> Self {
        Self::new(OperationKind::Query, catalog)
    }

    pub fn subscription(catalog: &'a dyn ModelCatalog) -> Self {
        Self::new(OperationKind::Subscription, catalog)
    }

    /// Add an explicit root field argument. Explicit arguments are rendered
    /// first, in the order they were added.
    pub fn argument(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.push(Argument::new(name, value));
        self
    }

    /// Pass each collected member of `instance` as a root field argument,
    /// after any explicit arguments.
    pub fn argument_object(mut self, instance: ModelInstance) -> Self {
        self.argument_object = Some(instance);
        self
    }

    pub fn arguments(mut self, arguments: impl IntoIterator<Item = Argument>) -> Self {
        self.arguments.extend(arguments);
        self
    }

    pub fn breaking_policy(mut self, policy: impl BreakingPolicy + 'a) -> Self {
        self.options = self.options.with_breaking_policy(policy);
        self
    }

    pub fn marking_policy(mut self, policy: impl MemberMarkingPolicy + 'a) -> Self {
        self.options = self.options.with_marking_policy(policy);
        self
    }

    pub fn operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    pub fn options(mut self, options: SynthesisOptions<'a>) -> Self {
        self.options = options;
        self
    }

    pub fn picking_policy(mut self, policy: impl MemberPickingPolicy + 'a) -> Self {
        self.options = self.options.with_picking_policy(policy);
        self
    }

    pub fn root_alias(mut self, root_alias: impl Into<String>) -> Self {
        self.root_alias = Some(root_alias.into());
        self
    }

    pub fn root_field(mut self, root_field: impl Into<String>) -> Self {
        self.root_field = Some(root_field.into());
        self
    }

    /// The model type whose selection set the root field returns.
    pub fn selection(mut self, type_descriptor: impl Into<TypeDescriptor>) -> Self {
        self.selection = Some(type_descriptor.into());
        self
    }

    pub fn value_picking_policy(mut self, policy: impl ValuePickingPolicy + 'a) -> Self {
        self.options = self.options.with_value_picking_policy(policy);
        self
    }

    pub fn build(self) -> Result<Document> {
        let root_field = self.root_field.ok_or(SynthesisError::MissingRootField)?;
        let selection = self.selection.ok_or(SynthesisError::MissingSelectionSet)?;

        let selection_set =
            SelectionSetSynthesizer::new(self.catalog, &self.options)
                .synthesize(&selection)?;

        let serializer = ValueSerializer::new(self.catalog, &self.options);
        let mut variables = VariableCollector::new();
        let mut seen = HashSet::new();
        let mut arguments = vec![];

        let explicit_arguments =
            self.arguments.iter()
                .map(|arg| (arg.name().to_string(), arg.value()));
        let object_arguments = match &self.argument_object {
            Some(instance) => serializer.model_member_values(instance)?,
            None => vec![],
        };

        for (name, value) in explicit_arguments.chain(object_arguments) {
            if seen.contains(&name) {
                log::debug!("Ignoring repeated root field argument `{name}`.");
                continue;
            }

            let mut arg_variables = VariableCollector::new();
            let rendered = serializer.serialize(value, &mut arg_variables)?;
            if !self.options.value_picking_policy.is_picked(&name, &rendered) {
                continue;
            }

            variables.merge(arg_variables)?;
            seen.insert(name.clone());
            arguments.push((name, rendered));
        }

        let mut variable_definitions = vec![];
        let mut variable_values = serde_json::Map::new();
        for variable in variables.variables() {
            let mut definition =
                format!("${}:{}", variable.name(), variable.type_annotation());
            if let Some(default_value) = variable.default_value() {
                let mut default_variables = VariableCollector::new();
                definition.push('=');
                definition.push_str(
                    &serializer.serialize(default_value, &mut default_variables)?,
                );
            }
            variable_definitions.push(definition);
            variable_values.insert(
                variable.name().to_string(),
                serializer.to_json(variable.value())?,
            );
        }

        log::debug!(
            "Synthesized {} `{root_field}` with {} argument(s) and {} \
            variable(s).",
            self.operation_kind.keyword(),
            arguments.len(),
            variable_definitions.len(),
        );

        Ok(Document {
            arguments,
            operation_kind: self.operation_kind,
            operation_name: self.operation_name,
            root_alias: self.root_alias,
            root_field,
            selection_set,
            variable_definitions,
            variable_values,
        })
    }
}
