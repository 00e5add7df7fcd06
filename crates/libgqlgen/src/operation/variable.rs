use crate::types::TypeAnnotation;
use crate::value::Value;

/// A named, separately declared document parameter.
///
/// At its use site a variable renders as `$name`; the operation's variable
/// signature declares it as `$name:Type[=default]`, and `value` is sent along
/// in the transport envelope's `variables` object.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub(crate) default_value: Option<Value>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
    pub(crate) value: Value,
}
impl Variable {
    pub fn new(
        name: impl Into<String>,
        type_annotation: TypeAnnotation,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            default_value: None,
            name: name.into(),
            type_annotation,
            value: value.into(),
        }
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// Whether `other` declares the same variable (same name, type and
    /// default), regardless of the value bound to it.
    pub fn has_same_definition(&self, other: &Self) -> bool {
        self.name == other.name
            && self.type_annotation.is_equivalent_to(&other.type_annotation)
            && self.default_value == other.default_value
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn with_default_value(mut self, default_value: impl Into<Value>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }
}
