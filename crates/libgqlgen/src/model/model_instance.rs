use crate::type_descriptor::TypeDescriptor;
use crate::value::Value;
use indexmap::IndexMap;

/// A runtime instance of a model type: its [`TypeDescriptor`] plus the value
/// of each member, keyed by the member's declared name.
///
/// Members without a recorded value serialize as `null`.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelInstance {
    type_descriptor: TypeDescriptor,
    values: IndexMap<String, Value>,
}
impl ModelInstance {
    pub fn new(type_descriptor: impl Into<TypeDescriptor>) -> Self {
        Self {
            type_descriptor: type_descriptor.into(),
            values: IndexMap::new(),
        }
    }

    pub fn type_descriptor(&self) -> &TypeDescriptor {
        &self.type_descriptor
    }

    pub fn value(&self, declared_name: &str) -> Option<&Value> {
        self.values.get(declared_name)
    }

    pub fn values(&self) -> &IndexMap<String, Value> {
        &self.values
    }

    pub fn with_value(
        mut self,
        declared_name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.values.insert(declared_name.into(), value.into());
        self
    }
}
