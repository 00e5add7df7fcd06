use crate::operation::Variable;
use crate::value::Value;

/// A `name:value` pair passed to the root field of a document.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    name: String,
    value: Value,
}
impl Argument {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// An argument whose value is passed through `variable`. It renders as
    /// `name:$variable` and declares the variable on the operation.
    pub fn variable(name: impl Into<String>, variable: Variable) -> Self {
        Self::new(name, variable)
    }

    pub fn is_variable(&self) -> bool {
        matches!(self.value, Value::Variable(_))
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}
