use crate::model::ModelInstance;
use crate::operation::Variable;
use indexmap::IndexMap;

/// A runtime value that can be rendered as a GraphQL literal.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
    Model(Box<ModelInstance>),
    Null,
    /// A scalar whose canonical literal text is rendered unquoted as-is (e.g.
    /// a temporal value or a custom scalar).
    Scalar(String),
    String(String),
    /// A value bound to a declared [`Variable`]; rendered as `$name` at its
    /// use site.
    Variable(Box<Variable>),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub fn enum_value(name: impl Into<String>) -> Self {
        Self::Enum(name.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn list<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn map<K: Into<String>, V: Into<Value>>(
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Self::Map(
            entries.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    pub fn scalar(literal: impl Into<String>) -> Self {
        Self::Scalar(literal.into())
    }
}
impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl std::convert::From<ModelInstance> for Value {
    fn from(value: ModelInstance) -> Self {
        Self::Model(Box::new(value))
    }
}
impl std::convert::From<Variable> for Value {
    fn from(value: Variable) -> Self {
        Self::Variable(Box::new(value))
    }
}
impl<T: Into<Value>> std::convert::From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}
impl<T: Into<Value>> std::convert::From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::list(value)
    }
}
