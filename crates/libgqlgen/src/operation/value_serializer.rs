use crate::model::ModelCatalog;
use crate::model::ModelInstance;
use crate::operation::member_collection::collect_candidates;
use crate::operation::SynthesisError;
use crate::operation::SynthesisOptions;
use crate::operation::Variable;
use crate::value::Value;
use indexmap::IndexMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, SynthesisError>;

/// The variables referenced while serializing values, in order of first
/// appearance, each recorded exactly once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariableCollector {
    variables: IndexMap<String, Variable>,
}
impl VariableCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `variable`. Re-recording a variable with the same definition is
    /// a no-op; re-recording the name with a different type or default is an
    /// error.
    pub fn add(&mut self, variable: &Variable) -> Result<()> {
        match self.variables.get(variable.name()) {
            Some(existing) if existing.has_same_definition(variable) => Ok(()),
            Some(existing) => Err(SynthesisError::ConflictingVariableDefinition {
                definition1: existing.type_annotation().to_string(),
                definition2: variable.type_annotation().to_string(),
                variable_name: variable.name().to_string(),
            }),
            None => {
                self.variables.insert(
                    variable.name().to_string(),
                    variable.clone(),
                );
                Ok(())
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Record every variable of `other`, in its order.
    pub fn merge(&mut self, other: VariableCollector) -> Result<()> {
        for variable in other.variables.values() {
            self.add(variable)?;
        }
        Ok(())
    }

    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }
}

/// Renders [`Value`]s as GraphQL literal text.
///
/// Models are rendered as input objects built from the same member
/// collection rules used for selection sets: marking and picking policies
/// apply, delegates are inlined and supertype members follow the type's own.
/// Map entries and model members are additionally filtered through the value
/// picking policy after rendering.
pub struct ValueSerializer<'a> {
    catalog: &'a dyn ModelCatalog,
    options: &'a SynthesisOptions<'a>,
}
impl<'a> ValueSerializer<'a> {
    pub fn new(
        catalog: &'a dyn ModelCatalog,
        options: &'a SynthesisOptions<'a>,
    ) -> Self {
        Self {
            catalog,
            options,
        }
    }

    /// Render `value`, recording every variable it references into
    /// `variables`.
    pub fn serialize(
        &self,
        value: &Value,
        variables: &mut VariableCollector,
    ) -> Result<String> {
        Ok(match value {
            Value::Null => "null".to_string(),
            Value::String(text) => format!("\"{}\"", escape_string(text)),
            Value::Bool(boolean) => boolean.to_string(),
            Value::Int(int) => int.to_string(),
            Value::Float(float) if float.is_finite() => format!("{float:?}"),
            // GraphQL has no literal for NaN or the infinities.
            Value::Float(float) => {
                log::debug!("Rendering non-finite float `{float}` as `null`.");
                "null".to_string()
            },
            Value::Enum(name) => name.to_string(),
            Value::Scalar(literal) => literal.to_string(),

            Value::List(items) => {
                let items =
                    items.iter()
                        .map(|item| self.serialize(item, variables))
                        .collect::<Result<Vec<_>>>()?;
                format!("[{}]", items.join(","))
            },

            Value::Map(entries) => {
                let pairs = self.picked_pairs(
                    entries.iter().map(|(key, value)| (key.to_string(), value)),
                    variables,
                )?;
                format!("{{{}}}", join_pairs(&pairs))
            },

            Value::Model(instance) => {
                let pairs = self.model_pairs(instance, variables)?;
                format!("{{{}}}", join_pairs(&pairs))
            },

            Value::Variable(variable) => {
                variables.add(variable)?;
                format!("${}", variable.name())
            },
        })
    }

    /// The rendered `(protocol_name, literal)` pairs of `instance` that
    /// survive the value picking policy, in member-collection order.
    pub fn model_pairs(
        &self,
        instance: &ModelInstance,
        variables: &mut VariableCollector,
    ) -> Result<Vec<(String, String)>> {
        let member_values = self.model_member_values(instance)?;
        self.picked_pairs(member_values.into_iter(), variables)
    }

    /// The `(protocol_name, value)` pairs of `instance` in member-collection
    /// order, before any rendering or value picking.
    pub fn model_member_values<'v>(
        &self,
        instance: &'v ModelInstance,
    ) -> Result<Vec<(String, &'v Value)>> {
        let mut seen = HashSet::new();
        let mut pairs = vec![];
        self.collect_member_values(instance, &mut seen, &mut pairs)?;
        Ok(pairs)
    }

    fn collect_member_values<'v>(
        &self,
        instance: &'v ModelInstance,
        seen: &mut HashSet<String>,
        pairs: &mut Vec<(String, &'v Value)>,
    ) -> Result<()> {
        let candidates = collect_candidates(
            self.catalog,
            self.options,
            instance.type_descriptor(),
        )?;

        for candidate in candidates {
            let member = &candidate.member;
            let value = instance.value(member.declared_name()).unwrap_or(&Value::Null);

            if member.markers().delegate {
                if let Value::Model(delegate) = value {
                    self.collect_member_values(delegate, seen, pairs)?;
                }
                continue;
            }

            if seen.insert(member.protocol_name().to_string()) {
                pairs.push((member.protocol_name().to_string(), value));
            }
        }
        Ok(())
    }

    /// Render each pair, dropping the ones the value picking policy rejects.
    /// Variables referenced by a dropped pair are not recorded.
    fn picked_pairs<'v>(
        &self,
        pairs: impl Iterator<Item = (String, &'v Value)>,
        variables: &mut VariableCollector,
    ) -> Result<Vec<(String, String)>> {
        let mut picked = vec![];
        for (name, value) in pairs {
            let mut pair_variables = VariableCollector::new();
            let rendered = self.serialize(value, &mut pair_variables)?;
            if self.options.value_picking_policy.is_picked(&name, &rendered) {
                variables.merge(pair_variables)?;
                picked.push((name, rendered));
            }
        }
        Ok(picked)
    }

    /// Convert `value` into JSON, as sent in a transport envelope's
    /// `variables` object.
    ///
    /// Variables contribute the value bound to them. Enums and custom scalars
    /// become JSON strings. Non-finite floats become `null`.
    pub fn to_json(&self, value: &Value) -> Result<serde_json::Value> {
        Ok(match value {
            Value::Null => serde_json::Value::Null,
            Value::String(text) => serde_json::Value::String(text.to_string()),
            Value::Bool(boolean) => serde_json::Value::Bool(*boolean),
            Value::Int(int) => serde_json::Value::from(*int),
            Value::Float(float) =>
                serde_json::Number::from_f64(*float)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null),
            Value::Enum(name) => serde_json::Value::String(name.to_string()),
            Value::Scalar(literal) =>
                serde_json::Value::String(literal.to_string()),
            Value::List(items) => serde_json::Value::Array(
                items.iter()
                    .map(|item| self.to_json(item))
                    .collect::<Result<Vec<_>>>()?,
            ),
            Value::Map(entries) => {
                let mut object = serde_json::Map::new();
                for (key, value) in entries {
                    object.insert(key.to_string(), self.to_json(value)?);
                }
                serde_json::Value::Object(object)
            },
            Value::Model(instance) => {
                let mut object = serde_json::Map::new();
                for (name, value) in self.model_member_values(instance)? {
                    object.insert(name, self.to_json(value)?);
                }
                serde_json::Value::Object(object)
            },
            Value::Variable(variable) => self.to_json(variable.value())?,
        })
    }
}

fn join_pairs(pairs: &[(String, String)]) -> String {
    pairs.iter()
        .map(|(name, value)| format!("{name}:{value}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Escape `text` for use inside a double-quoted GraphQL string literal:
/// backslashes, double quotes and newlines are escaped, everything else is
/// kept verbatim.
pub fn escape_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Undo [`escape_string()`] on the text of a string literal, with or without
/// its surrounding double quotes.
///
/// Also understands the remaining single-character escapes of the GraphQL
/// grammar (`\/`, `\b`, `\f`, `\r`, `\t`) and `\uXXXX`. Unknown escapes are
/// kept verbatim.
pub fn unescape_string_literal(literal: &str) -> String {
    let inner =
        literal.strip_prefix('"')
            .and_then(|text| text.strip_suffix('"'))
            .unwrap_or(literal);

    let mut unescaped = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            unescaped.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => unescaped.push('\n'),
            Some('"') => unescaped.push('"'),
            Some('\\') => unescaped.push('\\'),
            Some('/') => unescaped.push('/'),
            Some('b') => unescaped.push('\u{0008}'),
            Some('f') => unescaped.push('\u{000C}'),
            Some('r') => unescaped.push('\r'),
            Some('t') => unescaped.push('\t'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => unescaped.push(decoded),
                    None => {
                        unescaped.push_str("\\u");
                        unescaped.push_str(&hex);
                    },
                }
            },
            Some(other) => {
                unescaped.push('\\');
                unescaped.push(other);
            },
            None => unescaped.push('\\'),
        }
    }
    unescaped
}
