use crate::named_ref::NamedRef;
use crate::schema::EntityId;
use crate::schema::EntityTable;
use crate::schema::ResolvedEntity;
use crate::schema::UnresolvedReferenceError;
use crate::types::BuiltinScalar;
use crate::types::TypeAnnotation;
use std::sync::OnceLock;

type Result<T> = std::result::Result<T, UnresolvedReferenceError>;

pub type NamedEntityRef = NamedRef<
    /* TSource = */ EntityTable,
    /* TRefLocation = */ String,
    /* TResource = */ ResolvedEntity,
>;

/// A reference to an entity by name that is resolved against an
/// [`EntityTable`] exactly once, on first read.
///
/// The reference location is the name of the entity that contains the
/// reference, so a reference that never resolves can be reported against it.
#[derive(Clone, Debug, PartialEq)]
pub struct DelayedTypeRef {
    named_ref: NamedEntityRef,
    resolved: OnceLock<EntityId>,
}
impl DelayedTypeRef {
    pub(crate) fn new(
        type_name: impl AsRef<str>,
        referenced_by: impl Into<String>,
    ) -> Self {
        Self {
            named_ref: NamedEntityRef::new(type_name, referenced_by.into()),
            resolved: OnceLock::new(),
        }
    }

    /// A reference whose target is already known.
    pub(crate) fn resolved(
        type_name: impl AsRef<str>,
        referenced_by: impl Into<String>,
        id: EntityId,
    ) -> Self {
        let type_ref = Self::new(type_name, referenced_by);
        let _ = type_ref.resolved.set(id);
        type_ref
    }

    pub fn name(&self) -> &str {
        self.named_ref.name()
    }

    pub fn referenced_by(&self) -> &str {
        self.named_ref.ref_location().as_str()
    }

    /// Resolve against `table`, or return the previously resolved id.
    pub fn resolve(&self, table: &EntityTable) -> Result<EntityId> {
        if let Some(id) = self.resolved.get() {
            return Ok(*id);
        }

        let id = self.named_ref.deref(table)
            .map_err(|_| UnresolvedReferenceError {
                referenced_by: self.referenced_by().to_string(),
                type_name: self.name().to_string(),
            })?
            .id();
        Ok(*self.resolved.get_or_init(|| id))
    }

    /// The resolved id, if [`DelayedTypeRef::resolve()`] has succeeded.
    pub fn resolved_id(&self) -> Option<EntityId> {
        self.resolved.get().copied()
    }
}

/// The (innermost) type of a [`MemberDescriptor`].
#[derive(Clone, Debug, PartialEq)]
pub enum MemberTypeRef {
    Builtin(BuiltinScalar),
    /// An entity that was already defined when the member was parsed.
    Entity(EntityId),
    /// An entity that had not been defined yet when the member was parsed.
    Delayed(DelayedTypeRef),
}

/// A fully resolved [`MemberTypeRef`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolvedMemberType {
    Builtin(BuiltinScalar),
    Entity(EntityId),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MemberDescriptor {
    pub(crate) declared_name: String,
    pub(crate) member_type: MemberTypeRef,
    pub(crate) protocol_name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl MemberDescriptor {
    pub(crate) fn new(
        protocol_name: &str,
        type_annotation: TypeAnnotation,
        member_type: MemberTypeRef,
    ) -> Self {
        Self {
            declared_name: declared_name_for(protocol_name),
            member_type,
            protocol_name: protocol_name.to_string(),
            type_annotation,
        }
    }

    /// The identifier generated code should use for this member: the
    /// snake_case form of the protocol name, with a trailing `_` appended to
    /// Rust keywords.
    pub fn declared_name(&self) -> &str {
        self.declared_name.as_str()
    }

    /// Whether the member's type is wrapped in a list (`[T]`).
    pub fn is_collection(&self) -> bool {
        self.type_annotation.as_list_annotation().is_some()
    }

    /// Whether the innermost element carries a `!`.
    pub fn is_element_required(&self) -> bool {
        !self.type_annotation.innermost_named_type_annotation().nullable()
    }

    /// Whether the outermost type carries a `!`.
    pub fn is_required(&self) -> bool {
        !self.type_annotation.nullable()
    }

    /// Whether either the list wrapper or the element carries a `!`.
    pub fn is_required_anywhere(&self) -> bool {
        self.is_required() || self.is_element_required()
    }

    pub fn member_type(&self) -> &MemberTypeRef {
        &self.member_type
    }

    /// The name used for this member within GraphQL documents.
    pub fn protocol_name(&self) -> &str {
        self.protocol_name.as_str()
    }

    /// Resolve the innermost type of this member. Delayed references are
    /// looked up in `table` on first call and remembered afterwards.
    pub fn resolve_type(
        &self,
        table: &EntityTable,
    ) -> Result<ResolvedMemberType> {
        Ok(match &self.member_type {
            MemberTypeRef::Builtin(scalar) => ResolvedMemberType::Builtin(*scalar),
            MemberTypeRef::Entity(id) => ResolvedMemberType::Entity(*id),
            MemberTypeRef::Delayed(type_ref) =>
                ResolvedMemberType::Entity(type_ref.resolve(table)?),
        })
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    /// Name of the innermost type (e.g. `User` for `[User!]!`).
    pub fn type_name(&self) -> &str {
        self.type_annotation
            .innermost_named_type_annotation()
            .graphql_type_name()
    }
}

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn",
    "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in", "let",
    "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "self",
    "static", "struct", "super", "trait", "true", "type", "unsafe", "use",
    "where", "while",
];

pub(crate) fn declared_name_for(protocol_name: &str) -> String {
    let chars: Vec<char> = protocol_name.chars().collect();
    let mut declared = String::with_capacity(protocol_name.len() + 4);
    for (idx, c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let prev = idx.checked_sub(1).and_then(|i| chars.get(i));
            let next = chars.get(idx + 1);
            let starts_word = match prev {
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_ascii_uppercase() =>
                    next.is_some_and(|n| n.is_ascii_lowercase()),
                _ => false,
            };
            if starts_word && !declared.ends_with('_') {
                declared.push('_');
            }
            declared.push(c.to_ascii_lowercase());
        } else {
            declared.push(*c);
        }
    }

    if RUST_KEYWORDS.contains(&declared.as_str()) {
        declared.push('_');
    }
    declared
}

#[cfg(test)]
mod tests {
    use super::declared_name_for;

    #[test]
    fn declared_names_are_snake_case() {
        assert_eq!(declared_name_for("firstName"), "first_name");
        assert_eq!(declared_name_for("ID"), "id");
        assert_eq!(declared_name_for("userID"), "user_id");
        assert_eq!(declared_name_for("HTTPServer"), "http_server");
        assert_eq!(declared_name_for("already_snake"), "already_snake");
        assert_eq!(declared_name_for("address2Line"), "address2_line");
    }

    #[test]
    fn keywords_get_a_trailing_underscore() {
        assert_eq!(declared_name_for("type"), "type_");
        assert_eq!(declared_name_for("match"), "match_");
        assert_eq!(declared_name_for("typeName"), "type_name");
    }
}
