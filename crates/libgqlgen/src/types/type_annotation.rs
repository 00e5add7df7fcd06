use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;

/// Represents the annotated type of a schema member or of a
/// [`Variable`](crate::operation::Variable) (e.g. `String`, `[ID!]!`).
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// A list annotation wrapping `inner`.
    pub fn list(inner: TypeAnnotation, nullable: bool) -> Self {
        Self::List(ListTypeAnnotation {
            inner_type_ref: Box::new(inner),
            nullable,
        })
    }

    /// A named annotation (e.g. `String` or `User!`).
    pub fn named(type_name: impl Into<String>, nullable: bool) -> Self {
        Self::Named(NamedTypeAnnotation {
            nullable,
            type_name: type_name.into(),
        })
    }

    /// Parse the textual form of a type annotation (`Name`, `Name!`,
    /// `[Name]`, `[Name!]!`, `[[Name]]`, ...). Whitespace between tokens is
    /// permitted. Returns `None` if `text` is not a type annotation.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let (body, nullable) = match text.strip_suffix('!') {
            Some(body) => (body.trim_end(), false),
            None => (text, true),
        };

        if let Some(inner) = body.strip_prefix('[') {
            let inner = inner.strip_suffix(']')?;
            return Some(Self::list(Self::parse(inner)?, nullable));
        }

        let mut chars = body.chars();
        let starts_like_a_name = chars.next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        if !starts_like_a_name
            || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return None;
        }

        Some(Self::named(body, nullable))
    }

    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { inner_type_ref, .. })
                => inner_type_ref.innermost_named_type_annotation(),
            TypeAnnotation::Named(named_annot)
                => named_annot,
        }
    }

    /// Check if two type annotations are definitionally equal: same
    /// structure, same nullability at each level, same innermost type name.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::List(self_list), Self::List(other_list))
                => self_list.nullable == other_list.nullable
                    && self_list.inner_type_ref.is_equivalent_to(
                        &other_list.inner_type_ref,
                    ),
            (Self::Named(self_named), Self::Named(other_named))
                => self_named.is_equivalent_to(other_named),
            _ => false,
        }
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            TypeAnnotation::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation(),
                if list_annot.nullable() { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.graphql_type_name(),
                if named_annot.nullable() { "" } else { "!" },
            ),
        }
    }
}
