use crate::types::BuiltinScalar;

#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_name: String,
}
impl NamedTypeAnnotation {
    /// The [`BuiltinScalar`] this annotation names, if it names one.
    pub fn builtin_scalar(&self) -> Option<BuiltinScalar> {
        BuiltinScalar::from_name(self.type_name.as_str())
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_name.as_str()
    }

    /// Check if two named type annotations are definitionally equal (same
    /// type name and same nullability).
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.nullable == other.nullable
            && self.type_name == other.type_name
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
