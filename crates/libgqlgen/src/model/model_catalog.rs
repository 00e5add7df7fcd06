use crate::model::ModelDescription;
use crate::type_descriptor::TypeDescriptor;
use indexmap::IndexMap;
use std::borrow::Cow;

/// Produces the [`ModelDescription`] of a model type.
///
/// This is the seam between document synthesis and however a host describes
/// its model types: an explicit, externally built list
/// ([`StaticModelCatalog`]), a parsed schema
/// ([`EntityGraph`](crate::schema::EntityGraph)), or anything else.
pub trait ModelCatalog {
    /// Describe the model type named by `type_descriptor`'s raw type, or
    /// `None` if it is not a model type (e.g. a scalar).
    fn describe(
        &self,
        type_descriptor: &TypeDescriptor,
    ) -> Option<Cow<'_, ModelDescription>>;
}

impl<T: ModelCatalog + ?Sized> ModelCatalog for &T {
    fn describe(
        &self,
        type_descriptor: &TypeDescriptor,
    ) -> Option<Cow<'_, ModelDescription>> {
        (**self).describe(type_descriptor)
    }
}

/// A [`ModelCatalog`] backed by an explicit map of descriptions, keyed by raw
/// type name.
#[derive(Clone, Debug, Default)]
pub struct StaticModelCatalog {
    descriptions: IndexMap<String, ModelDescription>,
}
impl StaticModelCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the description for its type name.
    pub fn with(mut self, description: ModelDescription) -> Self {
        self.insert(description);
        self
    }

    pub fn insert(&mut self, description: ModelDescription) {
        self.descriptions.insert(
            description.type_name().to_string(),
            description,
        );
    }

    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }
}
impl ModelCatalog for StaticModelCatalog {
    fn describe(
        &self,
        type_descriptor: &TypeDescriptor,
    ) -> Option<Cow<'_, ModelDescription>> {
        self.descriptions
            .get(type_descriptor.raw_type())
            .map(Cow::Borrowed)
    }
}
