use std::marker::PhantomData;

/// Represents a strongly-typed, `String`-named reference to a "resource"
/// (`TResource`) stored within some other data-store (`TSource`) without
/// holding an explicit reference to the data-store. De-referencing a
/// [NamedRef] is done via [NamedRef::deref()] by providing an explicit
/// reference to the `TSource`.
///
/// Because the lookup happens at de-reference time (rather than when the
/// [NamedRef] is created), a [NamedRef] may be created for a name whose
/// resource has not been defined yet. This is what allows schema members to
/// refer to entities that are declared further down in the schema text: the
/// reference is recorded immediately and only de-referenced once the
/// [EntityTable](crate::schema::EntityTable) holds every declaration.
///
/// `TRefLocation` records where the reference was made (for schema member
/// references this is the name of the referencing entity) so that a dangling
/// reference can be reported against the entity that depends on it.
#[derive(Clone, Debug)]
pub struct NamedRef<
    TSource,
    TRefLocation,
    TResource: DerefByName<Source=TSource, RefLocation=TRefLocation>,
> {
    name: String,
    phantom: PhantomData<TResource>,
    ref_location: TRefLocation,
}
impl<
    TSource,
    TRefLocation,
    TResource: DerefByName<Source=TSource, RefLocation=TRefLocation>,
> NamedRef<TSource, TRefLocation, TResource> {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(
        name: impl AsRef<str>,
        ref_location: TRefLocation,
    ) -> NamedRef<TSource, TRefLocation, TResource> {
        NamedRef {
            name: name.as_ref().to_string(),
            ref_location,
            phantom: PhantomData,
        }
    }

    pub fn ref_location(&self) -> &TRefLocation {
        &self.ref_location
    }

    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }
}
impl<
    TSource,
    TRefLocation: PartialEq,
    TResource: DerefByName<Source=TSource, RefLocation=TRefLocation>,
> PartialEq for NamedRef<TSource, TRefLocation, TResource> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.ref_location == other.ref_location
    }
}

/// Implement this trait for any type that could be referenced by name. This
/// will enable usage of NamedRef<T> for that type.
pub trait DerefByName: Clone + core::fmt::Debug {
    type Source;
    type RefLocation;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;

    fn named_ref(name: &str, ref_location: Self::RefLocation) -> NamedRef<
        Self::Source,
        Self::RefLocation,
        Self,
    > {
        NamedRef::<Self::Source, Self::RefLocation, Self>::new(
            name,
            ref_location,
        )
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("no definition exists for the name `{0}`")]
    DanglingReference(String),
}
