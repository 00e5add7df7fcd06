use crate::model::ModelCatalog;
use crate::model::ModelDescription;
use crate::model::ModelMember;
use crate::schema::EntityKind;
use crate::schema::EntityTable;
use crate::schema::GrammarMismatchError;
use crate::schema::MemberDescriptor;
use crate::schema::ResolvedEntity;
use crate::schema::ResolvedMemberType;
use crate::schema::UnresolvedReferenceError;
use crate::type_descriptor::TypeDescriptor;
use crate::types::BuiltinScalar;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::borrow::Cow;

/// A frozen, fully resolved set of schema entities.
///
/// Every deferred resolution registered while loading has fired by the time an
/// [`EntityGraph`] exists and entities with dangling references have been
/// dropped, so every member type resolves and the graph can be shared freely
/// between threads.
///
/// An [`EntityGraph`] is also a [`ModelCatalog`]: object, interface and input
/// entities describe model types whose members are the entity's members, so
/// documents can be synthesized directly from a schema.
#[derive(Clone, Debug)]
pub struct EntityGraph {
    descriptions: IndexMap<String, ModelDescription>,
    skipped_declarations: Vec<GrammarMismatchError>,
    table: EntityTable,
    unresolved_references: Vec<UnresolvedReferenceError>,
}
impl EntityGraph {
    pub(crate) fn new(
        table: EntityTable,
        skipped_declarations: Vec<GrammarMismatchError>,
        unresolved_references: Vec<UnresolvedReferenceError>,
    ) -> Self {
        let descriptions =
            table.iter()
                .filter_map(|entity| {
                    describe_entity(&table, entity)
                        .map(|desc| (entity.name().to_string(), desc))
                })
                .collect();

        Self {
            descriptions,
            skipped_declarations,
            table,
            unresolved_references,
        }
    }

    pub fn entities(&self) -> impl Iterator<Item = &ResolvedEntity> {
        self.table.iter()
    }

    pub fn entity(&self, name: &str) -> Option<&ResolvedEntity> {
        self.table.get_by_name(name)
    }

    /// Names of the interfaces (and unions) `entity` participates in.
    pub fn implemented_interface_names(
        &self,
        entity: &ResolvedEntity,
    ) -> Vec<&str> {
        entity.implemented_interfaces()
            .iter()
            .filter_map(|id| self.table.get(*id))
            .map(|iface| iface.name())
            .collect()
    }

    /// The entity a member is typed with, or `None` for builtin scalars.
    pub fn member_entity(
        &self,
        member: &MemberDescriptor,
    ) -> Option<&ResolvedEntity> {
        member_entity(&self.table, member)
    }

    /// Declarations that were skipped while loading because they matched no
    /// known shape.
    pub fn skipped_declarations(&self) -> &[GrammarMismatchError] {
        self.skipped_declarations.as_slice()
    }

    pub fn table(&self) -> &EntityTable {
        &self.table
    }

    /// Why each entity that was dropped while freezing the graph went: it
    /// referenced a type that was never defined, or one that was itself
    /// dropped. Direct references come first, in registration order.
    pub fn unresolved_references(&self) -> &[UnresolvedReferenceError] {
        self.unresolved_references.as_slice()
    }
}
impl ModelCatalog for EntityGraph {
    fn describe(
        &self,
        type_descriptor: &TypeDescriptor,
    ) -> Option<Cow<'_, ModelDescription>> {
        self.descriptions
            .get(type_descriptor.raw_type())
            .map(Cow::Borrowed)
    }
}

fn member_entity<'a>(
    table: &'a EntityTable,
    member: &MemberDescriptor,
) -> Option<&'a ResolvedEntity> {
    match member.resolve_type(table) {
        Ok(ResolvedMemberType::Entity(id)) => table.get(id),
        Ok(ResolvedMemberType::Builtin(_)) | Err(_) => None,
    }
}

fn describe_entity(
    table: &EntityTable,
    entity: &ResolvedEntity,
) -> Option<ModelDescription> {
    match entity.kind() {
        EntityKind::Enum | EntityKind::Scalar => None,

        EntityKind::Union => Some(
            ModelDescription::new(entity.name())
                .with_member(ModelMember::new("__typename", "String").field()),
        ),

        EntityKind::Input | EntityKind::Interface | EntityKind::Object => {
            let mut description = ModelDescription::new(entity.name());
            for member in entity.members() {
                let referenced = member_entity(table, member);
                let mut model_member =
                    ModelMember::new(
                        member.declared_name(),
                        type_descriptor_for(member.type_annotation()),
                    )
                    .with_protocol_name(member.protocol_name())
                    .field();
                if member.is_required() {
                    model_member = model_member.non_null();
                }
                if member.type_annotation()
                    .innermost_named_type_annotation()
                    .builtin_scalar() == Some(BuiltinScalar::ID) {
                    model_member = model_member.id();
                }
                if referenced.is_some_and(|e| e.kind().has_selection_set()) {
                    model_member = model_member.with_selection_set();
                }
                description = description.with_member(model_member);
            }
            Some(description)
        },
    }
}

fn type_descriptor_for(annotation: &TypeAnnotation) -> TypeDescriptor {
    match annotation {
        TypeAnnotation::List(list) =>
            TypeDescriptor::list_of(type_descriptor_for(list.inner_type_annotation())),
        TypeAnnotation::Named(named) =>
            TypeDescriptor::new(named.graphql_type_name()),
    }
}
