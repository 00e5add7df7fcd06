use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::schema::DelayedTypeRef;
use crate::schema::MemberTypeRef;
use crate::schema::ResolvedEntity;
use crate::schema::SchemaBuildError;
use indexmap::IndexMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Index of a [`ResolvedEntity`] within the [`EntityTable`] that owns it.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct EntityId(pub(crate) usize);
impl EntityId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Append-only mapping from entity name to its definition.
///
/// Entities live in an arena and are addressed by [`EntityId`]. Nothing is
/// ever removed, so an [`EntityId`] handed out by [`EntityTable::insert()`]
/// stays valid for the life of the table.
#[derive(Clone, Debug, Default)]
pub struct EntityTable {
    entities: Vec<ResolvedEntity>,
    ids_by_name: IndexMap<String, EntityId>,
}
impl EntityTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ids_by_name.contains_key(name)
    }

    pub fn get(&self, id: EntityId) -> Option<&ResolvedEntity> {
        self.entities.get(id.0)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&ResolvedEntity> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    pub(crate) fn get_mut(
        &mut self,
        id: EntityId,
    ) -> Option<&mut ResolvedEntity> {
        self.entities.get_mut(id.0)
    }

    pub fn id_of(&self, name: &str) -> Option<EntityId> {
        self.ids_by_name.get(name).copied()
    }

    /// Append `entity` to the table and assign it an [`EntityId`].
    pub fn insert(&mut self, mut entity: ResolvedEntity) -> Result<EntityId> {
        if self.ids_by_name.contains_key(entity.name()) {
            return Err(SchemaBuildError::DuplicateEntityDefinition {
                entity_name: entity.name().to_string(),
            });
        }

        let id = EntityId(self.entities.len());
        entity.id = id;
        self.ids_by_name.insert(entity.name().to_string(), id);
        self.entities.push(entity);
        Ok(id)
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// All entities in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedEntity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Rebuild the table without the entities in `dropped`.
    ///
    /// Survivors keep their relative order and are assigned fresh, dense
    /// [`EntityId`]s; every resolved reference between survivors is remapped.
    /// References to dropped entities are removed from
    /// `implemented_interfaces` and revert to unresolved [`DelayedTypeRef`]s
    /// elsewhere.
    pub(crate) fn without(self, dropped: &HashSet<EntityId>) -> Self {
        if dropped.is_empty() {
            return self;
        }

        let mut next_index = 0;
        let new_ids: Vec<Option<EntityId>> =
            self.entities.iter()
                .map(|entity| {
                    if dropped.contains(&entity.id) {
                        None
                    } else {
                        next_index += 1;
                        Some(EntityId(next_index - 1))
                    }
                })
                .collect();
        let remap = |id: EntityId| new_ids.get(id.0).copied().flatten();
        let remap_type_ref = |type_ref: &DelayedTypeRef| {
            match type_ref.resolved_id().and_then(remap) {
                Some(id) => DelayedTypeRef::resolved(
                    type_ref.name(),
                    type_ref.referenced_by(),
                    id,
                ),
                None => DelayedTypeRef::new(
                    type_ref.name(),
                    type_ref.referenced_by(),
                ),
            }
        };

        let mut table = Self::new();
        for mut entity in self.entities {
            let Some(new_id) = remap(entity.id) else {
                continue;
            };

            entity.implemented_interfaces =
                entity.implemented_interfaces.iter()
                    .filter_map(|id| remap(*id))
                    .collect();
            entity.possible_types =
                entity.possible_types.iter()
                    .map(remap_type_ref)
                    .collect();
            for member in &mut entity.members {
                member.member_type = match &member.member_type {
                    MemberTypeRef::Builtin(scalar) => MemberTypeRef::Builtin(*scalar),
                    MemberTypeRef::Entity(id) => match remap(*id) {
                        Some(id) => MemberTypeRef::Entity(id),
                        None => MemberTypeRef::Delayed(DelayedTypeRef::new(
                            member.type_name(),
                            entity.name.as_str(),
                        )),
                    },
                    MemberTypeRef::Delayed(type_ref) =>
                        MemberTypeRef::Delayed(remap_type_ref(type_ref)),
                };
            }

            entity.id = new_id;
            table.ids_by_name.insert(entity.name.clone(), new_id);
            table.entities.push(entity);
        }
        table
    }
}

impl DerefByName for ResolvedEntity {
    type Source = EntityTable;
    type RefLocation = String;

    fn deref_name<'a>(
        table: &'a Self::Source,
        name: &str,
    ) -> std::result::Result<&'a Self, DerefByNameError> {
        table.get_by_name(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}
