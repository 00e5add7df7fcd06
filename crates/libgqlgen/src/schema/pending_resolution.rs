use crate::delayed_resolver::DeferredResolution;
use crate::schema::EntityId;
use crate::schema::EntityTable;
use crate::schema::MemberTypeRef;
use crate::schema::UnresolvedReferenceError;

/// What a [`PendingResolution`] does once the name it is waiting on is
/// defined.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingResolutionKind {
    /// The entity declares that it implements the named interface.
    Implements,

    /// The entity's member at `member_index` is typed with the named entity.
    MemberType {
        member_index: usize,
    },

    /// The entity is a union that lists the named entity at `possible_type_index`.
    /// Resolving it records the union in the named entity's
    /// `implemented_interfaces`.
    UnionMembership {
        possible_type_index: usize,
    },
}

/// A deferred resolution registered against the name of a type that had not
/// been defined yet when `entity` was parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingResolution {
    pub(crate) entity: EntityId,
    pub(crate) kind: PendingResolutionKind,
}
impl PendingResolution {
    pub fn entity(&self) -> EntityId {
        self.entity
    }

    pub fn kind(&self) -> &PendingResolutionKind {
        &self.kind
    }

    fn unresolved(
        &self,
        table: &EntityTable,
        name: &str,
    ) -> UnresolvedReferenceError {
        UnresolvedReferenceError {
            referenced_by: table.get(self.entity)
                .map(|entity| entity.name().to_string())
                .unwrap_or_default(),
            type_name: name.to_string(),
        }
    }
}
impl DeferredResolution for PendingResolution {
    type Target = EntityTable;
    type Error = UnresolvedReferenceError;

    fn resolve(
        &self,
        name: &str,
        table: &mut EntityTable,
    ) -> Result<(), UnresolvedReferenceError> {
        let referenced_id = table.id_of(name)
            .ok_or_else(|| self.unresolved(table, name))?;

        match &self.kind {
            PendingResolutionKind::Implements => {
                if let Some(entity) = table.get_mut(self.entity) {
                    entity.implemented_interfaces.insert(referenced_id);
                }
            },

            PendingResolutionKind::MemberType { member_index } => {
                let table: &EntityTable = table;
                let member_type = table.get(self.entity)
                    .and_then(|entity| entity.members.get(*member_index))
                    .map(|member| &member.member_type);
                if let Some(MemberTypeRef::Delayed(type_ref)) = member_type {
                    type_ref.resolve(table)?;
                }
            },

            PendingResolutionKind::UnionMembership { possible_type_index } => {
                if let Some(type_ref) = table.get(self.entity)
                    .and_then(|union| union.possible_types.get(*possible_type_index)) {
                    type_ref.resolve(table)?;
                }
                if let Some(member) = table.get_mut(referenced_id) {
                    member.implemented_interfaces.insert(self.entity);
                }
            },
        }

        Ok(())
    }
}
