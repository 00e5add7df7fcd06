use crate::schema::DelayedTypeRef;
use crate::schema::EntityId;
use crate::schema::MemberDescriptor;
use indexmap::IndexSet;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum EntityKind {
    Enum,
    Input,
    Interface,
    Object,
    Scalar,
    Union,
}
impl EntityKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::Input => "input",
            Self::Interface => "interface",
            Self::Object => "type",
            Self::Scalar => "scalar",
            Self::Union => "union",
        }
    }

    /// Whether a member of this kind of entity is rendered with a nested
    /// selection set when it appears in a document.
    pub fn has_selection_set(&self) -> bool {
        matches!(self, Self::Interface | Self::Object | Self::Union)
    }
}

/// A named schema entity (object type, input type, enum, union, interface or
/// custom scalar) recognized from schema text.
///
/// The entity's `implemented_interfaces` and delayed member types may be
/// incomplete until the owning [`SchemaBuilder`](crate::schema::SchemaBuilder)
/// freezes the batch into an [`EntityGraph`](crate::schema::EntityGraph).
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedEntity {
    pub(crate) enum_values: Vec<String>,
    pub(crate) id: EntityId,
    pub(crate) implemented_interfaces: IndexSet<EntityId>,
    pub(crate) kind: EntityKind,
    pub(crate) members: Vec<MemberDescriptor>,
    pub(crate) name: String,
    pub(crate) possible_types: Vec<DelayedTypeRef>,
}
impl ResolvedEntity {
    pub(crate) fn new(kind: EntityKind, name: impl Into<String>) -> Self {
        Self {
            enum_values: vec![],
            id: EntityId(usize::MAX),
            implemented_interfaces: IndexSet::new(),
            kind,
            members: vec![],
            name: name.into(),
            possible_types: vec![],
        }
    }

    /// Values of an enum entity in declaration order. Empty for other kinds.
    pub fn enum_values(&self) -> &[String] {
        self.enum_values.as_slice()
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Interfaces this entity implements, plus every union that lists this
    /// entity as a member. Ordered by when each relationship was resolved.
    pub fn implemented_interfaces(&self) -> &IndexSet<EntityId> {
        &self.implemented_interfaces
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn member(&self, protocol_name: &str) -> Option<&MemberDescriptor> {
        self.members.iter().find(|m| m.protocol_name() == protocol_name)
    }

    /// Members in declaration order. Empty for enums, unions and scalars.
    pub fn members(&self) -> &[MemberDescriptor] {
        self.members.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The member types of a union entity in declaration order. Empty for
    /// other kinds.
    pub fn possible_types(&self) -> &[DelayedTypeRef] {
        self.possible_types.as_slice()
    }
}
