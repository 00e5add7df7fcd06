use crate::type_descriptor::TypeDescriptor;

/// Marker metadata attached to a [`ModelMember`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct MemberMarkers {
    /// The member is a document field.
    pub field: bool,
    /// The member never holds null.
    pub non_null: bool,
    /// The member identifies its owner (an `id`-like field).
    pub id: bool,
    /// The member's value carries its own nested selection set.
    pub with_selection_set: bool,
    /// The member's own members are inlined into its owner's output.
    pub delegate: bool,
}

/// A named, typed element of a model type along with its marker metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelMember {
    declared_name: String,
    markers: MemberMarkers,
    member_type: TypeDescriptor,
    protocol_name: Option<String>,
}
impl ModelMember {
    /// An unmarked member.
    pub fn new(
        declared_name: impl Into<String>,
        member_type: impl Into<TypeDescriptor>,
    ) -> Self {
        Self {
            declared_name: declared_name.into(),
            markers: MemberMarkers::default(),
            member_type: member_type.into(),
            protocol_name: None,
        }
    }

    pub fn declared_name(&self) -> &str {
        self.declared_name.as_str()
    }

    pub fn markers(&self) -> &MemberMarkers {
        &self.markers
    }

    pub fn member_type(&self) -> &TypeDescriptor {
        &self.member_type
    }

    /// The name used for this member within documents: the explicit protocol
    /// name if one was given, otherwise the declared name.
    pub fn protocol_name(&self) -> &str {
        self.protocol_name.as_deref().unwrap_or(self.declared_name.as_str())
    }

    pub fn delegate(mut self) -> Self {
        self.markers.delegate = true;
        self
    }

    pub fn field(mut self) -> Self {
        self.markers.field = true;
        self
    }

    pub fn id(mut self) -> Self {
        self.markers.id = true;
        self
    }

    pub fn non_null(mut self) -> Self {
        self.markers.non_null = true;
        self
    }

    pub fn with_markers(mut self, markers: MemberMarkers) -> Self {
        self.markers = markers;
        self
    }

    pub fn with_protocol_name(mut self, protocol_name: impl Into<String>) -> Self {
        self.protocol_name = Some(protocol_name.into());
        self
    }

    pub fn with_selection_set(mut self) -> Self {
        self.markers.with_selection_set = true;
        self
    }
}
