use crate::model::ModelMember;
use crate::type_descriptor::TypeDescriptor;

/// Describes the members of a model type: the capability a document
/// synthesizer needs from a type in order to build selection sets and argument
/// objects for it.
///
/// `members` holds only the members the type itself declares; members
/// inherited from `supertype` are found by describing the supertype.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelDescription {
    members: Vec<ModelMember>,
    supertype: Option<TypeDescriptor>,
    type_name: String,
    type_parameters: Vec<String>,
}
impl ModelDescription {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            members: vec![],
            supertype: None,
            type_name: type_name.into(),
            type_parameters: vec![],
        }
    }

    pub fn members(&self) -> &[ModelMember] {
        self.members.as_slice()
    }

    pub fn supertype(&self) -> Option<&TypeDescriptor> {
        self.supertype.as_ref()
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn type_parameters(&self) -> &[String] {
        self.type_parameters.as_slice()
    }

    /// The type of `member` as seen through `concrete`, a descriptor of this
    /// model whose generic arguments bind this model's type parameters.
    pub fn bound_member_type(
        &self,
        member: &ModelMember,
        concrete: &TypeDescriptor,
    ) -> TypeDescriptor {
        if self.type_parameters.is_empty() {
            return member.member_type().clone();
        }
        member.member_type().substitute(
            &self.type_parameters,
            concrete.generic_arguments(),
        )
    }

    /// Append a member after all previously added members.
    pub fn with_member(mut self, member: ModelMember) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_supertype(mut self, supertype: impl Into<TypeDescriptor>) -> Self {
        self.supertype = Some(supertype.into());
        self
    }

    pub fn with_type_parameter(mut self, name: impl Into<String>) -> Self {
        self.type_parameters.push(name.into());
        self
    }
}
