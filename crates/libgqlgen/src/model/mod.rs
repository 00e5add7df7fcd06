mod member_policies;
mod model_catalog;
mod model_description;
mod model_instance;
mod model_member;

pub use member_policies::AllMembers;
pub use member_policies::MarkedFields;
pub use member_policies::MemberMarkingPolicy;
pub use member_policies::MemberPickingPolicy;
pub use member_policies::PickAll;
pub use member_policies::PickAllValues;
pub use member_policies::PickIds;
pub use member_policies::PickNonNull;
pub use member_policies::PickWithoutSelectionSets;
pub use member_policies::SkipNullValues;
pub use member_policies::ValuePickingPolicy;
pub use model_catalog::ModelCatalog;
pub use model_catalog::StaticModelCatalog;
pub use model_description::ModelDescription;
pub use model_instance::ModelInstance;
pub use model_member::MemberMarkers;
pub use model_member::ModelMember;
