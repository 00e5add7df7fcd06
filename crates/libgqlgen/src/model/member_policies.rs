use crate::model::ModelMember;
use inherent::inherent;

/// Decides whether a member is eligible to appear in documents at all.
pub trait MemberMarkingPolicy {
    fn is_marked(&self, member: &ModelMember) -> bool;
}

/// Decides whether an eligible member is selected for a particular document.
pub trait MemberPickingPolicy {
    fn is_picked(&self, member: &ModelMember) -> bool;
}

/// Decides whether a rendered `(protocol_name, serialized_value)` pair is kept
/// in an argument list or input object.
pub trait ValuePickingPolicy {
    fn is_picked(&self, protocol_name: &str, serialized_value: &str) -> bool;
}

impl<F: Fn(&ModelMember) -> bool> MemberMarkingPolicy for F {
    fn is_marked(&self, member: &ModelMember) -> bool {
        self(member)
    }
}

impl<F: Fn(&ModelMember) -> bool> MemberPickingPolicy for F {
    fn is_picked(&self, member: &ModelMember) -> bool {
        self(member)
    }
}

impl<F: Fn(&str, &str) -> bool> ValuePickingPolicy for F {
    fn is_picked(&self, protocol_name: &str, serialized_value: &str) -> bool {
        self(protocol_name, serialized_value)
    }
}

/// Only members carrying the `field` marker are eligible.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkedFields;
#[inherent]
impl MemberMarkingPolicy for MarkedFields {
    pub fn is_marked(&self, member: &ModelMember) -> bool {
        member.markers().field
    }
}

/// Every member is eligible, marked or not.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllMembers;
#[inherent]
impl MemberMarkingPolicy for AllMembers {
    pub fn is_marked(&self, _member: &ModelMember) -> bool {
        true
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PickAll;
#[inherent]
impl MemberPickingPolicy for PickAll {
    pub fn is_picked(&self, _member: &ModelMember) -> bool {
        true
    }
}

/// Picks members marked `non_null`, plus members that carry a nested
/// selection set so that non-null members of nested types can still be
/// reached.
#[derive(Clone, Copy, Debug, Default)]
pub struct PickNonNull;
#[inherent]
impl MemberPickingPolicy for PickNonNull {
    pub fn is_picked(&self, member: &ModelMember) -> bool {
        member.markers().non_null || member.markers().with_selection_set
    }
}

/// Picks `id`-like members only, plus delegates (whose own `id`-like
/// members may be inlined).
#[derive(Clone, Copy, Debug, Default)]
pub struct PickIds;
#[inherent]
impl MemberPickingPolicy for PickIds {
    pub fn is_picked(&self, member: &ModelMember) -> bool {
        member.markers().id || member.markers().delegate
    }
}

/// Excludes members that carry a nested selection set.
#[derive(Clone, Copy, Debug, Default)]
pub struct PickWithoutSelectionSets;
#[inherent]
impl MemberPickingPolicy for PickWithoutSelectionSets {
    pub fn is_picked(&self, member: &ModelMember) -> bool {
        !member.markers().with_selection_set
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PickAllValues;
#[inherent]
impl ValuePickingPolicy for PickAllValues {
    pub fn is_picked(&self, _protocol_name: &str, _serialized_value: &str) -> bool {
        true
    }
}

/// Drops pairs whose value serialized to `null`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SkipNullValues;
#[inherent]
impl ValuePickingPolicy for SkipNullValues {
    pub fn is_picked(&self, _protocol_name: &str, serialized_value: &str) -> bool {
        serialized_value != "null"
    }
}
