use crate::model::MarkedFields;
use crate::model::MemberMarkingPolicy;
use crate::model::MemberPickingPolicy;
use crate::model::PickAll;
use crate::model::PickAllValues;
use crate::model::ValuePickingPolicy;
use crate::operation::BreakAtRepeat;
use crate::operation::BreakingPolicy;

/// The policies that steer one synthesis: which members are eligible
/// (marking), which eligible members are selected (picking), which rendered
/// argument pairs are kept (value picking) and where cycles are broken.
///
/// Defaults to [`MarkedFields`], [`PickAll`], [`PickAllValues`] and
/// [`BreakAtRepeat`].
pub struct SynthesisOptions<'a> {
    pub(crate) breaking_policy: Box<dyn BreakingPolicy + 'a>,
    pub(crate) marking_policy: Box<dyn MemberMarkingPolicy + 'a>,
    pub(crate) picking_policy: Box<dyn MemberPickingPolicy + 'a>,
    pub(crate) value_picking_policy: Box<dyn ValuePickingPolicy + 'a>,
}
impl<'a> SynthesisOptions<'a> {
    pub fn new() -> Self {
        Self {
            breaking_policy: Box::new(BreakAtRepeat),
            marking_policy: Box::new(MarkedFields),
            picking_policy: Box::new(PickAll),
            value_picking_policy: Box::new(PickAllValues),
        }
    }

    pub fn breaking_policy(&self) -> &dyn BreakingPolicy {
        self.breaking_policy.as_ref()
    }

    pub fn marking_policy(&self) -> &dyn MemberMarkingPolicy {
        self.marking_policy.as_ref()
    }

    pub fn picking_policy(&self) -> &dyn MemberPickingPolicy {
        self.picking_policy.as_ref()
    }

    pub fn value_picking_policy(&self) -> &dyn ValuePickingPolicy {
        self.value_picking_policy.as_ref()
    }

    pub fn with_breaking_policy(
        mut self,
        policy: impl BreakingPolicy + 'a,
    ) -> Self {
        self.breaking_policy = Box::new(policy);
        self
    }

    pub fn with_marking_policy(
        mut self,
        policy: impl MemberMarkingPolicy + 'a,
    ) -> Self {
        self.marking_policy = Box::new(policy);
        self
    }

    pub fn with_picking_policy(
        mut self,
        policy: impl MemberPickingPolicy + 'a,
    ) -> Self {
        self.picking_policy = Box::new(policy);
        self
    }

    pub fn with_value_picking_policy(
        mut self,
        policy: impl ValuePickingPolicy + 'a,
    ) -> Self {
        self.value_picking_policy = Box::new(policy);
        self
    }
}
impl Default for SynthesisOptions<'_> {
    fn default() -> Self {
        Self::new()
    }
}
