use crate::operation::BreakingPolicy;
use crate::type_descriptor::TypeDescriptor;
use smallvec::SmallVec;

/// A cycle detected while traversing: `looped_item` was entered again at
/// `depth` (its index in the trace) and the loop is broken at `breakpoint`.
#[derive(Clone, Debug, PartialEq)]
pub struct LoopRecord {
    pub breakpoint: TypeDescriptor,
    pub depth: usize,
    pub looped_item: TypeDescriptor,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TrackerState {
    Clean,
    CycleActive,
}

/// Tracks the path of model types along a single depth-first traversal and
/// decides when the traversal must stop recursing to avoid an infinite
/// selection set.
///
/// A tracker is scoped to a single synthesis call; it is never shared.
pub struct CycleTracker<'policy> {
    breaking_policy: &'policy dyn BreakingPolicy,
    loops: Vec<LoopRecord>,
    trace: SmallVec<[TypeDescriptor; 8]>,
}
impl<'policy> CycleTracker<'policy> {
    pub fn new(breaking_policy: &'policy dyn BreakingPolicy) -> Self {
        Self {
            breaking_policy,
            loops: vec![],
            trace: SmallVec::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.trace.len()
    }

    /// Push `node` onto the trace. If `node` already occurs on the trace, a
    /// [`LoopRecord`] is opened at the current depth.
    pub fn enter(&mut self, node: TypeDescriptor) {
        let repeat = self.trace.len();
        let first_occurrence = self.trace.iter().position(|n| *n == node);
        self.trace.push(node);

        if let Some(first_occurrence) = first_occurrence {
            let breakpoint_idx =
                self.breaking_policy
                    .breakpoint_index(&self.trace, first_occurrence, repeat)
                    .min(repeat);
            let record = LoopRecord {
                breakpoint: self.trace[breakpoint_idx].clone(),
                depth: repeat,
                looped_item: self.trace[repeat].clone(),
            };
            log::trace!(
                "Cycle on `{}` at depth {repeat}; breaking at `{}`.",
                record.looped_item,
                record.breakpoint,
            );
            self.loops.push(record);
        }
    }

    /// Pop `node` off the trace, closing the loop opened when it was entered
    /// (if any).
    pub fn exit(&mut self, node: &TypeDescriptor) {
        let popped = self.trace.pop();
        debug_assert_eq!(popped.as_ref(), Some(node));

        let depth = self.trace.len();
        if self.loops.last().is_some_and(|record| record.depth == depth) {
            self.loops.pop();
        }
    }

    /// Loops that are currently open, outermost first.
    pub fn loops(&self) -> &[LoopRecord] {
        self.loops.as_slice()
    }

    /// Whether descending into `node` must be skipped: true only while some
    /// loop is open whose breakpoint or looped item is `node`.
    pub fn should_stop_recursing(&self, node: &TypeDescriptor) -> bool {
        self.loops.iter().any(|record| {
            record.breakpoint == *node || record.looped_item == *node
        })
    }

    pub fn state(&self) -> TrackerState {
        if self.loops.is_empty() {
            TrackerState::Clean
        } else {
            TrackerState::CycleActive
        }
    }

    pub fn trace(&self) -> &[TypeDescriptor] {
        self.trace.as_slice()
    }
}
impl std::fmt::Debug for CycleTracker<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CycleTracker")
            .field("loops", &self.loops)
            .field("trace", &self.trace)
            .finish_non_exhaustive()
    }
}
