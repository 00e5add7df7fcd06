use crate::type_descriptor::TypeDescriptor;

/// Chooses where a detected cycle is broken.
///
/// When a node is entered that already occurs on the traversal trace, the
/// tracker asks its policy for the index (into `trace`) of the node that acts
/// as the loop's breakpoint. `first_occurrence` is the index of the earlier
/// occurrence of the repeated node and `repeat` is the index of the node that
/// was just entered (always `trace.len() - 1`).
///
/// Indices past `repeat` are clamped to `repeat`.
pub trait BreakingPolicy {
    fn breakpoint_index(
        &self,
        trace: &[TypeDescriptor],
        first_occurrence: usize,
        repeat: usize,
    ) -> usize;
}

/// Break at the repeated node itself. This is the default.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreakAtRepeat;
impl BreakingPolicy for BreakAtRepeat {
    fn breakpoint_index(
        &self,
        _trace: &[TypeDescriptor],
        _first_occurrence: usize,
        repeat: usize,
    ) -> usize {
        repeat
    }
}

/// Break at the first occurrence of the repeated node.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreakAtFirstOccurrence;
impl BreakingPolicy for BreakAtFirstOccurrence {
    fn breakpoint_index(
        &self,
        _trace: &[TypeDescriptor],
        first_occurrence: usize,
        _repeat: usize,
    ) -> usize {
        first_occurrence
    }
}

/// Break `0`-based `n` levels below the first occurrence of the repeated
/// node (but never deeper than the repeat).
///
/// For a trace `[A, B, C, A]`, `BreakAtNestingLevel(1)` breaks the loop at
/// `B`: any later attempt to descend into a `B` is stopped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreakAtNestingLevel(pub usize);
impl BreakingPolicy for BreakAtNestingLevel {
    fn breakpoint_index(
        &self,
        _trace: &[TypeDescriptor],
        first_occurrence: usize,
        repeat: usize,
    ) -> usize {
        first_occurrence.saturating_add(self.0).min(repeat)
    }
}

impl<F: Fn(&[TypeDescriptor], usize, usize) -> usize> BreakingPolicy for F {
    fn breakpoint_index(
        &self,
        trace: &[TypeDescriptor],
        first_occurrence: usize,
        repeat: usize,
    ) -> usize {
        self(trace, first_occurrence, repeat)
    }
}
