use crate::operation::BreakAtFirstOccurrence;
use crate::operation::BreakAtNestingLevel;
use crate::operation::BreakAtRepeat;
use crate::operation::CycleTracker;
use crate::operation::LoopRecord;
use crate::operation::TrackerState;
use crate::TypeDescriptor;

fn td(name: &str) -> TypeDescriptor {
    TypeDescriptor::new(name)
}

#[test]
fn repeat_opens_and_exit_closes_a_loop() {
    let mut tracker = CycleTracker::new(&BreakAtRepeat);
    tracker.enter(td("A"));
    tracker.enter(td("B"));
    assert_eq!(tracker.state(), TrackerState::Clean);
    assert!(!tracker.should_stop_recursing(&td("A")));

    tracker.enter(td("A"));
    assert_eq!(tracker.state(), TrackerState::CycleActive);
    assert_eq!(tracker.loops(), &[LoopRecord {
        breakpoint: td("A"),
        depth: 2,
        looped_item: td("A"),
    }]);
    assert!(tracker.should_stop_recursing(&td("A")));
    assert!(!tracker.should_stop_recursing(&td("B")));

    tracker.exit(&td("A"));
    assert_eq!(tracker.state(), TrackerState::Clean);
    assert_eq!(tracker.depth(), 2);
    assert!(!tracker.should_stop_recursing(&td("A")));
}

#[test]
fn generic_arguments_distinguish_nodes() {
    let mut tracker = CycleTracker::new(&BreakAtRepeat);
    tracker.enter(TypeDescriptor::generic("Page", [td("User")]));
    tracker.enter(TypeDescriptor::generic("Page", [td("Post")]));
    assert_eq!(tracker.state(), TrackerState::Clean);

    tracker.enter(TypeDescriptor::generic("Page", [td("User")]));
    assert_eq!(tracker.state(), TrackerState::CycleActive);
}

#[test]
fn nesting_level_policy_breaks_below_the_first_occurrence() {
    let policy = BreakAtNestingLevel(1);
    let mut tracker = CycleTracker::new(&policy);
    for name in ["A", "B", "C", "A"] {
        tracker.enter(td(name));
    }

    assert_eq!(tracker.loops()[0].breakpoint, td("B"));
    assert!(tracker.should_stop_recursing(&td("A")));
    assert!(tracker.should_stop_recursing(&td("B")));
    assert!(!tracker.should_stop_recursing(&td("C")));
}

#[test]
fn breakpoints_past_the_repeat_are_clamped() {
    let policy = BreakAtNestingLevel(10);
    let mut tracker = CycleTracker::new(&policy);
    for name in ["A", "B", "A"] {
        tracker.enter(td(name));
    }
    assert_eq!(tracker.loops()[0].breakpoint, td("A"));

    let past_the_end = |trace: &[TypeDescriptor], _first: usize, _repeat: usize| {
        trace.len() + 5
    };
    let mut tracker = CycleTracker::new(&past_the_end);
    for name in ["X", "Y", "X"] {
        tracker.enter(td(name));
    }
    assert_eq!(tracker.loops()[0].breakpoint, td("X"));
    assert_eq!(tracker.loops()[0].depth, 2);
}

#[test]
fn first_occurrence_policy_breaks_at_the_earlier_node() {
    let mut tracker = CycleTracker::new(&BreakAtFirstOccurrence);
    for name in ["Root", "A", "B", "A"] {
        tracker.enter(td(name));
    }
    assert_eq!(tracker.loops()[0].breakpoint, td("A"));
    assert_eq!(tracker.trace(), &[td("Root"), td("A"), td("B"), td("A")]);
}

#[test]
fn nested_loops_close_innermost_first() {
    let mut tracker = CycleTracker::new(&BreakAtRepeat);
    tracker.enter(td("A"));
    tracker.enter(td("A"));
    tracker.enter(td("B"));
    tracker.enter(td("B"));
    assert_eq!(tracker.loops().len(), 2);

    tracker.exit(&td("B"));
    assert_eq!(tracker.loops().len(), 1);
    assert_eq!(tracker.loops()[0].looped_item, td("A"));
    assert!(!tracker.should_stop_recursing(&td("B")));

    tracker.exit(&td("B"));
    assert_eq!(tracker.state(), TrackerState::CycleActive);
    tracker.exit(&td("A"));
    assert_eq!(tracker.state(), TrackerState::Clean);
    tracker.exit(&td("A"));
    assert!(tracker.trace().is_empty());
}
