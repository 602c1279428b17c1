//! Property-based tests for the state machine.
//!
//! These tests use proptest to drive a small machine through random
//! operation sequences and check the history laws hold throughout.

use proptest::prelude::*;
use rewind::builder::ConfigurationBuilder;
use rewind::{Fsm, FsmError};

const STATES: [&str; 4] = ["Initial", "Processing", "Complete", "Failed"];
const EVENTS: [&str; 4] = ["start", "finish", "fail", "retry"];

fn workflow() -> Fsm {
    ConfigurationBuilder::new()
        .initial("Initial")
        .transition("Initial", "start", "Processing")
        .transition("Processing", "finish", "Complete")
        .transition("Processing", "fail", "Failed")
        .transition("Failed", "retry", "Processing")
        .state("Complete", Default::default())
        .build_machine()
        .unwrap()
}

#[derive(Clone, Debug)]
enum Op {
    Change(&'static str),
    Trigger(&'static str),
    Undo,
    Redo,
    Reset,
    ClearHistory,
}

prop_compose! {
    fn arbitrary_state()(index in 0..STATES.len()) -> &'static str {
        STATES[index]
    }
}

prop_compose! {
    fn arbitrary_event()(index in 0..EVENTS.len()) -> &'static str {
        EVENTS[index]
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arbitrary_state().prop_map(Op::Change),
        Just(Op::Change("Unknown")),
        arbitrary_event().prop_map(Op::Trigger),
        Just(Op::Undo),
        Just(Op::Redo),
        Just(Op::Reset),
        Just(Op::ClearHistory),
    ]
}

fn apply(fsm: &mut Fsm, op: &Op) {
    match op {
        Op::Change(target) => {
            let _ = fsm.change_state(target);
        }
        Op::Trigger(event) => {
            let _ = fsm.trigger(event);
        }
        Op::Undo => {
            fsm.undo();
        }
        Op::Redo => {
            fsm.redo();
        }
        Op::Reset => fsm.reset(),
        Op::ClearHistory => fsm.clear_history(),
    }
}

fn snapshot(fsm: &Fsm) -> (String, Vec<String>, Vec<String>) {
    (
        fsm.state().to_string(),
        fsm.history().to_vec(),
        fsm.redo_stack().to_vec(),
    )
}

proptest! {
    #[test]
    fn undo_then_redo_is_identity(ops in prop::collection::vec(arbitrary_op(), 0..30)) {
        let mut fsm = workflow();
        for op in &ops {
            apply(&mut fsm, op);
        }

        let before = snapshot(&fsm);
        if fsm.undo() {
            prop_assert!(fsm.redo());
            prop_assert_eq!(snapshot(&fsm), before);
        } else {
            prop_assert_eq!(snapshot(&fsm), before);
        }
    }

    #[test]
    fn failed_operations_do_not_mutate(
        ops in prop::collection::vec(arbitrary_op(), 0..30),
        event in arbitrary_event(),
    ) {
        let mut fsm = workflow();
        for op in &ops {
            apply(&mut fsm, op);
        }

        let before = snapshot(&fsm);
        if fsm.trigger(event).is_err() {
            prop_assert_eq!(snapshot(&fsm), before.clone());
        }

        let mut fsm = workflow();
        for op in &ops {
            apply(&mut fsm, op);
        }
        let result = fsm.change_state("Unknown");
        let is_unknown_state = matches!(result, Err(FsmError::UnknownState { .. }));
        prop_assert!(is_unknown_state);
        prop_assert_eq!(snapshot(&fsm), before);
    }

    #[test]
    fn forward_motion_clears_redo(
        ops in prop::collection::vec(arbitrary_op(), 0..30),
        target in arbitrary_state(),
    ) {
        let mut fsm = workflow();
        for op in &ops {
            apply(&mut fsm, op);
        }

        fsm.undo();
        fsm.change_state(target).unwrap();

        prop_assert!(!fsm.can_redo());
        prop_assert!(!fsm.redo());
        prop_assert_eq!(fsm.state(), target);
    }

    #[test]
    fn successful_transition_is_undoable(
        ops in prop::collection::vec(arbitrary_op(), 0..30),
        target in arbitrary_state(),
    ) {
        let mut fsm = workflow();
        for op in &ops {
            apply(&mut fsm, op);
        }

        let before = fsm.state().to_string();
        let depth = fsm.history().len();
        fsm.change_state(target).unwrap();

        prop_assert_eq!(fsm.history().len(), depth + 1);
        prop_assert!(fsm.undo());
        prop_assert_eq!(fsm.state(), before.as_str());
        prop_assert_eq!(fsm.history().len(), depth);
    }

    #[test]
    fn history_length_tracks_successful_forward_moves(
        events in prop::collection::vec(arbitrary_event(), 0..30)
    ) {
        let mut fsm = workflow();
        let mut moves = 0;
        for event in &events {
            if fsm.trigger(event).is_ok() {
                moves += 1;
            }
        }

        prop_assert_eq!(fsm.history().len(), moves);
        for _ in 0..moves {
            prop_assert!(fsm.undo());
        }
        prop_assert!(!fsm.undo());
        prop_assert_eq!(fsm.state(), "Initial");
    }

    #[test]
    fn reset_only_changes_current_state(ops in prop::collection::vec(arbitrary_op(), 0..30)) {
        let mut fsm = workflow();
        for op in &ops {
            apply(&mut fsm, op);
        }

        let (_, history, redo) = snapshot(&fsm);
        fsm.reset();

        prop_assert_eq!(snapshot(&fsm), ("Initial".to_string(), history, redo));
    }

    #[test]
    fn states_filter_is_subset_in_order(event in arbitrary_event()) {
        let fsm = workflow();
        let all = fsm.states(None);
        let filtered = fsm.states(Some(event));

        let mut remaining = all.iter();
        for state in &filtered {
            prop_assert!(remaining.any(|s| s == state));
        }
    }
}
