use glam::Vec2;

use super::map_intent_to_commands;
use crate::app::{AppCommand, AppIntent, AppState};

fn state_with_segment() -> AppState {
    let mut state = AppState::new();
    state.store.add(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
    state
}

#[test]
fn pointer_press_with_armed_tool_begins_gesture() {
    let mut state = state_with_segment();
    state.tool.arm_free();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            pos: Vec2::new(50.0, 2.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::BeginGesture { .. }));
}

#[test]
fn pointer_press_near_vertex_selects_it() {
    let state = state_with_segment();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            pos: Vec2::new(98.0, 2.0),
        },
    );

    assert_eq!(commands.len(), 1);
    match &commands[0] {
        AppCommand::SelectVertex { vertex } => assert_eq!(*vertex, Vec2::new(100.0, 0.0)),
        other => panic!("SelectVertex erwartet, bekommen: {other:?}"),
    }
}

#[test]
fn pointer_press_on_segment_body_toggles_reference() {
    let state = state_with_segment();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            pos: Vec2::new(50.0, 2.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::ToggleReference { id: 1 }
    ));
}

#[test]
fn pointer_press_in_empty_space_maps_to_nothing() {
    let state = state_with_segment();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            pos: Vec2::new(400.0, 400.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn pointer_move_without_gesture_only_updates_hover() {
    let state = state_with_segment();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            pos: Vec2::new(10.0, 10.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::UpdateHover { .. }));
}

#[test]
fn pointer_move_during_gesture_updates_provisional_and_hover() {
    let mut state = state_with_segment();
    state.tool.arm_free();
    state.tool.begin_gesture(Vec2::new(10.0, 10.0), None);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            pos: Vec2::new(60.0, 10.0),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::UpdateProvisional { .. }));
    assert!(matches!(commands[1], AppCommand::UpdateHover { .. }));
}

#[test]
fn pointer_release_with_armed_tool_commits() {
    let mut state = state_with_segment();
    state.tool.arm_free();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerReleased {
            pos: Vec2::new(60.0, 10.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::CommitGesture { .. }));
}

#[test]
fn pointer_release_when_idle_maps_to_nothing() {
    let state = state_with_segment();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerReleased {
            pos: Vec2::new(60.0, 10.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn anchored_draw_with_selection_arms_anchored() {
    let mut state = state_with_segment();
    state.session.selected_vertex = Some(Vec2::new(100.0, 0.0));

    let commands = map_intent_to_commands(&state, AppIntent::AnchoredDrawPressed);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::ArmAnchoredDraw));
}

#[test]
fn anchored_draw_without_selection_falls_back_to_free_draw() {
    let state = state_with_segment();

    let commands = map_intent_to_commands(&state, AppIntent::AnchoredDrawPressed);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::ArmFreeDraw));
}

#[test]
fn draw_key_release_disarms() {
    let state = state_with_segment();

    let commands = map_intent_to_commands(&state, AppIntent::DrawKeyReleased);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::DisarmDraw));
}

#[test]
fn undo_and_clear_map_to_their_commands() {
    let state = AppState::new();

    assert!(matches!(
        map_intent_to_commands(&state, AppIntent::UndoRequested)[..],
        [AppCommand::Undo]
    ));
    assert!(matches!(
        map_intent_to_commands(&state, AppIntent::ClearAllRequested)[..],
        [AppCommand::ClearAll]
    ));
}
