use crate::app::events::PointerButton;
use crate::app::{AppCommand, AppIntent, AppState};
use crate::shared::PickPolicy;
use glam::Vec2;

use super::map_intent_to_commands;

#[test]
fn primary_press_maps_to_begin_drag() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(10.0, 20.0),
            button: PointerButton::Primary,
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::BeginHandleDrag {
            screen_pos: Vec2::new(10.0, 20.0)
        }]
    );
}

#[test]
fn secondary_press_and_release_are_ignored() {
    let state = AppState::new();

    let press = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::ZERO,
            button: PointerButton::Secondary,
        },
    );
    let release = map_intent_to_commands(
        &state,
        AppIntent::PointerReleased {
            button: PointerButton::Middle,
        },
    );

    assert!(press.is_empty());
    assert!(release.is_empty());
}

#[test]
fn move_while_idle_only_updates_cursor() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(1.0, 2.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::UpdateCursor { .. }));
}

#[test]
fn move_while_dragging_maps_to_drag_handle() {
    let mut state = AppState::new();
    state.scene.viewport_size = Vec2::new(800.0, 600.0);
    let world = state.scene.curve.points()[0].world_position();
    let screen = state
        .scene
        .camera
        .world_to_screen(world, state.scene.viewport_size)
        .expect("Kontrollpunkt sichtbar");
    state
        .interaction
        .on_press(&mut state.scene, screen)
        .expect("Strahl");

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            screen_pos: screen + Vec2::X,
        },
    );

    assert!(matches!(commands[0], AppCommand::DragHandle { .. }));
}

#[test]
fn primary_release_always_ends_drag() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerReleased {
            button: PointerButton::Primary,
        },
    );

    assert_eq!(commands, vec![AppCommand::EndHandleDrag]);
}

#[test]
fn reset_curve_ends_drag_first() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ResetCurveRequested);

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::EndHandleDrag));
    assert!(matches!(commands[1], AppCommand::ResetCurve));
}

#[test]
fn option_intents_map_to_commands() {
    let state = AppState::new();

    let policy = map_intent_to_commands(
        &state,
        AppIntent::PickPolicyChanged {
            policy: PickPolicy::NearestHit,
        },
    );
    let orient = map_intent_to_commands(
        &state,
        AppIntent::LoopOrientationToggled { enabled: true },
    );

    assert_eq!(
        policy,
        vec![AppCommand::SetPickPolicy {
            policy: PickPolicy::NearestHit
        }]
    );
    assert_eq!(orient, vec![AppCommand::SetLoopOrientation { enabled: true }]);
}
