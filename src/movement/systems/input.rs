//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{MovementInput, MovementState, MovementTuning, Player};

/// Resolve held left/right keys into a horizontal axis value. Left assigns
/// first, right assigns afterwards and unconditionally, so a simultaneous
/// press of both directions resolves to right.
pub(crate) fn resolve_axis(left_held: bool, right_held: bool) -> f32 {
    let mut axis = 0.0;
    if left_held {
        axis = -1.0;
    }
    if right_held {
        axis = 1.0;
    }
    axis
}

/// Variable tick: refresh the input snapshot and arm the jump buffer on a
/// jump-key press. When the keyboard resource is absent the snapshot degrades
/// to "no input this tick" instead of panicking.
pub(crate) fn sample_input(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    tuning: Res<MovementTuning>,
    mut input: ResMut<MovementInput>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    let Some(keyboard) = keyboard else {
        input.axis = 0.0;
        input.jump_pressed = false;
        input.jump_released = false;
        warn!("ButtonInput<KeyCode> resource missing; input sampling disabled this tick");
        return;
    };

    let left_held = keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft);
    let right_held = keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight);
    input.axis = resolve_axis(left_held, right_held);

    let jump_key = tuning.jump_key.key_code();
    input.jump_pressed = keyboard.just_pressed(jump_key);
    input.jump_released = keyboard.just_released(jump_key);

    if input.jump_pressed {
        for mut state in &mut query {
            // Re-arms on repeated presses, restarting the window
            state.jump_buffer_timer = tuning.jump_buffer_time;
            debug!("Jump pressed, buffer armed for {:.3}s", tuning.jump_buffer_time);
        }
    }
}
