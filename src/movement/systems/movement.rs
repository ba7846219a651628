//! Movement domain: timers, horizontal smoothing, and the jump state machine.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::events::{ImpulseEvent, JumpedEvent, StopHorizontalEvent};
use crate::movement::{MovementInput, MovementState, MovementTuning, Player};

/// Variable tick: count both grace windows down by elapsed wall-clock time.
pub(crate) fn update_timers(time: Res<Time>, mut query: Query<&mut MovementState, With<Player>>) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        state.tick_timers(dt);
    }
}

/// Variable tick: cut an ascending jump short when the jump key is released.
/// A release at or after the apex has no effect.
pub(crate) fn cut_jump_on_release(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut LinearVelocity, With<Player>>,
) {
    if !input.jump_released {
        return;
    }

    for mut velocity in &mut query {
        if velocity.y > 0.0 {
            velocity.y = tuning.jump_cut(velocity.y);
            debug!("Jump cut short, vertical velocity now {:.2}", velocity.y);
        }
    }
}

/// Fixed tick: move horizontal velocity toward the input target, leaving the
/// vertical component to the physics engine.
pub(crate) fn apply_horizontal_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (state, mut velocity) in &mut query {
        velocity.x = tuning.horizontal_step(velocity.x, input.axis, state.is_grounded(), dt);
    }
}

/// Fixed tick: fire a buffered jump when grounded or inside the coyote
/// window. Firing sets vertical velocity to the jump force and consumes both
/// grace windows; an expired buffer silently drops the press.
pub(crate) fn try_jump(
    tuning: Res<MovementTuning>,
    mut jumped_events: MessageWriter<JumpedEvent>,
    mut query: Query<(Entity, &mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    for (entity, mut state, mut velocity) in &mut query {
        if state.can_jump() {
            velocity.y = tuning.jump_force;
            state.consume_jump();
            jumped_events.write(JumpedEvent { entity });
            debug!("Jump fired, vertical velocity {:.2}", tuning.jump_force);
        }
    }
}

/// Fixed tick: apply control-surface requests from other gameplay systems.
/// Impulses go through the physics engine, not the smoothing integrator.
pub(crate) fn apply_motor_commands(
    mut impulse_events: MessageReader<ImpulseEvent>,
    mut stop_events: MessageReader<StopHorizontalEvent>,
    mut query: ParamSet<(
        Query<Forces, With<Player>>,
        Query<&mut LinearVelocity, With<Player>>,
    )>,
) {
    for event in impulse_events.read() {
        for mut forces in &mut query.p0() {
            forces.apply_linear_impulse(event.impulse);
        }
    }

    if stop_events.read().next().is_some() {
        for mut velocity in &mut query.p1() {
            velocity.x = 0.0;
        }
    }
}
