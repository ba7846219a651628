//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{refresh_ground_state, track_ground_contacts};
pub(crate) use input::sample_input;
pub(crate) use movement::{
    apply_horizontal_movement, apply_motor_commands, cut_jump_on_release, try_jump, update_timers,
};
