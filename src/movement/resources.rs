//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Selector for the jump key, kept as its own enum so it can live in the
/// tuning file without dragging engine key codes into the data format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JumpKey {
    #[default]
    Space,
    KeyW,
    KeyK,
    KeyZ,
    ArrowUp,
}

impl JumpKey {
    pub fn key_code(self) -> KeyCode {
        match self {
            JumpKey::Space => KeyCode::Space,
            JumpKey::KeyW => KeyCode::KeyW,
            JumpKey::KeyK => KeyCode::KeyK,
            JumpKey::KeyZ => KeyCode::KeyZ,
            JumpKey::ArrowUp => KeyCode::ArrowUp,
        }
    }
}

/// Tuning for horizontal smoothing and the jump grace windows.
///
/// Fields are plain data; range enforcement happens in the `set_*` mutators,
/// which clamp to the nearest valid bound instead of erroring.
#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub max_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    /// Fraction of acceleration/deceleration available while airborne, in [0, 1].
    pub air_control: f32,
    pub jump_force: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    /// Ascent velocity multiplier applied on an early jump release, in (0, 1].
    pub low_jump_multiplier: f32,
    pub jump_key: JumpKey,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 8.0,
            max_speed: 10.0,
            acceleration: 60.0,
            deceleration: 80.0,
            air_control: 0.5,
            jump_force: 14.0,
            coyote_time: 0.12,
            jump_buffer_time: 0.12,
            low_jump_multiplier: 0.55,
            jump_key: JumpKey::Space,
        }
    }
}

impl MovementTuning {
    pub fn set_move_speed(&mut self, speed: f32) {
        self.move_speed = speed.max(0.0);
    }

    pub fn set_max_speed(&mut self, speed: f32) {
        self.max_speed = speed.max(0.0);
    }

    pub fn set_acceleration(&mut self, rate: f32) {
        self.acceleration = rate.max(0.0);
    }

    pub fn set_deceleration(&mut self, rate: f32) {
        self.deceleration = rate.max(0.0);
    }

    pub fn set_air_control(&mut self, fraction: f32) {
        self.air_control = fraction.clamp(0.0, 1.0);
    }

    pub fn set_jump_force(&mut self, force: f32) {
        self.jump_force = force.max(0.0);
    }

    pub fn set_coyote_time(&mut self, seconds: f32) {
        self.coyote_time = seconds.max(0.0);
    }

    pub fn set_jump_buffer_time(&mut self, seconds: f32) {
        self.jump_buffer_time = seconds.max(0.0);
    }

    pub fn set_low_jump_multiplier(&mut self, multiplier: f32) {
        self.low_jump_multiplier = multiplier.clamp(0.1, 1.0);
    }

    /// One fixed-tick step of the horizontal smoothing: approach
    /// `axis * move_speed` with the per-tick delta bounded by the active
    /// acceleration rate, scaled down by `air_control` while airborne, and
    /// the result clamped to `±max_speed`.
    pub fn horizontal_step(&self, current: f32, axis: f32, grounded: bool, dt: f32) -> f32 {
        let target_speed = axis * self.move_speed;
        let speed_diff = target_speed - current;

        // Accelerate toward intent, decelerate toward rest
        let mut rate = if axis.abs() > 0.01 {
            self.acceleration
        } else {
            self.deceleration
        };

        if !grounded {
            rate *= self.air_control;
        }

        let max_delta = rate * dt;
        let delta = speed_diff.clamp(-max_delta, max_delta);

        (current + delta).clamp(-self.max_speed, self.max_speed)
    }

    /// Apply the early-release jump cut: ascending velocity is scaled by the
    /// low-jump multiplier, velocity at or past the apex is left unchanged.
    pub fn jump_cut(&self, vertical: f32) -> f32 {
        if vertical > 0.0 {
            vertical * self.low_jump_multiplier
        } else {
            vertical
        }
    }
}

/// Per-tick input snapshot: the resolved horizontal axis and the one-shot
/// jump edges, refreshed every variable tick.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: f32,
    pub jump_pressed: bool,
    pub jump_released: bool,
}
