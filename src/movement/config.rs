//! Loader for the RON movement tuning file at startup.

use bevy::prelude::*;
use ron::Options;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::resources::{JumpKey, MovementTuning};

pub const TUNING_PATH: &str = "assets/data/movement.ron";

/// Error type for tuning file load failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// On-disk shape of the tuning file. Every field is optional so a partial
/// file overrides only what it names.
#[derive(Debug, Default, Deserialize)]
pub struct MovementTuningDef {
    pub move_speed: Option<f32>,
    pub max_speed: Option<f32>,
    pub acceleration: Option<f32>,
    pub deceleration: Option<f32>,
    pub air_control: Option<f32>,
    pub jump_force: Option<f32>,
    pub coyote_time: Option<f32>,
    pub jump_buffer_time: Option<f32>,
    pub low_jump_multiplier: Option<f32>,
    pub jump_key: Option<JumpKey>,
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub(crate) fn parse_tuning(contents: &str, file: &str) -> Result<MovementTuningDef, TuningLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| TuningLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

pub(crate) fn load_tuning_file(path: &Path) -> Result<MovementTuningDef, TuningLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_tuning(&contents, &file_name)
}

/// Fold a tuning def into the live tuning through the clamping mutators, so
/// out-of-range file values are corrected rather than trusted.
pub(crate) fn apply_tuning_def(tuning: &mut MovementTuning, def: &MovementTuningDef) {
    if let Some(v) = def.move_speed {
        tuning.set_move_speed(v);
    }
    if let Some(v) = def.max_speed {
        tuning.set_max_speed(v);
    }
    if let Some(v) = def.acceleration {
        tuning.set_acceleration(v);
    }
    if let Some(v) = def.deceleration {
        tuning.set_deceleration(v);
    }
    if let Some(v) = def.air_control {
        tuning.set_air_control(v);
    }
    if let Some(v) = def.jump_force {
        tuning.set_jump_force(v);
    }
    if let Some(v) = def.coyote_time {
        tuning.set_coyote_time(v);
    }
    if let Some(v) = def.jump_buffer_time {
        tuning.set_jump_buffer_time(v);
    }
    if let Some(v) = def.low_jump_multiplier {
        tuning.set_low_jump_multiplier(v);
    }
    if let Some(v) = def.jump_key {
        tuning.jump_key = v;
    }
}

/// Startup system: load `assets/data/movement.ron` if present, otherwise
/// keep the built-in defaults.
pub(crate) fn load_movement_tuning(mut tuning: ResMut<MovementTuning>) {
    match load_tuning_file(Path::new(TUNING_PATH)) {
        Ok(def) => {
            apply_tuning_def(&mut tuning, &def);
            info!(
                "Movement tuning loaded: move_speed={}, jump_force={}, jump_key={:?}",
                tuning.move_speed, tuning.jump_force, tuning.jump_key
            );
        }
        Err(e) => {
            warn!("{}; using default movement tuning", e);
        }
    }
}
