//! Movement domain: platformer locomotion plugin wiring and public exports.
//!
//! Input sampling, timer decay, and the jump-release cut run on the variable
//! tick (`Update`); ground refresh, horizontal smoothing, and the jump fire
//! decision run on the fixed tick (`FixedUpdate`) so velocity mutations stay
//! on the physics clock.

mod components;
mod config;
mod events;
mod resources;
mod systems;

#[cfg(feature = "dev-tools")]
mod dev;


pub use components::{GameLayer, Ground, GroundEdge, MovementState, Player};
pub use events::{ImpulseEvent, JumpedEvent, LandedEvent, StopHorizontalEvent};
pub use resources::{JumpKey, MovementInput, MovementTuning};

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::config::load_movement_tuning;
use crate::movement::systems::{
    apply_horizontal_movement, apply_motor_commands, cut_jump_on_release, refresh_ground_state,
    sample_input, track_ground_contacts, try_jump, update_timers,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<ImpulseEvent>()
            .add_message::<StopHorizontalEvent>()
            .add_message::<JumpedEvent>()
            .add_message::<LandedEvent>()
            .add_systems(Startup, (load_movement_tuning, spawn_player).chain())
            .add_systems(
                Update,
                (sample_input, update_timers, cut_jump_on_release).chain(),
            )
            .add_systems(
                FixedUpdate,
                (
                    track_ground_contacts,
                    refresh_ground_state,
                    apply_horizontal_movement,
                    try_jump,
                    apply_motor_commands,
                )
                    .chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, (dev::spawn_test_room, dev::spawn_debug_overlay))
            .add_systems(Update, dev::update_debug_overlay);
    }
}

fn spawn_player(mut commands: Commands) {
    // Gravity and the rotation lock are physics-side configuration: Avian's
    // default gravity acts on the body, the controller only writes velocity.
    commands.spawn((
        Player,
        MovementState::default(),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(0.6, 1.2)),
            ..default()
        },
        Transform::from_xyz(0.0, 2.0, 0.0),
        (
            RigidBody::Dynamic,
            Collider::rectangle(0.6, 1.2),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));

    info!("Player spawned");
}
