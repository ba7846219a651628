//! Movement domain: control-surface and notification messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Instantaneous impulse request from another gameplay system. Applied
/// through the physics engine, bypassing the horizontal smoothing.
#[derive(Debug)]
pub struct ImpulseEvent {
    pub impulse: Vec2,
}

impl Message for ImpulseEvent {}

/// Zero the horizontal velocity component immediately, vertical untouched.
#[derive(Debug)]
pub struct StopHorizontalEvent;

impl Message for StopHorizontalEvent {}

/// Emitted the fixed tick a buffered jump fires.
#[derive(Debug)]
pub struct JumpedEvent {
    pub entity: Entity,
}

impl Message for JumpedEvent {}

/// Emitted on the airborne-to-grounded edge.
#[derive(Debug)]
pub struct LandedEvent {
    pub entity: Entity,
}

impl Message for LandedEvent {}
