//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Which grounded edge `refresh_ground` observed this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundEdge {
    Landed,
    LeftGround,
}

/// Per-body movement bookkeeping: the ground contact counter, grounded edge
/// detection, and the coyote / jump-buffer countdowns.
///
/// The contact counter and grounded flags are private so they only move
/// through the contact/refresh methods below; the timers are plain fields
/// that the variable-rate systems count down.
#[derive(Component, Debug, Default)]
pub struct MovementState {
    contact_count: u32,
    grounded: bool,
    was_grounded: bool,
    pub coyote_timer: f32,
    pub jump_buffer_timer: f32,
}

impl MovementState {
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn contact_count(&self) -> u32 {
        self.contact_count
    }

    /// Count both grace windows down toward zero, floored at zero.
    pub fn tick_timers(&mut self, dt: f32) {
        self.coyote_timer = (self.coyote_timer - dt).max(0.0);
        self.jump_buffer_timer = (self.jump_buffer_timer - dt).max(0.0);
    }

    pub fn on_contact_begin(&mut self) {
        self.contact_count += 1;
    }

    /// Saturates at zero: the physics engine may deliver duplicate or
    /// unmatched end events.
    pub fn on_contact_end(&mut self) {
        self.contact_count = self.contact_count.saturating_sub(1);
    }

    /// Recompute the grounded flag from the contact counter, once per fixed
    /// tick. Either grounded edge re-arms the coyote window; returns the
    /// observed edge, if any.
    pub fn refresh_ground(&mut self, coyote_time: f32) -> Option<GroundEdge> {
        self.was_grounded = self.grounded;
        self.grounded = self.contact_count > 0;

        if self.grounded && !self.was_grounded {
            self.coyote_timer = coyote_time;
            Some(GroundEdge::Landed)
        } else if !self.grounded && self.was_grounded {
            self.coyote_timer = coyote_time;
            Some(GroundEdge::LeftGround)
        } else {
            None
        }
    }

    /// A buffered press fires while grounded or inside the coyote window.
    /// An expired buffer silently drops the press.
    pub fn can_jump(&self) -> bool {
        self.jump_buffer_timer > 0.0 && (self.grounded || self.coyote_timer > 0.0)
    }

    /// Consume both grace windows; the body is airborne the instant it jumps.
    pub fn consume_jump(&mut self) {
        self.jump_buffer_timer = 0.0;
        self.coyote_timer = 0.0;
        self.grounded = false;
    }
}
