//! Movement domain: ground contact tracking from collision messages.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::events::LandedEvent;
use crate::movement::{GroundEdge, MovementState, MovementTuning, Player};

/// Fold `CollisionStart`/`CollisionEnd` messages into the per-body contact
/// counter. Begin and end may arrive in any relative order, and unmatched
/// end messages are tolerated (the counter saturates at zero).
pub(crate) fn track_ground_contacts(
    mut start_events: MessageReader<CollisionStart>,
    mut end_events: MessageReader<CollisionEnd>,
    mut query: Query<(Entity, &mut MovementState), With<Player>>,
) {
    for event in start_events.read() {
        for (entity, mut state) in &mut query {
            if event.collider1 == entity || event.collider2 == entity {
                state.on_contact_begin();
                debug!("Contact begin, count now {}", state.contact_count());
            }
        }
    }

    for event in end_events.read() {
        for (entity, mut state) in &mut query {
            if event.collider1 == entity || event.collider2 == entity {
                state.on_contact_end();
                debug!("Contact end, count now {}", state.contact_count());
            }
        }
    }
}

/// Fixed tick: derive the grounded flag from the contact counter and arm
/// coyote time on either grounded edge. Must run before horizontal
/// integration and the jump fire decision, both of which read the freshly
/// computed flag.
pub(crate) fn refresh_ground_state(
    tuning: Res<MovementTuning>,
    mut landed_events: MessageWriter<LandedEvent>,
    mut query: Query<(Entity, &mut MovementState), With<Player>>,
) {
    for (entity, mut state) in &mut query {
        match state.refresh_ground(tuning.coyote_time) {
            Some(GroundEdge::Landed) => {
                debug!("Landed, coyote time re-armed");
                landed_events.write(LandedEvent { entity });
            }
            Some(GroundEdge::LeftGround) => {
                debug!("Left ground, coyote window open");
            }
            None => {}
        }
    }
}
