//! Movement domain: dev-tools test room and movement debug overlay.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, MovementState, Player};

/// Marker for the movement debug overlay text
#[derive(Component, Debug)]
pub(crate) struct MovementOverlay;

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Floor
    spawn_solid(
        &mut commands,
        ground_color,
        Vec2::new(24.0, 1.0),
        Vec2::new(0.0, -1.0),
    );

    // Platforms at staggered heights for coyote/buffer testing
    spawn_solid(
        &mut commands,
        platform_color,
        Vec2::new(4.0, 0.5),
        Vec2::new(-6.0, 1.5),
    );
    spawn_solid(
        &mut commands,
        platform_color,
        Vec2::new(4.0, 0.5),
        Vec2::new(6.0, 3.0),
    );
    spawn_solid(
        &mut commands,
        platform_color,
        Vec2::new(3.0, 0.5),
        Vec2::new(0.0, 4.5),
    );
}

fn spawn_solid(commands: &mut Commands, color: Color, size: Vec2, position: Vec2) {
    commands.spawn((
        Ground,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
}

pub(crate) fn spawn_debug_overlay(mut commands: Commands) {
    commands.spawn((
        MovementOverlay,
        Text::new(""),
        TextFont {
            font_size: 13.0,
            ..default()
        },
        TextColor(Color::srgb(0.7, 0.9, 0.7)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
    ));
}

/// Mirrors the public read surface: grounded flag, velocity, and the two
/// grace-window timers.
pub(crate) fn update_debug_overlay(
    player: Query<(&MovementState, &LinearVelocity), With<Player>>,
    mut overlay: Query<&mut Text, With<MovementOverlay>>,
) {
    let Some((state, velocity)) = player.iter().next() else {
        return;
    };
    let Some(mut text) = overlay.iter_mut().next() else {
        return;
    };

    text.0 = format!(
        "grounded: {} (contacts: {})\nvelocity: ({:.2}, {:.2})\ncoyote: {:.3}\nbuffer: {:.3}",
        state.is_grounded(),
        state.contact_count(),
        velocity.x,
        velocity.y,
        state.coyote_timer,
        state.jump_buffer_timer,
    );
}
