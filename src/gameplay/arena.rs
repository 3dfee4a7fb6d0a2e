use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::physics::rapier::rapier_physics::obstacle_groups;
use crate::rendering::palette::palette::OBSTACLE_COLOR;

/// Thickness of the ground slab and each wall, render units.
pub const OBSTACLE_THICKNESS: f32 = 20.0;

/// Marker for the immovable pit boundary bodies.
#[derive(Component)]
pub struct Obstacle;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleSpec {
    pub center: Vec2,
    pub half_extents: Vec2,
}

/// Pit boundary from the visible screen bounds, centered y-up coordinates:
/// ground spanning the bottom edge, one full-height wall per side edge.
pub fn arena_layout(width: f32, height: f32) -> [ObstacleSpec; 3] {
    let half_w = width * 0.5;
    let half_h = height * 0.5;
    let half_t = OBSTACLE_THICKNESS * 0.5;
    [
        // ground
        ObstacleSpec {
            center: Vec2::new(0.0, -half_h + half_t),
            half_extents: Vec2::new(half_w, half_t),
        },
        // left wall
        ObstacleSpec {
            center: Vec2::new(-half_w + half_t, 0.0),
            half_extents: Vec2::new(half_t, half_h),
        },
        // right wall
        ObstacleSpec {
            center: Vec2::new(half_w - half_t, 0.0),
            half_extents: Vec2::new(half_t, half_h),
        },
    ]
}

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_arena);
    }
}

fn spawn_arena(mut commands: Commands, windows: Query<&Window>) {
    let Ok(window) = windows.single() else {
        warn!("arena: no primary window, skipping obstacle setup");
        return;
    };

    for spec in arena_layout(window.width(), window.height()) {
        commands.spawn((
            Obstacle,
            Sprite {
                color: OBSTACLE_COLOR,
                custom_size: Some(spec.half_extents * 2.0),
                ..default()
            },
            Transform::from_translation(spec.center.extend(0.0)),
            RigidBody::Fixed,
            Collider::cuboid(spec.half_extents.x, spec.half_extents.y),
            Friction::coefficient(0.0),
            Restitution::coefficient(0.0),
            obstacle_groups(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_spans_bottom_edge() {
        let [ground, ..] = arena_layout(1280.0, 720.0);
        assert_eq!(ground.half_extents.x, 640.0);
        assert_eq!(ground.half_extents.y, OBSTACLE_THICKNESS * 0.5);
        // Bottom face flush with the screen's bottom edge.
        assert_eq!(ground.center.y - ground.half_extents.y, -360.0);
    }

    #[test]
    fn walls_hug_side_edges_full_height() {
        let [_, left, right] = arena_layout(1280.0, 720.0);
        assert_eq!(left.center.x - left.half_extents.x, -640.0);
        assert_eq!(right.center.x + right.half_extents.x, 640.0);
        for wall in [left, right] {
            assert_eq!(wall.half_extents.y * 2.0, 720.0);
            assert_eq!(wall.half_extents.x * 2.0, OBSTACLE_THICKNESS);
        }
    }
}
