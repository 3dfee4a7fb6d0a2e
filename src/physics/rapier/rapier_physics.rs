use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::GameConfig;
use crate::core::units;

/// Collision group memberships. Active balls pair with each other and the
/// arena; dead (merging) balls keep only the arena in their filter, so a dead
/// ball can never produce another ball-ball collision event.
pub const ACTIVE_GROUP: Group = Group::GROUP_1;
pub const DEAD_GROUP: Group = Group::GROUP_2;
pub const STATIC_GROUP: Group = Group::GROUP_3;

pub fn active_ball_groups() -> CollisionGroups {
    CollisionGroups::new(ACTIVE_GROUP, ACTIVE_GROUP | STATIC_GROUP)
}

pub fn dead_ball_groups() -> CollisionGroups {
    CollisionGroups::new(DEAD_GROUP, STATIC_GROUP)
}

pub fn obstacle_groups() -> CollisionGroups {
    CollisionGroups::new(STATIC_GROUP, Group::ALL)
}

/// Wrapper configuring rapier as the single physics backend: unit scale,
/// gravity, and the wireframe debug overlay.
pub struct PhysicsSetupPlugin;

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(units::SCALE_FACTOR),
            RapierDebugRenderPlugin::default().disabled(),
        ))
        .add_systems(Startup, configure_physics);
    }
}

fn configure_physics(
    mut q_cfg: Query<&mut RapierConfiguration>,
    mut debug_ctx: ResMut<DebugRenderContext>,
    game_cfg: Res<GameConfig>,
) {
    // RapierConfiguration lives on the context entity in current bevy_rapier;
    // query it rather than a ResMut.
    if let Ok(mut cfg) = q_cfg.single_mut() {
        // Config gravity is downward-positive in physics units; bevy render
        // space is y-up, so flip the sign and rescale.
        cfg.gravity = Vect::new(0.0, -units::to_render(game_cfg.gravity.y));
    }
    debug_ctx.enabled = game_cfg.debug.rapier_wireframe;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_and_active_groups_never_pair() {
        let active = active_ball_groups();
        let dead = dead_ball_groups();
        // Rapier pairs two shapes only if each one's memberships intersect the
        // other's filter; dead balls fail both directions against active.
        assert!((dead.memberships & active.filters).is_empty());
        assert!((dead.filters & active.memberships).is_empty());
    }

    #[test]
    fn both_ball_groups_still_rest_on_obstacles() {
        let obstacle = obstacle_groups();
        for groups in [active_ball_groups(), dead_ball_groups()] {
            assert!(!(groups.filters & obstacle.memberships).is_empty());
            assert!(!(obstacle.filters & groups.memberships).is_empty());
        }
    }

    #[test]
    fn active_balls_pair_with_each_other() {
        let a = active_ball_groups();
        assert!(!(a.memberships & a.filters).is_empty());
    }
}
