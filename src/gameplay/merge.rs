// This file is part of Ball Fusion.
// Copyright (C) 2026 contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fusion protocol: collision events pair equal-level active balls, the pair
//! goes dead (kinematic, filtered out of the active collision group), both
//! walk to their midpoint over a short animation, and the second completion
//! releases a join gate that spawns the next-level replacement.

use std::collections::HashMap;

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{Ball, BallId, BallState};
use crate::core::config::GameConfig;
use crate::core::join::JoinGate;
use crate::core::registry::BallRegistry;
use crate::core::system::system_order::PrePhysicsSet;
use crate::gameplay::levels::BallLevel;
use crate::gameplay::spawn::spawn_ball;
use crate::physics::rapier::rapier_physics::dead_ball_groups;
use crate::rendering::materials::materials::{BallDisplayMaterials, CircleMesh};

/// Event emitted once per completed fusion, after the replacement exists.
#[derive(Event, Debug, Clone)]
pub struct BallsFused {
    pub level: BallLevel,
    pub position: Vec2,
}

/// Midpoint walk state for one merging ball. The body is kinematic while this
/// component is present; the walk system owns its transform.
#[derive(Component, Debug)]
pub struct MergeAnimation {
    pub fusion: FusionId,
    pub from: Vec2,
    pub to: Vec2,
    pub elapsed: f32,
    pub duration: f32,
    pub curve: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FusionId(u64);

/// Replacement details held until a fusion's join gate releases.
#[derive(Debug)]
struct PendingFusion {
    gate: JoinGate,
    level: BallLevel,
    midpoint: Vec2,
}

/// All in-flight fusions. Each holds a 2-party join gate; the arrival that
/// releases the gate yields the replacement level and position.
#[derive(Resource, Default, Debug)]
pub struct ActiveFusions {
    next_id: u64,
    pending: HashMap<u64, PendingFusion>,
}

impl ActiveFusions {
    pub fn begin(&mut self, level: BallLevel, midpoint: Vec2) -> FusionId {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.insert(
            id,
            PendingFusion {
                gate: JoinGate::new(2),
                level,
                midpoint,
            },
        );
        FusionId(id)
    }

    /// Records one walk completion. Returns the replacement spawn on the
    /// arrival that releases the gate, None otherwise.
    pub fn arrive(&mut self, id: FusionId) -> Option<(BallLevel, Vec2)> {
        let fusion = self.pending.get_mut(&id.0)?;
        if !fusion.gate.arrive() {
            return None;
        }
        self.pending
            .remove(&id.0)
            .map(|f| (f.level, f.midpoint))
    }

    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }
}

pub struct MergePlugin;

impl Plugin for MergePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<BallsFused>()
            .init_resource::<ActiveFusions>()
            .add_systems(
                Update,
                (begin_fusions, advance_merge_walks)
                    .chain()
                    .in_set(PrePhysicsSet),
            );
    }
}

/// Easing for the midpoint walk: 0 linear, 1 smoothstep, 2 ease-out cubic.
fn apply_curve(mode: u32, x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    match mode {
        1 => x * x * (3.0 - 2.0 * x),
        2 => 1.0 - (1.0 - x).powi(3),
        _ => x,
    }
}

/// Eased position along a walk at `elapsed` seconds. A non-positive duration
/// degenerates to the target.
pub fn walk_position(from: Vec2, to: Vec2, elapsed: f32, duration: f32, curve: u32) -> Vec2 {
    if duration <= 0.0 {
        return to;
    }
    let t = (elapsed / duration).clamp(0.0, 1.0);
    from.lerp(to, apply_curve(curve, t))
}

type CollidingBall<'a> = (
    &'a BallId,
    &'a BallLevel,
    &'a mut BallState,
    &'a Transform,
    &'a mut RigidBody,
    &'a mut Velocity,
    &'a mut CollisionGroups,
);

/// Drains collision-begin events and qualifies pairs for fusion. Both balls
/// are flipped dead before any animation starts, so the solver stops resolving
/// the pair and neither can qualify for a second simultaneous fusion.
fn begin_fusions(
    mut collisions: EventReader<CollisionEvent>,
    registry: Res<BallRegistry>,
    mut fusions: ResMut<ActiveFusions>,
    cfg: Res<GameConfig>,
    mut q: Query<CollidingBall<'_>, With<Ball>>,
    mut commands: Commands,
) {
    for event in collisions.read() {
        let CollisionEvent::Started(a, b, _) = event else {
            continue;
        };
        // Tag check: anything without the full ball component set (obstacles,
        // stray colliders) drops out here.
        let Ok([ball_a, ball_b]) = q.get_many_mut([*a, *b]) else {
            continue;
        };
        let (id_a, level_a, mut state_a, tf_a, mut body_a, mut vel_a, mut groups_a) = ball_a;
        let (id_b, level_b, mut state_b, tf_b, mut body_b, mut vel_b, mut groups_b) = ball_b;

        // Identity must still resolve to these live entities; a ball removed
        // earlier this frame leaves a stale event behind.
        if registry.get(id_a) != Some(*a) || registry.get(id_b) != Some(*b) {
            continue;
        }
        if !state_a.is_active() || !state_b.is_active() {
            continue;
        }
        if !level_a.can_merge(*level_b) {
            continue;
        }
        let Some(next_level) = level_a.next() else {
            error!("fusion qualified at max level {:?}; skipping", level_a);
            continue;
        };

        let pos_a = tf_a.translation.truncate();
        let pos_b = tf_b.translation.truncate();
        let midpoint = (pos_a + pos_b) * 0.5;

        if !state_a.begin_merge() || !state_b.begin_merge() {
            // Unreachable given the active checks above; skip the event only.
            error!("fusion pair left active state mid-qualification");
            continue;
        }
        let fusion = fusions.begin(next_level, midpoint);
        for (entity, body, vel, groups, from) in [
            (*a, &mut body_a, &mut vel_a, &mut groups_a, pos_a),
            (*b, &mut body_b, &mut vel_b, &mut groups_b, pos_b),
        ] {
            **body = RigidBody::KinematicPositionBased;
            **vel = Velocity::zero();
            **groups = dead_ball_groups();
            commands.entity(entity).insert(MergeAnimation {
                fusion,
                from,
                to: midpoint,
                elapsed: 0.0,
                duration: cfg.merge.duration.max(0.0),
                curve: cfg.merge.curve,
            });
        }

        #[cfg(feature = "debug")]
        info!(
            "fusion started: level {} pair -> level {} at ({:.1}, {:.1})",
            level_a.get(),
            next_level.get(),
            midpoint.x,
            midpoint.y
        );
    }
}

/// Advances every midpoint walk and finishes fusions. Completion releases the
/// ball's resources (despawn + registry purge) and arrives at the fusion's
/// join gate; the second arrival spawns the replacement at the midpoint.
fn advance_merge_walks(
    time: Res<Time>,
    mut commands: Commands,
    mut fusions: ResMut<ActiveFusions>,
    mut registry: ResMut<BallRegistry>,
    cfg: Res<GameConfig>,
    circle: Option<Res<CircleMesh>>,
    materials: Option<Res<BallDisplayMaterials>>,
    mut fused: EventWriter<BallsFused>,
    mut q: Query<(Entity, &BallId, &mut BallState, &mut Transform, &mut MergeAnimation)>,
) {
    let dt = time.delta_secs();
    for (entity, id, mut state, mut transform, mut anim) in q.iter_mut() {
        anim.elapsed += dt;
        let p = walk_position(anim.from, anim.to, anim.elapsed, anim.duration, anim.curve);
        transform.translation.x = p.x;
        transform.translation.y = p.y;

        if anim.elapsed < anim.duration {
            continue;
        }

        // remove(): release visual + body together, purge the identity.
        if !state.release() {
            error!("merge walk completed on an already-removed ball {id}");
            continue;
        }
        registry.remove(id);
        commands.entity(entity).despawn();

        if let Some((level, midpoint)) = fusions.arrive(anim.fusion) {
            let (Some(circle), Some(materials)) = (circle.as_deref(), materials.as_deref())
            else {
                error!("fusion completed before visual assets were ready");
                continue;
            };
            spawn_ball(
                &mut commands,
                circle,
                materials,
                &mut registry,
                &cfg,
                level,
                midpoint,
            );
            fused.write(BallsFused {
                level,
                position: midpoint,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_reaches_midpoint_at_duration() {
        let from = Vec2::new(-10.0, 0.0);
        let to = Vec2::new(6.0, 8.0);
        for curve in 0..=2 {
            assert_eq!(walk_position(from, to, 0.0, 0.5, curve), from);
            let end = walk_position(from, to, 0.5, 0.5, curve);
            assert!((end - to).length() < 1e-4);
        }
    }

    #[test]
    fn walk_progress_is_monotonic_toward_target() {
        let from = Vec2::ZERO;
        let to = Vec2::new(100.0, 0.0);
        for curve in 0..=2 {
            let mut last = f32::NEG_INFINITY;
            for step in 0..=10 {
                let p = walk_position(from, to, step as f32 * 0.05, 0.5, curve);
                assert!(p.x >= last);
                last = p.x;
            }
        }
    }

    #[test]
    fn zero_duration_walk_is_already_at_target() {
        let to = Vec2::new(3.0, 4.0);
        assert_eq!(walk_position(Vec2::ZERO, to, 0.0, 0.0, 2), to);
    }

    #[test]
    fn fusion_gate_releases_on_second_arrival() {
        let mut fusions = ActiveFusions::default();
        let level = BallLevel::new(2).unwrap();
        let id = fusions.begin(level, Vec2::new(1.0, 2.0));
        assert_eq!(fusions.in_flight(), 1);
        assert!(fusions.arrive(id).is_none());
        let released = fusions.arrive(id).expect("second arrival releases");
        assert_eq!(released, (level, Vec2::new(1.0, 2.0)));
        assert_eq!(fusions.in_flight(), 0);
        // Stale arrivals after release are ignored.
        assert!(fusions.arrive(id).is_none());
    }

    #[test]
    fn fusion_ids_are_distinct() {
        let mut fusions = ActiveFusions::default();
        let level = BallLevel::MIN;
        let a = fusions.begin(level, Vec2::ZERO);
        let b = fusions.begin(level, Vec2::ZERO);
        assert_ne!(a, b);
        assert_eq!(fusions.in_flight(), 2);
    }
}
