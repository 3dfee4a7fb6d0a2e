use bevy::prelude::*;

use crate::core::components::{Ball, BallState};
use crate::gameplay::merge::{ActiveFusions, BallsFused};

#[derive(Resource, Default, Debug, Clone)]
pub struct SimStats {
    pub fps: f32,
    pub frame: u64,
    pub active_balls: usize,
    pub dead_balls: usize,
    pub fusions_in_flight: usize,
    pub fusions_total: u64,
    pub log_accum: f32,
}

pub fn collect_sim_stats(
    time: Res<Time>,
    mut stats: ResMut<SimStats>,
    q_balls: Query<&BallState, With<Ball>>,
    fusions: Res<ActiveFusions>,
    mut fused: EventReader<BallsFused>,
) {
    stats.frame += 1;
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    stats.fps = if stats.fps == 0.0 {
        inst_fps
    } else {
        stats.fps * 0.9 + inst_fps * 0.1
    };

    let mut active = 0;
    let mut dead = 0;
    for state in q_balls.iter() {
        match state {
            BallState::Active => active += 1,
            BallState::Dead => dead += 1,
            BallState::Removed => {}
        }
    }
    stats.active_balls = active;
    stats.dead_balls = dead;
    stats.fusions_in_flight = fusions.in_flight();
    stats.fusions_total += fused.read().count() as u64;
}
