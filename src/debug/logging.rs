use bevy::prelude::*;

use super::stats::SimStats;
use crate::core::config::GameConfig;

pub fn sim_logging_system(time: Res<Time>, cfg: Res<GameConfig>, mut stats: ResMut<SimStats>) {
    stats.log_accum += time.delta_secs();
    if stats.log_accum < cfg.debug.log_interval.max(0.1) {
        return;
    }
    stats.log_accum = 0.0;
    info!(
        "SIM frame={} t={:.3}s fps={:.1} active={} dead={} fusing={} fused_total={}",
        stats.frame,
        time.elapsed_secs(),
        stats.fps,
        stats.active_balls,
        stats.dead_balls,
        stats.fusions_in_flight,
        stats.fusions_total
    );
}
