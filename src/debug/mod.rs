//! Debug module: feature gated stats collection + periodic SIM log line.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
pub use stats::SimStats;

#[cfg(feature = "debug")]
use crate::core::system::system_order::PostPhysicsAdjustSet;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimStats>().add_systems(
            Update,
            (stats::collect_sim_stats, logging::sim_logging_system)
                .chain()
                .in_set(PostPhysicsAdjustSet),
        );
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
