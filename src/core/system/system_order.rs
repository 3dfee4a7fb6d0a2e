//! Central system ordering labels to make the update sequence explicit.
//! 1. PrePhysics (merge bookkeeping / kinematic position writes before the step sync)
//! 2. Rapier (handled by plugin)
//! 3. PostPhysicsAdjust (stats, lightweight corrections)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // runs before the physics backend syncs transforms

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PostPhysicsAdjustSet; // lightweight work after physics
