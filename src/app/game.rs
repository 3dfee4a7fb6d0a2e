// This file is part of Ball Fusion.
// Copyright (C) 2026 contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::registry::BallRegistry;
use crate::core::system::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};
use crate::debug::DebugPlugin;
use crate::gameplay::arena::ArenaPlugin;
use crate::gameplay::merge::MergePlugin;
use crate::gameplay::spawn::BallSpawnPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::physics::rapier::rapier_physics::PhysicsSetupPlugin;
use crate::rendering::camera::camera::CameraPlugin;
use crate::rendering::materials::materials::MaterialsPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (PrePhysicsSet, PostPhysicsAdjustSet.after(PrePhysicsSet)),
        )
        .init_resource::<BallRegistry>()
        .add_plugins((
            CameraPlugin,
            MaterialsPlugin,
            PhysicsSetupPlugin,
            ArenaPlugin,
            BallSpawnPlugin,
            MergePlugin,
            AutoClosePlugin,
            DebugPlugin,
        ));
    }
}
