use bevy::prelude::*;

use crate::gameplay::levels::BallLevel;
use crate::rendering::palette::palette::{color_for_level, LEVEL_COLORS};

/// Shared unit-radius circle mesh; ball visuals scale it by diameter.
#[derive(Resource, Clone)]
pub struct CircleMesh(pub Handle<Mesh>);

/// One ColorMaterial handle per ball level, indexed by level - 1.
#[derive(Resource, Clone)]
pub struct BallDisplayMaterials(pub Vec<Handle<ColorMaterial>>);

impl BallDisplayMaterials {
    pub fn for_level(&self, level: BallLevel) -> Handle<ColorMaterial> {
        self.0[(level.get() - 1) as usize].clone()
    }
}

pub struct MaterialsPlugin;

impl Plugin for MaterialsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_ball_visual_assets);
    }
}

fn setup_ball_visual_assets(
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut commands: Commands,
) {
    let circle = meshes.add(Mesh::from(Circle { radius: 1.0 }));
    commands.insert_resource(CircleMesh(circle));

    let mut handles = Vec::with_capacity(LEVEL_COLORS.len());
    let mut level = Some(BallLevel::MIN);
    while let Some(l) = level {
        handles.push(materials.add(color_for_level(l)));
        level = l.next();
    }
    commands.insert_resource(BallDisplayMaterials(handles));
}
