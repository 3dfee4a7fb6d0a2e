use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use crate::core::components::{Ball, BallCircleVisual, BallId, BallRadius, BallState};
use crate::core::config::GameConfig;
use crate::core::registry::BallRegistry;
use crate::gameplay::levels::BallLevel;
use crate::physics::rapier::rapier_physics::active_ball_groups;
use crate::rendering::materials::materials::{BallDisplayMaterials, CircleMesh};

pub struct BallSpawnPlugin;

impl Plugin for BallSpawnPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SpawnControl { enabled: true })
            .add_systems(Startup, setup_spawn_timer)
            .add_systems(Update, drip_spawn);
    }
}

#[derive(Resource, Deref, DerefMut)]
struct SpawnTimer(Timer);

#[derive(Resource)]
struct SpawnControl {
    enabled: bool,
}

fn setup_spawn_timer(mut commands: Commands, cfg: Res<GameConfig>) {
    let interval = cfg.spawn.interval.max(0.05);
    commands.insert_resource(SpawnTimer(Timer::from_seconds(
        interval,
        TimerMode::Repeating,
    )));
}

/// Where a new ball enters the pit: `x_t` in 0..1 picks a point inside the
/// configured horizontal band, measured in centered y-up render coordinates.
pub fn drop_point(cfg: &GameConfig, width: f32, height: f32, x_t: f32) -> Vec2 {
    let band = &cfg.spawn.x_band;
    let x_frac = band.min + (band.max - band.min) * x_t;
    Vec2::new(
        (x_frac - 0.5) * width,
        height * (0.5 - cfg.spawn.drop_height_frac),
    )
}

/// True once the summed ball area saturates the arena; spawning pauses so an
/// unattended session cannot overfill the pit.
pub fn coverage_reached(total_ball_area: f32, width: f32, height: f32, max_coverage: f32) -> bool {
    let field_area = width * height;
    field_area > 0.0 && total_ball_area / field_area >= max_coverage
}

fn drip_spawn(
    mut commands: Commands,
    time: Res<Time>,
    timer: Option<ResMut<SpawnTimer>>,
    mut control: ResMut<SpawnControl>,
    windows: Query<&Window>,
    cfg: Res<GameConfig>,
    circle: Option<Res<CircleMesh>>,
    materials: Option<Res<BallDisplayMaterials>>,
    mut registry: ResMut<BallRegistry>,
    q_radii: Query<&BallRadius, With<Ball>>,
) {
    if !control.enabled {
        return;
    }
    let Some(mut timer) = timer else { return };
    let Ok(window) = windows.single() else { return };
    let (Some(circle), Some(materials)) = (circle, materials) else {
        return;
    };

    let total_ball_area: f32 = q_radii
        .iter()
        .map(|r| std::f32::consts::PI * r.0 * r.0)
        .sum();
    if coverage_reached(
        total_ball_area,
        window.width(),
        window.height(),
        cfg.spawn.max_coverage,
    ) {
        info!("spawner paused: ball coverage reached {:.0}%", cfg.spawn.max_coverage * 100.0);
        control.enabled = false;
        return;
    }

    timer.tick(time.delta());
    if !timer.finished() {
        return;
    }

    let mut rng = rand::thread_rng();
    let level = BallLevel::random(&mut rng);
    let position = drop_point(&cfg, window.width(), window.height(), rng.gen::<f32>());
    spawn_ball(
        &mut commands,
        &circle,
        &materials,
        &mut registry,
        &cfg,
        level,
        position,
    );
}

/// Constructs one active ball: dynamic body + circle collider in the active
/// collision group, circle-mesh child visual at the level radius, fresh
/// identity inserted into the registry. Shared by the drip spawner and the
/// merge-completion respawn.
pub fn spawn_ball(
    commands: &mut Commands,
    circle: &CircleMesh,
    materials: &BallDisplayMaterials,
    registry: &mut BallRegistry,
    cfg: &GameConfig,
    level: BallLevel,
    position: Vec2,
) -> (BallId, Entity) {
    let radius = level.radius();
    let id = BallId::fresh();

    let entity = commands
        .spawn((
            Ball,
            id,
            level,
            BallState::Active,
            BallRadius(radius),
            Transform::from_translation(position.extend(0.0)),
            Visibility::default(),
            RigidBody::Dynamic,
            Collider::ball(radius),
            Velocity::zero(),
            Damping {
                linear_damping: cfg.balls.linear_damping,
                angular_damping: 0.0,
            },
            Friction::coefficient(0.0),
            Restitution::coefficient(0.0),
            active_ball_groups(),
            ActiveEvents::COLLISION_EVENTS,
        ))
        .with_children(|parent| {
            parent.spawn((
                BallCircleVisual,
                Mesh2d(circle.0.clone()),
                MeshMaterial2d(materials.for_level(level)),
                Transform::from_scale(Vec3::splat(radius)),
            ));
        })
        .id();
    if cfg.balls.ccd {
        commands.entity(entity).insert(Ccd::enabled());
    }

    registry.insert(id, entity);
    (id, entity)
}
