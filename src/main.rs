use bevy::prelude::*;

use ball_fusion::{GameConfig, GamePlugin};

/// Load error (if any) from the startup config read, logged once the app's
/// logger is running.
#[derive(Resource, Default)]
struct ConfigLoadReport(Option<String>);

fn main() {
    // Fall back to defaults if the config file is missing or malformed.
    let (cfg, load_err) = GameConfig::load_or_default("assets/config/game.ron");

    App::new()
        .insert_resource(cfg.clone())
        .insert_resource(ConfigLoadReport(load_err))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(GamePlugin)
        .add_systems(Startup, report_config)
        .run();
}

fn report_config(report: Res<ConfigLoadReport>, cfg: Res<GameConfig>) {
    if let Some(err) = &report.0 {
        warn!("config load failed, using defaults: {err}");
    }
    for warning in cfg.validate() {
        warn!("config: {warning}");
    }
}
