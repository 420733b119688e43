use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use terrain::TerrainSettings;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Endless Mountains".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .add_plugins((
        terrain::TerrainPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    // Optional settings file: overrides the default TerrainSettings resource
    // before startup systems run.
    if let Ok(path) = std::env::var("ENDLESS_MOUNTAINS_SETTINGS") {
        match load_settings(&path) {
            Ok(settings) => {
                info!("loaded terrain settings from {path}");
                app.insert_resource(settings);
            }
            Err(e) => {
                warn!("ignoring settings file {path}: {e}");
            }
        }
    }

    app.run();
}

fn load_settings(path: &str) -> Result<TerrainSettings, String> {
    let contents = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    let mut settings: TerrainSettings =
        serde_json::from_str(&contents).map_err(|e| e.to_string())?;
    settings.sanitize();
    Ok(settings)
}
