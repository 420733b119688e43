//! Keyboard parameter controls.
//!
//! Arrow keys and PageUp/PageDown nudge the terrain settings while held.
//! All writes go through the clamped setters, so holding a key simply pins
//! the value at its range edge.

use bevy::prelude::*;

use terrain::TerrainSettings;

const SPEED_STEP: f32 = 160.0; // units/sec per second held
const HEIGHT_STEP: f32 = 120.0;
const ROUGHNESS_STEP: f32 = 0.25;

pub fn adjust_settings_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut settings: ResMut<TerrainSettings>,
) {
    let dt = time.delta_secs();

    if keys.pressed(KeyCode::ArrowUp) {
        let speed = settings.scroll_speed() + SPEED_STEP * dt;
        settings.set_scroll_speed(speed);
    }
    if keys.pressed(KeyCode::ArrowDown) {
        let speed = settings.scroll_speed() - SPEED_STEP * dt;
        settings.set_scroll_speed(speed);
    }

    if keys.pressed(KeyCode::ArrowRight) {
        let roughness = settings.roughness() + ROUGHNESS_STEP * dt;
        settings.set_roughness(roughness);
    }
    if keys.pressed(KeyCode::ArrowLeft) {
        let roughness = settings.roughness() - ROUGHNESS_STEP * dt;
        settings.set_roughness(roughness);
    }

    if keys.pressed(KeyCode::PageUp) {
        let scale = settings.height_scale() + HEIGHT_STEP * dt;
        settings.set_height_scale(scale);
    }
    if keys.pressed(KeyCode::PageDown) {
        let scale = settings.height_scale() - HEIGHT_STEP * dt;
        settings.set_height_scale(scale);
    }
}
