//! Terrain control panel.
//!
//! An egui window with sliders for the runtime parameters and a seed field
//! with a regenerate button. The panel owns no terrain logic: slider writes
//! go through the clamped `TerrainSettings` setters and regeneration is a
//! `ReseedTerrain` event consumed by the terrain crate. Toggle with C.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use terrain::config::{
    HEIGHT_SCALE_RANGE, OCTAVES_RANGE, ROUGHNESS_RANGE, SCROLL_SPEED_RANGE,
};
use terrain::{ReseedTerrain, TerrainSettings};

/// Whether the control panel window is visible.
#[derive(Resource)]
pub struct ControlPanelState {
    pub visible: bool,
}

impl Default for ControlPanelState {
    fn default() -> Self {
        Self { visible: true }
    }
}

/// Seed value being edited in the panel, applied only on "Regenerate".
#[derive(Resource, Default)]
pub struct SeedDraft(pub u64);

/// Startup: the seed field starts at whatever seed the settings carry.
pub fn init_seed_draft(settings: Res<TerrainSettings>, mut seed_draft: ResMut<SeedDraft>) {
    seed_draft.0 = settings.seed();
}

pub fn toggle_panel_key(keys: Res<ButtonInput<KeyCode>>, mut state: ResMut<ControlPanelState>) {
    if keys.just_pressed(KeyCode::KeyC) {
        state.visible = !state.visible;
    }
}

pub fn control_panel_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<ControlPanelState>,
    mut settings: ResMut<TerrainSettings>,
    mut seed_draft: ResMut<SeedDraft>,
    mut reseed: EventWriter<ReseedTerrain>,
) {
    if !state.visible {
        return;
    }

    let mut open = true;
    egui::Window::new("Terrain")
        .open(&mut open)
        .resizable(false)
        .default_width(260.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.spacing_mut().item_spacing.y = 8.0;

            let mut speed = settings.scroll_speed();
            if ui
                .add(
                    egui::Slider::new(&mut speed, SCROLL_SPEED_RANGE)
                        .text("scroll speed"),
                )
                .changed()
            {
                settings.set_scroll_speed(speed);
            }

            let mut height = settings.height_scale();
            if ui
                .add(
                    egui::Slider::new(&mut height, HEIGHT_SCALE_RANGE)
                        .text("mountain height"),
                )
                .changed()
            {
                settings.set_height_scale(height);
            }

            let mut roughness = settings.roughness();
            if ui
                .add(egui::Slider::new(&mut roughness, ROUGHNESS_RANGE).text("roughness"))
                .changed()
            {
                settings.set_roughness(roughness);
            }

            let mut octaves = settings.octaves();
            if ui
                .add(egui::Slider::new(&mut octaves, OCTAVES_RANGE).text("octaves"))
                .changed()
            {
                settings.set_octaves(octaves);
            }

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("seed");
                ui.add(egui::DragValue::new(&mut seed_draft.0));
                if ui.button("Regenerate").clicked() {
                    reseed.send(ReseedTerrain { seed: seed_draft.0 });
                }
            });

            ui.small("height and roughness changes apply as segments wrap");
        });

    if !open {
        state.visible = false;
    }
}
