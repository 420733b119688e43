use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod control_panel;

use control_panel::{ControlPanelState, SeedDraft};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<ControlPanelState>()
            .init_resource::<SeedDraft>()
            .add_systems(Startup, control_panel::init_seed_draft)
            .add_systems(
                Update,
                (control_panel::toggle_panel_key, control_panel::control_panel_ui),
            );
    }
}
