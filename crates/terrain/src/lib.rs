//! Terrain core: heightmap generation and segment recycling.
//!
//! The render layer owns meshes, materials and the camera; this crate owns
//! the numbers. `TerrainScroller` holds the segment set and is advanced by a
//! single `Update` system; `SegmentWrapped` events tell the render layer
//! which elevation buffers changed this frame.

use bevy::prelude::*;

pub mod config;
pub mod noise;
pub mod scroller;
pub mod settings;

#[cfg(test)]
mod integration_tests;

pub use noise::HeightField;
pub use scroller::{SegmentLayout, TerrainScroller, TerrainSegment};
pub use settings::{SettingsError, TerrainSettings};

/// Sent when a segment crossed the forward boundary this frame and its
/// elevation buffer was regenerated. Consumers rebuild the matching mesh.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentWrapped {
    pub segment: usize,
}

/// Request a full terrain rebuild from a new seed. Emitted by the control
/// panel; every segment is regenerated and reported via `SegmentWrapped`.
#[derive(Event, Debug, Clone, Copy)]
pub struct ReseedTerrain {
    pub seed: u64,
}

pub struct TerrainPlugin;

impl Plugin for TerrainPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TerrainSettings>()
            .add_event::<SegmentWrapped>()
            .add_event::<ReseedTerrain>()
            .add_systems(PreStartup, init_scroller)
            .add_systems(Update, (handle_reseed, advance_terrain).chain());
    }
}

/// Builds the scroller from whatever `TerrainSettings` resource is present
/// (the app may have replaced the default with a settings file).
fn init_scroller(mut commands: Commands, settings: Res<TerrainSettings>) {
    commands.insert_resource(TerrainScroller::new(SegmentLayout::default(), &settings));
}

/// The per-frame entry point: advance positions, wrap and regenerate, report.
pub fn advance_terrain(
    time: Res<Time>,
    settings: Res<TerrainSettings>,
    mut scroller: ResMut<TerrainScroller>,
    mut wrapped: EventWriter<SegmentWrapped>,
) {
    for segment in scroller.advance(time.delta_secs(), &settings) {
        wrapped.send(SegmentWrapped { segment });
    }
}

/// Applies the last reseed request of the frame, if any.
pub fn handle_reseed(
    mut requests: EventReader<ReseedTerrain>,
    mut settings: ResMut<TerrainSettings>,
    mut scroller: ResMut<TerrainScroller>,
    mut wrapped: EventWriter<SegmentWrapped>,
) {
    let Some(request) = requests.read().last() else {
        return;
    };
    settings.set_seed(request.seed);
    scroller.reseed(request.seed, &settings);
    for segment in 0..scroller.layout().count() {
        wrapped.send(SegmentWrapped { segment });
    }
}
