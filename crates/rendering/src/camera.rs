//! Fixed flight camera with distance fog.
//!
//! The camera never moves; the terrain scrolls underneath it. Fog fades the
//! rear segments into the horizon color so regeneration pops are invisible.

use bevy::color::Srgba;
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;

use terrain::TerrainScroller;

pub const HORIZON_COLOR: Color = Color::Srgba(Srgba {
    red: 0.74,
    green: 0.78,
    blue: 0.86,
    alpha: 1.0,
});

/// Camera height above the ground plane.
const CAMERA_HEIGHT: f32 = 320.0;
/// Downward aim point, a little below the horizon.
const LOOK_AT_HEIGHT: f32 = 40.0;

pub fn setup_camera(mut commands: Commands, scroller: Res<TerrainScroller>) {
    let depth = scroller.layout().depth();
    let count = scroller.layout().count() as f32;

    // Fog starts past the nearest segment and is opaque before the rear
    // position where wrapped segments reappear (their near edge is at
    // depth * (count - 1.5) from the camera).
    let fog_start = depth * 0.8;
    let fog_end = depth * (count - 1.5);

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, CAMERA_HEIGHT, 0.0)
            .looking_at(Vec3::new(0.0, LOOK_AT_HEIGHT, -depth), Vec3::Y),
        DistanceFog {
            color: HORIZON_COLOR,
            falloff: FogFalloff::Linear {
                start: fog_start,
                end: fog_end,
            },
            ..default()
        },
    ));
}
