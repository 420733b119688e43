use bevy::prelude::*;

pub mod camera;
pub mod input;
pub mod terrain_mesh;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(camera::HORIZON_COLOR))
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    setup_lighting,
                    terrain_mesh::spawn_segment_meshes,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    input::adjust_settings_keyboard,
                    terrain_mesh::sync_segment_transforms.after(terrain::advance_terrain),
                    terrain_mesh::refresh_wrapped_segments.after(terrain::advance_terrain),
                ),
            );
    }
}

fn setup_lighting(mut commands: Commands) {
    // Flat ambient fill; the ridge silhouettes come from the sun angle.
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.75, 0.8, 0.95),
        brightness: 220.0,
    });

    // Low sun from the side so slopes pick up contrast.
    commands.spawn((
        DirectionalLight {
            illuminance: 9000.0,
            color: Color::srgb(1.0, 0.93, 0.82),
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_6,
            std::f32::consts::FRAC_PI_3,
            0.0,
        )),
    ));
}
