//! Segment mesh construction and per-frame sync.
//!
//! One `Mesh3d` per terrain segment. Each frame the segment's depth position
//! is copied into its mesh transform; when the scroller reports a wrap, the
//! mesh's position attribute is rewritten in place from the regenerated
//! elevation buffer and smooth normals are recomputed. Mutating the asset is
//! what flags it for re-upload.

use bevy::prelude::*;
use bevy::render::mesh::{Indices, VertexAttributeValues};
use bevy::render::render_asset::RenderAssetUsages;

use terrain::{SegmentLayout, SegmentWrapped, TerrainScroller};

#[derive(Component)]
pub struct SegmentMesh {
    pub index: usize,
}

pub fn spawn_segment_meshes(
    mut commands: Commands,
    scroller: Res<TerrainScroller>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.36, 0.38, 0.42),
        perceptual_roughness: 0.95,
        ..default()
    });

    for (index, segment) in scroller.segments().iter().enumerate() {
        let mesh = build_segment_mesh(scroller.layout(), segment.heights());
        commands.spawn((
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(material.clone()),
            Transform::from_xyz(0.0, 0.0, segment.position()),
            SegmentMesh { index },
        ));
    }
}

/// Builds an indexed G x G plane displaced by the elevation buffer.
/// Vertex order matches the buffer layout (row-major, z rows then x columns)
/// so wrap refreshes can write heights straight through by index.
pub fn build_segment_mesh(layout: &SegmentLayout, heights: &[f32]) -> Mesh {
    let grid = layout.grid();
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(layout.vertex_count());
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(layout.vertex_count());
    let mut indices: Vec<u32> = Vec::with_capacity((grid - 1) * (grid - 1) * 6);

    for iz in 0..grid {
        for ix in 0..grid {
            positions.push([
                layout.vertex_x(ix),
                heights[iz * grid + ix],
                layout.vertex_z(iz),
            ]);
            uvs.push([
                ix as f32 / (grid - 1) as f32,
                iz as f32 / (grid - 1) as f32,
            ]);
        }
    }

    for iz in 0..grid - 1 {
        for ix in 0..grid - 1 {
            let a = (iz * grid + ix) as u32;
            let b = a + 1;
            let c = a + grid as u32;
            let d = c + 1;
            indices.extend_from_slice(&[a, d, b, a, c, d]);
        }
    }

    let mut mesh = Mesh::new(
        bevy::render::mesh::PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(Indices::U32(indices));
    mesh.compute_normals();
    mesh
}

/// Copies each segment's depth position into its mesh transform.
pub fn sync_segment_transforms(
    scroller: Res<TerrainScroller>,
    mut query: Query<(&SegmentMesh, &mut Transform)>,
) {
    for (segment, mut transform) in query.iter_mut() {
        transform.translation.z = scroller.segments()[segment.index].position();
    }
}

/// Rewrites the position attribute of every mesh whose segment wrapped this
/// frame, then recomputes normals.
pub fn refresh_wrapped_segments(
    mut wrapped: EventReader<SegmentWrapped>,
    scroller: Res<TerrainScroller>,
    query: Query<(&SegmentMesh, &Mesh3d)>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    for event in wrapped.read() {
        for (segment, mesh_handle) in query.iter() {
            if segment.index != event.segment {
                continue;
            }
            let heights = scroller.segments()[segment.index].heights();
            let Some(mesh) = meshes.get_mut(&mesh_handle.0) else {
                continue;
            };
            let Some(VertexAttributeValues::Float32x3(positions)) =
                mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
            else {
                continue;
            };
            for (vertex, height) in positions.iter_mut().zip(heights) {
                vertex[1] = *height;
            }
            mesh.compute_normals();
        }
    }
}
