//! Segment scrolling and recycling.
//!
//! `TerrainScroller` owns N plane segments laid out back-to-front along the
//! depth axis. Every frame each segment advances toward the camera by the
//! scroll speed; a segment that crosses the forward boundary (one segment
//! depth past the camera) is rewound by exactly N x depth, which places it
//! behind the rearmost segment and preserves the even spacing, and its
//! elevation buffer is regenerated in place from the height field at the new
//! position. A global noise offset drifts forward with the scroll so that
//! successive regenerations at the (always identical) rear position produce
//! fresh terrain instead of a loop.

use bevy::prelude::*;

use crate::config::{GRID_SIZE, SEGMENT_COUNT, SEGMENT_DEPTH, SEGMENT_WIDTH};
use crate::noise::HeightField;
use crate::settings::{SettingsError, TerrainSettings};

/// Static geometry of the segment set. Validated at construction; a
/// degenerate layout (zero depth, single segment, 1x1 grid) would break the
/// spacing invariant, so it is rejected up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentLayout {
    count: usize,
    depth: f32,
    width: f32,
    grid: usize,
}

impl Default for SegmentLayout {
    fn default() -> Self {
        // Constants are compile-time valid; see test_default_layout_valid.
        Self {
            count: SEGMENT_COUNT,
            depth: SEGMENT_DEPTH,
            width: SEGMENT_WIDTH,
            grid: GRID_SIZE,
        }
    }
}

impl SegmentLayout {
    pub fn new(count: usize, depth: f32, width: f32, grid: usize) -> Result<Self, SettingsError> {
        if count < 2 {
            return Err(SettingsError::SegmentCount(count));
        }
        if !(depth > 0.0) {
            return Err(SettingsError::SegmentDepth(depth));
        }
        if !(width > 0.0) {
            return Err(SettingsError::SegmentWidth(width));
        }
        if grid < 2 {
            return Err(SettingsError::GridResolution(grid));
        }
        Ok(Self {
            count,
            depth,
            width,
            grid,
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Vertices per segment side.
    pub fn grid(&self) -> usize {
        self.grid
    }

    pub fn vertex_count(&self) -> usize {
        self.grid * self.grid
    }

    /// Depth position beyond which a segment has fully passed the camera.
    pub fn forward_boundary(&self) -> f32 {
        self.depth
    }

    /// Distance subtracted on wrap: exactly count x depth, so spacing is
    /// preserved.
    pub fn wrap_distance(&self) -> f32 {
        self.count as f32 * self.depth
    }

    /// Local x of a grid column, centered on the segment.
    pub fn vertex_x(&self, ix: usize) -> f32 {
        (ix as f32 / (self.grid - 1) as f32 - 0.5) * self.width
    }

    /// Local z of a grid row, centered on the segment.
    pub fn vertex_z(&self, iz: usize) -> f32 {
        (iz as f32 / (self.grid - 1) as f32 - 0.5) * self.depth
    }

    /// Initial depth position of segment `index`: evenly spaced, with the
    /// front segment starting exactly at the forward boundary.
    fn start_position(&self, index: usize) -> f32 {
        (index as f32 + 2.0 - self.count as f32) * self.depth
    }
}

/// One recyclable terrain segment: a depth position plus an exclusively
/// owned elevation buffer (row-major, `grid * grid` samples in world units).
#[derive(Debug, Clone)]
pub struct TerrainSegment {
    position: f32,
    heights: Vec<f32>,
}

impl TerrainSegment {
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }
}

/// The terrain core: segment set, height field, and global noise offset.
#[derive(Resource, Debug)]
pub struct TerrainScroller {
    layout: SegmentLayout,
    field: HeightField,
    segments: Vec<TerrainSegment>,
    noise_offset: f32,
}

impl TerrainScroller {
    pub fn new(layout: SegmentLayout, settings: &TerrainSettings) -> Self {
        let field = HeightField::new(settings.seed(), settings.octaves(), settings.roughness());
        let segments = (0..layout.count())
            .map(|i| TerrainSegment {
                position: layout.start_position(i),
                heights: vec![0.0; layout.vertex_count()],
            })
            .collect();
        let mut scroller = Self {
            layout,
            field,
            segments,
            noise_offset: 0.0,
        };
        for index in 0..scroller.segments.len() {
            scroller.regenerate(index, settings.height_scale());
        }
        scroller
    }

    pub fn layout(&self) -> &SegmentLayout {
        &self.layout
    }

    pub fn segments(&self) -> &[TerrainSegment] {
        &self.segments
    }

    pub fn noise_offset(&self) -> f32 {
        self.noise_offset
    }

    pub fn field(&self) -> &HeightField {
        &self.field
    }

    /// Per-frame update. Advances every segment by `scroll_speed * dt`,
    /// wraps segments that crossed the forward boundary, and returns the
    /// indices whose elevation buffers were regenerated this frame.
    ///
    /// Settings are read once at the start of the frame; the noise offset
    /// drifts with the scroll regardless of whether any wrap occurs.
    pub fn advance(&mut self, dt: f32, settings: &TerrainSettings) -> Vec<usize> {
        self.field.set_roughness(settings.roughness());
        self.field.set_octaves(settings.octaves());

        let step = settings.scroll_speed() * dt;
        self.noise_offset += step * crate::config::NOISE_DRIFT_RATE;

        let boundary = self.layout.forward_boundary();
        let rewind = self.layout.wrap_distance();

        let mut wrapped = Vec::new();
        for index in 0..self.segments.len() {
            self.segments[index].position += step;
            if self.segments[index].position > boundary {
                self.segments[index].position -= rewind;
                self.regenerate(index, settings.height_scale());
                wrapped.push(index);
            }
        }
        wrapped
    }

    /// Rebuild one segment's elevation buffer from the height field at its
    /// current position. The sampled depth coordinate is the vertex's world
    /// z plus the global noise offset, so the generated surface both lines
    /// up with the segment's placement and drifts over time.
    pub fn regenerate(&mut self, index: usize, height_scale: f32) {
        let grid = self.layout.grid();
        let layout = self.layout;
        let field = &self.field;
        let offset = self.noise_offset;
        let segment = &mut self.segments[index];
        for iz in 0..grid {
            let z = layout.vertex_z(iz) + segment.position + offset;
            for ix in 0..grid {
                let x = layout.vertex_x(ix);
                segment.heights[iz * grid + ix] = field.elevation(x, z) * height_scale;
            }
        }
    }

    /// Replace the height field with one derived from `seed` and regenerate
    /// every segment in place. Segment positions are untouched.
    pub fn reseed(&mut self, seed: u64, settings: &TerrainSettings) {
        self.field = HeightField::new(seed, settings.octaves(), settings.roughness());
        for index in 0..self.segments.len() {
            self.regenerate(index, settings.height_scale());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_layout() -> SegmentLayout {
        SegmentLayout::new(3, 2000.0, 5000.0, 8).unwrap()
    }

    fn test_settings(speed: f32) -> TerrainSettings {
        let mut settings = TerrainSettings::default();
        settings.set_scroll_speed(speed);
        settings
    }

    fn sorted_positions(scroller: &TerrainScroller) -> Vec<f32> {
        let mut positions: Vec<f32> = scroller.segments().iter().map(|s| s.position()).collect();
        positions.sort_by(|a, b| a.partial_cmp(b).unwrap());
        positions
    }

    fn assert_even_spacing(scroller: &TerrainScroller) {
        let positions = sorted_positions(scroller);
        let depth = scroller.layout().depth();
        for pair in positions.windows(2) {
            assert!(
                (pair[1] - pair[0] - depth).abs() < 1e-3,
                "spacing {} != depth {depth} in {positions:?}",
                pair[1] - pair[0]
            );
        }
    }

    #[test]
    fn test_default_layout_valid() {
        SegmentLayout::new(
            SegmentLayout::default().count(),
            SegmentLayout::default().depth(),
            SegmentLayout::default().width(),
            SegmentLayout::default().grid(),
        )
        .unwrap();
    }

    #[test]
    fn test_degenerate_layouts_rejected() {
        assert_eq!(
            SegmentLayout::new(1, 2000.0, 5000.0, 8),
            Err(SettingsError::SegmentCount(1))
        );
        assert_eq!(
            SegmentLayout::new(3, 0.0, 5000.0, 8),
            Err(SettingsError::SegmentDepth(0.0))
        );
        assert_eq!(
            SegmentLayout::new(3, -10.0, 5000.0, 8),
            Err(SettingsError::SegmentDepth(-10.0))
        );
        assert_eq!(
            SegmentLayout::new(3, 2000.0, 0.0, 8),
            Err(SettingsError::SegmentWidth(0.0))
        );
        assert_eq!(
            SegmentLayout::new(3, 2000.0, 5000.0, 1),
            Err(SettingsError::GridResolution(1))
        );
    }

    #[test]
    fn test_initial_positions_evenly_cover() {
        let scroller = TerrainScroller::new(test_layout(), &test_settings(1.0));
        assert_eq!(sorted_positions(&scroller), vec![-2000.0, 0.0, 2000.0]);
    }

    #[test]
    fn test_spacing_invariant_across_many_frames() {
        let layout = test_layout();
        let settings = test_settings(37.0);
        let mut scroller = TerrainScroller::new(layout, &settings);
        for _ in 0..5000 {
            scroller.advance(1.0, &settings);
            assert_even_spacing(&scroller);
        }
    }

    #[test]
    fn test_wrap_rewinds_exactly_count_times_depth() {
        let layout = test_layout();
        let settings = test_settings(1.0);
        let mut scroller = TerrainScroller::new(layout, &settings);

        // Push the front segment past the boundary by a known delta.
        let wrapped = scroller.advance(7.0, &settings);
        assert_eq!(wrapped, vec![2]);
        let expected = 2000.0 + 7.0 - layout.wrap_distance();
        assert!((scroller.segments()[2].position() - expected).abs() < 1e-3);
    }

    #[test]
    fn test_wrap_regenerates_buffer_at_new_position() {
        let layout = test_layout();
        let settings = test_settings(1.0);
        let mut scroller = TerrainScroller::new(layout, &settings);

        let before = scroller.segments()[2].heights().to_vec();
        let wrapped = scroller.advance(5.0, &settings);
        assert_eq!(wrapped, vec![2]);

        let segment = &scroller.segments()[2];
        assert_ne!(before, segment.heights(), "wrap left the buffer stale");

        // The buffer must equal the generator evaluated at the new position
        // (plus the current noise offset).
        let grid = layout.grid();
        for iz in 0..grid {
            let z = layout.vertex_z(iz) + segment.position() + scroller.noise_offset();
            for ix in 0..grid {
                let x = layout.vertex_x(ix);
                let expected = scroller.field().elevation(x, z) * settings.height_scale();
                assert_eq!(segment.heights()[iz * grid + ix].to_bits(), expected.to_bits());
            }
        }
    }

    #[test]
    fn test_example_scenario_2001_frames() {
        // 3 segments of depth 2000, scroll speed 1, starts {-2000, 0, 2000}.
        let layout = test_layout();
        let settings = test_settings(1.0);
        let mut scroller = TerrainScroller::new(layout, &settings);
        let pre_wrap = scroller.segments()[2].heights().to_vec();

        let mut wraps_of_front = 0;
        for _ in 0..2001 {
            let wrapped = scroller.advance(1.0, &settings);
            wraps_of_front += wrapped.iter().filter(|&&i| i == 2).count();
        }

        assert_eq!(wraps_of_front, 1, "front segment should wrap exactly once");
        // Wrapped at frame 1 (position 2001): 2001 - 3*2000 = -3999, then
        // scrolled forward for the remaining 2000 frames.
        assert!((scroller.segments()[2].position() - (-1999.0)).abs() < 1e-3);
        assert_ne!(pre_wrap, scroller.segments()[2].heights());
        assert_even_spacing(&scroller);
    }

    #[test]
    fn test_noise_offset_drifts_without_wraps() {
        let layout = test_layout();
        let settings = test_settings(1.0);
        let mut scroller = TerrainScroller::new(layout, &settings);
        let before = scroller.noise_offset();
        let wrapped = scroller.advance(0.25, &settings);
        assert!(wrapped.is_empty());
        assert!(scroller.noise_offset() > before);
    }

    #[test]
    fn test_reseed_regenerates_all_segments() {
        let layout = test_layout();
        let settings = test_settings(1.0);
        let mut scroller = TerrainScroller::new(layout, &settings);
        let before: Vec<Vec<f32>> = scroller
            .segments()
            .iter()
            .map(|s| s.heights().to_vec())
            .collect();

        scroller.reseed(settings.seed().wrapping_add(1), &settings);

        for (index, segment) in scroller.segments().iter().enumerate() {
            assert_ne!(before[index], segment.heights());
        }
        assert_even_spacing(&scroller);
    }

    #[test]
    fn test_zero_speed_is_a_fixed_point() {
        let layout = test_layout();
        let settings = test_settings(0.0);
        let mut scroller = TerrainScroller::new(layout, &settings);
        let positions = sorted_positions(&scroller);
        let offset = scroller.noise_offset();
        for _ in 0..100 {
            assert!(scroller.advance(1.0, &settings).is_empty());
        }
        assert_eq!(positions, sorted_positions(&scroller));
        assert!((scroller.noise_offset() - offset).abs() < f32::EPSILON);
    }

    #[test]
    fn test_world_heights_bounded_by_scale() {
        let layout = test_layout();
        let settings = test_settings(1.0);
        let scroller = TerrainScroller::new(layout, &settings);
        let bound = settings.height_scale() * crate::config::MAX_RELATIVE_ELEVATION;
        let floor = settings.height_scale() * crate::config::ELEVATION_FLOOR;
        for segment in scroller.segments() {
            for &h in segment.heights() {
                assert!(h <= bound && h >= floor, "height {h} outside [{floor}, {bound}]");
            }
        }
    }
}
