use std::ops::RangeInclusive;

pub const GRID_SIZE: usize = 64;
pub const SEGMENT_COUNT: usize = 4;
pub const SEGMENT_DEPTH: f32 = 2000.0;
pub const SEGMENT_WIDTH: f32 = 5000.0;

/// Base spatial frequency of the first noise octave, in cycles per world unit.
pub const BASE_FREQUENCY: f32 = 0.0025;

/// Frequency multiplier for the ridge shaping pass. Below 1 so ridges come
/// from a coarser sample than the base terrain.
pub const RIDGE_FREQUENCY: f32 = 0.4;
/// Frequency multiplier for the peak shaping pass.
pub const PEAK_FREQUENCY: f32 = 0.7;
/// Coordinate shift that decorrelates the peak pass from the base pass.
pub const PEAK_SHIFT: f32 = 127.1;

pub const BASE_WEIGHT: f32 = 0.5;
pub const RIDGE_WEIGHT: f32 = 0.35;
pub const PEAK_WEIGHT: f32 = 0.8;

/// Lower clamp on normalized elevation so terrain never inverts below the
/// ground plane by more than a shallow trough.
pub const ELEVATION_FLOOR: f32 = -0.05;

/// Upper bound of the normalized (pre height-scale) elevation. The ridge and
/// peak terms are both in [0, 1], the base term in [-1, 1].
pub const MAX_RELATIVE_ELEVATION: f32 = BASE_WEIGHT + RIDGE_WEIGHT + PEAK_WEIGHT;

/// Noise-offset units accumulated per world unit scrolled. Small, so terrain
/// character drifts slowly between regenerations.
pub const NOISE_DRIFT_RATE: f32 = 0.02;

pub const MAX_OCTAVES: u32 = 8;

pub const SCROLL_SPEED_RANGE: RangeInclusive<f32> = 0.0..=1200.0;
pub const HEIGHT_SCALE_RANGE: RangeInclusive<f32> = 0.0..=600.0;
pub const ROUGHNESS_RANGE: RangeInclusive<f32> = 0.2..=0.85;
pub const OCTAVES_RANGE: RangeInclusive<u32> = 1..=MAX_OCTAVES;

pub const DEFAULT_SCROLL_SPEED: f32 = 240.0;
pub const DEFAULT_HEIGHT_SCALE: f32 = 220.0;
pub const DEFAULT_ROUGHNESS: f32 = 0.55;
pub const DEFAULT_OCTAVES: u32 = 5;
pub const DEFAULT_SEED: u64 = 1977;
