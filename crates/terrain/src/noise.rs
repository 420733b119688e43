//! Layered sinusoid heightmap generator.
//!
//! `HeightField` produces a scalar elevation for any world-space (x, z)
//! coordinate. Each octave sums two phase-shifted sinusoids that mix x and z
//! at geometrically increasing frequency and geometrically decaying amplitude
//! (the decay ratio is the roughness), normalized by the total amplitude so
//! the raw sample stays in [-1, 1] regardless of octave count. Two shaping
//! passes layer on top: an inverted-absolute-value "ridge" term from a
//! coarser sample, and a cubed-absolute-value "peak" term producing sparse
//! sharp spikes.
//!
//! The generator is fully determined by (seed, octaves, roughness): phase
//! offsets are drawn once from a seeded ChaCha stream at construction, and
//! sampling touches no further random state. Regenerating a segment at the
//! same coordinates therefore reproduces the same surface bit-for-bit.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f32::consts::TAU;

use crate::config::{
    BASE_FREQUENCY, BASE_WEIGHT, ELEVATION_FLOOR, MAX_OCTAVES, OCTAVES_RANGE, PEAK_FREQUENCY,
    PEAK_SHIFT, PEAK_WEIGHT, RIDGE_FREQUENCY, RIDGE_WEIGHT, ROUGHNESS_RANGE,
};

/// Deterministic multi-octave heightmap generator.
#[derive(Debug, Clone)]
pub struct HeightField {
    octaves: u32,
    roughness: f32,
    /// Per-octave phase pair for the two sinusoids. Sized for `MAX_OCTAVES`
    /// so octave-count changes never need a reseed.
    phases: [[f32; 2]; MAX_OCTAVES as usize],
}

impl HeightField {
    pub fn new(seed: u64, octaves: u32, roughness: f32) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut phases = [[0.0; 2]; MAX_OCTAVES as usize];
        for pair in &mut phases {
            pair[0] = rng.gen_range(0.0..TAU);
            pair[1] = rng.gen_range(0.0..TAU);
        }
        let mut field = Self {
            octaves: 1,
            roughness: 0.0,
            phases,
        };
        field.set_octaves(octaves);
        field.set_roughness(roughness);
        field
    }

    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    pub fn roughness(&self) -> f32 {
        self.roughness
    }

    pub fn set_octaves(&mut self, octaves: u32) {
        self.octaves = octaves.clamp(*OCTAVES_RANGE.start(), *OCTAVES_RANGE.end());
    }

    pub fn set_roughness(&mut self, roughness: f32) {
        self.roughness = roughness.clamp(*ROUGHNESS_RANGE.start(), *ROUGHNESS_RANGE.end());
    }

    /// Raw layered noise in [-1, 1].
    ///
    /// Octave k runs at frequency `BASE_FREQUENCY * 2^k` with amplitude
    /// `roughness^k`; the sum is divided by the accumulated amplitude so the
    /// range is independent of the octave count.
    pub fn sample(&self, x: f32, z: f32) -> f32 {
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = BASE_FREQUENCY;
        let mut total = 0.0;

        for pair in self.phases.iter().take(self.octaves as usize) {
            let a = (x * frequency + z * frequency * 0.5 + pair[0]).sin();
            let b = (z * frequency - x * frequency * 0.5 + pair[1]).sin();
            sum += amplitude * 0.5 * (a + b);
            total += amplitude;
            frequency *= 2.0;
            amplitude *= self.roughness;
        }

        sum / total
    }

    /// Shaped elevation, normalized (multiply by the mountain height scale
    /// for world units). Bounded to [`ELEVATION_FLOOR`,
    /// `MAX_RELATIVE_ELEVATION`].
    pub fn elevation(&self, x: f32, z: f32) -> f32 {
        let base = self.sample(x, z);

        // Valleys of the coarse field become ridges once inverted.
        let ridge = 1.0 - self.sample(x * RIDGE_FREQUENCY, z * RIDGE_FREQUENCY).abs();

        // Cubing the absolute value flattens most of the field and leaves
        // sparse sharp spikes.
        let peak = self
            .sample(x * PEAK_FREQUENCY + PEAK_SHIFT, z * PEAK_FREQUENCY)
            .abs()
            .powi(3);

        let shaped = base * BASE_WEIGHT + ridge * RIDGE_WEIGHT + peak * PEAK_WEIGHT;
        shaped.max(ELEVATION_FLOOR)
    }
}
