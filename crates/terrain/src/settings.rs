//! Runtime terrain parameters.
//!
//! `TerrainSettings` is the narrow configuration surface the rest of the app
//! talks to: keyboard controls and the egui panel both go through the
//! clamping setters, so the core never sees an out-of-range scroll speed or
//! roughness. The resource is serde-serializable so a settings file can
//! override the defaults at startup (`sanitize` re-clamps whatever was read).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{
    DEFAULT_HEIGHT_SCALE, DEFAULT_OCTAVES, DEFAULT_ROUGHNESS, DEFAULT_SCROLL_SPEED, DEFAULT_SEED,
    HEIGHT_SCALE_RANGE, OCTAVES_RANGE, ROUGHNESS_RANGE, SCROLL_SPEED_RANGE,
};

/// Invalid-configuration signal raised at construction time. These are
/// programmer-error preconditions (degenerate segment spacing and the like),
/// not runtime-recoverable states.
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("segment count must be at least 2, got {0}")]
    SegmentCount(usize),
    #[error("segment depth must be positive, got {0}")]
    SegmentDepth(f32),
    #[error("segment width must be positive, got {0}")]
    SegmentWidth(f32),
    #[error("grid resolution must be at least 2 vertices per side, got {0}")]
    GridResolution(usize),
}

/// Player-adjustable terrain parameters, read by the core at the start of
/// each frame.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct TerrainSettings {
    scroll_speed: f32,
    height_scale: f32,
    roughness: f32,
    octaves: u32,
    seed: u64,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            scroll_speed: DEFAULT_SCROLL_SPEED,
            height_scale: DEFAULT_HEIGHT_SCALE,
            roughness: DEFAULT_ROUGHNESS,
            octaves: DEFAULT_OCTAVES,
            seed: DEFAULT_SEED,
        }
    }
}

impl TerrainSettings {
    /// World units the terrain advances per second.
    pub fn scroll_speed(&self) -> f32 {
        self.scroll_speed
    }

    /// World-space height that a normalized elevation of 1.0 maps to.
    pub fn height_scale(&self) -> f32 {
        self.height_scale
    }

    /// Amplitude decay ratio between successive noise octaves.
    pub fn roughness(&self) -> f32 {
        self.roughness
    }

    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn set_scroll_speed(&mut self, speed: f32) {
        self.scroll_speed = speed.clamp(*SCROLL_SPEED_RANGE.start(), *SCROLL_SPEED_RANGE.end());
    }

    pub fn set_height_scale(&mut self, scale: f32) {
        self.height_scale = scale.clamp(*HEIGHT_SCALE_RANGE.start(), *HEIGHT_SCALE_RANGE.end());
    }

    pub fn set_roughness(&mut self, roughness: f32) {
        self.roughness = roughness.clamp(*ROUGHNESS_RANGE.start(), *ROUGHNESS_RANGE.end());
    }

    pub fn set_octaves(&mut self, octaves: u32) {
        self.octaves = octaves.clamp(*OCTAVES_RANGE.start(), *OCTAVES_RANGE.end());
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    /// Re-clamp every field. Deserialized settings go through this before
    /// they are inserted as a resource.
    pub fn sanitize(&mut self) {
        self.set_scroll_speed(self.scroll_speed);
        self.set_height_scale(self.height_scale);
        self.set_roughness(self.roughness);
        self.set_octaves(self.octaves);
    }
}
