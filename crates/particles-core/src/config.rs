//! Configuration surface.
//!
//! `Config` is the application-level option block; `ParticleOptions` is the
//! subset the particle system itself needs. Both deserialize from partial
//! camelCase JSON objects, missing keys keeping their defaults.

use crate::color::ColorMode;
use crate::constants::DEFAULT_EFFECT_DURATION_SEC;
use crate::distribution::ParticleType;
use crate::error::{ensure_non_negative, ensure_positive, Error, Result};
use crate::state::BloomParams;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub particle_count: usize,
    pub particle_size: f32,
    pub max_distance: f32,
    pub speed: f32,
    pub color_mode: ColorMode,
    pub particle_type: ParticleType,
    pub bloom_strength: f32,
    pub bloom_radius: f32,
    pub bloom_threshold: f32,
    pub camera_distance: f32,
    pub auto_rotate: bool,
    pub auto_change_effect: bool,
    /// Seconds between automatic effect changes.
    pub effect_duration: f32,
    pub audio_reactive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            particle_count: 20_000,
            particle_size: 0.05,
            max_distance: 150.0,
            speed: 1.0,
            color_mode: ColorMode::Pulse,
            particle_type: ParticleType::Vortex,
            bloom_strength: 1.5,
            bloom_radius: 0.75,
            bloom_threshold: 0.1,
            camera_distance: 150.0,
            auto_rotate: true,
            auto_change_effect: true,
            effect_duration: DEFAULT_EFFECT_DURATION_SEC,
            audio_reactive: true,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.particle_options().validate()?;
        ensure_positive("effectDuration", self.effect_duration)?;
        ensure_positive("cameraDistance", self.camera_distance)?;
        self.bloom().validate()
    }

    pub fn particle_options(&self) -> ParticleOptions {
        ParticleOptions {
            count: self.particle_count,
            size: self.particle_size,
            max_distance: self.max_distance,
            speed: self.speed,
            color_mode: self.color_mode,
            particle_type: self.particle_type,
        }
    }

    pub fn bloom(&self) -> BloomParams {
        BloomParams {
            strength: self.bloom_strength,
            radius: self.bloom_radius,
            threshold: self.bloom_threshold,
        }
    }
}

/// Options owned by a `ParticleSystem`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticleOptions {
    pub count: usize,
    /// Base size; spawn sizes are drawn from `[0, 2 * size)`.
    pub size: f32,
    /// Boundary radius around the origin.
    pub max_distance: f32,
    pub speed: f32,
    pub color_mode: ColorMode,
    pub particle_type: ParticleType,
}

impl Default for ParticleOptions {
    fn default() -> Self {
        Self {
            count: 10_000,
            size: 0.5,
            max_distance: 100.0,
            speed: 0.01,
            color_mode: ColorMode::Rainbow,
            particle_type: ParticleType::Sphere,
        }
    }
}

impl ParticleOptions {
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(Error::ZeroParticleCount);
        }
        ensure_positive("particleSize", self.size)?;
        ensure_positive("maxDistance", self.max_distance)?;
        ensure_non_negative("speed", self.speed)
    }
}

impl BloomParams {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("bloomStrength", self.strength)?;
        ensure_non_negative("bloomRadius", self.radius)?;
        ensure_non_negative("bloomThreshold", self.threshold)
    }
}
