//! Audio levels and how they modulate the scene.
//!
//! The frontend samples an analyser into a byte spectrum; everything after
//! that point is plain math and lives here so it can be tested on the host.

use crate::constants::*;
use glam::Vec3;
use std::ops::RangeInclusive;

/// Analyser FFT size; yields `FFT_SIZE / 2` frequency bins.
pub const FFT_SIZE: u32 = 256;
pub const BASS_BINS: RangeInclusive<usize> = 0..=5;
pub const MID_BINS: RangeInclusive<usize> = 6..=20;
pub const TREBLE_BINS: RangeInclusive<usize> = 21..=50;

/// Normalized band energies, each in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AudioLevels {
    pub bass: f32,
    pub mid: f32,
    pub treble: f32,
    pub average: f32,
}

impl AudioLevels {
    /// Average byte magnitudes over the fixed bands. Missing bins count as silence.
    pub fn from_byte_spectrum(spectrum: &[u8]) -> Self {
        let bass = band_average(spectrum, BASS_BINS);
        let mid = band_average(spectrum, MID_BINS);
        let treble = band_average(spectrum, TREBLE_BINS);
        Self {
            bass,
            mid,
            treble,
            average: (bass + mid + treble) / 3.0,
        }
    }

    pub fn bloom_strength(&self, base: f32) -> f32 {
        base * (1.0 + self.bass * AUDIO_BLOOM_BASS_GAIN)
    }

    /// Bass pulls the camera towards the ensemble.
    pub fn camera_distance(&self, base: f32) -> f32 {
        base * (1.0 - self.bass * AUDIO_CAMERA_BASS_PULL)
    }

    /// Rotation increment for one frame: mids speed up the spin, treble tilts.
    pub fn rotation_delta(&self, delta: f32) -> Vec3 {
        Vec3::new(
            delta * AUDIO_TILT_X * self.treble,
            delta * AUTO_SPIN_Y * (1.0 + self.mid),
            0.0,
        )
    }
}

fn band_average(spectrum: &[u8], bins: RangeInclusive<usize>) -> f32 {
    let width = (bins.end() - bins.start() + 1) as f32;
    let sum: u32 = bins
        .map(|i| spectrum.get(i).copied().unwrap_or(0) as u32)
        .sum();
    sum as f32 / width / 255.0
}
