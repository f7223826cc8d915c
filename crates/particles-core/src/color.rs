use crate::constants::{HUE_SWEEP_PHASE_STEP, HUE_SWEEP_RATE};
use crate::error::Error;
use crate::utils;
use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coloring policy applied at spawn time, on boundary events and per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Rainbow,
    Pulse,
    Random,
}

impl ColorMode {
    pub const ALL: [ColorMode; 3] = [ColorMode::Rainbow, ColorMode::Pulse, ColorMode::Random];

    pub fn name(self) -> &'static str {
        match self {
            ColorMode::Rainbow => "rainbow",
            ColorMode::Pulse => "pulse",
            ColorMode::Random => "random",
        }
    }

    pub fn initial_color<R: Rng + ?Sized>(self, index: usize, count: usize, rng: &mut R) -> Vec3 {
        let packed = match self {
            ColorMode::Rainbow => utils::color_from_palette(index, count),
            ColorMode::Pulse => utils::hdr_color(rng),
            ColorMode::Random => utils::random_color(rng),
        };
        utils::hex_to_rgb(packed)
    }

    /// Fresh color for a particle that just crossed the boundary, if the mode recolors.
    pub fn boundary_color<R: Rng + ?Sized>(self, rng: &mut R) -> Option<Vec3> {
        match self {
            ColorMode::Rainbow => None,
            ColorMode::Pulse => Some(utils::hex_to_rgb(utils::hdr_color(rng))),
            ColorMode::Random => Some(utils::hex_to_rgb(utils::random_color(rng))),
        }
    }

    /// Per-frame color override; only the pulse mode sweeps hues continuously.
    pub fn sweep_color(self, elapsed: f32, index: usize) -> Option<Vec3> {
        match self {
            ColorMode::Pulse => Some(utils::hsl_to_rgb(
                sweep_hue(elapsed, index) * 360.0,
                1.0,
                0.5,
            )),
            ColorMode::Rainbow | ColorMode::Random => None,
        }
    }
}

/// Hue in turns, `[0, 1)`, travelling across the ensemble over time.
#[inline]
pub fn sweep_hue(elapsed: f32, index: usize) -> f32 {
    let hue = (elapsed * HUE_SWEEP_RATE + index as f32 * HUE_SWEEP_PHASE_STEP).rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if hue >= 1.0 {
        0.0
    } else {
        hue
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorMode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownColorMode(s.to_string()))
    }
}
