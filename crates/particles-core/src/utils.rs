//! Small math and color helpers.
//!
//! Everything here is a pure function. Random helpers take the generator
//! explicitly so callers decide how randomness is seeded and shared.

use crate::constants::{HDR_PALETTE, PACKED_RGB_RANGE};
use crate::error::{Error, Result};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Uniform packed `0xRRGGBB` value.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(0..PACKED_RGB_RANGE)
}

/// One of the seven saturated palette colors, chosen uniformly.
pub fn hdr_color<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    HDR_PALETTE[rng.gen_range(0..HDR_PALETTE.len())]
}

/// Uniform float in `[min, max)`. An empty range yields `min`.
#[inline]
pub fn random<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    rng.gen::<f32>() * (max - min) + min
}

/// Uniform point on the surface of a sphere centred at the origin.
pub fn random_sphere_point<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    let u: f32 = rng.gen();
    let v: f32 = rng.gen();
    let theta = TAU * u;
    let phi = (2.0 * v - 1.0).clamp(-1.0, 1.0).acos();
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

/// Linear remap of `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
pub fn map(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> Result<f32> {
    if in_min == in_max {
        return Err(Error::DegenerateRange(in_min));
    }
    Ok((value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Oscillates between `min` and `max`; `speed` is in radians per second of `now_ms`.
pub fn pulse(min: f32, max: f32, speed: f32, now_ms: f64) -> f32 {
    let wave = ((now_ms * speed as f64 * 0.001).sin() * 0.5 + 0.5) as f32;
    min + wave * (max - min)
}

/// Evenly spaced hue for `index` out of `total`, full saturation, mid lightness.
pub fn color_from_palette(index: usize, total: usize) -> u32 {
    let hue = if total == 0 {
        0.0
    } else {
        index as f32 / total as f32 * 360.0
    };
    hsl_to_hex(hue, 100.0, 50.0)
}

/// HSL to unrounded RGB. `h` in degrees, `s` and `l` in `[0, 1]`.
///
/// Hues outside `[0, 360)` land in the last sector, so 360 maps back to red.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Vec3 {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;
    let (r, g, b) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };
    Vec3::new(r + m, g + m, b + m).clamp(Vec3::ZERO, Vec3::ONE)
}

/// HSL to packed `0xRRGGBB`. `h` in degrees, `s` and `l` in percent.
pub fn hsl_to_hex(h: f32, s: f32, l: f32) -> u32 {
    let rgb = hsl_to_rgb(h, s / 100.0, l / 100.0);
    let r = (rgb.x * 255.0).round() as u32;
    let g = (rgb.y * 255.0).round() as u32;
    let b = (rgb.z * 255.0).round() as u32;
    (r << 16) | (g << 8) | b
}

/// Unpack `0xRRGGBB` into components in `[0, 1]`.
#[inline]
pub fn hex_to_rgb(packed: u32) -> Vec3 {
    Vec3::new(
        ((packed >> 16) & 0xFF) as f32 / 255.0,
        ((packed >> 8) & 0xFF) as f32 / 255.0,
        (packed & 0xFF) as f32 / 255.0,
    )
}
