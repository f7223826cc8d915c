// Host-side tests for the pure math/color helpers.

use glam::Vec3;
use particles_core::constants::HDR_PALETTE;
use particles_core::utils::*;
use particles_core::Error;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

// Hue in degrees recovered from a packed color.
fn hue_of(packed: u32) -> f32 {
    let c = hex_to_rgb(packed);
    let max = c.max_element();
    let min = c.min_element();
    let d = max - min;
    if d == 0.0 {
        0.0
    } else if max == c.x {
        60.0 * ((c.y - c.z) / d).rem_euclid(6.0)
    } else if max == c.y {
        60.0 * ((c.z - c.x) / d + 2.0)
    } else {
        60.0 * ((c.x - c.y) / d + 4.0)
    }
}

#[test]
fn hsl_to_hex_hits_primaries() {
    assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), 0xFF0000);
    assert_eq!(hsl_to_hex(120.0, 100.0, 50.0), 0x00FF00);
    assert_eq!(hsl_to_hex(240.0, 100.0, 50.0), 0x0000FF);
}

#[test]
fn hsl_to_hex_handles_secondaries_and_grey() {
    assert_eq!(hsl_to_hex(60.0, 100.0, 50.0), 0xFFFF00);
    assert_eq!(hsl_to_hex(180.0, 100.0, 50.0), 0x00FFFF);
    assert_eq!(hsl_to_hex(300.0, 100.0, 50.0), 0xFF00FF);
    assert_eq!(hsl_to_hex(200.0, 0.0, 100.0), 0xFFFFFF);
    assert_eq!(hsl_to_hex(200.0, 0.0, 0.0), 0x000000);
}

#[test]
fn hsl_to_rgb_stays_in_unit_range() {
    for step in 0..=720 {
        let h = step as f32 * 0.5;
        let c = hsl_to_rgb(h, 1.0, 0.5);
        assert!(c.cmpge(Vec3::ZERO).all() && c.cmple(Vec3::ONE).all(), "h={h} -> {c:?}");
    }
}

#[test]
fn random_sphere_point_lies_on_surface() {
    let mut rng = rng();
    for radius in [0.5_f32, 1.0, 75.0] {
        for _ in 0..1000 {
            let p = random_sphere_point(&mut rng, radius);
            assert!(
                (p.length() - radius).abs() <= radius * 1e-4,
                "|{p:?}| != {radius}"
            );
        }
    }
}

#[test]
fn palette_hue_is_monotonic_and_wraps() {
    let total = 12;
    let mut prev = -1.0;
    for i in 0..total {
        let hue = hue_of(color_from_palette(i, total));
        assert!(hue > prev, "hue not increasing at index {i}: {hue} <= {prev}");
        prev = hue;
    }
    assert_eq!(color_from_palette(0, total), color_from_palette(total, total));
    assert_eq!(color_from_palette(0, total), 0xFF0000);
}

#[test]
fn map_remaps_linearly() {
    assert_eq!(map(5.0, 0.0, 10.0, 0.0, 100.0).unwrap(), 50.0);
    assert_eq!(map(0.0, -1.0, 1.0, 10.0, 20.0).unwrap(), 15.0);
    // Reversed output range
    assert_eq!(map(2.5, 0.0, 10.0, 1.0, 0.0).unwrap(), 0.75);
}

#[test]
fn map_rejects_empty_input_range() {
    assert_eq!(map(1.0, 3.0, 3.0, 0.0, 1.0), Err(Error::DegenerateRange(3.0)));
}

#[test]
fn lerp_endpoints_and_midpoint() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
}

#[test]
fn random_helpers_respect_their_ranges() {
    let mut rng = rng();
    for _ in 0..2000 {
        let v = random(&mut rng, -3.0, 2.0);
        assert!((-3.0..2.0).contains(&v));
        assert!(random_color(&mut rng) < 1 << 24);
        assert!(HDR_PALETTE.contains(&hdr_color(&mut rng)));
    }
    assert_eq!(random(&mut rng, 4.0, 4.0), 4.0);
}

#[test]
fn hdr_color_eventually_uses_whole_palette() {
    let mut rng = rng();
    let mut seen = [false; 7];
    for _ in 0..500 {
        let c = hdr_color(&mut rng);
        let idx = HDR_PALETTE.iter().position(|&p| p == c).unwrap();
        seen[idx] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn hex_to_rgb_unpacks_channels() {
    assert_eq!(hex_to_rgb(0xFF0000), Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(hex_to_rgb(0x00FF00), Vec3::new(0.0, 1.0, 0.0));
    let c = hex_to_rgb(0x336699);
    assert!((c.x - 0.2).abs() < 1e-6);
    assert!((c.y - 0.4).abs() < 1e-6);
    assert!((c.z - 0.6).abs() < 1e-6);
}

#[test]
fn pulse_stays_between_bounds() {
    for ms in (0..10_000).step_by(37) {
        let v = pulse(2.0, 5.0, 3.0, ms as f64);
        assert!((2.0..=5.0).contains(&v), "pulse({ms}) = {v}");
    }
    assert!((pulse(2.0, 5.0, 3.0, 0.0) - 3.5).abs() < 1e-6);
}
