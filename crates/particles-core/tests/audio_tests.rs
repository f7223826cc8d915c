// Host-side tests for spectrum band extraction and audio modulation.

use particles_core::audio::{BASS_BINS, FFT_SIZE, MID_BINS, TREBLE_BINS};
use particles_core::AudioLevels;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

fn spectrum_with(bins: &[usize]) -> Vec<u8> {
    let mut spectrum = vec![0u8; (FFT_SIZE / 2) as usize];
    for &i in bins {
        spectrum[i] = 255;
    }
    spectrum
}

#[test]
fn bands_fit_inside_the_analyser_output() {
    let bins = (FFT_SIZE / 2) as usize;
    assert!(*TREBLE_BINS.end() < bins);
    assert_eq!(*BASS_BINS.end() + 1, *MID_BINS.start());
    assert_eq!(*MID_BINS.end() + 1, *TREBLE_BINS.start());
}

#[test]
fn full_scale_spectrum_saturates_every_band() {
    let levels = AudioLevels::from_byte_spectrum(&[255; 128]);
    assert_eq!(levels.bass, 1.0);
    assert_eq!(levels.mid, 1.0);
    assert_eq!(levels.treble, 1.0);
    assert_eq!(levels.average, 1.0);
}

#[test]
fn silence_is_zero() {
    assert_eq!(AudioLevels::from_byte_spectrum(&[0; 128]), AudioLevels::default());
    assert_eq!(AudioLevels::from_byte_spectrum(&[]), AudioLevels::default());
}

#[test]
fn band_edges_are_inclusive() {
    let levels = AudioLevels::from_byte_spectrum(&spectrum_with(&[5]));
    assert!(approx(levels.bass, 1.0 / 6.0));
    assert_eq!(levels.mid, 0.0);

    let levels = AudioLevels::from_byte_spectrum(&spectrum_with(&[6, 20]));
    assert_eq!(levels.bass, 0.0);
    assert!(approx(levels.mid, 2.0 / 15.0));

    let levels = AudioLevels::from_byte_spectrum(&spectrum_with(&[21, 50, 51]));
    assert!(approx(levels.treble, 2.0 / 30.0));
}

#[test]
fn short_spectrum_counts_missing_bins_as_silence() {
    let levels = AudioLevels::from_byte_spectrum(&[255; 10]);
    assert_eq!(levels.bass, 1.0);
    assert!(approx(levels.mid, 4.0 / 15.0));
    assert_eq!(levels.treble, 0.0);
}

#[test]
fn modulation_follows_bands() {
    let levels = AudioLevels {
        bass: 1.0,
        mid: 0.5,
        treble: 0.25,
        average: 0.0,
    };
    assert!(approx(levels.bloom_strength(1.5), 4.5));
    assert!(approx(levels.camera_distance(100.0), 80.0));
    let d = levels.rotation_delta(1.0);
    assert!(approx(d.x, 0.025));
    assert!(approx(d.y, 0.3));
    assert_eq!(d.z, 0.0);
}
