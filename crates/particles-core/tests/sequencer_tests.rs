// Host-side tests for effect sequencing and the per-frame driver.

use particles_core::{
    AnimationDriver, AudioLevels, ColorMode, Command, Config, EffectSequencer, Ensemble, Error,
    NullSink, ParticleType, PointsSink, EFFECT_SEQUENCE,
};

#[derive(Default)]
struct CountingSink {
    allocations: usize,
    releases: usize,
}

impl PointsSink for CountingSink {
    fn allocate(&mut self, _count: usize) {
        self.allocations += 1;
    }
    fn upload(&mut self, _ensemble: &Ensemble) {}
    fn release(&mut self) {
        self.releases += 1;
    }
}

fn small_config() -> Config {
    Config {
        particle_count: 64,
        auto_change_effect: false,
        ..Config::default()
    }
}

fn bass(level: f32) -> AudioLevels {
    AudioLevels {
        bass: level,
        ..AudioLevels::default()
    }
}

#[test]
fn sequencer_fires_strictly_after_duration() {
    let mut seq = EffectSequencer::new(10.0, true);
    assert_eq!(seq.poll(5.0), None);
    assert_eq!(seq.poll(10.0), None);

    let first = seq.poll(10.5).unwrap();
    assert_eq!(first.particle_type, ParticleType::Vortex);
    assert_eq!(first.color_mode, ColorMode::Pulse);
    assert_eq!(first.bloom_strength, 2.0);
    assert_eq!(seq.last_change(), 10.5);

    assert_eq!(seq.poll(15.0), None);
    let second = seq.poll(20.6).unwrap();
    assert_eq!(second, EFFECT_SEQUENCE[2]);
    assert_eq!(seq.index(), 2);
}

#[test]
fn sequencer_wraps_to_first_preset() {
    let mut seq = EffectSequencer::new(1.0, true);
    for _ in 0..3 {
        seq.advance();
    }
    assert_eq!(seq.index(), 3);
    assert_eq!(seq.advance(), Some(EFFECT_SEQUENCE[0]));
    assert_eq!(seq.index(), 0);
}

#[test]
fn disabled_sequencer_never_fires() {
    let mut seq = EffectSequencer::new(1.0, false);
    assert_eq!(seq.poll(100.0), None);
    assert_eq!(seq.index(), 0);
    assert_eq!(seq.last_change(), 0.0);
}

#[test]
fn driver_switches_preset_and_rebuilds_once() {
    let config = Config {
        effect_duration: 1.0,
        auto_change_effect: true,
        ..small_config()
    };
    let mut driver = AnimationDriver::new(config, CountingSink::default(), 5).unwrap();
    for _ in 0..4 {
        driver.frame(0.25, None);
    }
    assert_eq!(driver.sequencer().index(), 0);
    assert_eq!(driver.particles().sink().releases, 0);

    let view = driver.frame(0.25, None);
    assert_eq!(driver.sequencer().index(), 1);
    assert_eq!(driver.particles().ensemble().kind, ParticleType::Vortex);
    assert_eq!(driver.particles().options().color_mode, ColorMode::Pulse);
    assert_eq!(view.bloom.strength, 2.0);
    // Radius and threshold come from the config
    assert_eq!(view.bloom.radius, 0.75);
    assert_eq!(view.bloom.threshold, 0.1);
    assert_eq!(driver.particles().sink().releases, 1);
    assert_eq!(driver.particles().sink().allocations, 2);
}

#[test]
fn bass_drives_bloom_and_camera() {
    let mut driver = AnimationDriver::new(small_config(), NullSink, 1).unwrap();
    let view = driver.frame(0.1, Some(bass(0.5)));
    assert!((view.bloom.strength - 3.0).abs() < 1e-6);
    assert!((view.camera_distance - 135.0).abs() < 1e-4);
    assert_eq!(driver.view(), view);

    // Silence restores the configured values
    let quiet = driver.frame(0.1, Some(AudioLevels::default()));
    assert_eq!(quiet.bloom.strength, 1.5);
    assert_eq!(quiet.camera_distance, 150.0);
}

#[test]
fn bass_scales_configured_bloom_after_preset_switch() {
    let config = Config {
        effect_duration: 1.0,
        auto_change_effect: true,
        ..small_config()
    };
    let mut driver = AnimationDriver::new(config, NullSink, 8).unwrap();
    let silent = driver.frame(1.5, None);
    assert_eq!(driver.sequencer().index(), 1);
    assert_eq!(silent.bloom.strength, 2.0);

    // Preset strength is not the base under audio
    let loud = driver.frame(0.01, Some(bass(0.5)));
    assert!((loud.bloom.strength - 3.0).abs() < 1e-6, "{}", loud.bloom.strength);

    // Audio lost: the preset strength is back
    let after = driver.frame(0.01, None);
    assert_eq!(after.bloom.strength, 2.0);
}

#[test]
fn audio_rotation_replaces_auto_rotate() {
    let mut driver = AnimationDriver::new(small_config(), NullSink, 1).unwrap();
    let levels = AudioLevels {
        mid: 1.0,
        treble: 0.5,
        ..AudioLevels::default()
    };
    driver.frame(0.5, Some(levels));
    let rotation = driver.particles().ensemble().rotation;
    // Ensemble spin 0.05 plus audio spin 0.5 * 0.2 * 2
    assert!((rotation.y - 0.25).abs() < 1e-6);
    assert!((rotation.x - 0.025).abs() < 1e-6);
    assert!((rotation.z - 0.025).abs() < 1e-6);
}

#[test]
fn auto_rotate_without_audio_tilts_on_a_sine() {
    let mut driver = AnimationDriver::new(small_config(), NullSink, 1).unwrap();
    let view = driver.frame(0.5, None);
    let rotation = driver.particles().ensemble().rotation;
    assert!((rotation.y - 0.15).abs() < 1e-6);
    assert!((rotation.x - (0.05_f32).sin() * 0.2).abs() < 1e-6);
    assert_eq!(view.camera_distance, 150.0);
    assert_eq!(view.bloom.strength, 1.5);
}

#[test]
fn levels_are_ignored_when_not_audio_reactive() {
    let config = Config {
        audio_reactive: false,
        auto_rotate: false,
        ..small_config()
    };
    let mut driver = AnimationDriver::new(config, NullSink, 1).unwrap();
    let view = driver.frame(0.5, Some(bass(1.0)));
    assert_eq!(view.camera_distance, 150.0);
    assert_eq!(view.bloom.strength, 1.5);
    let rotation = driver.particles().ensemble().rotation;
    assert_eq!(rotation.x, 0.0);
    assert!((rotation.y - 0.05).abs() < 1e-6);
}

#[test]
fn disabled_audio_stays_disabled() {
    let mut driver = AnimationDriver::new(small_config(), NullSink, 1).unwrap();
    assert!(driver.audio_reactive());
    driver.disable_audio();
    assert!(!driver.audio_reactive());
    driver.apply(Command::ToggleAudio);
    assert!(!driver.audio_reactive());

    let view = driver.frame(0.1, Some(bass(1.0)));
    assert_eq!(view.camera_distance, 150.0);
}

#[test]
fn audio_toggle_flips_when_input_is_available() {
    let mut driver = AnimationDriver::new(small_config(), NullSink, 1).unwrap();
    driver.apply(Command::ToggleAudio);
    assert!(!driver.audio_reactive());
    driver.apply(Command::ToggleAudio);
    assert!(driver.audio_reactive());
}

#[test]
fn manual_commands_update_system_and_config() {
    let mut driver = AnimationDriver::new(small_config(), CountingSink::default(), 2).unwrap();

    driver.apply(Command::SetParticleType(ParticleType::Grid));
    assert_eq!(driver.particles().ensemble().kind, ParticleType::Grid);
    assert_eq!(driver.config().particle_type, ParticleType::Grid);
    assert_eq!(driver.particles().sink().releases, 1);

    driver.apply(Command::SetColorMode(ColorMode::Random));
    assert_eq!(driver.particles().options().color_mode, ColorMode::Random);
    assert_eq!(driver.config().color_mode, ColorMode::Random);

    driver.apply(Command::ToggleAutoRotate);
    assert!(!driver.config().auto_rotate);
}

#[test]
fn next_effect_restarts_the_timer() {
    let config = Config {
        effect_duration: 1.0,
        auto_change_effect: true,
        ..small_config()
    };
    let mut driver = AnimationDriver::new(config, NullSink, 3).unwrap();
    driver.frame(0.75, None);
    driver.apply(Command::NextEffect);
    assert_eq!(driver.sequencer().index(), 1);
    assert_eq!(driver.sequencer().last_change(), 0.75);
    assert_eq!(driver.particles().bloom().strength, 2.0);

    // 1.5 - 0.75 is under the duration: no automatic change yet
    driver.frame(0.75, None);
    assert_eq!(driver.sequencer().index(), 1);
}

#[test]
fn toggling_auto_change_does_not_fire_immediately() {
    let config = Config {
        effect_duration: 1.0,
        ..small_config()
    };
    let mut driver = AnimationDriver::new(config, NullSink, 3).unwrap();
    driver.frame(5.0, None);
    assert_eq!(driver.sequencer().index(), 0);

    driver.apply(Command::ToggleAutoChange);
    assert!(driver.config().auto_change_effect);
    assert!(driver.sequencer().enabled);
    driver.frame(0.5, None);
    assert_eq!(driver.sequencer().index(), 0);
    driver.frame(0.75, None);
    assert_eq!(driver.sequencer().index(), 1);
}

#[test]
fn dispose_hands_back_released_sink() {
    let driver = AnimationDriver::new(small_config(), CountingSink::default(), 4).unwrap();
    let sink = driver.dispose();
    assert_eq!(sink.allocations, 1);
    assert_eq!(sink.releases, 1);
}

#[test]
fn invalid_config_is_rejected() {
    let zero = Config {
        particle_count: 0,
        ..Config::default()
    };
    assert!(matches!(
        AnimationDriver::new(zero, NullSink, 0),
        Err(Error::ZeroParticleCount)
    ));

    let no_duration = Config {
        effect_duration: 0.0,
        ..small_config()
    };
    assert!(matches!(
        AnimationDriver::new(no_duration, NullSink, 0),
        Err(Error::NotPositive {
            name: "effectDuration",
            ..
        })
    ));
}
