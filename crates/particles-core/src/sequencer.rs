//! Effect sequencing and the per-frame animation driver.

use crate::audio::AudioLevels;
use crate::color::ColorMode;
use crate::config::Config;
use crate::constants::*;
use crate::controls::Command;
use crate::distribution::ParticleType;
use crate::error::Result;
use crate::particles::{NullSink, ParticleSystem, PointsSink};
use crate::state::ViewState;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectPreset {
    pub particle_type: ParticleType,
    pub color_mode: ColorMode,
    pub bloom_strength: f32,
}

pub const EFFECT_SEQUENCE: [EffectPreset; 4] = [
    EffectPreset {
        particle_type: ParticleType::Sphere,
        color_mode: ColorMode::Rainbow,
        bloom_strength: 1.5,
    },
    EffectPreset {
        particle_type: ParticleType::Vortex,
        color_mode: ColorMode::Pulse,
        bloom_strength: 2.0,
    },
    EffectPreset {
        particle_type: ParticleType::Explosion,
        color_mode: ColorMode::Random,
        bloom_strength: 2.5,
    },
    EffectPreset {
        particle_type: ParticleType::Grid,
        color_mode: ColorMode::Rainbow,
        bloom_strength: 1.8,
    },
];

/// Cycles through a fixed preset list on a timer.
#[derive(Clone, Debug)]
pub struct EffectSequencer {
    presets: &'static [EffectPreset],
    index: usize,
    last_change: f32,
    duration: f32,
    pub enabled: bool,
}

impl EffectSequencer {
    pub fn new(duration: f32, enabled: bool) -> Self {
        Self::with_presets(&EFFECT_SEQUENCE, duration, enabled)
    }

    pub fn with_presets(presets: &'static [EffectPreset], duration: f32, enabled: bool) -> Self {
        Self {
            presets,
            index: 0,
            last_change: 0.0,
            duration,
            enabled,
        }
    }

    /// Next preset once more than `duration` seconds have passed since the last change.
    pub fn poll(&mut self, elapsed: f32) -> Option<EffectPreset> {
        if !self.enabled || elapsed - self.last_change <= self.duration {
            return None;
        }
        self.last_change = elapsed;
        self.advance()
    }

    /// Step to the next preset (wrapping) regardless of the timer.
    pub fn advance(&mut self) -> Option<EffectPreset> {
        if self.presets.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.presets.len();
        Some(self.presets[self.index])
    }

    /// Restart the timer, e.g. after a manual change.
    pub fn mark(&mut self, elapsed: f32) {
        self.last_change = elapsed;
    }

    pub fn index(&self) -> usize {
        self.index
    }
    pub fn last_change(&self) -> f32 {
        self.last_change
    }
    pub fn duration(&self) -> f32 {
        self.duration
    }
}

/// Drives a `ParticleSystem` once per display frame.
pub struct AnimationDriver<S: PointsSink = NullSink> {
    config: Config,
    particles: ParticleSystem<S>,
    sequencer: EffectSequencer,
    elapsed: f32,
    audio_failed: bool,
    view: ViewState,
}

impl<S: PointsSink> AnimationDriver<S> {
    pub fn new(config: Config, sink: S, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut particles = ParticleSystem::new(config.particle_options(), sink, seed)?;
        let bloom = config.bloom();
        particles.set_bloom_params(bloom.strength, bloom.radius, bloom.threshold);
        let sequencer = EffectSequencer::new(config.effect_duration, config.auto_change_effect);
        let view = ViewState {
            bloom,
            camera_distance: config.camera_distance,
        };
        Ok(Self {
            config,
            particles,
            sequencer,
            elapsed: 0.0,
            audio_failed: false,
            view,
        })
    }

    /// Advance one frame. `audio` is `None` until a live input is available.
    pub fn frame(&mut self, delta: f32, audio: Option<AudioLevels>) -> ViewState {
        self.elapsed += delta;
        self.particles.update(delta, self.elapsed);

        let levels = audio.filter(|_| self.config.audio_reactive);
        match levels {
            Some(levels) => {
                *self.particles.rotation_mut() += levels.rotation_delta(delta);
            }
            None if self.config.auto_rotate => {
                let elapsed = self.elapsed;
                let rotation = self.particles.rotation_mut();
                rotation.y += delta * AUTO_SPIN_Y;
                rotation.x = (elapsed * AUTO_TILT_RATE).sin() * AUTO_TILT_AMPLITUDE;
            }
            None => {}
        }

        if let Some(preset) = self.sequencer.poll(self.elapsed) {
            self.apply_preset(preset);
        }

        let mut view = ViewState {
            bloom: self.particles.bloom(),
            camera_distance: self.config.camera_distance,
        };
        // Bass scales the configured strength; presets only hold while silent
        if let Some(levels) = levels {
            view.bloom.strength = levels.bloom_strength(self.config.bloom_strength);
            view.camera_distance = levels.camera_distance(self.config.camera_distance);
        }
        self.view = view;
        view
    }

    fn apply_preset(&mut self, preset: EffectPreset) {
        self.particles.change_particle_type(preset.particle_type);
        self.particles.change_color_mode(preset.color_mode);
        let bloom = self.particles.bloom();
        self.particles
            .set_bloom_params(preset.bloom_strength, bloom.radius, bloom.threshold);
        log::info!(
            "[effect] changed to: {}, {}",
            preset.particle_type,
            preset.color_mode
        );
    }

    /// Jump to the next preset now and restart the effect timer.
    pub fn next_effect(&mut self) {
        if let Some(preset) = self.sequencer.advance() {
            self.sequencer.mark(self.elapsed);
            self.apply_preset(preset);
        }
    }

    pub fn set_particle_type(&mut self, kind: ParticleType) {
        self.config.particle_type = kind;
        self.particles.change_particle_type(kind);
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.config.color_mode = mode;
        self.particles.change_color_mode(mode);
    }

    /// Audio input could not be acquired; stay non-reactive for the session.
    pub fn disable_audio(&mut self) {
        if !self.audio_failed {
            log::warn!("[audio] reactivity disabled for this session");
        }
        self.audio_failed = true;
        self.config.audio_reactive = false;
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SetParticleType(kind) => self.set_particle_type(kind),
            Command::SetColorMode(mode) => self.set_color_mode(mode),
            Command::NextEffect => self.next_effect(),
            Command::ToggleAutoChange => {
                self.config.auto_change_effect = !self.config.auto_change_effect;
                self.sequencer.enabled = self.config.auto_change_effect;
                // Do not fire immediately for the time spent disabled
                self.sequencer.mark(self.elapsed);
            }
            Command::ToggleAutoRotate => self.config.auto_rotate = !self.config.auto_rotate,
            Command::ToggleAudio => {
                if self.audio_failed {
                    log::warn!("[audio] no input available; ignoring toggle");
                } else {
                    self.config.audio_reactive = !self.config.audio_reactive;
                }
            }
        }
        log::info!("[controls] {:?}", command);
    }

    /// Release the ensemble's render resources and hand the sink back.
    pub fn dispose(self) -> S {
        self.particles.dispose()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn particles(&self) -> &ParticleSystem<S> {
        &self.particles
    }
    pub fn particles_mut(&mut self) -> &mut ParticleSystem<S> {
        &mut self.particles
    }
    pub fn sequencer(&self) -> &EffectSequencer {
        &self.sequencer
    }
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
    pub fn view(&self) -> ViewState {
        self.view
    }
    pub fn audio_reactive(&self) -> bool {
        self.config.audio_reactive
    }
}
