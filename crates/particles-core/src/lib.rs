pub mod audio;
pub mod color;
pub mod config;
pub mod constants;
pub mod controls;
pub mod distribution;
pub mod error;
pub mod particles;
pub mod sequencer;
pub mod state;
pub mod utils;

pub use audio::AudioLevels;
pub use color::ColorMode;
pub use config::{Config, ParticleOptions};
pub use controls::{command_for_key, Command};
pub use distribution::ParticleType;
pub use error::{Error, Result};
pub use particles::{Ensemble, NullSink, ParticleSystem, ParticleVertex, PointsSink};
pub use sequencer::{AnimationDriver, EffectPreset, EffectSequencer, EFFECT_SEQUENCE};
pub use state::*;
