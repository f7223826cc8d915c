//! Error type shared by configuration, construction and the math helpers.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("particle count must be greater than zero")]
    ZeroParticleCount,
    #[error("`{name}` must be greater than zero (got {value})")]
    NotPositive { name: &'static str, value: f32 },
    #[error("`{name}` must not be negative (got {value})")]
    Negative { name: &'static str, value: f32 },
    #[error("input range is empty: min and max are both {0}")]
    DegenerateRange(f32),
    #[error("unknown particle type `{0}` (expected sphere, explosion, vortex or grid)")]
    UnknownParticleType(String),
    #[error("unknown color mode `{0}` (expected rainbow, pulse or random)")]
    UnknownColorMode(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn ensure_positive(name: &'static str, value: f32) -> Result<()> {
    // NaN fails this comparison as well
    if value > 0.0 {
        Ok(())
    } else {
        Err(Error::NotPositive { name, value })
    }
}

pub(crate) fn ensure_non_negative(name: &'static str, value: f32) -> Result<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(Error::Negative { name, value })
    }
}
