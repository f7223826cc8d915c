use crate::color::ColorMode;
use crate::distribution::ParticleType;

/// Manual actions available to the frontend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    SetParticleType(ParticleType),
    SetColorMode(ColorMode),
    NextEffect,
    ToggleAutoChange,
    ToggleAutoRotate,
    ToggleAudio,
}

#[inline]
pub fn command_for_key(key: &str) -> Option<Command> {
    let cmd = match key {
        "1" => Command::SetParticleType(ParticleType::Sphere),
        "2" => Command::SetParticleType(ParticleType::Explosion),
        "3" => Command::SetParticleType(ParticleType::Vortex),
        "4" => Command::SetParticleType(ParticleType::Grid),
        "r" | "R" => Command::SetColorMode(ColorMode::Rainbow),
        "p" | "P" => Command::SetColorMode(ColorMode::Pulse),
        "x" | "X" => Command::SetColorMode(ColorMode::Random),
        "n" | "N" | " " => Command::NextEffect,
        "a" | "A" => Command::ToggleAutoChange,
        "o" | "O" => Command::ToggleAutoRotate,
        "m" | "M" => Command::ToggleAudio,
        _ => return None,
    };
    Some(cmd)
}
