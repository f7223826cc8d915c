//! Spatial distributions: where particles start, how they move initially,
//! and how they behave at the boundary.

use crate::constants::*;
use crate::error::Error;
use crate::utils;
use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleType {
    #[default]
    Sphere,
    Explosion,
    Vortex,
    Grid,
}

impl ParticleType {
    pub const ALL: [ParticleType; 4] = [
        ParticleType::Sphere,
        ParticleType::Explosion,
        ParticleType::Vortex,
        ParticleType::Grid,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ParticleType::Sphere => "sphere",
            ParticleType::Explosion => "explosion",
            ParticleType::Vortex => "vortex",
            ParticleType::Grid => "grid",
        }
    }

    /// Explosion particles restart from the origin; everything else bounces.
    #[inline]
    pub fn respawns_at_origin(self) -> bool {
        matches!(self, ParticleType::Explosion)
    }
}

impl fmt::Display for ParticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParticleType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParticleType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownParticleType(s.to_string()))
    }
}

/// Initial kinematic state of one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spawn {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// Resolved generator for one ensemble build.
///
/// Built once per ensemble so per-particle spawning is a plain `match` with
/// all derived quantities (lattice side, spacing) precomputed.
#[derive(Clone, Debug)]
pub struct Layout {
    pub kind: ParticleType,
    pub max_distance: f32,
    pub speed: f32,
    pub grid_side: usize,
    pub grid_spacing: f32,
}

impl Layout {
    pub fn new(kind: ParticleType, count: usize, max_distance: f32, speed: f32) -> Self {
        let grid_side = lattice_side(count);
        Self {
            kind,
            max_distance,
            speed,
            grid_side,
            grid_spacing: max_distance / grid_side.max(1) as f32,
        }
    }

    pub fn spawn<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> Spawn {
        match self.kind {
            ParticleType::Sphere => self.spawn_sphere(rng),
            ParticleType::Explosion => Spawn {
                position: Vec3::ZERO,
                velocity: explosion_velocity(rng, self.speed),
            },
            ParticleType::Vortex => self.spawn_vortex(rng),
            ParticleType::Grid => self.spawn_grid(index, rng),
        }
    }

    fn spawn_sphere<R: Rng + ?Sized>(&self, rng: &mut R) -> Spawn {
        let position =
            utils::random_sphere_point(rng, self.max_distance * SPAWN_RADIUS_FRACTION);
        let mut drift = || utils::random(rng, -SPHERE_DRIFT, SPHERE_DRIFT) * self.speed;
        let velocity = Vec3::new(drift(), drift(), drift());
        Spawn { position, velocity }
    }

    fn spawn_vortex<R: Rng + ?Sized>(&self, rng: &mut R) -> Spawn {
        let extent = self.max_distance * SPAWN_RADIUS_FRACTION;
        let angle = rng.gen::<f32>() * TAU;
        let radius = rng.gen::<f32>() * extent;
        let height = utils::random(rng, -extent, extent);
        // Particles near the axis circle fastest
        let falloff = 1.0 - radius / extent;
        let swirl = VORTEX_SWIRL * self.speed * falloff;
        Spawn {
            position: Vec3::new(angle.cos() * radius, height, angle.sin() * radius),
            velocity: Vec3::new(
                -angle.sin() * swirl,
                VORTEX_RISE * self.speed,
                angle.cos() * swirl,
            ),
        }
    }

    fn spawn_grid<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> Spawn {
        let side = self.grid_side;
        let spacing = self.grid_spacing;
        let jitter = spacing * GRID_JITTER_FRACTION;
        let (x, y, z) = lattice_cell(index, side);
        let half = side as f32 / 2.0;
        let mut axis = |c: usize| (c as f32 - half) * spacing + utils::random(rng, -jitter, jitter);
        let position = Vec3::new(axis(x), axis(y), axis(z));
        let wave = GRID_WAVE * self.speed;
        let velocity = Vec3::new(
            (x as f32 / 2.0).sin() * wave,
            (y as f32 / 2.0).cos() * wave,
            (z as f32 / 2.0).sin() * wave,
        );
        Spawn { position, velocity }
    }
}

/// Random outward velocity used for explosion spawns and respawns.
pub fn explosion_velocity<R: Rng + ?Sized>(rng: &mut R, speed: f32) -> Vec3 {
    let azimuth = rng.gen::<f32>() * TAU;
    let polar = rng.gen::<f32>() * PI;
    let magnitude = rng.gen::<f32>() * EXPLOSION_BURST * speed;
    Vec3::new(
        azimuth.sin() * polar.sin() * magnitude,
        polar.cos() * magnitude,
        azimuth.cos() * polar.sin() * magnitude,
    )
}

/// Smallest lattice side `s` with `s^3 >= count`, i.e. `ceil(cbrt(count))`.
pub fn lattice_side(count: usize) -> usize {
    let mut side = (count as f64).cbrt().floor() as usize;
    while side.pow(3) < count {
        side += 1;
    }
    side
}

/// Lattice coordinate of the `index`-th filled cell, z varying fastest.
#[inline]
pub fn lattice_cell(index: usize, side: usize) -> (usize, usize, usize) {
    let side = side.max(1);
    (index / (side * side), (index / side) % side, index % side)
}
