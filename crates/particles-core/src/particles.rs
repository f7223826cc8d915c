//! Particle ensemble and its per-frame update rule.
//!
//! A `ParticleSystem` owns exactly one `Ensemble` at a time. Changing the
//! distribution rebuilds the ensemble from scratch; changing the color mode
//! only affects particles as they are next recolored.

use crate::color::ColorMode;
use crate::config::ParticleOptions;
use crate::constants::*;
use crate::distribution::{explosion_velocity, Layout, ParticleType};
use crate::error::Result;
use crate::state::BloomParams;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// GPU-ready layout of one particle.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleVertex {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 3],
    pub alpha: f32,
}

/// Per-particle attribute buffers, all indexed by particle id.
#[derive(Clone, Debug)]
pub struct Ensemble {
    pub kind: ParticleType,
    pub positions: Vec<Vec3>,
    /// RGB in `[0, 1]`.
    pub colors: Vec<Vec3>,
    pub sizes: Vec<f32>,
    pub velocities: Vec<Vec3>,
    /// Random value in `[0, 1)` drawn at spawn; the update rule does not read it.
    pub life: Vec<f32>,
    /// Whole-ensemble Euler rotation (XYZ order, radians) applied at render time.
    pub rotation: Vec3,
}

impl Ensemble {
    pub fn generate<R: Rng + ?Sized>(options: &ParticleOptions, rng: &mut R) -> Self {
        let count = options.count;
        let layout = Layout::new(
            options.particle_type,
            count,
            options.max_distance,
            options.speed,
        );
        let mut ensemble = Self {
            kind: options.particle_type,
            positions: Vec::with_capacity(count),
            colors: Vec::with_capacity(count),
            sizes: Vec::with_capacity(count),
            velocities: Vec::with_capacity(count),
            life: Vec::with_capacity(count),
            rotation: Vec3::ZERO,
        };
        for i in 0..count {
            let spawn = layout.spawn(i, rng);
            ensemble.positions.push(spawn.position);
            ensemble
                .colors
                .push(options.color_mode.initial_color(i, count, rng));
            ensemble.sizes.push(rng.gen::<f32>() * options.size * 2.0);
            ensemble.velocities.push(spawn.velocity);
            ensemble.life.push(rng.gen());
        }
        ensemble
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Interleave the attribute buffers into `out`, replacing its contents.
    pub fn pack_vertices(&self, out: &mut Vec<ParticleVertex>) {
        out.clear();
        out.extend(
            self.positions
                .iter()
                .zip(&self.colors)
                .zip(&self.sizes)
                .map(|((p, c), s)| ParticleVertex {
                    position: p.to_array(),
                    size: *s,
                    color: c.to_array(),
                    alpha: POINT_OPACITY,
                }),
        );
    }
}

/// Render-side storage for an ensemble's buffers.
///
/// `allocate` and `release` bracket the lifetime of one ensemble; `upload`
/// is called after every change to the buffers, which is the renderer's cue
/// that they are dirty.
pub trait PointsSink {
    fn allocate(&mut self, count: usize);
    fn upload(&mut self, ensemble: &Ensemble);
    fn release(&mut self);
}

/// Sink for headless use: keeps nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl PointsSink for NullSink {
    fn allocate(&mut self, _count: usize) {}
    fn upload(&mut self, _ensemble: &Ensemble) {}
    fn release(&mut self) {}
}

pub struct ParticleSystem<S: PointsSink = NullSink> {
    options: ParticleOptions,
    ensemble: Ensemble,
    sink: S,
    rng: StdRng,
    bloom: BloomParams,
    /// Clock driving the size pulsation; survives ensemble rebuilds.
    time: f32,
}

impl<S: PointsSink> ParticleSystem<S> {
    pub fn new(options: ParticleOptions, mut sink: S, seed: u64) -> Result<Self> {
        options.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let ensemble = Ensemble::generate(&options, &mut rng);
        sink.allocate(ensemble.len());
        sink.upload(&ensemble);
        log::info!(
            "[particles] built {} x{} ({})",
            options.particle_type,
            ensemble.len(),
            options.color_mode
        );
        Ok(Self {
            options,
            ensemble,
            sink,
            rng,
            bloom: BloomParams {
                strength: PARTICLE_BLOOM_STRENGTH,
                radius: PARTICLE_BLOOM_RADIUS,
                threshold: PARTICLE_BLOOM_THRESHOLD,
            },
            time: 0.0,
        })
    }

    /// Advance every particle by one frame. Returns the number of boundary events.
    pub fn update(&mut self, delta: f32, elapsed: f32) -> usize {
        self.time += delta;
        let kind = self.ensemble.kind;
        let mode = self.options.color_mode;
        let max_distance = self.options.max_distance;
        let speed = self.options.speed;
        let base_size = self.options.size;
        let time = self.time;

        let Ensemble {
            positions,
            colors,
            sizes,
            velocities,
            ..
        } = &mut self.ensemble;
        let mut boundary_events = 0;
        for i in 0..positions.len() {
            positions[i] += velocities[i];

            if positions[i].length() > max_distance {
                boundary_events += 1;
                if kind.respawns_at_origin() {
                    positions[i] = Vec3::ZERO;
                    velocities[i] = explosion_velocity(&mut self.rng, speed);
                } else {
                    velocities[i] = -velocities[i];
                }
                if let Some(c) = mode.boundary_color(&mut self.rng) {
                    colors[i] = c;
                }
            }

            sizes[i] = pulsation_size(time, i, base_size);

            if let Some(c) = mode.sweep_color(elapsed, i) {
                colors[i] = c;
            }
        }

        self.ensemble.rotation.y += delta * ENSEMBLE_SPIN_Y;
        self.ensemble.rotation.z += delta * ENSEMBLE_SPIN_Z;
        self.sink.upload(&self.ensemble);
        boundary_events
    }

    /// Discard the current ensemble and build a new one with `kind`.
    pub fn change_particle_type(&mut self, kind: ParticleType) {
        self.sink.release();
        self.options.particle_type = kind;
        self.ensemble = Ensemble::generate(&self.options, &mut self.rng);
        self.sink.allocate(self.ensemble.len());
        self.sink.upload(&self.ensemble);
        log::info!("[particles] rebuilt as {} x{}", kind, self.ensemble.len());
    }

    /// Existing colors are kept until each particle is next recolored.
    pub fn change_color_mode(&mut self, mode: ColorMode) {
        self.options.color_mode = mode;
    }

    pub fn set_bloom_params(&mut self, strength: f32, radius: f32, threshold: f32) {
        self.bloom = BloomParams {
            strength,
            radius,
            threshold,
        };
    }

    /// Release render-side storage and hand the sink back.
    pub fn dispose(mut self) -> S {
        self.sink.release();
        log::info!("[particles] disposed");
        self.sink
    }

    pub fn options(&self) -> &ParticleOptions {
        &self.options
    }
    pub fn ensemble(&self) -> &Ensemble {
        &self.ensemble
    }
    pub fn ensemble_mut(&mut self) -> &mut Ensemble {
        &mut self.ensemble
    }
    pub fn rotation_mut(&mut self) -> &mut Vec3 {
        &mut self.ensemble.rotation
    }
    pub fn bloom(&self) -> BloomParams {
        self.bloom
    }
    pub fn sink(&self) -> &S {
        &self.sink
    }
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
    pub fn time(&self) -> f32 {
        self.time
    }
}

/// Traveling size wave; always within `[base, base * (1 + SIZE_PULSE_SPAN)]`.
#[inline]
pub fn pulsation_size(time: f32, index: usize, base: f32) -> f32 {
    let wave = (time * SIZE_PULSE_RATE + index as f32 * SIZE_PULSE_PHASE_STEP).sin() * 0.5 + 0.5;
    wave * base * SIZE_PULSE_SPAN + base
}
