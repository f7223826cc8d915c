// Shared simulation/animation tuning constants used by the core and the web frontend.

// Spawn shapes
pub const SPAWN_RADIUS_FRACTION: f32 = 0.5; // sphere/vortex extent as a fraction of max distance
pub const SPHERE_DRIFT: f32 = 0.05; // per-axis drift bound, scaled by speed
pub const EXPLOSION_BURST: f32 = 0.2; // max radial speed, scaled by speed
pub const VORTEX_SWIRL: f32 = 0.02; // tangential speed at the axis
pub const VORTEX_RISE: f32 = 0.001; // constant upward drift
pub const GRID_JITTER_FRACTION: f32 = 0.2; // +/- jitter as a fraction of lattice spacing
pub const GRID_WAVE: f32 = 0.01; // amplitude of the lattice wave field

// Per-frame animation
pub const POINT_OPACITY: f32 = 0.8; // alpha written into packed vertices
pub const SIZE_PULSE_RATE: f32 = 2.0; // radians per second of the size wave
pub const SIZE_PULSE_PHASE_STEP: f32 = 0.1; // phase offset between neighbouring particles
pub const SIZE_PULSE_SPAN: f32 = 3.0; // size swings between base and base * (1 + span)
pub const HUE_SWEEP_RATE: f32 = 0.05; // hue turns per second in pulse mode
pub const HUE_SWEEP_PHASE_STEP: f32 = 0.01; // hue offset between neighbouring particles
pub const ENSEMBLE_SPIN_Y: f32 = 0.1; // rad/s applied by the system itself
pub const ENSEMBLE_SPIN_Z: f32 = 0.05; // rad/s applied by the system itself

// Bloom a bare ParticleSystem starts with, until set_bloom_params overrides it
pub const PARTICLE_BLOOM_STRENGTH: f32 = 1.5;
pub const PARTICLE_BLOOM_RADIUS: f32 = 0.0;
pub const PARTICLE_BLOOM_THRESHOLD: f32 = 0.1;

// Driver rotation and audio response
pub const AUTO_SPIN_Y: f32 = 0.2; // rad/s added by the driver
pub const AUTO_TILT_RATE: f32 = 0.1; // rad/s of the idle tilt oscillation
pub const AUTO_TILT_AMPLITUDE: f32 = 0.2; // radians
pub const AUDIO_TILT_X: f32 = 0.1; // rad/s at full treble
pub const AUDIO_BLOOM_BASS_GAIN: f32 = 2.0; // bloom = base * (1 + bass * gain)
pub const AUDIO_CAMERA_BASS_PULL: f32 = 0.2; // camera = distance * (1 - bass * pull)

// Sequencing
pub const DEFAULT_EFFECT_DURATION_SEC: f32 = 10.0;

// Saturated colors used by the pulse palette
pub const HDR_PALETTE: [u32; 7] = [
    0xFF00FF, // magenta
    0x00FFFF, // cyan
    0xFFFF00, // yellow
    0xFF0000, // red
    0x00FF00, // green
    0x0000FF, // blue
    0xFFFFFF, // white
];

// Largest packed RGB value plus one
pub const PACKED_RGB_RANGE: u32 = 1 << 24;
