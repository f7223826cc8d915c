/// Front-end constants: DOM hooks, frame pacing and render tuning.
///
/// Simulation constants live in `particles_core::constants`; this file only
/// holds values the browser layer needs, so it stays includable from host tests.

// DOM element ids and the optional global config object
pub const CANVAS_ID: &str = "app-canvas";
pub const LOADING_ID: &str = "loading";
pub const CONFIG_GLOBAL: &str = "HDR_PARTICLES_CONFIG";

// Longest frame step fed to the simulation (seconds); hidden tabs pause rAF
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Tone mapping
pub const TONE_MAPPING_EXPOSURE: f32 = 1.5;

// Exponential-squared fog towards black
pub const FOG_DENSITY: f32 = 0.001;

// Points never shrink below this many pixels
pub const MIN_POINT_PIXELS: f32 = 1.0;

// Bloom runs at 1/BLOOM_DOWNSCALE resolution
pub const BLOOM_DOWNSCALE: u32 = 2;
// Blur tap spacing in bloom texels at radius 0 and added per unit radius
pub const BLUR_BASE_SPREAD: f32 = 1.0;
pub const BLUR_RADIUS_SPREAD: f32 = 2.0;

pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];
