#![cfg(target_arch = "wasm32")]
use crate::audio::MicInput;
use crate::constants::*;
use crate::points::PointCloud;
use instant::Instant;
use particles_core::{AnimationDriver, Config};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod points;
mod render;
mod uniforms;

// Shaders bundled as string constants
pub(crate) static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");
pub(crate) static POST_WGSL: &str = include_str!("../shaders/post.wgsl");

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hdr-particles starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Optional page-provided overrides, e.g. `window.HDR_PARTICLES_CONFIG = { particleCount: 5000 }`.
fn load_config(window: &web::Window) -> Config {
    let raw = match js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(v) if !v.is_undefined() && !v.is_null() => v,
        _ => return Config::default(),
    };
    #[allow(deprecated)]
    let parsed = raw.into_serde::<Config>();
    match parsed {
        Ok(config) => match config.validate() {
            Ok(()) => {
                log::info!("[config] using {}", CONFIG_GLOBAL);
                config
            }
            Err(e) => {
                log::warn!("[config] invalid {}: {}; using defaults", CONFIG_GLOBAL, e);
                Config::default()
            }
        },
        Err(e) => {
            log::warn!("[config] malformed {}: {}; using defaults", CONFIG_GLOBAL, e);
            Config::default()
        }
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let config = load_config(&window);
    let seed: u64 = rand::random();
    let driver = AnimationDriver::new(config, PointCloud::new(), seed)?;
    log::info!(
        "[engine] {} particles, {} / {}",
        driver.config().particle_count,
        driver.config().particle_type,
        driver.config().color_mode
    );
    let driver = Rc::new(RefCell::new(driver));

    // Audio is optional; frames run without it until the microphone resolves
    let mic = Rc::new(RefCell::new(MicInput::Pending));
    audio::request_microphone(mic.clone());
    {
        let mic = mic.clone();
        dom::add_document_click_listener(&document, move || {
            if let MicInput::Live(input) = &*mic.borrow() {
                input.resume();
            }
        });
    }

    events::wire_global_keydown(driver.clone());

    let gpu = frame::init_gpu(&canvas).await;
    dom::hide_element(&document, LOADING_ID);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        driver,
        mic,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
