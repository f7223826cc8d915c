use crate::audio::MicInput;
use crate::events::SharedDriver;
use crate::render;
use crate::uniforms::clamp_frame_delta;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub driver: SharedDriver,
    pub mic: Rc<RefCell<MicInput>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = clamp_frame_delta((now - self.last_instant).as_secs_f32());
        self.last_instant = now;

        let levels = {
            let mut mic = self.mic.borrow_mut();
            if mic.is_unavailable() && self.driver.borrow().audio_reactive() {
                self.driver.borrow_mut().disable_audio();
            }
            mic.levels()
        };

        let mut driver = self.driver.borrow_mut();
        let view = driver.frame(dt_sec, levels);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let particles = driver.particles_mut();
            let rotation = particles.ensemble().rotation;
            match g.render(particles.sink_mut(), rotation, &view) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
