use crate::points::PointCloud;
use particles_core::{command_for_key, AnimationDriver};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedDriver = Rc<RefCell<AnimationDriver<PointCloud>>>;

fn handle_keydown(ev: &web::KeyboardEvent, driver: &SharedDriver) {
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(command) = command_for_key(&ev.key()) else {
        return;
    };
    // Space would otherwise scroll the page
    ev.prevent_default();
    driver.borrow_mut().apply(command);
}

pub fn wire_global_keydown(driver: SharedDriver) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_keydown(&ev, &driver);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
