use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Listen for clicks anywhere on the page.
pub fn add_document_click_listener(document: &web::Document, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn hide_element(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.set_attribute("style", "display:none");
    }
}
