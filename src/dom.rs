use crate::constants::MAX_PIXEL_RATIO;
use crate::core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Register `handler` for a window event for the lifetime of the page.
pub fn add_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

pub fn viewport(window: &web::Window) -> Viewport {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport {
        css_width: dim(window.inner_width()),
        css_height: dim(window.inner_height()),
        device_pixel_ratio: window.device_pixel_ratio(),
    }
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Size the canvas to the window: CSS box in CSS pixels, backing store in
/// physical pixels with the device pixel ratio capped.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.css_width));
    _ = style.set_property("height", &format!("{}px", viewport.css_height));
    let (w_px, h_px) = viewport.backing_size(MAX_PIXEL_RATIO);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
}
