use crate::core::{BubbleScene, Viewport};
use crate::dom;
use crate::scenes::SceneList;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn viewport_height() -> f64 {
    web::window()
        .map(|w| dom::viewport(&w).css_height)
        .unwrap_or(0.0)
}

/// Reveal sections on `load` and on every `scroll`.
pub fn wire_reveal(scenes: Rc<SceneList>) {
    for event in ["scroll", "load"] {
        let scenes = scenes.clone();
        dom::add_window_listener(event, move || scenes.reveal(viewport_height()));
    }
}

/// Refresh per-section depth opacity/blur on `scroll` and `load`.
pub fn wire_text_depth(scenes: Rc<SceneList>) {
    for event in ["scroll", "load"] {
        let scenes = scenes.clone();
        dom::add_window_listener(event, move || scenes.update_text_depth(viewport_height()));
    }
}

/// Push scroll depth into the camera, material and bubble speeds.
pub fn wire_scroll_depth(scene: Rc<RefCell<BubbleScene>>) {
    dom::add_window_listener("scroll", move || {
        let Some(window) = web::window() else {
            return;
        };
        let scroll_y = dom::scroll_y(&window);
        let vp = dom::viewport(&window);
        let m = scene
            .borrow_mut()
            .apply_scroll(scroll_y as f32, vp.css_height as f32);
        log::trace!(
            "[scroll] y={:.0} depth={:.2} cam_z={:.2} opacity={:.2} size={:.3}",
            scroll_y,
            m.depth,
            m.camera_z,
            m.opacity,
            m.point_size
        );
    });
}

/// Keep camera aspect and canvas size in step with the window. The GPU
/// surface follows the canvas size on the next frame.
pub fn wire_resize(canvas: web::HtmlCanvasElement, scene: Rc<RefCell<BubbleScene>>) {
    dom::add_window_listener("resize", move || {
        let Some(window) = web::window() else {
            return;
        };
        let vp: Viewport = dom::viewport(&window);
        scene.borrow_mut().resize(vp.aspect());
        dom::sync_canvas_to_window(&canvas, &vp);
    });
}
