use crate::core::BubbleScene;
use crate::render;
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<BubbleScene>>,
    pub gpu: Option<render::GpuState>,
    pub canvas: web::HtmlCanvasElement,
    pub rng: StdRng,
    pub frames: u64,
    pub recycled: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now_ms = js_sys::Date::now();
        let mut scene = self.scene.borrow_mut();
        self.recycled += scene.tick(now_ms, &mut self.rng) as u64;
        self.frames += 1;

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&mut scene) {
                log::error!("render error: {:?}", e);
            }
        }

        if self.frames % 3600 == 0 {
            log::debug!(
                "[frame] {} frames, {} bubbles recycled, depth {:.2}",
                self.frames,
                self.recycled,
                scene.depth()
            );
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement, bubble_count: usize) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, bubble_count).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Stops the animation loop: no frame is requested after the current one.
#[derive(Clone)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let handle = LoopHandle {
        running: Rc::new(Cell::new(true)),
    };
    let running = handle.running.clone();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            log::info!("[frame] loop stopped");
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
    handle
}
