#![cfg(target_arch = "wasm32")]
use crate::constants::{BUBBLE_TEXTURE_URL, CANVAS_ID, SCENE_SELECTOR};
use crate::core::{BubbleScene, BUBBLE_COUNT};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;
mod scenes;
mod texture;

thread_local! {
    static LOOP: RefCell<Option<frame::LoopHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("deep-water starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the bubble animation, e.g. before the host page tears the canvas down.
#[wasm_bindgen]
pub fn stop_bubbles() {
    LOOP.with(|l| {
        if let Some(h) = l.borrow().as_ref() {
            if h.is_running() {
                h.stop();
            }
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // ---------------- Page sections ----------------
    let scenes = Rc::new(scenes::SceneList::query(&document, SCENE_SELECTOR));
    log::info!("[scenes] {} sections", scenes.len());
    events::wire_reveal(scenes.clone());
    events::wire_text_depth(scenes.clone());
    // The module may start after `load` has already fired.
    if document.ready_state() == "complete" {
        let vh = dom::viewport(&window).css_height;
        scenes.reveal(vh);
        scenes.update_text_depth(vh);
    }

    // ---------------- Bubble field ----------------
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let vp = dom::viewport(&window);
    dom::sync_canvas_to_window(&canvas, &vp);

    let mut rng = StdRng::from_entropy();
    let scene = Rc::new(RefCell::new(BubbleScene::new(BUBBLE_COUNT, vp.aspect(), &mut rng)));
    events::wire_scroll_depth(scene.clone());
    events::wire_resize(canvas.clone(), scene.clone());

    // Without WebGPU the sections still animate; only the bubbles are missing.
    let gpu = frame::init_gpu(&canvas, BUBBLE_COUNT).await;
    let has_gpu = gpu.is_some();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        gpu,
        canvas,
        rng,
        frames: 0,
        recycled: 0,
    }));

    if has_gpu {
        let ctx = frame_ctx.clone();
        spawn_local(async move {
            let sprite = texture::load_bubble_sprite(BUBBLE_TEXTURE_URL).await;
            if let Some(g) = ctx.borrow_mut().gpu.as_mut() {
                g.set_sprite(sprite.width, sprite.height, &sprite.rgba);
            }
        });
    }

    let handle = frame::start_loop(frame_ctx);
    LOOP.with(|l| *l.borrow_mut() = Some(handle));
    Ok(())
}
