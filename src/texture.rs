use crate::constants::FALLBACK_SPRITE_SIZE;
use crate::core::bubble_sprite_rgba;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Decoded RGBA8 image, rows top to bottom.
pub struct SpriteImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl SpriteImage {
    pub fn fallback() -> Self {
        Self {
            width: FALLBACK_SPRITE_SIZE,
            height: FALLBACK_SPRITE_SIZE,
            rgba: bubble_sprite_rgba(FALLBACK_SPRITE_SIZE),
        }
    }
}

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_val = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?;
    let resp: web::Response = resp_val
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("fetch {}: not a Response: {:?}", url, e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, resp.status());
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("read {}: {:?}", url, e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

pub async fn fetch_sprite(url: &str) -> anyhow::Result<SpriteImage> {
    let bytes = fetch_bytes(url).await?;
    let img = image::load_from_memory(&bytes)?.to_rgba8();
    let (width, height) = img.dimensions();
    Ok(SpriteImage {
        width,
        height,
        rgba: img.into_raw(),
    })
}

/// Fetch and decode the bubble sprite, substituting a procedural one on any
/// failure so the field still renders.
pub async fn load_bubble_sprite(url: &str) -> SpriteImage {
    match fetch_sprite(url).await {
        Ok(img) => {
            log::info!("[texture] loaded {} ({}x{})", url, img.width, img.height);
            img
        }
        Err(e) => {
            log::warn!("[texture] {:?}; using procedural sprite", e);
            SpriteImage::fallback()
        }
    }
}
