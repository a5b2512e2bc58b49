// Host-side tests for page constants, viewport sizing and the fallback sprite.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod viewport {
    include!("../src/core/viewport.rs");
}
mod sprite {
    include!("../src/core/sprite.rs");
}

use constants::*;
use sprite::bubble_sprite_rgba;
use viewport::Viewport;

#[test]
#[allow(clippy::assertions_on_constants)]
fn renderer_constants_are_sane() {
    assert!(FOG_FAR > FOG_NEAR && FOG_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR && CAMERA_NEAR > 0.0);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(LIGHT_INTENSITY > 0.0 && LIGHT_INTENSITY <= 1.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
    // WebGPU guarantees 1x and 4x multisampling only
    assert!(MSAA_SAMPLES == 1 || MSAA_SAMPLES == 4);
}

#[test]
fn fog_and_light_colors_match_hex() {
    let to_u8 = |c: [f32; 3]| c.map(|v| (v * 255.0).round() as u8);
    assert_eq!(to_u8(FOG_COLOR), [0x04, 0x10, 0x1c]);
    assert_eq!(to_u8(LIGHT_COLOR), [0x9f, 0xdc, 0xff]);
}

#[test]
fn backing_size_caps_pixel_ratio() {
    let vp = Viewport {
        css_width: 1280.0,
        css_height: 720.0,
        device_pixel_ratio: 3.0,
    };
    assert_eq!(vp.pixel_ratio(MAX_PIXEL_RATIO), 2.0);
    assert_eq!(vp.backing_size(MAX_PIXEL_RATIO), (2560, 1440));

    let low = Viewport {
        device_pixel_ratio: 1.5,
        ..vp
    };
    assert_eq!(low.backing_size(MAX_PIXEL_RATIO), (1920, 1080));
}

#[test]
fn backing_size_never_zero() {
    let vp = Viewport {
        css_width: 0.0,
        css_height: 0.0,
        device_pixel_ratio: 0.0,
    };
    assert_eq!(vp.pixel_ratio(MAX_PIXEL_RATIO), 1.0);
    assert_eq!(vp.backing_size(MAX_PIXEL_RATIO), (1, 1));
}

#[test]
fn viewport_aspect() {
    let vp = Viewport {
        css_width: 1600.0,
        css_height: 900.0,
        device_pixel_ratio: 1.0,
    };
    assert!((vp.aspect() - 16.0 / 9.0).abs() < 1e-6);
}

#[test]
fn fallback_sprite_shape() {
    let n = FALLBACK_SPRITE_SIZE;
    let px = bubble_sprite_rgba(n);
    assert_eq!(px.len(), (n * n * 4) as usize);

    let alpha = |x: u32, y: u32| px[((y * n + x) * 4 + 3) as usize];
    // Corners are outside the bubble
    assert_eq!(alpha(0, 0), 0);
    assert_eq!(alpha(n - 1, n - 1), 0);
    // Rim is brighter than the body just inside it
    let c = n / 2;
    let rim_x = c + (0.95 * c as f32) as u32;
    assert!(alpha(rim_x, c) > alpha(c + c / 2, c));
    // Color channels stay white; only alpha carries the shape
    assert!(px.chunks_exact(4).all(|t| t[0] == 255 && t[1] == 255 && t[2] == 255));
}
