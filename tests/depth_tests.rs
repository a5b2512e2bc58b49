// Host-side tests for the scroll-to-depth mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod depth {
    include!("../src/core/depth.rs");
}

use depth::*;

const EPS: f32 = 1e-5;

#[test]
fn depth_is_monotonic_and_bounded() {
    let vh = 900.0;
    let mut prev = 0.0;
    for step in 0..=200 {
        let s = step as f32 * 25.0;
        let d = depth_for_scroll(s, vh);
        assert!(d >= prev, "depth decreased at scroll {}", s);
        assert!((0.0..=MAX_DEPTH).contains(&d));
        prev = d;
    }
    assert_eq!(depth_for_scroll(1.0e9, vh), MAX_DEPTH);
}

#[test]
fn depth_at_surface_for_overscroll_and_degenerate_viewport() {
    assert_eq!(depth_for_scroll(-120.0, 800.0), 0.0);
    assert_eq!(depth_for_scroll(500.0, 0.0), 0.0);
    assert_eq!(depth_for_scroll(500.0, f32::NAN), 0.0);
    assert_eq!(depth_for_scroll(f32::INFINITY, 800.0), 0.0);
}

#[test]
fn opacity_and_size_stay_in_range() {
    for step in 0..=400 {
        let d = step as f32 * 0.01;
        let o = opacity_for_depth(d);
        let s = point_size_for_depth(d);
        assert!((MIN_OPACITY..=BASE_OPACITY).contains(&o), "opacity {} at {}", o, d);
        assert!((MIN_POINT_SIZE..=BASE_POINT_SIZE).contains(&s), "size {} at {}", s, d);
    }
    assert!((opacity_for_depth(0.0) - 0.35).abs() < EPS);
    assert!((point_size_for_depth(0.0) - 0.14).abs() < EPS);
    assert!((opacity_for_depth(MAX_DEPTH) - MIN_OPACITY).abs() < EPS);
}

#[test]
fn two_viewports_down() {
    let m = DepthModulation::from_scroll(2000.0, 1000.0);
    assert!((m.depth - 2.0).abs() < EPS);
    assert!((m.opacity - 0.19).abs() < EPS);
    // 0.14 * (1 - 0.36) = 0.0896, floored
    assert!((m.point_size - 0.1).abs() < EPS);
    assert!((m.camera_z - 8.0).abs() < EPS);
    assert!((m.speed_decay - 0.96).abs() < EPS);
}

#[test]
fn camera_follows_raw_scroll_without_clamp() {
    // Depth saturates at 4 viewports; the camera keeps going.
    let far = DepthModulation::from_scroll(20_000.0, 1000.0);
    assert_eq!(far.depth, MAX_DEPTH);
    assert!((far.camera_z - 26.0).abs() < 1e-4);
    assert!((camera_z_for_scroll(0.0) - CAMERA_BASE_Z).abs() < EPS);
}

#[test]
fn surface_leaves_speeds_alone() {
    assert_eq!(speed_decay_for_depth(0.0), 1.0);
    assert!(speed_decay_for_depth(MAX_DEPTH) < 1.0);
    assert!(speed_decay_for_depth(MAX_DEPTH) > 0.0);
}
