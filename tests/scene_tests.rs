// Host-side tests for the bubble scene: scroll, resize and frame ticks.
// The main crate is wasm-only, so we include the pure-Rust modules directly,
// mirroring the crate's module tree so `crate::` paths resolve.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod camera {
    include!("../src/camera.rs");
}
mod core {
    pub mod depth {
        include!("../src/core/depth.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use crate::core::depth::{MIN_SPEED, BASE_OPACITY, BASE_POINT_SIZE};
use crate::core::particles::BUBBLE_COUNT;
use crate::core::scene::BubbleScene;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

const EPS: f32 = 1e-5;

fn make_scene() -> (BubbleScene, StdRng) {
    let mut rng = StdRng::seed_from_u64(1234);
    let scene = BubbleScene::new(BUBBLE_COUNT, 16.0 / 9.0, &mut rng);
    (scene, rng)
}

#[test]
fn initial_scene_matches_surface_state() {
    let (scene, _) = make_scene();
    assert_eq!(scene.camera.position, Vec3::new(0.0, 0.0, 6.0));
    assert!((scene.material.opacity - BASE_OPACITY).abs() < EPS);
    assert!((scene.material.point_size - BASE_POINT_SIZE).abs() < EPS);
    assert_eq!(scene.fog.near, 2.0);
    assert_eq!(scene.fog.far, 18.0);
    assert!((scene.light.direction.length() - 1.0).abs() < EPS);
    assert!((scene.light.intensity - 0.4).abs() < EPS);
    assert_eq!(scene.field.len(), BUBBLE_COUNT);
}

#[test]
fn scroll_two_viewports_down() {
    let (mut scene, _) = make_scene();
    scene.apply_scroll(2000.0, 1000.0);
    assert!((scene.depth() - 2.0).abs() < EPS);
    assert!((scene.camera.position.z - 8.0).abs() < EPS);
    assert!((scene.material.opacity - 0.19).abs() < EPS);
    assert!((scene.material.point_size - 0.1).abs() < EPS);
}

#[test]
fn camera_and_material_are_overwritten_not_accumulated() {
    let (mut scene, _) = make_scene();
    scene.apply_scroll(3000.0, 1000.0);
    scene.apply_scroll(500.0, 1000.0);
    assert!((scene.camera.position.z - 6.5).abs() < EPS);
    assert!((scene.material.opacity - (0.35 - 0.5 * 0.08)).abs() < EPS);
    scene.apply_scroll(0.0, 1000.0);
    assert!((scene.camera.position.z - 6.0).abs() < EPS);
    assert!((scene.material.opacity - BASE_OPACITY).abs() < EPS);
}

// Regression: speeds must compound per scroll event and never be rebuilt
// from their initial values, even when scrolling back up.
#[test]
fn speed_decay_compounds_per_scroll_event() {
    let (mut scene, _) = make_scene();
    let initial = scene.field.speeds().to_vec();

    scene.apply_scroll(1000.0, 1000.0); // depth 1 -> x0.98
    scene.apply_scroll(1000.0, 1000.0); // depth 1 -> x0.98 again
    for (s, s0) in scene.field.speeds().iter().zip(&initial) {
        let expected = (s0 * 0.98 * 0.98).max(MIN_SPEED);
        assert!((s - expected).abs() < 1e-7, "{} vs {}", s, expected);
    }

    // Back at the surface: no decay, but no recovery either.
    let before = scene.field.speeds().to_vec();
    scene.apply_scroll(0.0, 1000.0);
    assert_eq!(scene.field.speeds(), &before[..]);
}

#[test]
fn speeds_never_increase_and_never_drop_below_floor() {
    let (mut scene, _) = make_scene();
    let mut prev = scene.field.speeds().to_vec();
    for step in 0..2000 {
        let scroll = ((step * 37) % 5000) as f32;
        scene.apply_scroll(scroll, 1000.0);
        for (now, before) in scene.field.speeds().iter().zip(&prev) {
            assert!(now <= before);
            assert!(*now >= MIN_SPEED);
        }
        prev = scene.field.speeds().to_vec();
    }
}

#[test]
fn material_stays_in_range_for_any_scroll() {
    let (mut scene, _) = make_scene();
    for step in 0..500 {
        scene.apply_scroll(step as f32 * 20.0, 800.0);
        assert!((0.08 - EPS..=0.35 + EPS).contains(&scene.material.opacity));
        assert!((0.1 - EPS..=0.14 + EPS).contains(&scene.material.point_size));
    }
}

#[test]
fn resize_updates_aspect_and_projection() {
    let (mut scene, _) = make_scene();
    let before = scene.camera.projection_matrix();
    scene.resize(1.0);
    assert_eq!(scene.camera.aspect(), 1.0);
    assert_ne!(scene.camera.projection_matrix(), before);

    // Zero-height window: keep the last good aspect.
    scene.resize(f32::INFINITY);
    assert_eq!(scene.camera.aspect(), 1.0);

    let again = scene.camera.projection_matrix();
    scene.resize(1.0);
    assert_eq!(scene.camera.projection_matrix(), again, "resize is idempotent");
}

#[test]
fn aspect_change_waits_for_projection_refresh() {
    let (mut scene, _) = make_scene();
    let before = scene.camera.projection_matrix();
    scene.camera.set_aspect(0.5);
    assert_eq!(scene.camera.projection_matrix(), before);
    scene.camera.update_projection();
    assert_ne!(scene.camera.projection_matrix(), before);
}

#[test]
fn camera_looks_down_negative_z() {
    let (scene, _) = make_scene();
    let vp = scene.camera.view_projection();
    let ahead = vp.project_point3(Vec3::new(0.0, 0.0, 0.0));
    assert!(ahead.x.abs() < EPS && ahead.y.abs() < EPS);
    assert!((0.0..=1.0).contains(&ahead.z), "origin is inside the frustum");
}

#[test]
fn fog_blends_between_near_and_far() {
    let (scene, _) = make_scene();
    assert_eq!(scene.fog.factor(1.0), 0.0);
    assert_eq!(scene.fog.factor(18.0), 1.0);
    assert!((scene.fog.factor(10.0) - 0.5).abs() < EPS);
}

#[test]
fn tick_moves_bubbles_and_marks_upload() {
    let (mut scene, mut rng) = make_scene();
    scene.field.take_dirty();
    let before = scene.field.positions().to_vec();
    scene.tick(1000.0, &mut rng);
    assert!(scene.field.take_dirty());
    assert_ne!(scene.field.positions(), &before[..]);
}
