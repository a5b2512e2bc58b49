// The bubble scene: field, material, camera, fog and light.
//
// One `BubbleScene` exists per page. The frame loop, the scroll handler and
// the resize handler all go through its methods so the particle arrays only
// have a single owner.

use crate::camera::PerspectiveCamera;
use crate::constants::{
    CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, FOG_COLOR, FOG_FAR, FOG_NEAR, LIGHT_COLOR,
    LIGHT_DIRECTION, LIGHT_INTENSITY,
};
use crate::core::depth::{DepthModulation, BASE_OPACITY, BASE_POINT_SIZE, CAMERA_BASE_Z, MIN_SPEED};
use crate::core::particles::BubbleField;
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: [f32; 3],
    pub near: f32,
    pub far: f32,
}

impl Fog {
    /// Linear fog blend factor in `[0, 1]` at `view_depth` from the eye.
    #[inline]
    pub fn factor(&self, view_depth: f32) -> f32 {
        let t = ((view_depth - self.near) / (self.far - self.near)).clamp(0.0, 1.0);
        t * t * (3.0 - 2.0 * t)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: [f32; 3],
    pub intensity: f32,
    /// Unit vector pointing from the scene towards the light.
    pub direction: Vec3,
}

/// Additive, depth-write-free point sprite material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleMaterial {
    pub opacity: f32,
    pub point_size: f32,
}

impl Default for BubbleMaterial {
    fn default() -> Self {
        Self {
            opacity: BASE_OPACITY,
            point_size: BASE_POINT_SIZE,
        }
    }
}

pub struct BubbleScene {
    pub field: BubbleField,
    pub material: BubbleMaterial,
    pub camera: PerspectiveCamera,
    pub fog: Fog,
    pub light: DirectionalLight,
    last_depth: f32,
}

impl BubbleScene {
    pub fn new(count: usize, aspect: f32, rng: &mut impl Rng) -> Self {
        Self {
            field: BubbleField::new(count, rng),
            material: BubbleMaterial::default(),
            camera: PerspectiveCamera::new(
                CAMERA_FOV_DEG,
                aspect,
                CAMERA_NEAR,
                CAMERA_FAR,
                Vec3::new(0.0, 0.0, CAMERA_BASE_Z),
            ),
            fog: Fog {
                color: FOG_COLOR,
                near: FOG_NEAR,
                far: FOG_FAR,
            },
            light: DirectionalLight {
                color: LIGHT_COLOR,
                intensity: LIGHT_INTENSITY,
                direction: Vec3::from_array(LIGHT_DIRECTION).normalize(),
            },
            last_depth: 0.0,
        }
    }

    /// Apply one scroll event. Camera and material are overwritten; speeds
    /// decay cumulatively on top of whatever earlier events left.
    pub fn apply_scroll(&mut self, scroll_y: f32, viewport_h: f32) -> DepthModulation {
        let m = DepthModulation::from_scroll(scroll_y, viewport_h);
        self.camera.position.z = m.camera_z;
        self.material.opacity = m.opacity;
        self.material.point_size = m.point_size;
        self.field.decay_speeds(m.speed_decay, MIN_SPEED);
        self.last_depth = m.depth;
        m
    }

    /// Depth applied by the most recent scroll event.
    #[inline]
    pub fn depth(&self) -> f32 {
        self.last_depth
    }

    pub fn resize(&mut self, aspect: f32) {
        self.camera.set_aspect(aspect);
        self.camera.update_projection();
    }

    /// One animation frame of bubble motion. Returns the recycled count.
    #[inline]
    pub fn tick(&mut self, now_ms: f64, rng: &mut impl Rng) -> usize {
        self.field.step(now_ms, rng)
    }
}
