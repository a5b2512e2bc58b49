// Scroll-to-depth mapping.
//
// One page viewport of scrolling equals one unit of simulated depth, capped
// at `MAX_DEPTH`. Every visual that "sinks" with the reader is a function of
// this scalar, except the camera which follows the raw scroll offset.

// Depth range
pub const MAX_DEPTH: f32 = 4.0;

// Camera dive
pub const CAMERA_BASE_Z: f32 = 6.0;
pub const CAMERA_Z_PER_SCROLL_PX: f32 = 0.001;

// Bubble material at the surface and its fade with depth
pub const BASE_OPACITY: f32 = 0.35;
pub const MIN_OPACITY: f32 = 0.08;
pub const OPACITY_LOSS_PER_DEPTH: f32 = 0.08;

pub const BASE_POINT_SIZE: f32 = 0.14;
pub const MIN_POINT_SIZE: f32 = 0.1;
pub const SIZE_SHRINK_PER_DEPTH: f32 = 0.18;

// Per-event speed decay
pub const SPEED_DECAY_PER_DEPTH: f32 = 0.02;
pub const MIN_SPEED: f32 = 0.002;

/// Depth scalar for a scroll offset, in `[0, MAX_DEPTH]`.
///
/// Negative offsets (elastic overscroll) and degenerate viewports map to the
/// surface.
#[inline]
pub fn depth_for_scroll(scroll_y: f32, viewport_h: f32) -> f32 {
    if viewport_h.is_nan() || viewport_h <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / viewport_h).clamp(0.0, MAX_DEPTH)
}

#[inline]
pub fn camera_z_for_scroll(scroll_y: f32) -> f32 {
    CAMERA_BASE_Z + scroll_y * CAMERA_Z_PER_SCROLL_PX
}

#[inline]
pub fn opacity_for_depth(depth: f32) -> f32 {
    (BASE_OPACITY - depth * OPACITY_LOSS_PER_DEPTH).max(MIN_OPACITY)
}

#[inline]
pub fn point_size_for_depth(depth: f32) -> f32 {
    (BASE_POINT_SIZE * (1.0 - depth * SIZE_SHRINK_PER_DEPTH)).max(MIN_POINT_SIZE)
}

/// Multiplier applied to every particle speed for one scroll event.
#[inline]
pub fn speed_decay_for_depth(depth: f32) -> f32 {
    1.0 - depth * SPEED_DECAY_PER_DEPTH
}

/// Everything a single scroll event pushes into the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthModulation {
    pub depth: f32,
    pub camera_z: f32,
    pub opacity: f32,
    pub point_size: f32,
    pub speed_decay: f32,
}

impl DepthModulation {
    pub fn from_scroll(scroll_y: f32, viewport_h: f32) -> Self {
        let depth = depth_for_scroll(scroll_y, viewport_h);
        Self {
            depth,
            camera_z: camera_z_for_scroll(scroll_y),
            opacity: opacity_for_depth(depth),
            point_size: point_size_for_depth(depth),
            speed_decay: speed_decay_for_depth(depth),
        }
    }
}
