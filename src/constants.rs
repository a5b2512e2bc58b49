// Page wiring and renderer setup constants.
//
// Simulation tuning (speeds, depth response) lives next to the code that
// uses it in `core/`; this file holds what the page and the GPU layer agree on.

// DOM hooks
pub const CANVAS_ID: &str = "webgl";
pub const SCENE_SELECTOR: &str = ".scene";
pub const BUBBLE_TEXTURE_URL: &str = "./assets/bubble.png";

// Fog (linear, world units from the eye)
pub const FOG_COLOR: [f32; 3] = [4.0 / 255.0, 16.0 / 255.0, 28.0 / 255.0]; // #04101c
pub const FOG_NEAR: f32 = 2.0;
pub const FOG_FAR: f32 = 18.0;

// Camera
pub const CAMERA_FOV_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// Soft key light
pub const LIGHT_COLOR: [f32; 3] = [159.0 / 255.0, 220.0 / 255.0, 1.0]; // #9fdcff
pub const LIGHT_INTENSITY: f32 = 0.4;
pub const LIGHT_DIRECTION: [f32; 3] = [1.0, 1.0, 1.0];

// Canvas backing store
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const MSAA_SAMPLES: u32 = 4;

// Procedural sprite used when the bubble texture cannot be loaded
pub const FALLBACK_SPRITE_SIZE: u32 = 64;
