pub mod depth;
pub mod particles;
pub mod scene;
pub mod scene_fx;
pub mod sprite;
pub mod viewport;

pub use depth::*;
pub use particles::*;
pub use scene::*;
pub use scene_fx::*;
pub use sprite::*;
pub use viewport::*;

// Shaders bundled as string constants
pub static BUBBLES_WGSL: &str = include_str!("../../shaders/bubbles.wgsl");
