// Geometry rules for the page sections: when a section reveals, and how
// strongly its text fades and blurs with distance from the viewport center.
// The DOM side lives in `scenes.rs`; everything here works on plain numbers.

/// Fraction of viewport height a section's top must rise above to reveal.
pub const REVEAL_THRESHOLD: f64 = 0.8;

pub const TEXT_MIN_OPACITY: f64 = 0.35;
pub const TEXT_FADE_DISTANCE_PX: f64 = 600.0;
pub const TEXT_MAX_BLUR_PX: f64 = 2.0;
pub const TEXT_BLUR_DISTANCE_PX: f64 = 400.0;

pub const CSS_VAR_OPACITY: &str = "--depth-opacity";
pub const CSS_VAR_BLUR: &str = "--depth-blur";
pub const ACTIVE_CLASS: &str = "active";

#[inline]
pub fn should_reveal(top: f64, viewport_h: f64) -> bool {
    top < viewport_h * REVEAL_THRESHOLD
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextDepth {
    pub opacity: f64,
    pub blur_px: f64,
}

impl TextDepth {
    /// Opacity and blur for a section at `distance` px from viewport center.
    pub fn at_distance(distance: f64) -> Self {
        let distance = distance.abs();
        Self {
            opacity: (1.0 - distance / TEXT_FADE_DISTANCE_PX).max(TEXT_MIN_OPACITY),
            blur_px: (distance / TEXT_BLUR_DISTANCE_PX).min(TEXT_MAX_BLUR_PX),
        }
    }

    /// Value for `--depth-opacity`, e.g. `"0.83"`.
    pub fn css_opacity(&self) -> String {
        format!("{:.2}", self.opacity)
    }

    /// Value for `--depth-blur`, e.g. `"0.25px"`.
    pub fn css_blur(&self) -> String {
        format!("{:.2}px", self.blur_px)
    }
}

/// Distance between a section's vertical center and the viewport's.
#[inline]
pub fn center_distance(top: f64, height: f64, viewport_h: f64) -> f64 {
    ((top + height / 2.0) - viewport_h / 2.0).abs()
}

#[inline]
pub fn text_depth(top: f64, height: f64, viewport_h: f64) -> TextDepth {
    TextDepth::at_distance(center_distance(top, height, viewport_h))
}
