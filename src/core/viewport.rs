/// Window size in CSS pixels plus the device pixel ratio, as sampled from
/// `window` on load and on every resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f64,
    pub css_height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    #[inline]
    pub fn aspect(&self) -> f32 {
        (self.css_width / self.css_height) as f32
    }

    /// Device pixel ratio capped at `max_ratio`; non-positive ratios count as 1.
    #[inline]
    pub fn pixel_ratio(&self, max_ratio: f64) -> f64 {
        if self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio.min(max_ratio)
        } else {
            1.0
        }
    }

    /// Backing-store size in physical pixels, never smaller than 1x1.
    pub fn backing_size(&self, max_ratio: f64) -> (u32, u32) {
        let ratio = self.pixel_ratio(max_ratio);
        let w = (self.css_width.max(0.0) * ratio).floor() as u32;
        let h = (self.css_height.max(0.0) * ratio).floor() as u32;
        (w.max(1), h.max(1))
    }
}
