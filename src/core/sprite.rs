/// Procedural bubble sprite: a thin bright rim around a faint body with a
/// small specular highlight toward the upper left. Used when the bubble
/// texture cannot be fetched or decoded.
///
/// Returns `size * size` RGBA8 texels, row-major, top row first.
pub fn bubble_sprite_rgba(size: u32) -> Vec<u8> {
    let size = size.max(1);
    let mut out = Vec::with_capacity((size * size * 4) as usize);
    let inv = 1.0 / size as f32;
    for y in 0..size {
        for x in 0..size {
            // Texel center in [-1, 1]
            let u = ((x as f32 + 0.5) * inv) * 2.0 - 1.0;
            let v = ((y as f32 + 0.5) * inv) * 2.0 - 1.0;
            let r = (u * u + v * v).sqrt();

            let rim = smooth_band(r, 0.82, 0.95, 1.0);
            let body = 0.12 * (1.0 - smoothstep(0.0, 0.9, r));
            let hx = u + 0.35;
            let hy = v + 0.35;
            let highlight = 0.9 * (1.0 - smoothstep(0.0, 0.22, (hx * hx + hy * hy).sqrt()));

            let alpha = (rim + body + highlight).clamp(0.0, 1.0);
            out.extend_from_slice(&[255, 255, 255, (alpha * 255.0).round() as u8]);
        }
    }
    out
}

#[inline]
fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

// Rises from `lo` to a peak at `mid`, back to zero at `hi`.
#[inline]
fn smooth_band(x: f32, lo: f32, mid: f32, hi: f32) -> f32 {
    smoothstep(lo, mid, x) * (1.0 - smoothstep(mid, hi, x))
}
