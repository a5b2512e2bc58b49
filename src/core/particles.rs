// Fixed-size bubble field.
//
// Particles are stored as flat parallel arrays so the position slice can be
// handed to the GPU as-is (`[x, y, z]` per particle, tightly packed). The
// arrays are allocated once in [`BubbleField::new`] and never resized.

use glam::Vec3;
use rand::Rng;

pub const BUBBLE_COUNT: usize = 200;

// Spawn volume
pub const SPAWN_X_HALF_WIDTH: f32 = 5.0;
pub const SPAWN_Y_MIN: f32 = -20.0;
pub const SPAWN_Z_HALF_DEPTH: f32 = 3.0;

// Initial rise speed range (per frame, before the rise factor)
pub const SPEED_MIN: f32 = 0.005;
pub const SPEED_SPAN: f32 = 0.01;

// Motion
pub const RISE_FACTOR: f32 = 0.6;
pub const SWAY_FREQ_PER_MS: f64 = 0.0005;
pub const SWAY_AMPLITUDE: f32 = 0.0006;

/// Height above which a bubble leaves the visible column and is recycled.
pub const RECYCLE_Y: f32 = 4.0;
/// Height a recycled bubble restarts from.
pub const RESPAWN_Y: f32 = -20.0;

pub struct BubbleField {
    positions: Vec<f32>,
    speeds: Vec<f32>,
    // Generated for every bubble but not read by the simulation.
    sizes: Vec<f32>,
    dirty: bool,
}

impl BubbleField {
    pub fn new(count: usize, rng: &mut impl Rng) -> Self {
        let mut positions = Vec::with_capacity(count * 3);
        let mut speeds = Vec::with_capacity(count);
        let mut sizes = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(rng.gen_range(-SPAWN_X_HALF_WIDTH..=SPAWN_X_HALF_WIDTH));
            positions.push(rng.gen_range(SPAWN_Y_MIN..=0.0));
            positions.push(rng.gen_range(-SPAWN_Z_HALF_DEPTH..=SPAWN_Z_HALF_DEPTH));
            speeds.push(SPEED_MIN + rng.gen::<f32>() * SPEED_SPAN);
            sizes.push(rng.gen::<f32>());
        }
        Self {
            positions,
            speeds,
            sizes,
            dirty: true,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.speeds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }

    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[i * 3..i * 3 + 3])
    }

    #[inline]
    pub fn set_position(&mut self, i: usize, p: Vec3) {
        p.write_to_slice(&mut self.positions[i * 3..i * 3 + 3]);
        self.dirty = true;
    }

    /// Packed `[x, y, z]` triples, `3 * len()` floats.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    #[inline]
    pub fn speeds(&self) -> &[f32] {
        &self.speeds
    }

    #[inline]
    pub fn speeds_mut(&mut self) -> &mut [f32] {
        &mut self.speeds
    }

    #[inline]
    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Advance every bubble by one frame.
    ///
    /// `now_ms` is wall-clock milliseconds; each bubble sways with a phase
    /// offset equal to its index. Bubbles that rise past `RECYCLE_Y` restart
    /// at the bottom with a fresh lateral position in the same pass.
    /// Returns how many bubbles were recycled.
    pub fn step(&mut self, now_ms: f64, rng: &mut impl Rng) -> usize {
        let mut recycled = 0;
        for (i, (p, speed)) in self
            .positions
            .chunks_exact_mut(3)
            .zip(self.speeds.iter())
            .enumerate()
        {
            p[1] += speed * RISE_FACTOR;
            p[0] += (now_ms * SWAY_FREQ_PER_MS + i as f64).sin() as f32 * SWAY_AMPLITUDE;
            if p[1] > RECYCLE_Y {
                p[1] = RESPAWN_Y;
                p[0] = rng.gen_range(-SPAWN_X_HALF_WIDTH..=SPAWN_X_HALF_WIDTH);
                recycled += 1;
            }
        }
        self.dirty = true;
        recycled
    }

    /// Scale every speed by `factor`, never going below `floor`.
    ///
    /// Compounds across calls: the field keeps no baseline to reset from.
    pub fn decay_speeds(&mut self, factor: f32, floor: f32) {
        for s in &mut self.speeds {
            *s = (*s * factor).max(floor);
        }
    }

    /// Returns whether positions changed since the last call, clearing the flag.
    #[inline]
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}
