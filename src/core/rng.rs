//! RNG module - deterministic color drawing for spawned blocks.
//!
//! A simple LCG keeps simulation runs reproducible from a seed; the
//! engine itself never needs randomness, only the spawner does.

use crate::types::ColorTag;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Draws uniformly random colors from a fixed palette.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    rng: SimpleRng,
    palette_size: u8,
}

impl ColorPicker {
    pub fn new(seed: u32, palette_size: u8) -> Self {
        let palette_size = palette_size.max(1);
        Self {
            rng: SimpleRng::new(seed),
            palette_size,
        }
    }

    pub fn palette_size(&self) -> u8 {
        self.palette_size
    }

    pub fn draw(&mut self) -> ColorTag {
        ColorTag(self.rng.next_range(self.palette_size as u32) as u8)
    }
}
