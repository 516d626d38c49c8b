use crate::random::seeding::Seed;

const INCREMENT: u32 = 0x6D2B_79F5;
const NORMALIZER: f64 = 4_294_967_296.0; // 2^32

/// Seeded 32-bit pseudo-random stream.
///
/// Each draw adds a fixed increment to the state and mixes it with two
/// xor-shift/multiply rounds and a final xor-shift. All arithmetic wraps at
/// 32 bits, so the sequence for a given seed is identical on every platform.
///
/// A stream is owned by exactly one generation call and is intentionally
/// not `Clone`.
#[derive(Debug)]
pub struct RandomStream {
    state: u32,
}

impl RandomStream {
    pub fn new(seed: Seed) -> Self {
        Self { state: seed.value() }
    }

    /// Next raw mixed word.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);

        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next_u32() as f64 / NORMALIZER;
        debug_assert!((0.0..1.0).contains(&value), "draw {value} out of range [0, 1)");
        value
    }

    /// Next value in `[-span / 2, span / 2)`.
    pub fn next_centered(&mut self, span: f64) -> f64 {
        (self.next_f64() - 0.5) * span
    }
}

impl Iterator for RandomStream {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}
