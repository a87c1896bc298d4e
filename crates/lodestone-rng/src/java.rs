//! The 48-bit linear congruential generator used by `java.util.Random`.
//!
//! World seeds, legacy noise tables, and pre-1.18 layer state are all
//! derived through this generator, so it must match Java's output exactly.

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const INCREMENT: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// Bit-compatible reimplementation of `java.util.Random`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JavaRandom {
    state: u64,
}

impl JavaRandom {
    /// Creates a generator with the given seed, scrambled the way Java does.
    pub fn new(seed: i64) -> Self {
        Self {
            state: (seed as u64 ^ MULTIPLIER) & MASK,
        }
    }

    /// Re-seeds in place, discarding all prior state.
    pub fn set_seed(&mut self, seed: i64) {
        self.state = (seed as u64 ^ MULTIPLIER) & MASK;
    }

    fn next(&mut self, bits: u32) -> i32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MASK;
        (self.state >> (48 - bits)) as i32
    }

    /// Returns the next pseudo-random `i32` over the full range.
    pub fn next_int(&mut self) -> i32 {
        self.next(32)
    }

    /// Returns a uniform value in `[0, bound)`. `bound` must be positive.
    pub fn next_int_bound(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0, "bound must be positive, got {bound}");
        // Power-of-two bounds take the high bits directly.
        if bound & bound.wrapping_neg() == bound {
            return ((bound as i64).wrapping_mul(self.next(31) as i64) >> 31) as i32;
        }
        loop {
            let bits = self.next(31);
            let val = bits % bound;
            if bits.wrapping_sub(val).wrapping_add(bound - 1) >= 0 {
                return val;
            }
        }
    }

    /// Returns the next pseudo-random `i64`.
    pub fn next_long(&mut self) -> i64 {
        let hi = self.next(32) as i64;
        let lo = self.next(32) as i64;
        (hi << 32).wrapping_add(lo)
    }

    /// Returns a uniform `f64` in `[0.0, 1.0)`.
    pub fn next_double(&mut self) -> f64 {
        let hi = (self.next(26) as i64) << 27;
        let lo = self.next(27) as i64;
        (hi + lo) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Returns a uniform `f32` in `[0.0, 1.0)`.
    pub fn next_float(&mut self) -> f32 {
        self.next(24) as f32 * (1.0 / (1u32 << 24) as f32)
    }

    /// Advances the generator by `n` draws without producing output.
    ///
    /// Equivalent to `n` calls of `next_int` but without the shifts; used by
    /// samplers that must line up with a fixed draw budget (e.g. the End
    /// island noise skips 17292 draws).
    pub fn skip(&mut self, n: u32) {
        for _ in 0..n {
            self.state = self
                .state
                .wrapping_mul(MULTIPLIER)
                .wrapping_add(INCREMENT)
                & MASK;
        }
    }
}
