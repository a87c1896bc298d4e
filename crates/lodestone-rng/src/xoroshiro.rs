//! Xoroshiro128++ as used by Minecraft 1.18+ for climate noise seeding.
//!
//! Seeding goes through the golden/silver ratio constants and two rounds of
//! Stafford mix 13, matching the game's `XoroshiroRandomSource`.

const SILVER_RATIO_64: u64 = 0x6A09_E667_F3BC_C909;
const GOLDEN_RATIO_64: u64 = 0x9E37_79B9_7F4A_7C15;

fn mix_stafford_13(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Xoroshiro128++ generator with Minecraft's seeding scheme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xoroshiro128PlusPlus {
    lo: u64,
    hi: u64,
}

impl Xoroshiro128PlusPlus {
    /// Seeds from a single 64-bit world seed, the way the game expands one.
    pub fn from_seed(seed: u64) -> Self {
        let lo = seed ^ SILVER_RATIO_64;
        let hi = lo.wrapping_add(GOLDEN_RATIO_64);
        Self {
            lo: mix_stafford_13(lo),
            hi: mix_stafford_13(hi),
        }
    }

    /// Builds a generator directly from a 128-bit state.
    ///
    /// The all-zero state is unreachable for xoroshiro, so it is replaced by
    /// the ratio constants exactly as the game does.
    pub fn from_state(lo: u64, hi: u64) -> Self {
        if lo | hi == 0 {
            return Self {
                lo: GOLDEN_RATIO_64,
                hi: SILVER_RATIO_64,
            };
        }
        Self { lo, hi }
    }

    /// Returns the next pseudo-random `u64`.
    pub fn next_u64(&mut self) -> u64 {
        let (lo, hi) = (self.lo, self.hi);
        let result = lo.wrapping_add(hi).rotate_left(17).wrapping_add(lo);
        let t = hi ^ lo;
        self.lo = lo.rotate_left(49) ^ t ^ (t << 21);
        self.hi = t.rotate_left(28);
        result
    }

    /// Returns a uniform `f64` in `[0.0, 1.0)` from the top 53 bits.
    pub fn next_double(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Returns a uniform value in `[0, bound)` using Lemire rejection,
    /// matching the game's bounded draw.
    pub fn next_int_bound(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0, "bound must be positive");
        let mut r = (self.next_u64() & 0xFFFF_FFFF).wrapping_mul(bound as u64);
        if (r as u32) < bound {
            let threshold = bound.wrapping_neg() % bound;
            while (r as u32) < threshold {
                r = (self.next_u64() & 0xFFFF_FFFF).wrapping_mul(bound as u64);
            }
        }
        (r >> 32) as u32
    }

    /// Draws two values to derive an independent child state.
    ///
    /// Callers xor the returned pair with a noise-id hash before building the
    /// child generator, which decorrelates the per-parameter noise stacks.
    pub fn fork(&mut self) -> (u64, u64) {
        let lo = self.next_u64();
        let hi = self.next_u64();
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Expected values computed independently from the xoroshiro128++
    // reference algorithm with Minecraft's Stafford-mix seeding.

    #[test]
    fn test_from_seed_initial_state() {
        let rng = Xoroshiro128PlusPlus::from_seed(12345);
        assert_eq!(rng.lo, 0x0A2C_34E6_CA54_DD9E);
        assert_eq!(rng.hi, 0xCF82_8DAD_C78B_BEEB);
    }

    #[test]
    fn test_sequence_seed_zero() {
        let mut rng = Xoroshiro128PlusPlus::from_seed(0);
        assert_eq!(rng.next_u64(), 0x2A2C_A488_F66F_517E);
        assert_eq!(rng.next_u64(), 0xCCBC_22D7_2E97_C372);
        assert_eq!(rng.next_u64(), 0x404E_64B8_26F4_B9F4);
    }

    #[test]
    fn test_sequence_seed_12345() {
        let mut rng = Xoroshiro128PlusPlus::from_seed(12345);
        assert_eq!(rng.next_u64(), 0x8F55_58A8_0368_90FB);
        assert_eq!(rng.next_u64(), 0x725F_E51A_D193_097E);
        assert_eq!(rng.next_u64(), 0x3981_933F_E089_3743);
    }

    #[test]
    fn test_zero_state_is_replaced() {
        let mut a = Xoroshiro128PlusPlus::from_state(0, 0);
        let mut b = Xoroshiro128PlusPlus::from_state(GOLDEN_RATIO_64, SILVER_RATIO_64);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_next_double_in_unit_interval() {
        let mut rng = Xoroshiro128PlusPlus::from_seed(99);
        for _ in 0..1000 {
            let v = rng.next_double();
            assert!((0.0..1.0).contains(&v), "{v} out of [0, 1)");
        }
    }

    #[test]
    fn test_bounded_stays_in_range() {
        let mut rng = Xoroshiro128PlusPlus::from_seed(7);
        for bound in [1u32, 2, 3, 100, 256, 299_999] {
            for _ in 0..200 {
                let v = rng.next_int_bound(bound);
                assert!(v < bound, "{v} out of [0, {bound})");
            }
        }
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut a = Xoroshiro128PlusPlus::from_seed(555);
        let mut b = Xoroshiro128PlusPlus::from_seed(555);
        assert_eq!(a.fork(), b.fork());
    }
}
