//! Paired octave stacks sampled at slightly different domain scales.
//!
//! Climate parameters use two decorrelated octave stacks, the second
//! stretched by 337/331, which breaks up the axis-aligned artifacts a single
//! stack shows at low frequencies.

use lodestone_rng::{JavaRandom, Xoroshiro128PlusPlus};

use super::octave::OctaveNoise;

const DOMAIN_STRETCH: f64 = 337.0 / 331.0;

/// Two octave stacks summed with a length-dependent normalizing amplitude.
pub struct DoublePerlinNoise {
    first: OctaveNoise,
    second: OctaveNoise,
    amplitude: f64,
}

impl DoublePerlinNoise {
    /// Legacy construction from one LCG (Nether climate in 1.16–1.17).
    pub fn from_java(rng: &mut JavaRandom, count: u32, omin: i32) -> Self {
        Self {
            first: OctaveNoise::from_java(rng, count, omin),
            second: OctaveNoise::from_java(rng, count, omin),
            amplitude: normalizer(count as usize),
        }
    }

    /// 1.18+ construction from a parameter-specific xoroshiro state.
    pub fn from_xoroshiro(
        pxr: &mut Xoroshiro128PlusPlus,
        amplitudes: &[f64],
        omin: i32,
    ) -> Self {
        let (alo, ahi) = pxr.fork();
        let first = OctaveNoise::from_xoroshiro(alo, ahi, amplitudes, omin);
        let (blo, bhi) = pxr.fork();
        let second = OctaveNoise::from_xoroshiro(blo, bhi, amplitudes, omin);
        Self {
            first,
            second,
            amplitude: normalizer(amplitudes.len()),
        }
    }

    /// Samples the pair.
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let stretched = (
            x * DOMAIN_STRETCH,
            y * DOMAIN_STRETCH,
            z * DOMAIN_STRETCH,
        );
        (self.first.sample(x, y, z) + self.second.sample(stretched.0, stretched.1, stretched.2))
            * self.amplitude
    }
}

fn normalizer(len: usize) -> f64 {
    (10.0 / 6.0) * len as f64 / (len as f64 + 1.0)
}
