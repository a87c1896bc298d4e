//! Beta-era Overworld climate generation.
//!
//! Beta worlds pick biomes from a temperature/humidity table fed by three
//! legacy octave stacks. There are no layers and no rivers; the climate
//! fields vary at block resolution.

use lodestone_biome::Biome;
use lodestone_rng::JavaRandom;

use crate::noise::OctaveNoise;

// Sum of the legacy per-octave amplitudes for the 4-octave climate stacks
// and the 2-octave detail stack.
const CLIMATE_SPAN: f64 = 15.0;
const DETAIL_SPAN: f64 = 3.0;

/// Seeded beta climate sampler.
pub struct BetaClimateSampler {
    temperature: OctaveNoise,
    humidity: OctaveNoise,
    detail: OctaveNoise,
}

impl BetaClimateSampler {
    pub fn new(world_seed: i64) -> Self {
        Self {
            temperature: OctaveNoise::from_java(
                &mut JavaRandom::new(world_seed.wrapping_mul(9871)),
                4,
                -3,
            ),
            humidity: OctaveNoise::from_java(
                &mut JavaRandom::new(world_seed.wrapping_mul(39811)),
                4,
                -3,
            ),
            detail: OctaveNoise::from_java(
                &mut JavaRandom::new(world_seed.wrapping_mul(543_321)),
                2,
                -1,
            ),
        }
    }

    /// Temperature and humidity at a block position, both clamped to [0, 1].
    ///
    /// The legacy fields feed raw octave sums with amplitudes `1..2^(n-1)`
    /// into the climate factors. `OctaveNoise` weights its `n` octaves to a
    /// unit sum, so the samples are scaled back up by `2^n - 1` before the
    /// table math; without that the fields barely leave the middle of the
    /// table and every block classifies the same.
    pub fn climate(&self, bx: i32, bz: i32) -> (f64, f64) {
        let x = bx as f64;
        let z = bz as f64;
        let d = self.detail.sample(x * 0.25, 0.0, z * 0.25) * DETAIL_SPAN * 1.1 + 0.5;

        let t = self.temperature.sample(x * 0.025, 0.0, z * 0.025) * CLIMATE_SPAN * 0.15 + 0.7;
        let t = (t * 0.99 + d * 0.01).clamp(0.0, 1.0);
        let t = 1.0 - (1.0 - t) * (1.0 - t);

        let h = self.humidity.sample(x * 0.05, 0.0, z * 0.05) * CLIMATE_SPAN * 0.15 + 0.5;
        let h = (h * 0.998 + d * 0.002).clamp(0.0, 1.0);

        (t, h)
    }

    /// Biome at a block position.
    pub fn sample_biome(&self, bx: i32, bz: i32) -> Biome {
        let (t, h) = self.climate(bx, bz);
        biome_from_climate(t, h)
    }
}

/// The beta biome table, keyed on temperature and rainfall (humidity scaled
/// by temperature, as the table expects).
fn biome_from_climate(t: f64, h: f64) -> Biome {
    let rain = t * h;
    if t < 0.1 {
        return Biome::SNOWY_PLAINS;
    }
    if rain < 0.2 {
        if t < 0.5 {
            return Biome::SNOWY_PLAINS;
        }
        return if t < 0.95 { Biome::SAVANNA } else { Biome::DESERT };
    }
    if rain > 0.5 && t < 0.7 {
        return Biome::SWAMP;
    }
    if t < 0.5 {
        return Biome::TAIGA;
    }
    if t < 0.97 {
        return if rain < 0.35 { Biome::PLAINS } else { Biome::FOREST };
    }
    if rain < 0.45 {
        Biome::PLAINS
    } else if rain < 0.9 {
        Biome::FOREST
    } else {
        Biome::JUNGLE
    }
}
