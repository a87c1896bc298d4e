//! End biome sampling for 1.9+.
//!
//! Inside a 64-chunk radius everything is the central island. Outside it,
//! island height is derived from a seeded simplex field: rare low-noise
//! cells spawn islands whose height falls off with distance, and the biome
//! follows the height tier.

use lodestone_biome::Biome;
use lodestone_rng::JavaRandom;

use crate::noise::SimplexNoise;

// The island RNG draws this many values for other purposes before the
// simplex permutation is built.
const SIMPLEX_SKIP: u32 = 17292;

const INNER_RADIUS_SQ: i64 = 4096;

/// Seeded End island sampler.
pub struct EndSampler {
    noise: SimplexNoise,
}

impl EndSampler {
    pub fn new(world_seed: i64) -> Self {
        let mut rng = JavaRandom::new(world_seed);
        rng.skip(SIMPLEX_SKIP);
        Self {
            noise: SimplexNoise::new(&mut rng),
        }
    }

    /// Island height factor at a chunk position outside the central island.
    fn island_height(&self, cx: i32, cz: i32) -> f64 {
        let dist_sq = cx as i64 * cx as i64 + cz as i64 * cz as i64;
        let mut height = (100.0 - (dist_sq as f64).sqrt() * 8.0).clamp(-100.0, 80.0);

        for j in -2..=2i32 {
            for i in -2..=2i32 {
                let rx = cx + i;
                let rz = cz + j;
                let r_sq = rx as i64 * rx as i64 + rz as i64 * rz as i64;
                if r_sq > INNER_RADIUS_SQ && self.noise.sample2(rx as f64, rz as f64) < -0.9 {
                    let m = ((rx.unsigned_abs() as u64 * 3439 + rz.unsigned_abs() as u64 * 147)
                        % 13
                        + 9) as f64;
                    let d = ((i * i + j * j) as f64).sqrt();
                    height = height.max((100.0 - d * m).clamp(-100.0, 80.0));
                }
            }
        }
        height
    }

    /// Biome at a chunk position.
    pub fn sample_biome(&self, cx: i32, cz: i32) -> Biome {
        let dist_sq = cx as i64 * cx as i64 + cz as i64 * cz as i64;
        if dist_sq <= INNER_RADIUS_SQ {
            return Biome::THE_END;
        }
        let height = self.island_height(cx, cz);
        if height > 40.0 {
            Biome::END_HIGHLANDS
        } else if height >= 0.0 {
            Biome::END_MIDLANDS
        } else if height >= -20.0 {
            Biome::END_BARRENS
        } else {
            Biome::SMALL_END_ISLANDS
        }
    }
}
