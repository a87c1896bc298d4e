//! Nether biome sampling for 1.16+.
//!
//! The five Nether biomes sit at fixed points in a temperature/humidity
//! plane; each sample picks the closest point, with a per-biome offset that
//! shrinks the warped forest and basalt delta territories.

use lodestone_biome::Biome;
use lodestone_rng::JavaRandom;

use crate::noise::DoublePerlinNoise;

const POINTS: [(Biome, f64, f64, f64); 5] = [
    (Biome::NETHER_WASTES, 0.0, 0.0, 0.0),
    (Biome::SOUL_SAND_VALLEY, 0.0, -0.5, 0.0),
    (Biome::CRIMSON_FOREST, 0.4, 0.0, 0.0),
    (Biome::WARPED_FOREST, 0.0, 0.5, 0.140_625),
    (Biome::BASALT_DELTAS, -0.5, 0.0, 0.030_625),
];

/// Seeded Nether climate sampler.
pub struct NetherSampler {
    temperature: DoublePerlinNoise,
    humidity: DoublePerlinNoise,
}

impl NetherSampler {
    pub fn new(world_seed: i64) -> Self {
        Self {
            temperature: DoublePerlinNoise::from_java(&mut JavaRandom::new(world_seed), 2, -7),
            humidity: DoublePerlinNoise::from_java(
                &mut JavaRandom::new(world_seed.wrapping_add(1)),
                2,
                -7,
            ),
        }
    }

    /// Biome at a quart position.
    pub fn sample_biome(&self, qx: i32, qz: i32) -> Biome {
        let t = self.temperature.sample(qx as f64, 0.0, qz as f64);
        let h = self.humidity.sample(qx as f64, 0.0, qz as f64);

        let mut best = Biome::NETHER_WASTES;
        let mut best_distance = f64::INFINITY;
        for (biome, pt, ph, offset) in POINTS {
            let distance = (t - pt) * (t - pt) + (h - ph) * (h - ph) + offset;
            if distance < best_distance {
                best = biome;
                best_distance = distance;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lodestone_biome::Dimension;

    #[test]
    fn test_deterministic_across_constructions() {
        let a = NetherSampler::new(666);
        let b = NetherSampler::new(666);
        for i in 0..64 {
            let (qx, qz) = (i * 31 - 1000, i * -17 + 300);
            assert_eq!(a.sample_biome(qx, qz), b.sample_biome(qx, qz));
        }
    }

    #[test]
    fn test_only_nether_biomes() {
        let sampler = NetherSampler::new(-40);
        for i in 0..200 {
            let biome = sampler.sample_biome(i * 13 - 1300, i * 7 - 700);
            assert_eq!(biome.dimension(), Some(Dimension::Nether), "{biome:?}");
        }
    }

    #[test]
    fn test_multiple_biomes_present() {
        let sampler = NetherSampler::new(12345);
        let distinct: std::collections::HashSet<_> = (0..60)
            .flat_map(|i| (0..60).map(move |j| (i * 40 - 1200, j * 40 - 1200)))
            .map(|(qx, qz)| sampler.sample_biome(qx, qz))
            .collect();
        assert!(
            distinct.len() >= 3,
            "expected several Nether biomes over a wide area, got {distinct:?}"
        );
    }

    #[test]
    fn test_seed_sensitivity() {
        let a = NetherSampler::new(1);
        let b = NetherSampler::new(2);
        let differing = (0..200)
            .filter(|&i| {
                let (qx, qz) = (i * 29 - 2900, i * 41 - 4100);
                a.sample_biome(qx, qz) != b.sample_biome(qx, qz)
            })
            .count();
        assert!(differing > 20, "only {differing} samples differ");
    }
}
