//! Octave stacks over Perlin noise, with both seeding schemes.

use lodestone_rng::{JavaRandom, Xoroshiro128PlusPlus};

use super::perlin::PerlinNoise;

/// MD5 digests of the octave ids `"octave_-12"` … `"octave_0"`, split into
/// two little-endian u64 halves. 1.18+ decorrelates per-octave generators by
/// xor-ing these into the forked xoroshiro state; the digests are baked in so
/// the engine never hashes at runtime.
const MD5_OCTAVE_N: [(u64, u64); 13] = [
    (0x722601A863DE98B1, 0xA8B5F73ED4CA847B), // octave_-12
    (0xC33E40BCBF87D70F, 0xB8481BA21CA3A474), // octave_-11
    (0xB2FE0ED4EE26D336, 0x6A633C2218CEE95B), // octave_-10
    (0x3166BEF855E22F08, 0x81DCDE229E11964E), // octave_-9
    (0x5E000485C68EF60E, 0x409678A293BFB648), // octave_-8
    (0x4F758289126812F1, 0xAAB03004671D7A25), // octave_-7
    (0x64E61D7DCE981CE5, 0x450C0433A778945F), // octave_-6
    (0x0A8529E4E7497B6D, 0x7747A222C663302E), // octave_-5
    (0x62B7A17B37D590BD, 0x8D54A719D41773C0), // octave_-4
    (0x58C8DA52679CD353, 0x3E5BB60AA8C5D1BC), // octave_-3
    (0x7B67E7847A4DA2B4, 0xC4B5898E66F93F02), // octave_-2
    (0x08F6C534B522FADF, 0xA95C66D31775B6B9), // octave_-1
    (0x7C4DEF6C080807D5, 0x0933F4C7EC51166E), // octave_0
];

struct Octave {
    noise: PerlinNoise,
    amplitude: f64,
    lacunarity: f64,
}

/// A weighted sum of Perlin octaves at doubling frequencies.
pub struct OctaveNoise {
    octaves: Vec<Octave>,
}

impl OctaveNoise {
    /// Legacy construction: `count` octaves drawn back-to-back from one LCG,
    /// starting at frequency `2^omin`.
    pub fn from_java(rng: &mut JavaRandom, count: u32, omin: i32) -> Self {
        let mut lacunarity = (omin as f64).exp2();
        let mut amplitude = ((count - 1) as f64).exp2() / ((count as f64).exp2() - 1.0);
        let mut octaves = Vec::with_capacity(count as usize);
        for _ in 0..count {
            octaves.push(Octave {
                noise: PerlinNoise::from_java(rng),
                amplitude,
                lacunarity,
            });
            lacunarity *= 2.0;
            amplitude *= 0.5;
        }
        Self { octaves }
    }

    /// 1.18+ construction: one decorrelated generator per non-zero amplitude,
    /// derived from the forked state `(xlo, xhi)` and the octave-id digest.
    pub fn from_xoroshiro(xlo: u64, xhi: u64, amplitudes: &[f64], omin: i32) -> Self {
        let len = amplitudes.len();
        let mut lacunarity = (omin as f64).exp2();
        let mut persistence = ((len - 1) as f64).exp2() / ((len as f64).exp2() - 1.0);
        let mut octaves = Vec::with_capacity(len);
        for (i, &amp) in amplitudes.iter().enumerate() {
            if amp != 0.0 {
                let (md5_lo, md5_hi) = MD5_OCTAVE_N[(12 + omin + i as i32) as usize];
                let mut pxr = Xoroshiro128PlusPlus::from_state(xlo ^ md5_lo, xhi ^ md5_hi);
                octaves.push(Octave {
                    noise: PerlinNoise::from_xoroshiro(&mut pxr),
                    amplitude: amp * persistence,
                    lacunarity,
                });
            }
            lacunarity *= 2.0;
            persistence *= 0.5;
        }
        Self { octaves }
    }

    /// Samples the weighted octave sum.
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let mut total = 0.0;
        for oct in &self.octaves {
            total += oct.amplitude
                * oct
                    .noise
                    .sample(x * oct.lacunarity, y * oct.lacunarity, z * oct.lacunarity);
        }
        total
    }

    /// Number of live octaves (zero-amplitude slots are dropped).
    pub fn octave_count(&self) -> usize {
        self.octaves.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_deterministic() {
        let a = OctaveNoise::from_java(&mut JavaRandom::new(77), 4, -3);
        let b = OctaveNoise::from_java(&mut JavaRandom::new(77), 4, -3);
        for i in 0..64 {
            let p = i as f64 * 1.37;
            assert_eq!(a.sample(p, 0.0, -p), b.sample(p, 0.0, -p));
        }
    }

    #[test]
    fn test_xoroshiro_skips_zero_amplitudes() {
        let stack = OctaveNoise::from_xoroshiro(123, 456, &[1.0, 0.0, 1.0, 0.0], -4);
        assert_eq!(stack.octave_count(), 2);
    }

    #[test]
    fn test_xoroshiro_octaves_are_decorrelated_by_id() {
        let a = OctaveNoise::from_xoroshiro(1, 2, &[1.0, 0.0], -4);
        let b = OctaveNoise::from_xoroshiro(1, 2, &[0.0, 1.0], -4);
        // Different octave ids must give different tables, hence different
        // samples virtually everywhere.
        let differing = (0..32)
            .filter(|&i| {
                let p = i as f64 * 0.61 + 0.13;
                a.sample(p, 0.0, p) != b.sample(p * 2.0, 0.0, p * 2.0)
            })
            .count();
        assert!(differing > 16);
    }

    #[test]
    fn test_amplitudes_normalize_below_one() {
        let stack = OctaveNoise::from_java(&mut JavaRandom::new(5), 6, -5);
        for i in -40..40 {
            let v = stack.sample(i as f64 * 0.73, 0.0, i as f64 * 0.31);
            assert!(v.abs() < 1.5, "octave sum {v} out of range");
        }
    }
}
