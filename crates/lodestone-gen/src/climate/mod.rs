//! Multi-noise climate sampling for 1.18+ Overworlds.
//!
//! Each climate parameter is a double Perlin stack seeded from a fork of the
//! world's xoroshiro state xor-ed with the MD5 digest of the parameter's
//! resource id. Sampling happens at quart (1:4) resolution; a coordinate
//! shift noise jitters the sample point so climate boundaries do not land on
//! straight quart lines.

mod chart;

use lodestone_biome::{Biome, McVersion};
use lodestone_rng::Xoroshiro128PlusPlus;

use crate::noise::DoublePerlinNoise;

// MD5 digests of the parameter resource ids, little-endian u64 halves.
const MD5_SHIFT: (u64, u64) = (0x8453_F26A_CF18_0508, 0xD5EB_4FA5_40FB_3D3F);
const MD5_TEMPERATURE: (u64, u64) = (0x7F0D_5F73_296B_7E5C, 0x8849_73BC_1B6F_D8F7);
const MD5_VEGETATION: (u64, u64) = (0x8E16_DCE8_224D_BB81, 0xCD03_63A1_BEB4_C8F1);
const MD5_CONTINENTALNESS: (u64, u64) = (0x62A6_E30A_9D6C_8883, 0xADE8_421B_A638_A6AF);
const MD5_EROSION: (u64, u64) = (0xD86F_8F05_E691_24D0, 0x807A_C194_2C51_9247);
const MD5_RIDGE: (u64, u64) = (0x342B_1036_4DEF_C8EF, 0xEA24_0F4A_32EB_EE1B);
const MD5_TEMPERATURE_LARGE: (u64, u64) = (0xDB49_F5ED_7300_4B94, 0x962B_D2E9_4743_F44F);
const MD5_VEGETATION_LARGE: (u64, u64) = (0x0153_BD3D_94AB_B871, 0x2B7A_FF39_CFDD_63BB);
const MD5_CONTINENTALNESS_LARGE: (u64, u64) = (0xDCE8_FC13_A151_3F9A, 0xADCD_5D7E_15BD_2DEE);
const MD5_EROSION_LARGE: (u64, u64) = (0x51A9_0287_1F4B_988C, 0x5F53_AE2B_F9B1_D7EA);

/// The five climate parameters at one sample point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClimatePoint {
    pub temperature: f64,
    pub humidity: f64,
    pub continentalness: f64,
    pub erosion: f64,
    pub weirdness: f64,
}

/// Seeded multi-noise climate sampler for one world.
pub struct ClimateSampler {
    shift: DoublePerlinNoise,
    temperature: DoublePerlinNoise,
    humidity: DoublePerlinNoise,
    continentalness: DoublePerlinNoise,
    erosion: DoublePerlinNoise,
    weirdness: DoublePerlinNoise,
    version: McVersion,
}

impl ClimateSampler {
    pub fn new(version: McVersion, large_biomes: bool, world_seed: i64) -> Self {
        let mut xr = Xoroshiro128PlusPlus::from_seed(world_seed as u64);
        let (xlo, xhi) = xr.fork();

        let param = |md5: (u64, u64), amplitudes: &[f64], omin: i32| {
            let mut pxr = Xoroshiro128PlusPlus::from_state(xlo ^ md5.0, xhi ^ md5.1);
            DoublePerlinNoise::from_xoroshiro(&mut pxr, amplitudes, omin)
        };

        let (t_md5, h_md5, c_md5, e_md5) = if large_biomes {
            (
                MD5_TEMPERATURE_LARGE,
                MD5_VEGETATION_LARGE,
                MD5_CONTINENTALNESS_LARGE,
                MD5_EROSION_LARGE,
            )
        } else {
            (MD5_TEMPERATURE, MD5_VEGETATION, MD5_CONTINENTALNESS, MD5_EROSION)
        };
        let lo = if large_biomes { -2 } else { 0 };

        Self {
            shift: param(MD5_SHIFT, &[1.0, 1.0, 1.0, 0.0], -3),
            temperature: param(t_md5, &[1.5, 0.0, 1.0, 0.0, 0.0, 0.0], -10 + lo),
            humidity: param(h_md5, &[1.0, 1.0, 0.0, 0.0, 0.0, 0.0], -8 + lo),
            continentalness: param(
                c_md5,
                &[1.0, 1.0, 2.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0],
                -9 + lo,
            ),
            erosion: param(e_md5, &[1.0, 1.0, 0.0, 1.0, 1.0], -9 + lo),
            weirdness: param(MD5_RIDGE, &[1.0, 2.0, 1.0, 0.0, 0.0, 0.0], -7),
            version,
        }
    }

    /// Raw climate parameters at a quart position.
    pub fn sample_point(&self, qx: i32, qz: i32) -> ClimatePoint {
        let x = qx as f64;
        let z = qz as f64;
        let px = x + self.shift.sample(x, 0.0, z) * 4.0;
        let pz = z + self.shift.sample(z, x, 0.0) * 4.0;
        ClimatePoint {
            temperature: self.temperature.sample(px, 0.0, pz),
            humidity: self.humidity.sample(px, 0.0, pz),
            continentalness: self.continentalness.sample(px, 0.0, pz),
            erosion: self.erosion.sample(px, 0.0, pz),
            weirdness: self.weirdness.sample(px, 0.0, pz),
        }
    }

    /// Surface biome at a quart position.
    pub fn sample_biome(&self, qx: i32, qz: i32) -> Biome {
        chart::resolve(self.version, self.sample_point(qx, qz))
    }
}
