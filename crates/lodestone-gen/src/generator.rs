//! The seeded generator facade.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use lodestone_biome::{Biome, Dimension, GeneratorFlags, McVersion};

use crate::beta::BetaClimateSampler;
use crate::climate::ClimateSampler;
use crate::end::EndSampler;
use crate::error::GeneratorError;
use crate::layers::LayerStack;
use crate::nether::NetherSampler;

/// Sampling resolution, as blocks per cell along each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    /// 1:1, individual blocks.
    #[default]
    Block,
    /// 1:4, the resolution biomes are stored at since 1.15.
    Quart,
    /// 1:16, one cell per chunk.
    Chunk,
    /// 1:64, coarse region overviews.
    Region,
    /// 1:256, continent-level maps.
    Map,
}

impl Scale {
    /// Blocks per cell.
    pub fn blocks(self) -> i32 {
        match self {
            Scale::Block => 1,
            Scale::Quart => 4,
            Scale::Chunk => 16,
            Scale::Region => 64,
            Scale::Map => 256,
        }
    }

    /// Resolves a block-per-cell factor back to a scale.
    pub fn from_blocks(blocks: i32) -> Option<Scale> {
        match blocks {
            1 => Some(Scale::Block),
            4 => Some(Scale::Quart),
            16 => Some(Scale::Chunk),
            64 => Some(Scale::Region),
            256 => Some(Scale::Map),
            _ => None,
        }
    }
}

/// A rectangle of cells at some sampling scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AreaRect {
    pub x: i32,
    pub z: i32,
    pub w: u32,
    pub h: u32,
}

impl AreaRect {
    pub fn new(x: i32, z: i32, w: u32, h: u32) -> Self {
        Self { x, z, w, h }
    }
}

// One seeded sampling backend per generation époque and dimension.
enum Backend {
    BetaClimate(BetaClimateSampler),
    Layered(LayerStack),
    MultiNoise(ClimateSampler),
    NetherUniform,
    NetherNoise(NetherSampler),
    EndUniform,
    EndIslands(EndSampler),
}

struct Seeded {
    seed: i64,
    dimension: Dimension,
    backend: Backend,
}

/// A biome generator configured for one version and flag set.
///
/// A freshly constructed generator carries no seed; [`Generator::apply_seed`]
/// binds it to a world and dimension, after which sampling is pure and
/// `&self`, so a seeded generator can be shared across threads.
pub struct Generator {
    version: McVersion,
    flags: GeneratorFlags,
    seeded: Option<Seeded>,
}

impl Generator {
    /// Creates an unseeded generator for the given version.
    pub fn new(version: McVersion, flags: GeneratorFlags) -> Self {
        debug!(version = %version, flags = flags.bits(), "configured generator");
        Self {
            version,
            flags,
            seeded: None,
        }
    }

    /// Creates an unseeded generator from a version string such as `"1.18"`
    /// or `"b1.7.3"`.
    pub fn for_version(version: &str, flags: GeneratorFlags) -> Result<Self, GeneratorError> {
        Ok(Self::new(McVersion::from_str(version)?, flags))
    }

    /// Replaces the version and flags, discarding any applied seed.
    pub fn reconfigure(&mut self, version: McVersion, flags: GeneratorFlags) {
        debug!(version = %version, flags = flags.bits(), "reconfigured generator");
        self.version = version;
        self.flags = flags;
        self.seeded = None;
    }

    /// Binds the generator to a world seed and dimension. May be called
    /// again to switch worlds or dimensions; the previous binding is
    /// replaced wholesale.
    pub fn apply_seed(&mut self, dimension: Dimension, seed: i64) -> Result<(), GeneratorError> {
        if !self.version.has_dimension(dimension) {
            return Err(GeneratorError::InvalidDimension {
                dimension,
                version: self.version,
            });
        }

        let large = self.flags.contains(GeneratorFlags::LARGE_BIOMES);
        let backend = match dimension {
            Dimension::Overworld => {
                if self.version.is_beta() {
                    Backend::BetaClimate(BetaClimateSampler::new(seed))
                } else if self.version.has_multinoise() {
                    Backend::MultiNoise(ClimateSampler::new(self.version, large, seed))
                } else {
                    Backend::Layered(LayerStack::new(self.version, large, seed))
                }
            }
            Dimension::Nether => {
                if self.version.has_nether_biomes() {
                    Backend::NetherNoise(NetherSampler::new(seed))
                } else {
                    Backend::NetherUniform
                }
            }
            Dimension::End => {
                if self.version.has_end_islands() {
                    Backend::EndIslands(EndSampler::new(seed))
                } else {
                    Backend::EndUniform
                }
            }
        };

        debug!(seed, dimension = %dimension, "applied seed");
        self.seeded = Some(Seeded {
            seed,
            dimension,
            backend,
        });
        Ok(())
    }

    /// The biome of the cell `(x, z)` at the given scale. Cells map to the
    /// block at their center, so coarser scales subsample rather than vote.
    pub fn biome_at(&self, scale: Scale, x: i32, z: i32) -> Result<Biome, GeneratorError> {
        let seeded = self.seeded.as_ref().ok_or(GeneratorError::NotSeeded)?;
        let s = scale.blocks() as i64;
        let bx = (x as i64 * s + s / 2).clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        let bz = (z as i64 * s + s / 2).clamp(i32::MIN as i64, i32::MAX as i64) as i32;

        let biome = match &seeded.backend {
            Backend::BetaClimate(sampler) => sampler.sample_biome(bx, bz),
            Backend::Layered(stack) => Biome(stack.sample(scale.blocks() as u32, x, z)),
            Backend::MultiNoise(sampler) => sampler.sample_biome(bx >> 2, bz >> 2),
            Backend::NetherUniform => Biome::NETHER_WASTES,
            Backend::NetherNoise(sampler) => sampler.sample_biome(bx >> 2, bz >> 2),
            Backend::EndUniform => Biome::THE_END,
            Backend::EndIslands(sampler) => sampler.sample_biome(bx >> 4, bz >> 4),
        };
        Ok(biome)
    }

    /// Fills a rectangle of cells at the given scale, row-major.
    pub fn fill_rect(&self, scale: Scale, area: AreaRect) -> Result<Vec<Biome>, GeneratorError> {
        let seeded = self.seeded.as_ref().ok_or(GeneratorError::NotSeeded)?;
        let (w, h) = (area.w as i32, area.h as i32);

        // The layer stack generates windows natively; everything else is a
        // pointwise loop over the same mapping biome_at uses.
        if let Backend::Layered(stack) = &seeded.backend {
            let cells = stack.fill(scale.blocks() as u32, area.x, area.z, w, h);
            return Ok(cells.into_iter().map(Biome).collect());
        }

        let mut out = Vec::with_capacity(area.w as usize * area.h as usize);
        for j in 0..h {
            for i in 0..w {
                out.push(self.biome_at(scale, area.x + i, area.z + j)?);
            }
        }
        Ok(out)
    }

    /// Searches outward from `(center_x, center_z)` in square rings up to
    /// the given Chebyshev radius for the nearest cell holding `biome`.
    pub fn find_biome(
        &self,
        scale: Scale,
        biome: Biome,
        center_x: i32,
        center_z: i32,
        radius: i32,
    ) -> Result<Option<(i32, i32)>, GeneratorError> {
        if !self.is_seeded() {
            return Err(GeneratorError::NotSeeded);
        }
        for r in 0..=radius.max(0) {
            for (x, z) in ring(center_x, center_z, r) {
                if self.biome_at(scale, x, z)? == biome {
                    return Ok(Some((x, z)));
                }
            }
        }
        Ok(None)
    }

    pub fn version(&self) -> McVersion {
        self.version
    }

    pub fn flags(&self) -> GeneratorFlags {
        self.flags
    }

    /// The applied world seed, if any.
    pub fn seed(&self) -> Option<i64> {
        self.seeded.as_ref().map(|s| s.seed)
    }

    /// The dimension the generator is bound to, if seeded.
    pub fn dimension(&self) -> Option<Dimension> {
        self.seeded.as_ref().map(|s| s.dimension)
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded.is_some()
    }
}

/// Cells on the square ring at Chebyshev distance `r` from the center.
fn ring(cx: i32, cz: i32, r: i32) -> Vec<(i32, i32)> {
    if r == 0 {
        return vec![(cx, cz)];
    }
    let mut cells = Vec::with_capacity(8 * r as usize);
    for x in cx - r..=cx + r {
        cells.push((x, cz - r));
        cells.push((x, cz + r));
    }
    for z in cz - r + 1..cz + r {
        cells.push((cx - r, z));
        cells.push((cx + r, z));
    }
    cells
}
