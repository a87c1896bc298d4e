//! Supported Minecraft versions and version-string parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Dimension;

/// Errors produced when resolving a Minecraft version.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    /// The id or string did not name a supported version.
    #[error("unsupported Minecraft version: {0}")]
    Unsupported(String),
}

/// A supported Minecraft version époque.
///
/// Patch releases share generation rules with their minor version, so only
/// the minor line is represented: `"1.18.2"` parses to [`McVersion::V1_18`].
/// Declaration order is chronological, which makes `Ord` comparisons read as
/// "released no earlier than".
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum McVersion {
    B1_7,
    B1_8,
    V1_0,
    V1_1,
    V1_2,
    V1_3,
    V1_4,
    V1_5,
    V1_6,
    V1_7,
    V1_8,
    V1_9,
    V1_10,
    V1_11,
    V1_12,
    V1_13,
    V1_14,
    V1_15,
    V1_16,
    V1_17,
    V1_18,
    V1_19,
    V1_20,
    V1_21,
}

impl McVersion {
    /// Every supported version, oldest first.
    pub const ALL: [McVersion; 24] = [
        McVersion::B1_7,
        McVersion::B1_8,
        McVersion::V1_0,
        McVersion::V1_1,
        McVersion::V1_2,
        McVersion::V1_3,
        McVersion::V1_4,
        McVersion::V1_5,
        McVersion::V1_6,
        McVersion::V1_7,
        McVersion::V1_8,
        McVersion::V1_9,
        McVersion::V1_10,
        McVersion::V1_11,
        McVersion::V1_12,
        McVersion::V1_13,
        McVersion::V1_14,
        McVersion::V1_15,
        McVersion::V1_16,
        McVersion::V1_17,
        McVersion::V1_18,
        McVersion::V1_19,
        McVersion::V1_20,
        McVersion::V1_21,
    ];

    /// The newest supported version.
    pub const NEWEST: McVersion = McVersion::V1_21;

    /// Stable integer id (index in chronological order).
    pub fn id(self) -> i32 {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0) as i32
    }

    /// Resolves an integer id back to a version.
    pub fn from_id(id: i32) -> Result<Self, VersionError> {
        usize::try_from(id)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| VersionError::Unsupported(format!("id {id}")))
    }

    /// Beta versions use the climate-table generator instead of layers.
    pub fn is_beta(self) -> bool {
        self < McVersion::V1_0
    }

    /// 1.18 replaced the layer stack with multi-noise climate sampling.
    pub fn has_multinoise(self) -> bool {
        self >= McVersion::V1_18
    }

    /// 1.16 introduced the five-biome Nether; earlier Nethers are uniform.
    pub fn has_nether_biomes(self) -> bool {
        self >= McVersion::V1_16
    }

    /// 1.9 introduced the outer End islands; earlier Ends are uniform.
    pub fn has_end_islands(self) -> bool {
        self >= McVersion::V1_9
    }

    /// 1.7 added deep oceans, climate categories, and biome variants.
    pub fn has_variant_biomes(self) -> bool {
        self >= McVersion::V1_7
    }

    /// Whether worlds of this version contain the given dimension.
    pub fn has_dimension(self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Overworld | Dimension::Nether => true,
            // The End shipped with release 1.0.
            Dimension::End => self >= McVersion::V1_0,
        }
    }
}

impl FromStr for McVersion {
    type Err = VersionError;

    /// Parses `"1.18"`, `"1.18.2"`, `"b1.7"`, `"b1.7.3"` style strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || VersionError::Unsupported(s.to_string());
        let trimmed = s.trim();
        let (beta, rest) = match trimmed.strip_prefix('b') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let mut parts = rest.split('.');
        let major: u32 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(unsupported)?;
        let minor: u32 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(unsupported)?;
        // A trailing patch component is accepted and folded into the minor.
        if let Some(patch) = parts.next() {
            patch.parse::<u32>().map_err(|_| unsupported())?;
        }
        if parts.next().is_some() || major != 1 {
            return Err(unsupported());
        }
        if beta {
            return match minor {
                7 => Ok(McVersion::B1_7),
                8 => Ok(McVersion::B1_8),
                _ => Err(unsupported()),
            };
        }
        let release_index = 2 + minor as usize;
        McVersion::ALL
            .get(release_index)
            .copied()
            .ok_or_else(unsupported)
    }
}

impl fmt::Display for McVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_beta() {
            write!(f, "b1.{}", if *self == McVersion::B1_7 { 7 } else { 8 })
        } else {
            write!(f, "1.{}", self.id() - 2)
        }
    }
}
