//! Generator behavior flags.

use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// Bitset of options that alter generation behavior for a fixed version.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratorFlags(u32);

impl GeneratorFlags {
    /// No flags set; default world generation.
    pub const NONE: GeneratorFlags = GeneratorFlags(0);

    /// The "large biomes" world type: biome features span four times the
    /// area (extra zoom stages pre-1.18, wider climate octaves from 1.18).
    pub const LARGE_BIOMES: GeneratorFlags = GeneratorFlags(1 << 0);

    /// Builds flags from a raw bitset, rejecting unknown bits.
    pub fn from_bits(bits: u32) -> Option<GeneratorFlags> {
        if bits & !Self::LARGE_BIOMES.0 != 0 {
            return None;
        }
        Some(GeneratorFlags(bits))
    }

    /// The raw bitset value.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Whether every bit of `other` is set in `self`.
    pub fn contains(self, other: GeneratorFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for GeneratorFlags {
    type Output = GeneratorFlags;

    fn bitor(self, rhs: GeneratorFlags) -> GeneratorFlags {
        GeneratorFlags(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert_eq!(GeneratorFlags::default(), GeneratorFlags::NONE);
        assert!(!GeneratorFlags::NONE.contains(GeneratorFlags::LARGE_BIOMES));
    }

    #[test]
    fn test_contains_and_bitor() {
        let flags = GeneratorFlags::NONE | GeneratorFlags::LARGE_BIOMES;
        assert!(flags.contains(GeneratorFlags::LARGE_BIOMES));
        assert_eq!(flags.bits(), 1);
    }

    #[test]
    fn test_from_bits_rejects_unknown() {
        assert_eq!(
            GeneratorFlags::from_bits(1),
            Some(GeneratorFlags::LARGE_BIOMES)
        );
        assert_eq!(GeneratorFlags::from_bits(0b10), None);
    }
}
