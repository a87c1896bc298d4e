//! Compact biome identifiers with name round-tripping.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::Dimension;

/// Compact identifier for a biome classification.
///
/// The numeric values match the classic save-format id space (mutated
/// variants at `base + 128`, Nether and cave biomes in the 170+ range) so
/// that sampled output is directly comparable with external biome maps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Biome(pub i32);

impl Biome {
    pub const OCEAN: Biome = Biome(0);
    pub const PLAINS: Biome = Biome(1);
    pub const DESERT: Biome = Biome(2);
    pub const WINDSWEPT_HILLS: Biome = Biome(3);
    pub const FOREST: Biome = Biome(4);
    pub const TAIGA: Biome = Biome(5);
    pub const SWAMP: Biome = Biome(6);
    pub const RIVER: Biome = Biome(7);
    pub const NETHER_WASTES: Biome = Biome(8);
    pub const THE_END: Biome = Biome(9);
    pub const FROZEN_OCEAN: Biome = Biome(10);
    pub const FROZEN_RIVER: Biome = Biome(11);
    pub const SNOWY_PLAINS: Biome = Biome(12);
    pub const SNOWY_MOUNTAINS: Biome = Biome(13);
    pub const MUSHROOM_FIELDS: Biome = Biome(14);
    pub const MUSHROOM_FIELD_SHORE: Biome = Biome(15);
    pub const BEACH: Biome = Biome(16);
    pub const DESERT_HILLS: Biome = Biome(17);
    pub const WOODED_HILLS: Biome = Biome(18);
    pub const TAIGA_HILLS: Biome = Biome(19);
    pub const MOUNTAIN_EDGE: Biome = Biome(20);
    pub const JUNGLE: Biome = Biome(21);
    pub const JUNGLE_HILLS: Biome = Biome(22);
    pub const SPARSE_JUNGLE: Biome = Biome(23);
    pub const DEEP_OCEAN: Biome = Biome(24);
    pub const STONY_SHORE: Biome = Biome(25);
    pub const SNOWY_BEACH: Biome = Biome(26);
    pub const BIRCH_FOREST: Biome = Biome(27);
    pub const BIRCH_FOREST_HILLS: Biome = Biome(28);
    pub const DARK_FOREST: Biome = Biome(29);
    pub const SNOWY_TAIGA: Biome = Biome(30);
    pub const SNOWY_TAIGA_HILLS: Biome = Biome(31);
    pub const OLD_GROWTH_PINE_TAIGA: Biome = Biome(32);
    pub const GIANT_TREE_TAIGA_HILLS: Biome = Biome(33);
    pub const WINDSWEPT_FOREST: Biome = Biome(34);
    pub const SAVANNA: Biome = Biome(35);
    pub const SAVANNA_PLATEAU: Biome = Biome(36);
    pub const BADLANDS: Biome = Biome(37);
    pub const WOODED_BADLANDS: Biome = Biome(38);
    pub const BADLANDS_PLATEAU: Biome = Biome(39);
    pub const SMALL_END_ISLANDS: Biome = Biome(40);
    pub const END_MIDLANDS: Biome = Biome(41);
    pub const END_HIGHLANDS: Biome = Biome(42);
    pub const END_BARRENS: Biome = Biome(43);
    pub const WARM_OCEAN: Biome = Biome(44);
    pub const LUKEWARM_OCEAN: Biome = Biome(45);
    pub const COLD_OCEAN: Biome = Biome(46);
    pub const DEEP_WARM_OCEAN: Biome = Biome(47);
    pub const DEEP_LUKEWARM_OCEAN: Biome = Biome(48);
    pub const DEEP_COLD_OCEAN: Biome = Biome(49);
    pub const DEEP_FROZEN_OCEAN: Biome = Biome(50);
    pub const THE_VOID: Biome = Biome(127);
    pub const SUNFLOWER_PLAINS: Biome = Biome(129);
    pub const SOUL_SAND_VALLEY: Biome = Biome(170);
    pub const CRIMSON_FOREST: Biome = Biome(171);
    pub const WARPED_FOREST: Biome = Biome(172);
    pub const BASALT_DELTAS: Biome = Biome(173);
    pub const DRIPSTONE_CAVES: Biome = Biome(174);
    pub const LUSH_CAVES: Biome = Biome(175);
    pub const MEADOW: Biome = Biome(177);
    pub const GROVE: Biome = Biome(178);
    pub const SNOWY_SLOPES: Biome = Biome(179);
    pub const JAGGED_PEAKS: Biome = Biome(180);
    pub const FROZEN_PEAKS: Biome = Biome(181);
    pub const STONY_PEAKS: Biome = Biome(182);
    pub const DEEP_DARK: Biome = Biome(183);
    pub const MANGROVE_SWAMP: Biome = Biome(184);
    pub const CHERRY_GROVE: Biome = Biome(185);
    pub const PALE_GARDEN: Biome = Biome(186);

    /// Canonical resource-location style name, without the namespace prefix.
    ///
    /// Returns `None` for ids outside the known identifier space.
    pub fn name(self) -> Option<&'static str> {
        NAMES.iter().find(|(b, _)| *b == self).map(|(_, n)| *n)
    }

    /// Reverse lookup by canonical name.
    pub fn from_name(name: &str) -> Option<Biome> {
        name_index().get(name).copied()
    }

    /// The dimension this biome generates in, or `None` for placeholder ids
    /// such as `THE_VOID`.
    pub fn dimension(self) -> Option<Dimension> {
        match self {
            Biome::NETHER_WASTES
            | Biome::SOUL_SAND_VALLEY
            | Biome::CRIMSON_FOREST
            | Biome::WARPED_FOREST
            | Biome::BASALT_DELTAS => Some(Dimension::Nether),
            Biome::THE_END
            | Biome::SMALL_END_ISLANDS
            | Biome::END_MIDLANDS
            | Biome::END_HIGHLANDS
            | Biome::END_BARRENS => Some(Dimension::End),
            Biome::THE_VOID => None,
            b if b.name().is_some() => Some(Dimension::Overworld),
            _ => None,
        }
    }

    /// Whether this biome can be produced when generating `dimension`.
    pub fn is_valid_in(self, dimension: Dimension) -> bool {
        self.dimension() == Some(dimension)
    }

    /// Whether the id belongs to any ocean classification.
    pub fn is_oceanic(self) -> bool {
        matches!(
            self,
            Biome::OCEAN
                | Biome::FROZEN_OCEAN
                | Biome::DEEP_OCEAN
                | Biome::WARM_OCEAN
                | Biome::LUKEWARM_OCEAN
                | Biome::COLD_OCEAN
                | Biome::DEEP_WARM_OCEAN
                | Biome::DEEP_LUKEWARM_OCEAN
                | Biome::DEEP_COLD_OCEAN
                | Biome::DEEP_FROZEN_OCEAN
        )
    }

    /// Whether the id is one of the snow-covered classifications.
    pub fn is_snowy(self) -> bool {
        matches!(
            self,
            Biome::SNOWY_PLAINS
                | Biome::SNOWY_MOUNTAINS
                | Biome::SNOWY_TAIGA
                | Biome::SNOWY_TAIGA_HILLS
                | Biome::SNOWY_BEACH
                | Biome::SNOWY_SLOPES
                | Biome::FROZEN_OCEAN
                | Biome::FROZEN_RIVER
        )
    }
}

static NAMES: &[(Biome, &str)] = &[
    (Biome::OCEAN, "ocean"),
    (Biome::PLAINS, "plains"),
    (Biome::DESERT, "desert"),
    (Biome::WINDSWEPT_HILLS, "windswept_hills"),
    (Biome::FOREST, "forest"),
    (Biome::TAIGA, "taiga"),
    (Biome::SWAMP, "swamp"),
    (Biome::RIVER, "river"),
    (Biome::NETHER_WASTES, "nether_wastes"),
    (Biome::THE_END, "the_end"),
    (Biome::FROZEN_OCEAN, "frozen_ocean"),
    (Biome::FROZEN_RIVER, "frozen_river"),
    (Biome::SNOWY_PLAINS, "snowy_plains"),
    (Biome::SNOWY_MOUNTAINS, "snowy_mountains"),
    (Biome::MUSHROOM_FIELDS, "mushroom_fields"),
    (Biome::MUSHROOM_FIELD_SHORE, "mushroom_field_shore"),
    (Biome::BEACH, "beach"),
    (Biome::DESERT_HILLS, "desert_hills"),
    (Biome::WOODED_HILLS, "wooded_hills"),
    (Biome::TAIGA_HILLS, "taiga_hills"),
    (Biome::MOUNTAIN_EDGE, "mountain_edge"),
    (Biome::JUNGLE, "jungle"),
    (Biome::JUNGLE_HILLS, "jungle_hills"),
    (Biome::SPARSE_JUNGLE, "sparse_jungle"),
    (Biome::DEEP_OCEAN, "deep_ocean"),
    (Biome::STONY_SHORE, "stony_shore"),
    (Biome::SNOWY_BEACH, "snowy_beach"),
    (Biome::BIRCH_FOREST, "birch_forest"),
    (Biome::BIRCH_FOREST_HILLS, "birch_forest_hills"),
    (Biome::DARK_FOREST, "dark_forest"),
    (Biome::SNOWY_TAIGA, "snowy_taiga"),
    (Biome::SNOWY_TAIGA_HILLS, "snowy_taiga_hills"),
    (Biome::OLD_GROWTH_PINE_TAIGA, "old_growth_pine_taiga"),
    (Biome::GIANT_TREE_TAIGA_HILLS, "giant_tree_taiga_hills"),
    (Biome::WINDSWEPT_FOREST, "windswept_forest"),
    (Biome::SAVANNA, "savanna"),
    (Biome::SAVANNA_PLATEAU, "savanna_plateau"),
    (Biome::BADLANDS, "badlands"),
    (Biome::WOODED_BADLANDS, "wooded_badlands"),
    (Biome::BADLANDS_PLATEAU, "badlands_plateau"),
    (Biome::SMALL_END_ISLANDS, "small_end_islands"),
    (Biome::END_MIDLANDS, "end_midlands"),
    (Biome::END_HIGHLANDS, "end_highlands"),
    (Biome::END_BARRENS, "end_barrens"),
    (Biome::WARM_OCEAN, "warm_ocean"),
    (Biome::LUKEWARM_OCEAN, "lukewarm_ocean"),
    (Biome::COLD_OCEAN, "cold_ocean"),
    (Biome::DEEP_WARM_OCEAN, "deep_warm_ocean"),
    (Biome::DEEP_LUKEWARM_OCEAN, "deep_lukewarm_ocean"),
    (Biome::DEEP_COLD_OCEAN, "deep_cold_ocean"),
    (Biome::DEEP_FROZEN_OCEAN, "deep_frozen_ocean"),
    (Biome::THE_VOID, "the_void"),
    (Biome::SUNFLOWER_PLAINS, "sunflower_plains"),
    (Biome::SOUL_SAND_VALLEY, "soul_sand_valley"),
    (Biome::CRIMSON_FOREST, "crimson_forest"),
    (Biome::WARPED_FOREST, "warped_forest"),
    (Biome::BASALT_DELTAS, "basalt_deltas"),
    (Biome::DRIPSTONE_CAVES, "dripstone_caves"),
    (Biome::LUSH_CAVES, "lush_caves"),
    (Biome::MEADOW, "meadow"),
    (Biome::GROVE, "grove"),
    (Biome::SNOWY_SLOPES, "snowy_slopes"),
    (Biome::JAGGED_PEAKS, "jagged_peaks"),
    (Biome::FROZEN_PEAKS, "frozen_peaks"),
    (Biome::STONY_PEAKS, "stony_peaks"),
    (Biome::DEEP_DARK, "deep_dark"),
    (Biome::MANGROVE_SWAMP, "mangrove_swamp"),
    (Biome::CHERRY_GROVE, "cherry_grove"),
    (Biome::PALE_GARDEN, "pale_garden"),
];

fn name_index() -> &'static FxHashMap<&'static str, Biome> {
    static INDEX: OnceLock<FxHashMap<&'static str, Biome>> = OnceLock::new();
    INDEX.get_or_init(|| NAMES.iter().map(|(b, n)| (*n, *b)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for (biome, name) in NAMES {
            assert_eq!(biome.name(), Some(*name));
            assert_eq!(Biome::from_name(name), Some(*biome), "name {name}");
        }
    }

    #[test]
    fn test_unknown_ids_have_no_name() {
        assert_eq!(Biome(-1).name(), None);
        assert_eq!(Biome(9999).name(), None);
        assert_eq!(Biome::from_name("lorelei"), None);
    }

    #[test]
    fn test_dimension_classification() {
        assert!(Biome::PLAINS.is_valid_in(Dimension::Overworld));
        assert!(Biome::BASALT_DELTAS.is_valid_in(Dimension::Nether));
        assert!(Biome::END_HIGHLANDS.is_valid_in(Dimension::End));
        assert!(!Biome::NETHER_WASTES.is_valid_in(Dimension::Overworld));
        assert_eq!(Biome::THE_VOID.dimension(), None);
    }

    #[test]
    fn test_ocean_and_snow_predicates() {
        assert!(Biome::DEEP_FROZEN_OCEAN.is_oceanic());
        assert!(!Biome::RIVER.is_oceanic());
        assert!(Biome::FROZEN_RIVER.is_snowy());
        assert!(!Biome::JUNGLE.is_snowy());
    }

    #[test]
    fn test_serde_is_transparent_integer() {
        let json = serde_json::to_string(&Biome::MUSHROOM_FIELDS).unwrap();
        assert_eq!(json, "14");
        let back: Biome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Biome::MUSHROOM_FIELDS);
    }
}
