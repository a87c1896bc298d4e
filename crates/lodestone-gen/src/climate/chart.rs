//! Parameter-space lookup from climate point to surface biome.
//!
//! The chart carves the five-parameter space into bands: continentalness
//! separates oceans from land, the weirdness-derived peaks-and-valleys value
//! picks rivers and mountain tiers, and a temperature/humidity matrix fills
//! in the flat middle ground.

use lodestone_biome::{Biome, McVersion};

use super::ClimatePoint;

const TEMPERATURE_BANDS: [f64; 4] = [-0.45, -0.15, 0.2, 0.55];
const HUMIDITY_BANDS: [f64; 4] = [-0.35, -0.1, 0.1, 0.3];
const EROSION_BANDS: [f64; 6] = [-0.78, -0.375, -0.2225, 0.05, 0.45, 0.55];

const DEEP_OCEANS: [Biome; 5] = [
    Biome::DEEP_FROZEN_OCEAN,
    Biome::DEEP_COLD_OCEAN,
    Biome::DEEP_OCEAN,
    Biome::DEEP_LUKEWARM_OCEAN,
    Biome::WARM_OCEAN,
];
const OCEANS: [Biome; 5] = [
    Biome::FROZEN_OCEAN,
    Biome::COLD_OCEAN,
    Biome::OCEAN,
    Biome::LUKEWARM_OCEAN,
    Biome::WARM_OCEAN,
];

/// Middle-ground biomes indexed by [temperature][humidity] band.
const MIDDLE: [[Biome; 5]; 5] = [
    [
        Biome::SNOWY_PLAINS,
        Biome::SNOWY_PLAINS,
        Biome::SNOWY_PLAINS,
        Biome::SNOWY_TAIGA,
        Biome::TAIGA,
    ],
    [
        Biome::PLAINS,
        Biome::PLAINS,
        Biome::FOREST,
        Biome::TAIGA,
        Biome::OLD_GROWTH_PINE_TAIGA,
    ],
    [
        Biome::PLAINS,
        Biome::PLAINS,
        Biome::FOREST,
        Biome::BIRCH_FOREST,
        Biome::DARK_FOREST,
    ],
    [
        Biome::SAVANNA,
        Biome::SAVANNA,
        Biome::FOREST,
        Biome::JUNGLE,
        Biome::JUNGLE,
    ],
    [
        Biome::DESERT,
        Biome::DESERT,
        Biome::DESERT,
        Biome::DESERT,
        Biome::DESERT,
    ],
];

#[inline]
fn band(value: f64, thresholds: &[f64]) -> usize {
    thresholds.iter().take_while(|&&t| value >= t).count()
}

/// Folds weirdness into the peaks-and-valleys value: -1 at the ridge
/// centerline, +1 at two-thirds weirdness in either direction.
#[inline]
fn peaks_valleys(weirdness: f64) -> f64 {
    1.0 - (3.0 * weirdness.abs() - 2.0).abs()
}

pub(crate) fn resolve(version: McVersion, p: ClimatePoint) -> Biome {
    let t = band(p.temperature, &TEMPERATURE_BANDS);
    let h = band(p.humidity, &HUMIDITY_BANDS);
    let e = band(p.erosion, &EROSION_BANDS);
    let pv = peaks_valleys(p.weirdness);

    if p.continentalness < -1.05 {
        return Biome::MUSHROOM_FIELDS;
    }
    if p.continentalness < -0.455 {
        return DEEP_OCEANS[t];
    }
    if p.continentalness < -0.19 {
        return OCEANS[t];
    }

    // River valleys cut through everything on land.
    if pv < -0.85 {
        return if t == 0 { Biome::FROZEN_RIVER } else { Biome::RIVER };
    }

    // Coast band.
    if p.continentalness < -0.11 {
        return if pv > 0.6 {
            Biome::STONY_SHORE
        } else if t == 0 {
            Biome::SNOWY_BEACH
        } else {
            Biome::BEACH
        };
    }

    if version >= McVersion::V1_21 && t == 2 && h == 4 && pv > 0.65 {
        return Biome::PALE_GARDEN;
    }

    if pv > 0.7 {
        if e <= 1 {
            return match t {
                0 | 1 => Biome::JAGGED_PEAKS,
                2 => Biome::FROZEN_PEAKS,
                3 => Biome::STONY_PEAKS,
                _ => Biome::BADLANDS,
            };
        }
        if e <= 3 {
            return match t {
                0 | 1 => {
                    if h <= 2 {
                        Biome::SNOWY_SLOPES
                    } else {
                        Biome::GROVE
                    }
                }
                2 => {
                    if version >= McVersion::V1_20 && h <= 1 {
                        Biome::CHERRY_GROVE
                    } else {
                        Biome::MEADOW
                    }
                }
                3 => Biome::SAVANNA_PLATEAU,
                _ => Biome::BADLANDS,
            };
        }
    }

    // Flat wetlands at the highest erosion band.
    if e >= 6 && t >= 2 {
        return if t >= 3 && version >= McVersion::V1_19 {
            Biome::MANGROVE_SWAMP
        } else {
            Biome::SWAMP
        };
    }

    // Rugged low-erosion hills below the peak threshold.
    if e <= 1 && pv > 0.2 && t <= 2 {
        return if h >= 3 {
            Biome::WINDSWEPT_FOREST
        } else {
            Biome::WINDSWEPT_HILLS
        };
    }

    MIDDLE[t][h]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(t: f64, h: f64, c: f64, e: f64, w: f64) -> ClimatePoint {
        ClimatePoint {
            temperature: t,
            humidity: h,
            continentalness: c,
            erosion: e,
            weirdness: w,
        }
    }

    #[test]
    fn test_band_indexing() {
        assert_eq!(band(-1.0, &TEMPERATURE_BANDS), 0);
        assert_eq!(band(-0.45, &TEMPERATURE_BANDS), 1);
        assert_eq!(band(0.0, &TEMPERATURE_BANDS), 2);
        assert_eq!(band(1.0, &TEMPERATURE_BANDS), 4);
    }

    #[test]
    fn test_peaks_valleys_shape() {
        assert!((peaks_valleys(0.0) - -1.0).abs() < 1e-9);
        assert!((peaks_valleys(2.0 / 3.0) - 1.0).abs() < 1e-9);
        assert!((peaks_valleys(-2.0 / 3.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ocean_ladder() {
        let v = McVersion::V1_18;
        assert_eq!(resolve(v, point(0.0, 0.0, -1.2, 0.0, 0.5)), Biome::MUSHROOM_FIELDS);
        assert_eq!(
            resolve(v, point(-0.6, 0.0, -0.6, 0.0, 0.5)),
            Biome::DEEP_FROZEN_OCEAN
        );
        assert_eq!(resolve(v, point(0.0, 0.0, -0.3, 0.0, 0.5)), Biome::OCEAN);
        assert_eq!(
            resolve(v, point(0.6, 0.0, -0.3, 0.0, 0.5)),
            Biome::WARM_OCEAN
        );
    }

    #[test]
    fn test_river_valleys() {
        let v = McVersion::V1_18;
        // weirdness 0 gives pv = -1, the valley floor.
        assert_eq!(resolve(v, point(0.0, 0.0, 0.5, 0.0, 0.0)), Biome::RIVER);
        assert_eq!(
            resolve(v, point(-0.6, 0.0, 0.5, 0.0, 0.0)),
            Biome::FROZEN_RIVER
        );
    }

    #[test]
    fn test_middle_matrix_corners() {
        let v = McVersion::V1_18;
        let flat = |t, h| resolve(v, point(t, h, 0.5, 0.2, 0.45));
        assert_eq!(flat(-0.6, -0.5), Biome::SNOWY_PLAINS);
        assert_eq!(flat(0.7, -0.5), Biome::DESERT);
        assert_eq!(flat(0.3, 0.5), Biome::JUNGLE);
        assert_eq!(flat(0.0, 0.0), Biome::FOREST);
    }

    #[test]
    fn test_peak_tiers() {
        let v = McVersion::V1_18;
        // weirdness 2/3 gives pv = 1; erosion deep in the first band.
        let peak = |t| resolve(v, point(t, 0.0, 0.5, -0.9, 2.0 / 3.0));
        assert_eq!(peak(-0.6), Biome::JAGGED_PEAKS);
        assert_eq!(peak(0.0), Biome::FROZEN_PEAKS);
        assert_eq!(peak(0.3), Biome::STONY_PEAKS);
        assert_eq!(peak(0.7), Biome::BADLANDS);
    }

    #[test]
    fn test_mangrove_needs_1_19() {
        let swampy = point(0.7, 0.5, 0.5, 0.7, 0.45);
        assert_eq!(resolve(McVersion::V1_18, swampy), Biome::SWAMP);
        assert_eq!(resolve(McVersion::V1_19, swampy), Biome::MANGROVE_SWAMP);
    }

    #[test]
    fn test_cherry_grove_needs_1_20() {
        let slope = point(0.0, -0.5, 0.5, -0.1, 2.0 / 3.0);
        assert_eq!(resolve(McVersion::V1_19, slope), Biome::MEADOW);
        assert_eq!(resolve(McVersion::V1_20, slope), Biome::CHERRY_GROVE);
    }

    #[test]
    fn test_pale_garden_needs_1_21() {
        let dark = point(0.0, 0.5, 0.5, 0.2, 2.0 / 3.0);
        assert_ne!(resolve(McVersion::V1_20, dark), Biome::PALE_GARDEN);
        assert_eq!(resolve(McVersion::V1_21, dark), Biome::PALE_GARDEN);
    }
}
