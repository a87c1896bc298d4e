//! Per-layer map kernels.
//!
//! Every kernel takes the parent window it needs plus the layer's seed
//! material and produces the requested output window. Cell decisions hash
//! coordinates through the chunk seed, so any window over the same world
//! seed yields the same values.

use lodestone_biome::{Biome, McVersion};
use lodestone_rng::{get_chunk_seed, mc_first_int, mc_first_is_zero, mc_step_seed};

use super::Grid;

// Land/ocean mask values used above the biome layer. 1 doubles as the warm
// temperature category once the climate layer has run.
const LAND: i32 = 1;
const COLD: i32 = 3;
const FREEZING: i32 = 4;

#[inline]
fn is_shallow_ocean(v: i32) -> bool {
    v == Biome::OCEAN.0
}

#[inline]
fn is_oceanic(v: i32) -> bool {
    v == Biome::OCEAN.0 || v == Biome::DEEP_OCEAN.0
}

// ---------------------------------------------------------------------------
// Sources and pointwise kernels
// ---------------------------------------------------------------------------

/// Initial 1/10 land mask. The cell containing the world origin is always
/// land so the spawn continent exists on every seed.
pub(crate) fn map_continent(ss: u64, x: i32, z: i32, w: i32, h: i32) -> Grid {
    let mut out = Grid::new(x, z, w, h);
    for j in 0..h {
        for i in 0..w {
            let cs = get_chunk_seed(ss, x + i, z + j);
            out.set(i, j, if mc_first_is_zero(cs, 10) { LAND } else { 0 });
        }
    }
    if x <= 0 && z <= 0 && x + w > 0 && z + h > 0 {
        out.set(-x, -z, LAND);
    }
    out
}

/// Splits land into temperature categories. Before 1.7 there is only a
/// snow/no-snow split; 1.7+ draws warm, cold and freezing bands.
pub(crate) fn map_climate(ss: u64, parent: &Grid, version: McVersion) -> Grid {
    let mut out = Grid::new(parent.x, parent.z, parent.w, parent.h);
    for j in 0..parent.h {
        for i in 0..parent.w {
            let v = parent.at(i, j);
            if v == 0 {
                continue;
            }
            let cs = get_chunk_seed(ss, parent.x + i, parent.z + j);
            let c = if version.has_variant_biomes() {
                match mc_first_int(cs, 6) {
                    0 => FREEZING,
                    1 => COLD,
                    _ => LAND,
                }
            } else if mc_first_is_zero(cs, 5) {
                FREEZING
            } else {
                LAND
            };
            out.set(i, j, c);
        }
    }
    out
}

/// Resolves temperature categories into biome ids. Ocean, deep ocean and
/// mushroom cells pass through untouched.
pub(crate) fn map_biome(ss: u64, parent: &Grid, version: McVersion) -> Grid {
    const WARM: [Biome; 7] = [
        Biome::DESERT,
        Biome::DESERT,
        Biome::SAVANNA,
        Biome::SAVANNA,
        Biome::PLAINS,
        Biome::JUNGLE,
        Biome::BADLANDS,
    ];
    const COOL: [Biome; 6] = [
        Biome::FOREST,
        Biome::DARK_FOREST,
        Biome::WINDSWEPT_HILLS,
        Biome::PLAINS,
        Biome::BIRCH_FOREST,
        Biome::SWAMP,
    ];
    const SNOW: [Biome; 4] = [
        Biome::SNOWY_PLAINS,
        Biome::SNOWY_PLAINS,
        Biome::SNOWY_TAIGA,
        Biome::TAIGA,
    ];
    const OLD: [Biome; 6] = [
        Biome::DESERT,
        Biome::FOREST,
        Biome::WINDSWEPT_HILLS,
        Biome::SWAMP,
        Biome::PLAINS,
        Biome::TAIGA,
    ];
    const OLD_JUNGLE: [Biome; 7] = [
        Biome::DESERT,
        Biome::FOREST,
        Biome::WINDSWEPT_HILLS,
        Biome::SWAMP,
        Biome::PLAINS,
        Biome::TAIGA,
        Biome::JUNGLE,
    ];

    let mut out = Grid::new(parent.x, parent.z, parent.w, parent.h);
    for j in 0..parent.h {
        for i in 0..parent.w {
            let v = parent.at(i, j);
            let id = match v {
                _ if is_oceanic(v) || v == Biome::MUSHROOM_FIELDS.0 => v,
                LAND | COLD | FREEZING => {
                    let cs = get_chunk_seed(ss, parent.x + i, parent.z + j);
                    let table: &[Biome] = if version.has_variant_biomes() {
                        match v {
                            FREEZING => &SNOW,
                            COLD => &COOL,
                            _ => &WARM,
                        }
                    } else if v == FREEZING {
                        &[Biome::SNOWY_PLAINS]
                    } else if version >= McVersion::V1_2 {
                        &OLD_JUNGLE
                    } else {
                        &OLD
                    };
                    table[mc_first_int(cs, table.len() as i32) as usize].0
                }
                other => other,
            };
            out.set(i, j, id);
        }
    }
    out
}

/// Seeds the river branch: land cells get a large per-cell random value that
/// the river layer later compares across neighbors.
pub(crate) fn map_river_init(ss: u64, parent: &Grid) -> Grid {
    let mut out = Grid::new(parent.x, parent.z, parent.w, parent.h);
    for j in 0..parent.h {
        for i in 0..parent.w {
            if parent.at(i, j) > 0 {
                let cs = get_chunk_seed(ss, parent.x + i, parent.z + j);
                out.set(i, j, mc_first_int(cs, 299_999) + 2);
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Neighborhood kernels: parent covers (x-1, z-1, w+2, h+2)
// ---------------------------------------------------------------------------

/// Grows land into adjacent ocean and erodes exposed coastline, with the
/// freezing category surviving both transitions.
pub(crate) fn map_add_island(ss: u64, st: u64, parent: &Grid) -> Grid {
    let x = parent.x + 1;
    let z = parent.z + 1;
    let w = parent.w - 2;
    let h = parent.h - 2;
    let mut out = Grid::new(x, z, w, h);
    for j in 0..h {
        for i in 0..w {
            let v00 = parent.at(i, j);
            let v20 = parent.at(i + 2, j);
            let v02 = parent.at(i, j + 2);
            let v22 = parent.at(i + 2, j + 2);
            let v11 = parent.at(i + 1, j + 1);

            let result = if v11 == 0 && (v00 != 0 || v20 != 0 || v02 != 0 || v22 != 0) {
                let mut cs = get_chunk_seed(ss, x + i, z + j);
                let mut v = LAND;
                let mut inc = 1;
                for n in [v00, v20, v02, v22] {
                    if n != 0 {
                        if mc_first_is_zero(cs, inc) {
                            v = n;
                        }
                        inc += 1;
                        cs = mc_step_seed(cs, st);
                    }
                }
                if mc_first_is_zero(cs, 3) || v == FREEZING {
                    v
                } else {
                    0
                }
            } else if v11 > 0 && (v00 == 0 || v20 == 0 || v02 == 0 || v22 == 0) {
                let cs = get_chunk_seed(ss, x + i, z + j);
                if mc_first_is_zero(cs, 5) {
                    if v11 == FREEZING { FREEZING } else { 0 }
                } else {
                    v11
                }
            } else {
                v11
            };
            out.set(i, j, result);
        }
    }
    out
}

/// Open ocean surrounded by ocean becomes a mushroom island 1 time in 100.
pub(crate) fn map_add_mushroom(ss: u64, parent: &Grid) -> Grid {
    let x = parent.x + 1;
    let z = parent.z + 1;
    let w = parent.w - 2;
    let h = parent.h - 2;
    let mut out = Grid::new(x, z, w, h);
    for j in 0..h {
        for i in 0..w {
            let v11 = parent.at(i + 1, j + 1);
            let isolated = v11 == 0
                && parent.at(i, j) == 0
                && parent.at(i + 2, j) == 0
                && parent.at(i, j + 2) == 0
                && parent.at(i + 2, j + 2) == 0;
            let result = if isolated {
                let cs = get_chunk_seed(ss, x + i, z + j);
                if mc_first_is_zero(cs, 100) {
                    Biome::MUSHROOM_FIELDS.0
                } else {
                    0
                }
            } else {
                v11
            };
            out.set(i, j, result);
        }
    }
    out
}

/// Shallow ocean with shallow ocean on all four sides becomes deep ocean.
pub(crate) fn map_deep_ocean(parent: &Grid) -> Grid {
    let x = parent.x + 1;
    let z = parent.z + 1;
    let w = parent.w - 2;
    let h = parent.h - 2;
    let mut out = Grid::new(x, z, w, h);
    for j in 0..h {
        for i in 0..w {
            let v11 = parent.at(i + 1, j + 1);
            let deep = is_shallow_ocean(v11)
                && is_shallow_ocean(parent.at(i + 1, j))
                && is_shallow_ocean(parent.at(i, j + 1))
                && is_shallow_ocean(parent.at(i + 2, j + 1))
                && is_shallow_ocean(parent.at(i + 1, j + 2));
            out.set(i, j, if deep { Biome::DEEP_OCEAN.0 } else { v11 });
        }
    }
    out
}

/// Collapses river-init noise: a cell whose reduced value differs from any
/// orthogonal neighbor becomes a river.
pub(crate) fn map_river(parent: &Grid) -> Grid {
    #[inline]
    fn reduce(v: i32) -> i32 {
        if v >= 2 { 2 + (v & 1) } else { v }
    }

    let x = parent.x + 1;
    let z = parent.z + 1;
    let w = parent.w - 2;
    let h = parent.h - 2;
    let mut out = Grid::new(x, z, w, h);
    for j in 0..h {
        for i in 0..w {
            let v11 = reduce(parent.at(i + 1, j + 1));
            let same = v11 == reduce(parent.at(i + 1, j))
                && v11 == reduce(parent.at(i, j + 1))
                && v11 == reduce(parent.at(i + 2, j + 1))
                && v11 == reduce(parent.at(i + 1, j + 2));
            out.set(i, j, if same { -1 } else { Biome::RIVER.0 });
        }
    }
    out
}

/// Land cells that touch ocean become the matching beach variant.
pub(crate) fn map_shore(parent: &Grid, version: McVersion) -> Grid {
    let x = parent.x + 1;
    let z = parent.z + 1;
    let w = parent.w - 2;
    let h = parent.h - 2;
    let mut out = Grid::new(x, z, w, h);
    for j in 0..h {
        for i in 0..w {
            let v11 = parent.at(i + 1, j + 1);
            let coastal = is_oceanic(parent.at(i + 1, j))
                || is_oceanic(parent.at(i, j + 1))
                || is_oceanic(parent.at(i + 2, j + 1))
                || is_oceanic(parent.at(i + 1, j + 2));

            let result = if !coastal {
                v11
            } else if v11 == Biome::MUSHROOM_FIELDS.0 {
                Biome::MUSHROOM_FIELD_SHORE.0
            } else if is_oceanic(v11) || v11 == Biome::RIVER.0 || v11 == Biome::SWAMP.0 {
                v11
            } else if Biome(v11).is_snowy() {
                Biome::SNOWY_BEACH.0
            } else if v11 == Biome::WINDSWEPT_HILLS.0 && version.has_variant_biomes() {
                Biome::STONY_SHORE.0
            } else {
                Biome::BEACH.0
            };
            out.set(i, j, result);
        }
    }
    out
}

/// Smooths single-cell speckles along straight edges.
pub(crate) fn map_smooth(ss: u64, parent: &Grid) -> Grid {
    let x = parent.x + 1;
    let z = parent.z + 1;
    let w = parent.w - 2;
    let h = parent.h - 2;
    let mut out = Grid::new(x, z, w, h);
    for j in 0..h {
        for i in 0..w {
            let v01 = parent.at(i, j + 1);
            let v21 = parent.at(i + 2, j + 1);
            let v10 = parent.at(i + 1, j);
            let v12 = parent.at(i + 1, j + 2);

            let result = if v01 == v21 && v10 == v12 {
                let cs = get_chunk_seed(ss, x + i, z + j);
                if mc_first_is_zero(cs, 2) { v01 } else { v10 }
            } else if v01 == v21 {
                v01
            } else if v10 == v12 {
                v10
            } else {
                parent.at(i + 1, j + 1)
            };
            out.set(i, j, result);
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Zoom, merge and Voronoi kernels
// ---------------------------------------------------------------------------

fn mode_or_random(cs: u64, v00: i32, v01: i32, v10: i32, v11: i32) -> i32 {
    let vs = [v00, v01, v10, v11];
    let mut best = v00;
    let mut best_count = 0;
    for &v in &vs {
        let count = vs.iter().filter(|&&o| o == v).count();
        if count > best_count {
            best = v;
            best_count = count;
        }
    }
    // A clear majority or a single tied pair wins; two distinct pairs fall
    // back to a random corner.
    if best_count >= 3 {
        return best;
    }
    if best_count == 2 {
        let paired = vs
            .iter()
            .filter(|&&v| vs.iter().filter(|&&o| o == v).count() == 2)
            .count();
        if paired == 2 {
            return best;
        }
    }
    vs[mc_first_int(cs, 4) as usize]
}

/// Doubles resolution. Even cells copy the parent; odd cells pick between
/// neighbors, either purely at random (fuzzy) or majority-biased.
pub(crate) fn map_zoom(
    ss: u64,
    st: u64,
    parent: &Grid,
    x: i32,
    z: i32,
    w: i32,
    h: i32,
    fuzzy: bool,
) -> Grid {
    let px = parent.x;
    let pz = parent.z;
    let bw = (parent.w - 1) * 2;
    let bh = (parent.h - 1) * 2;
    let mut buf = Grid::new(px * 2, pz * 2, bw, bh);

    for pj in 0..parent.h - 1 {
        for pi in 0..parent.w - 1 {
            let v00 = parent.at(pi, pj);
            let v01 = parent.at(pi + 1, pj);
            let v10 = parent.at(pi, pj + 1);
            let v11 = parent.at(pi + 1, pj + 1);

            let mut cs = get_chunk_seed(ss, (px + pi) << 1, (pz + pj) << 1);
            buf.set(pi * 2, pj * 2, v00);
            buf.set(pi * 2, pj * 2 + 1, if mc_first_is_zero(cs, 2) { v00 } else { v10 });
            cs = mc_step_seed(cs, st);
            buf.set(pi * 2 + 1, pj * 2, if mc_first_is_zero(cs, 2) { v00 } else { v01 });
            cs = mc_step_seed(cs, st);
            let corner = if fuzzy {
                [v00, v01, v10, v11][mc_first_int(cs, 4) as usize]
            } else {
                mode_or_random(cs, v00, v01, v10, v11)
            };
            buf.set(pi * 2 + 1, pj * 2 + 1, corner);
        }
    }

    let mut out = Grid::new(x, z, w, h);
    let ox = x - px * 2;
    let oz = z - pz * 2;
    for j in 0..h {
        for i in 0..w {
            out.set(i, j, buf.at(i + ox, j + oz));
        }
    }
    out
}

/// Merges the river branch into the biome trunk.
pub(crate) fn map_river_mix(trunk: &Grid, river: &Grid) -> Grid {
    let mut out = Grid::new(trunk.x, trunk.z, trunk.w, trunk.h);
    for j in 0..trunk.h {
        for i in 0..trunk.w {
            let t = trunk.at(i, j);
            let result = if is_oceanic(t) || river.at(i, j) != Biome::RIVER.0 {
                t
            } else if t == Biome::SNOWY_PLAINS.0 {
                Biome::FROZEN_RIVER.0
            } else if t == Biome::MUSHROOM_FIELDS.0 || t == Biome::MUSHROOM_FIELD_SHORE.0 {
                Biome::MUSHROOM_FIELD_SHORE.0
            } else {
                Biome::RIVER.0
            };
            out.set(i, j, result);
        }
    }
    out
}

/// Jittered 4:1 upsample. Each block picks the nearest of the four
/// surrounding scale-4 cells, with cell centers displaced by up to 1.8
/// blocks in each axis.
pub(crate) fn map_voronoi(
    ss: u64,
    st: u64,
    parent: &Grid,
    x: i32,
    z: i32,
    w: i32,
    h: i32,
) -> Grid {
    let x0 = x - 2;
    let z0 = z - 2;
    let px = parent.x;
    let pz = parent.z;

    let jitter = |cx: i32, cz: i32| -> (f64, f64) {
        let mut cs = get_chunk_seed(ss, cx << 2, cz << 2);
        let dx = (mc_first_int(cs, 1024) as f64 / 1024.0 - 0.5) * 3.6;
        cs = mc_step_seed(cs, st);
        let dz = (mc_first_int(cs, 1024) as f64 / 1024.0 - 0.5) * 3.6;
        (dx, dz)
    };

    let bw = (parent.w - 1) * 4;
    let bh = (parent.h - 1) * 4;
    let mut buf = Grid::new(px * 4, pz * 4, bw, bh);

    for pj in 0..parent.h - 1 {
        for pi in 0..parent.w - 1 {
            let v00 = parent.at(pi, pj);
            let v01 = parent.at(pi + 1, pj);
            let v10 = parent.at(pi, pj + 1);
            let v11 = parent.at(pi + 1, pj + 1);

            let (ax, az) = jitter(px + pi, pz + pj);
            let (bx, bz) = jitter(px + pi + 1, pz + pj);
            let (cx, cz) = jitter(px + pi, pz + pj + 1);
            let (dx, dz) = jitter(px + pi + 1, pz + pj + 1);

            for j in 0..4 {
                for i in 0..4 {
                    let fi = i as f64;
                    let fj = j as f64;
                    let da = (fi - ax) * (fi - ax) + (fj - az) * (fj - az);
                    let db = (fi - 4.0 - bx) * (fi - 4.0 - bx) + (fj - bz) * (fj - bz);
                    let dc = (fi - cx) * (fi - cx) + (fj - 4.0 - cz) * (fj - 4.0 - cz);
                    let dd =
                        (fi - 4.0 - dx) * (fi - 4.0 - dx) + (fj - 4.0 - dz) * (fj - 4.0 - dz);

                    let mut v = v00;
                    let mut d = da;
                    if db < d {
                        v = v01;
                        d = db;
                    }
                    if dc < d {
                        v = v10;
                        d = dc;
                    }
                    if dd < d {
                        v = v11;
                    }
                    buf.set(pi * 4 + i, pj * 4 + j, v);
                }
            }
        }
    }

    let mut out = Grid::new(x, z, w, h);
    let ox = x0 - px * 4;
    let oz = z0 - pz * 4;
    for j in 0..h {
        for i in 0..w {
            out.set(i, j, buf.at(i + ox, j + oz));
        }
    }
    out
}
