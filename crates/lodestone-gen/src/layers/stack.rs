//! Stack assembly and windowed generation.

use lodestone_biome::McVersion;
use lodestone_rng::{get_layer_salt, get_start_salt, get_start_seed};

use super::maps;
use super::{Grid, Layer, LayerKind};

/// Output scales the stack can be queried at directly.
const ENTRY_SCALES: [u32; 5] = [1, 4, 16, 64, 256];

/// A fully seeded layer stack for one world.
///
/// Construction wires the layer graph for the version and folds the world
/// seed into every layer's salt, after which sampling is pure and the stack
/// can be shared across threads.
pub struct LayerStack {
    layers: Vec<Layer>,
    version: McVersion,
    // Entry layer index per ENTRY_SCALES slot.
    entries: [usize; 5],
}

struct Builder {
    layers: Vec<Layer>,
    world_seed: u64,
}

impl Builder {
    fn push(&mut self, kind: LayerKind, salt: u64, parent: usize) -> usize {
        self.push2(kind, salt, parent, 0)
    }

    fn push2(&mut self, kind: LayerKind, salt: u64, parent: usize, parent2: usize) -> usize {
        let layer_salt = get_layer_salt(salt);
        self.layers.push(Layer {
            kind,
            start_salt: get_start_salt(self.world_seed, layer_salt),
            start_seed: get_start_seed(self.world_seed, layer_salt),
            parent,
            parent2,
        });
        self.layers.len() - 1
    }
}

impl LayerStack {
    /// Builds and seeds the stack for a 1.0 through 1.17 Overworld.
    pub fn new(version: McVersion, large_biomes: bool, world_seed: i64) -> Self {
        use LayerKind::*;

        let mut b = Builder {
            layers: Vec::with_capacity(40),
            world_seed: world_seed as u64,
        };

        // Continent stage, 1:4096 down to 1:256.
        let mut l = b.push(Continent, 1, 0);
        l = b.push(Zoom { fuzzy: true }, 2000, l);
        l = b.push(AddIsland, 1, l);
        l = b.push(Zoom { fuzzy: false }, 2001, l);
        l = b.push(AddIsland, 2, l);
        l = b.push(Climate, 2, l);
        l = b.push(Zoom { fuzzy: false }, 2002, l);
        l = b.push(Zoom { fuzzy: false }, 2003, l);
        l = b.push(AddIsland, 3, l);
        l = b.push(AddMushroom, 5, l);
        if version.has_variant_biomes() {
            l = b.push(DeepOcean, 4, l);
        }
        let land = l;

        // Biome trunk. Large worlds zoom the biome layout twice more before
        // the regular magnification, which quadruples every entry scale
        // relative to the block grid.
        let mut t = b.push(Biome, 200, land);
        if large_biomes {
            t = b.push(Zoom { fuzzy: false }, 1000, t);
            t = b.push(Zoom { fuzzy: false }, 1001, t);
        }
        t = b.push(Zoom { fuzzy: false }, 1000, t);
        t = b.push(Zoom { fuzzy: false }, 1001, t);
        t = b.push(Zoom { fuzzy: false }, 1002, t);
        t = b.push(AddIsland, 4, t);
        t = b.push(Zoom { fuzzy: false }, 1003, t);
        t = b.push(Shore, 20, t);
        t = b.push(Zoom { fuzzy: false }, 1004, t);
        t = b.push(Zoom { fuzzy: false }, 1005, t);
        t = b.push(Smooth, 1000, t);

        // River branch, zoomed with the same salts so its cells stay aligned
        // with the trunk.
        let mut r = b.push(RiverInit, 100, land);
        if large_biomes {
            r = b.push(Zoom { fuzzy: false }, 1000, r);
            r = b.push(Zoom { fuzzy: false }, 1001, r);
        }
        r = b.push(Zoom { fuzzy: false }, 1000, r);
        r = b.push(Zoom { fuzzy: false }, 1001, r);
        r = b.push(Zoom { fuzzy: false }, 1002, r);
        r = b.push(Zoom { fuzzy: false }, 1003, r);
        r = b.push(Zoom { fuzzy: false }, 1004, r);
        r = b.push(Zoom { fuzzy: false }, 1005, r);
        r = b.push(River, 1, r);
        r = b.push(Smooth, 1000, r);

        let mix = b.push2(RiverMix, 100, t, r);
        let bottom = b.push(Voronoi, 10, mix);

        let entries = Self::resolve_entries(&b.layers, bottom);
        Self {
            layers: b.layers,
            version,
            entries,
        }
    }

    /// Walks up the trunk from the bottom layer, recording the lowest layer
    /// that outputs each entry scale.
    fn resolve_entries(layers: &[Layer], bottom: usize) -> [usize; 5] {
        let mut entries = [bottom; 5];
        let mut seen = [false; 5];
        let mut idx = bottom;
        let mut scale = 1u32;
        loop {
            if let Some(slot) = ENTRY_SCALES.iter().position(|&s| s == scale) {
                if !seen[slot] {
                    entries[slot] = idx;
                    seen[slot] = true;
                }
            }
            let layer = &layers[idx];
            scale *= match layer.kind {
                LayerKind::Zoom { .. } => 2,
                LayerKind::Voronoi => 4,
                _ => 1,
            };
            if layer.kind == LayerKind::Continent {
                break;
            }
            idx = layer.parent;
        }
        entries
    }

    /// Samples one cell at the given entry scale. Coordinates are in units
    /// of `scale` blocks; unsupported scales fall back to block resolution.
    pub fn sample(&self, scale: u32, x: i32, z: i32) -> i32 {
        let slot = ENTRY_SCALES
            .iter()
            .position(|&s| s == scale)
            .unwrap_or(0);
        self.gen_area(self.entries[slot], x, z, 1, 1).at(0, 0)
    }

    /// Fills a rectangle of cells at the given entry scale, row-major.
    pub fn fill(&self, scale: u32, x: i32, z: i32, w: i32, h: i32) -> Vec<i32> {
        let slot = ENTRY_SCALES
            .iter()
            .position(|&s| s == scale)
            .unwrap_or(0);
        self.gen_area(self.entries[slot], x, z, w, h).data
    }

    fn gen_area(&self, idx: usize, x: i32, z: i32, w: i32, h: i32) -> Grid {
        let layer = &self.layers[idx];
        let ss = layer.start_seed;
        let st = layer.start_salt;

        // Kernels that look at a cell's neighbors need a one-cell halo.
        let halo = |this: &Self, p: usize| this.gen_area(p, x - 1, z - 1, w + 2, h + 2);
        let same = |this: &Self, p: usize| this.gen_area(p, x, z, w, h);

        match layer.kind {
            LayerKind::Continent => maps::map_continent(ss, x, z, w, h),
            LayerKind::Zoom { fuzzy } => {
                let px = x >> 1;
                let pz = z >> 1;
                let pw = ((x + w) >> 1) - px + 2;
                let ph = ((z + h) >> 1) - pz + 2;
                let parent = self.gen_area(layer.parent, px, pz, pw, ph);
                maps::map_zoom(ss, st, &parent, x, z, w, h, fuzzy)
            }
            LayerKind::AddIsland => maps::map_add_island(ss, st, &halo(self, layer.parent)),
            LayerKind::Climate => maps::map_climate(ss, &same(self, layer.parent), self.version),
            LayerKind::AddMushroom => maps::map_add_mushroom(ss, &halo(self, layer.parent)),
            LayerKind::DeepOcean => maps::map_deep_ocean(&halo(self, layer.parent)),
            LayerKind::Biome => maps::map_biome(ss, &same(self, layer.parent), self.version),
            LayerKind::RiverInit => maps::map_river_init(ss, &same(self, layer.parent)),
            LayerKind::River => maps::map_river(&halo(self, layer.parent)),
            LayerKind::Shore => maps::map_shore(&halo(self, layer.parent), self.version),
            LayerKind::Smooth => maps::map_smooth(ss, &halo(self, layer.parent)),
            LayerKind::RiverMix => {
                let trunk = same(self, layer.parent);
                let river = same(self, layer.parent2);
                maps::map_river_mix(&trunk, &river)
            }
            LayerKind::Voronoi => {
                let x0 = x - 2;
                let z0 = z - 2;
                let px = x0 >> 2;
                let pz = z0 >> 2;
                let pw = ((x0 + w) >> 2) - px + 2;
                let ph = ((z0 + h) >> 2) - pz + 2;
                let parent = self.gen_area(layer.parent, px, pz, pw, ph);
                maps::map_voronoi(ss, st, &parent, x, z, w, h)
            }
        }
    }
}
