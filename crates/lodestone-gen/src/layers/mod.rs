//! Integer layer stack for 1.0 through 1.17 Overworld biomes.
//!
//! Generation runs as a chain of layers. The top layer emits a coarse
//! land/ocean mask at scale 1:4096 and every layer below either doubles the
//! resolution or rewrites cells in place, down to a 1:1 Voronoi shuffle at
//! the bottom. Layers are pure: each owns two seeds derived from its salt
//! and the world seed, and every cell decision hashes only those seeds and
//! the cell coordinates.

mod maps;
mod stack;

pub use stack::LayerStack;

/// A rectangular window of layer values, addressed in the layer's own scale.
pub(crate) struct Grid {
    x: i32,
    z: i32,
    w: i32,
    h: i32,
    data: Vec<i32>,
}

impl Grid {
    pub(crate) fn new(x: i32, z: i32, w: i32, h: i32) -> Self {
        Self {
            x,
            z,
            w,
            h,
            data: vec![0; (w * h) as usize],
        }
    }

    /// Value at local offsets into the window.
    #[inline]
    pub(crate) fn at(&self, i: i32, j: i32) -> i32 {
        debug_assert!(i >= 0 && i < self.w && j >= 0 && j < self.h);
        self.data[(j * self.w + i) as usize]
    }

    #[inline]
    pub(crate) fn set(&mut self, i: i32, j: i32, v: i32) {
        self.data[(j * self.w + i) as usize] = v;
    }
}

/// What a layer does to its parent grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum LayerKind {
    /// Seeds the initial land/ocean mask.
    Continent,
    /// Doubles resolution; fuzzy variant picks all four corners at random.
    Zoom { fuzzy: bool },
    /// Grows land into ocean and erodes lone coastline cells.
    AddIsland,
    /// Splits land into temperature categories.
    Climate,
    /// Plants rare mushroom islands in open ocean.
    AddMushroom,
    /// Marks ocean cells far from any shore as deep.
    DeepOcean,
    /// Resolves temperature categories into concrete biomes.
    Biome,
    /// Seeds the river branch with per-cell noise.
    RiverInit,
    /// Collapses river noise into river / not-river edges.
    River,
    /// Rewrites land cells that touch ocean into beaches.
    Shore,
    /// Removes single-cell speckles along straight edges.
    Smooth,
    /// Merges the river branch into the biome trunk.
    RiverMix,
    /// Jittered 4:1 upsample to block resolution.
    Voronoi,
}

/// One node in the stack: a kernel plus its seed material and parents.
///
/// `parent` is meaningful for every kind except `Continent`; `parent2` only
/// for `RiverMix`. The builder is the sole constructor, so the indices are
/// always in range and acyclic.
pub(crate) struct Layer {
    pub(crate) kind: LayerKind,
    pub(crate) start_salt: u64,
    pub(crate) start_seed: u64,
    pub(crate) parent: usize,
    pub(crate) parent2: usize,
}
