//! Deterministic Minecraft biome generation.
//!
//! The crate reimplements the biome placement rules of every supported
//! version époque: beta climate tables, the 1.0–1.17 integer layer stack,
//! and the 1.18+ multi-noise climate charts, plus the Nether and End rules.
//! Everything is seeded arithmetic; generating a biome never touches global
//! state, entropy, or the filesystem, so samplers are freely shareable
//! across threads.
//!
//! [`Generator`] is the entry point: configure it with a version and flags,
//! apply a seed for a dimension, then sample biomes at any [`Scale`].

mod beta;
mod end;
mod error;
mod generator;
mod layers;
mod nether;

pub mod climate;
pub mod noise;

pub use error::GeneratorError;
pub use generator::{AreaRect, Generator, Scale};

pub use lodestone_biome::{Biome, Dimension, GeneratorFlags, McVersion, VersionError};
