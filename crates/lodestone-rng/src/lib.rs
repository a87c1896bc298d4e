//! Deterministic PRNG primitives for Minecraft-compatible world generation.
//!
//! Everything in this crate is pure integer arithmetic with wrapping
//! semantics, so results are bit-identical across platforms and across
//! independently constructed instances. No entropy sources, no global state.

mod java;
mod seed;
mod xoroshiro;

pub use java::JavaRandom;
pub use seed::{
    get_chunk_seed, get_layer_salt, get_start_salt, get_start_seed, mc_first_int, mc_first_is_zero,
    mc_step_seed,
};
pub use xoroshiro::Xoroshiro128PlusPlus;
