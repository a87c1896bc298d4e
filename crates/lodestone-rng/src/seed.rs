//! Layer seed mixing for the pre-1.18 generation stack.
//!
//! Each layer owns a salt; the world seed is folded through the salt into a
//! start seed, and per-cell decisions hash the cell coordinates into a chunk
//! seed. The mixing step is the MMIX LCG constant pair applied twice, which
//! is what the game's `GenLayer` hierarchy bakes into its seed plumbing.

/// One mixing step: fold `salt` into the running seed `s`.
pub fn mc_step_seed(s: u64, salt: u64) -> u64 {
    s.wrapping_mul(
        s.wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407),
    )
    .wrapping_add(salt)
}

/// Extracts a value in `[0, modulus)` from the upper bits of a chunk seed.
pub fn mc_first_int(s: u64, modulus: i32) -> i32 {
    let mut ret = (((s as i64) >> 24) % modulus as i64) as i32;
    if ret < 0 {
        ret += modulus;
    }
    ret
}

/// Convenience for the common `mc_first_int(s, m) == 0` probability check.
pub fn mc_first_is_zero(s: u64, modulus: i32) -> bool {
    ((s as i64) >> 24) % modulus as i64 == 0
}

/// Derives a layer's salt from its raw salt constant.
pub fn get_layer_salt(salt: u64) -> u64 {
    let mut ls = mc_step_seed(salt, salt);
    ls = mc_step_seed(ls, salt);
    mc_step_seed(ls, salt)
}

/// Folds the world seed into a layer salt, producing the layer's start salt.
pub fn get_start_salt(world_seed: u64, layer_salt: u64) -> u64 {
    let mut st = world_seed;
    st = mc_step_seed(st, layer_salt);
    st = mc_step_seed(st, layer_salt);
    mc_step_seed(st, layer_salt)
}

/// Start seed for per-cell chunk seeding; one extra step past the start salt.
pub fn get_start_seed(world_seed: u64, layer_salt: u64) -> u64 {
    mc_step_seed(get_start_salt(world_seed, layer_salt), 0)
}

/// Hashes a cell coordinate into the layer's start seed.
pub fn get_chunk_seed(start_seed: u64, x: i32, z: i32) -> u64 {
    let mut cs = start_seed.wrapping_add(x as i64 as u64);
    cs = mc_step_seed(cs, z as i64 as u64);
    cs = mc_step_seed(cs, x as i64 as u64);
    mc_step_seed(cs, z as i64 as u64)
}
