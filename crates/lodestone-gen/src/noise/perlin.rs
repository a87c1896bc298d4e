//! Java-compatible improved Perlin noise.
//!
//! The permutation table and origin offsets are drawn from the seeding RNG
//! in the exact order the game does, so a table built from the same seed is
//! bit-identical here and there.

use lodestone_rng::{JavaRandom, Xoroshiro128PlusPlus};

/// A single Perlin octave with a shuffled permutation table and an origin
/// offset in each axis.
#[derive(Clone, Debug)]
pub struct PerlinNoise {
    perm: [u8; 256],
    ox: f64,
    oy: f64,
    oz: f64,
}

impl PerlinNoise {
    /// Builds a table from the legacy LCG (pre-1.18 noise, Nether, End).
    pub fn from_java(rng: &mut JavaRandom) -> Self {
        let ox = rng.next_double() * 256.0;
        let oy = rng.next_double() * 256.0;
        let oz = rng.next_double() * 256.0;
        let mut perm = [0u8; 256];
        for (i, v) in perm.iter_mut().enumerate() {
            *v = i as u8;
        }
        for i in 0..256usize {
            let j = i + rng.next_int_bound(256 - i as i32) as usize;
            perm.swap(i, j);
        }
        Self { perm, ox, oy, oz }
    }

    /// Builds a table from xoroshiro (1.18+ climate noise).
    pub fn from_xoroshiro(rng: &mut Xoroshiro128PlusPlus) -> Self {
        let ox = rng.next_double() * 256.0;
        let oy = rng.next_double() * 256.0;
        let oz = rng.next_double() * 256.0;
        let mut perm = [0u8; 256];
        for (i, v) in perm.iter_mut().enumerate() {
            *v = i as u8;
        }
        for i in 0..256usize {
            let j = i + rng.next_int_bound(256 - i as u32) as usize;
            perm.swap(i, j);
        }
        Self { perm, ox, oy, oz }
    }

    #[inline]
    fn idx(&self, i: i32) -> i32 {
        self.perm[(i & 255) as usize] as i32
    }

    /// Samples the octave at the given point.
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let x = x + self.ox;
        let y = y + self.oy;
        let z = z + self.oz;

        let fx = x.floor();
        let fy = y.floor();
        let fz = z.floor();
        let dx = x - fx;
        let dy = y - fy;
        let dz = z - fz;
        let gx = fx as i32;
        let gy = fy as i32;
        let gz = fz as i32;

        let u = fade(dx);
        let v = fade(dy);
        let w = fade(dz);

        let a = self.idx(gx) + gy;
        let aa = self.idx(a) + gz;
        let ab = self.idx(a + 1) + gz;
        let b = self.idx(gx + 1) + gy;
        let ba = self.idx(b) + gz;
        let bb = self.idx(b + 1) + gz;

        let x1 = lerp(
            u,
            grad(self.idx(aa), dx, dy, dz),
            grad(self.idx(ba), dx - 1.0, dy, dz),
        );
        let x2 = lerp(
            u,
            grad(self.idx(ab), dx, dy - 1.0, dz),
            grad(self.idx(bb), dx - 1.0, dy - 1.0, dz),
        );
        let x3 = lerp(
            u,
            grad(self.idx(aa + 1), dx, dy, dz - 1.0),
            grad(self.idx(ba + 1), dx - 1.0, dy, dz - 1.0),
        );
        let x4 = lerp(
            u,
            grad(self.idx(ab + 1), dx, dy - 1.0, dz - 1.0),
            grad(self.idx(bb + 1), dx - 1.0, dy - 1.0, dz - 1.0),
        );

        lerp(w, lerp(v, x1, x2), lerp(v, x3, x4))
    }
}

#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

#[inline]
fn grad(hash: i32, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}
