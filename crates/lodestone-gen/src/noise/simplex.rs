//! 2D simplex noise seeded from the legacy LCG; drives End island shapes.

use lodestone_rng::JavaRandom;

const F2: f64 = 0.3660254037844386; // (sqrt(3) - 1) / 2
const G2: f64 = 0.21132486540518713; // (3 - sqrt(3)) / 6

const GRAD2: [(f64, f64); 12] = [
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (0.0, 1.0),
    (0.0, -1.0),
];

/// Simplex noise over a shuffled permutation table.
pub struct SimplexNoise {
    perm: [u8; 256],
}

impl SimplexNoise {
    /// Builds the permutation from the LCG, matching the legacy shuffle.
    pub fn new(rng: &mut JavaRandom) -> Self {
        let mut perm = [0u8; 256];
        for (i, v) in perm.iter_mut().enumerate() {
            *v = i as u8;
        }
        for i in 0..256usize {
            let j = i + rng.next_int_bound(256 - i as i32) as usize;
            perm.swap(i, j);
        }
        Self { perm }
    }

    #[inline]
    fn idx(&self, i: i32) -> usize {
        self.perm[(i & 255) as usize] as usize
    }

    /// Samples 2D simplex noise at the given point, range roughly [-1, 1].
    pub fn sample2(&self, x: f64, y: f64) -> f64 {
        let skew = (x + y) * F2;
        let i = (x + skew).floor();
        let j = (y + skew).floor();
        let unskew = (i + j) * G2;
        let x0 = x - (i - unskew);
        let y0 = y - (j - unskew);

        // Which triangle of the simplex cell are we in?
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let gi = i as i32;
        let gj = j as i32;
        let g0 = self.idx(gi + self.idx(gj) as i32) % 12;
        let g1 = self.idx(gi + i1 + self.idx(gj + j1) as i32) % 12;
        let g2 = self.idx(gi + 1 + self.idx(gj + 1) as i32) % 12;

        let total = corner(x0, y0, g0) + corner(x1, y1, g1) + corner(x2, y2, g2);
        70.0 * total
    }
}

#[inline]
fn corner(x: f64, y: f64, gradient: usize) -> f64 {
    let t = 0.5 - x * x - y * y;
    if t < 0.0 {
        return 0.0;
    }
    let (gx, gy) = GRAD2[gradient];
    let t = t * t;
    t * t * (gx * x + gy * y)
}
