//! Deterministic noise samplers used by the generation backends.

mod double_perlin;
mod octave;
mod perlin;
mod simplex;

pub use double_perlin::DoublePerlinNoise;
pub use octave::OctaveNoise;
pub use perlin::PerlinNoise;
pub use simplex::SimplexNoise;
