//! Biome identifier space and generation vocabulary.
//!
//! Biome ids follow the numeric identifier space of the classic generation
//! tooling ecosystem, so results can be compared against maps produced by
//! other tools. Versions, dimensions, and generator flags live here too so
//! that front-ends can name them in configuration files without pulling in
//! the engine itself.

mod dimension;
mod flags;
mod id;
mod version;

pub use dimension::Dimension;
pub use flags::GeneratorFlags;
pub use id::Biome;
pub use version::{McVersion, VersionError};
