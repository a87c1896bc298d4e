//! Error surface of the generator facade.

use lodestone_biome::{Dimension, McVersion, VersionError};
use thiserror::Error;

/// Errors produced when configuring, seeding or sampling a generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// The requested version string or id is not supported.
    #[error("unsupported Minecraft version: {0}")]
    UnsupportedVersion(String),

    /// A sampling operation ran before any seed was applied.
    #[error("no seed has been applied to the generator")]
    NotSeeded,

    /// The requested dimension does not exist in the configured version.
    #[error("dimension {dimension} does not exist in Minecraft {version}")]
    InvalidDimension {
        dimension: Dimension,
        version: McVersion,
    },
}

impl From<VersionError> for GeneratorError {
    fn from(err: VersionError) -> Self {
        match err {
            VersionError::Unsupported(what) => GeneratorError::UnsupportedVersion(what),
        }
    }
}
