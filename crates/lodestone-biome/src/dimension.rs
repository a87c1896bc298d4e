//! World dimensions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the distinct world spaces with independent generation rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    #[default]
    Overworld,
    Nether,
    End,
}

impl Dimension {
    /// All dimensions, in the conventional listing order.
    pub const ALL: [Dimension; 3] = [Dimension::Overworld, Dimension::Nether, Dimension::End];
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Overworld => "overworld",
            Dimension::Nether => "nether",
            Dimension::End => "end",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(Dimension::Overworld.to_string(), "overworld");
        assert_eq!(Dimension::Nether.to_string(), "nether");
        assert_eq!(Dimension::End.to_string(), "end");
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Dimension::End).unwrap();
        assert_eq!(json, "\"end\"");
    }
}
