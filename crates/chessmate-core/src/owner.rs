//! Player identity attached to every piece.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The player controlling a piece.
///
/// Friendly and opposing pieces are told apart by comparing owners, never by
/// color, so two owners on the same board must differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Owner(String);

impl Owner {
    /// Create an owner from a player name.
    pub fn new(name: impl Into<String>) -> Owner {
        Owner(name.into())
    }
}

impl From<&str> for Owner {
    fn from(name: &str) -> Self {
        Owner::new(name)
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
