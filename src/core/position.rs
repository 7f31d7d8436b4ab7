//! Parking position value type

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-based slot index inside a lot.
///
/// Positions are dense and reusable: once the ticket holding a position is
/// fetched, the same index becomes eligible for the next arrival.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Position(u32);

impl Position {
    /// Create a position from a raw index
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// The raw index
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(1) < Position::new(2));
        assert_eq!(Position::new(7), Position::new(7));
    }
}
