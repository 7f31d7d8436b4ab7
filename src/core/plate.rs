//! Plate number value type
//!
//! The allocator treats plate numbers as opaque identifiers: it compares
//! them for equality and never inspects their structure. Format checks
//! belong to the boundary that accepts user input, not here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque, externally supplied vehicle identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlateNumber(String);

impl PlateNumber {
    /// Create a plate number from any string-like value
    pub fn new(plate: impl Into<String>) -> Self {
        Self(plate.into())
    }

    /// The raw plate string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlateNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlateNumber {
    fn from(plate: &str) -> Self {
        Self::new(plate)
    }
}

impl From<String> for PlateNumber {
    fn from(plate: String) -> Self {
        Self(plate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plate_equality_is_structural() {
        assert_eq!(PlateNumber::new("AB-1234"), PlateNumber::from("AB-1234"));
        assert_ne!(PlateNumber::new("AB-1234"), PlateNumber::new("AB-1235"));
    }

    #[test]
    fn test_plate_displays_verbatim() {
        let plate = PlateNumber::new("ZX-9001");
        assert_eq!(plate.to_string(), "ZX-9001");
        assert_eq!(plate.as_str(), "ZX-9001");
    }
}
