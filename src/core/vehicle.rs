//! Vehicle value type

use super::PlateNumber;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A vehicle presented at the lot entrance, identified by its plate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    plate: PlateNumber,
}

impl Vehicle {
    /// Create a vehicle with the given plate
    pub fn new(plate: impl Into<PlateNumber>) -> Self {
        Self {
            plate: plate.into(),
        }
    }

    /// The vehicle's plate number
    #[must_use]
    pub fn plate(&self) -> &PlateNumber {
        &self.plate
    }
}

impl From<PlateNumber> for Vehicle {
    fn from(plate: PlateNumber) -> Self {
        Self { plate }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vehicle {}", self.plate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicles_compare_by_plate() {
        let a = Vehicle::new("KL-0042");
        let b = Vehicle::from(PlateNumber::new("KL-0042"));
        assert_eq!(a, b);
        assert_eq!(a.plate().as_str(), "KL-0042");
    }
}
