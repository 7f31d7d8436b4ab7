//! Parking ticket value type
//!
//! A ticket is the sole credential for retrieving a vehicle. It carries no
//! separate token: the value itself is the key into the lot's occupancy
//! map. Two tickets are equal iff plate, position, and lot all match, so
//! the type derives structural `Eq` and `Hash`.

use super::{LotId, PlateNumber, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Credential binding a vehicle to a position at issuance time.
///
/// Issued only by [`ParkingLot::park`](super::ParkingLot::park); a value
/// constructed by anyone else is a forgery and will be rejected by
/// [`ParkingLot::fetch`](super::ParkingLot::fetch).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticket {
    /// Plate of the vehicle this ticket was issued for
    pub plate: PlateNumber,
    /// Position the vehicle was assigned
    pub position: Position,
    /// Identifier of the issuing lot
    pub lot: LotId,
}

impl Ticket {
    /// Assemble a ticket value from its parts
    pub fn new(plate: impl Into<PlateNumber>, position: Position, lot: LotId) -> Self {
        Self {
            plate: plate.into(),
            position,
            lot,
        }
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ticket for {} at position {} (lot {})",
            self.plate, self.position, self.lot
        )
    }
}
