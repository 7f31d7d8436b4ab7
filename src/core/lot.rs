//! The lot allocator
//!
//! Owns a fixed capacity and the mapping from active ticket to parked
//! vehicle. Positions are assigned lowest-free-first: the scan walks
//! `1..=capacity` and the first index no active ticket holds wins. That
//! tie-break is part of the contract, not an implementation detail.

use super::{Position, Ticket, Vehicle};
use crate::error::{LotKeeperError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Identifier of a lot, for use by an external registry.
///
/// Defaults to 0 for a lot that was never registered anywhere. Allocation
/// logic ignores it; it only travels on issued tickets.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LotId(u32);

impl LotId {
    /// Create a lot identifier from a raw value
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw identifier
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fixed-capacity pool of numbered positions.
///
/// The lot is a single unit of mutable state with no interior locking.
/// `park`'s capacity check, position scan, and insertion must run as one
/// atomic step, so a host that shares a lot across threads wraps the whole
/// value in a mutex rather than synchronizing individual calls.
#[derive(Debug, Clone)]
pub struct ParkingLot {
    id: LotId,
    name: Option<String>,
    capacity: u32,
    occupied: HashMap<Ticket, Vehicle>,
}

impl ParkingLot {
    /// Capacity used when none is specified
    pub const DEFAULT_CAPACITY: u32 = 10;

    /// Create a lot with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: LotId::default(),
            name: None,
            capacity: Self::DEFAULT_CAPACITY,
            occupied: HashMap::new(),
        }
    }

    /// Create a lot with an explicit capacity
    ///
    /// # Errors
    ///
    /// Returns [`LotKeeperError::InvalidCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: u32) -> Result<Self> {
        LotBuilder::new().capacity(capacity).build()
    }

    /// Start building a lot with identity attributes
    #[must_use]
    pub fn builder() -> LotBuilder {
        LotBuilder::new()
    }

    /// Park a vehicle, issuing the ticket that will retrieve it
    ///
    /// The vehicle is assigned the lowest free position. Fails without
    /// mutating the lot when every position is taken.
    ///
    /// # Errors
    ///
    /// Returns [`LotKeeperError::NoAvailablePosition`] when the lot is full.
    pub fn park(&mut self, vehicle: Vehicle) -> Result<Ticket> {
        if self.is_full() {
            return Err(LotKeeperError::NoAvailablePosition);
        }

        let position = self.position_to_park()?;
        let ticket = Ticket::new(vehicle.plate().clone(), position, self.id);
        debug!(plate = %ticket.plate, %position, "vehicle parked");
        self.occupied.insert(ticket.clone(), vehicle);
        Ok(ticket)
    }

    /// Fetch the vehicle bound to `ticket`, voiding the ticket
    ///
    /// The freed position becomes eligible for the next arrival. A ticket
    /// this lot never issued and a ticket that was already fetched are
    /// rejected identically; the allocator cannot tell them apart.
    ///
    /// # Errors
    ///
    /// Returns [`LotKeeperError::UnrecognizedTicket`] if the ticket is not
    /// currently active.
    pub fn fetch(&mut self, ticket: &Ticket) -> Result<Vehicle> {
        let vehicle = self
            .occupied
            .remove(ticket)
            .ok_or(LotKeeperError::UnrecognizedTicket)?;
        debug!(plate = %ticket.plate, position = %ticket.position, "vehicle fetched");
        Ok(vehicle)
    }

    /// Whether `ticket` is currently active in this lot
    #[must_use]
    pub fn contains(&self, ticket: &Ticket) -> bool {
        self.occupied.contains_key(ticket)
    }

    /// The lowest position in `1..=capacity` no active ticket holds
    ///
    /// # Errors
    ///
    /// Returns [`LotKeeperError::NoAvailablePosition`] when every position
    /// is held, which can only happen at full occupancy.
    pub fn position_to_park(&self) -> Result<Position> {
        (1..=self.capacity)
            .map(Position::new)
            .find(|candidate| !self.occupied.keys().any(|t| t.position == *candidate))
            .ok_or(LotKeeperError::NoAvailablePosition)
    }

    /// Registry identifier
    #[must_use]
    pub const fn id(&self) -> LotId {
        self.id
    }

    /// Display name, if one was configured
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Total number of positions
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Number of free positions
    #[must_use]
    pub fn available_capacity(&self) -> u32 {
        self.capacity - self.occupied.len() as u32
    }

    /// Whether every position is taken
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied.len() as u32 == self.capacity
    }

    /// Whether no position is taken
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Fraction of positions still free, `1.0` for an empty lot
    #[must_use]
    pub fn available_position_rate(&self) -> f64 {
        f64::from(self.available_capacity()) / f64::from(self.capacity)
    }

    /// Active tickets, in no particular order
    pub fn tickets(&self) -> impl Iterator<Item = &Ticket> {
        self.occupied.keys()
    }
}

impl Default for ParkingLot {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for lots that carry identity attributes
#[derive(Debug, Default)]
pub struct LotBuilder {
    id: Option<LotId>,
    name: Option<String>,
    capacity: Option<u32>,
}

impl LotBuilder {
    /// Create a new lot builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the registry identifier
    #[must_use]
    pub const fn id(mut self, id: LotId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the display name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the capacity
    #[must_use]
    pub const fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Build the lot
    ///
    /// # Errors
    ///
    /// Returns [`LotKeeperError::InvalidCapacity`] if the configured
    /// capacity is zero.
    pub fn build(self) -> Result<ParkingLot> {
        let capacity = self.capacity.unwrap_or(ParkingLot::DEFAULT_CAPACITY);
        if capacity == 0 {
            return Err(LotKeeperError::InvalidCapacity { value: capacity });
        }

        Ok(ParkingLot {
            id: self.id.unwrap_or_default(),
            name: self.name,
            capacity,
            occupied: HashMap::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlateNumber;

    fn vehicle(plate: &str) -> Vehicle {
        Vehicle::new(PlateNumber::new(plate))
    }

    fn lot_with_capacity(capacity: u32) -> ParkingLot {
        ParkingLot::with_capacity(capacity).unwrap()
    }

    #[test]
    fn test_default_capacity_is_ten() {
        let lot = ParkingLot::new();
        assert_eq!(lot.capacity(), 10);
        assert_eq!(lot.available_capacity(), 10);
        assert!(lot.is_empty());
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert!(matches!(
            ParkingLot::with_capacity(0),
            Err(LotKeeperError::InvalidCapacity { value: 0 })
        ));
        assert!(LotBuilder::new().capacity(0).build().is_err());
    }

    #[test]
    fn test_builder_sets_identity() {
        let lot = ParkingLot::builder()
            .id(LotId::new(3))
            .name("North Deck")
            .capacity(25)
            .build()
            .unwrap();

        assert_eq!(lot.id(), LotId::new(3));
        assert_eq!(lot.name(), Some("North Deck"));
        assert_eq!(lot.capacity(), 25);
    }

    #[test]
    fn test_issued_ticket_carries_lot_id() {
        let mut lot = ParkingLot::builder()
            .id(LotId::new(8))
            .capacity(2)
            .build()
            .unwrap();

        let ticket = lot.park(vehicle("AA-0001")).unwrap();
        assert_eq!(ticket.lot, LotId::new(8));
        assert_eq!(ticket.plate, PlateNumber::new("AA-0001"));
    }

    #[test]
    fn test_position_to_park_on_empty_lot_is_one() {
        let lot = lot_with_capacity(9);
        assert_eq!(lot.position_to_park().unwrap(), Position::new(1));
    }

    #[test]
    fn test_position_to_park_with_single_occupant_is_two() {
        let mut lot = lot_with_capacity(9);
        lot.park(vehicle("AA-0001")).unwrap();
        assert_eq!(lot.position_to_park().unwrap(), Position::new(2));
    }

    #[test]
    fn test_position_to_park_fills_the_lowest_gap() {
        // Occupy everything, then free the even positions so {1,3,5,7,9}
        // remain held. The next arrival takes 2.
        let mut lot = lot_with_capacity(9);
        let tickets: Vec<_> = (1..=9)
            .map(|i| lot.park(vehicle(&format!("AA-{i:04}"))).unwrap())
            .collect();

        for ticket in tickets.iter().filter(|t| t.position.get() % 2 == 0) {
            lot.fetch(ticket).unwrap();
        }

        assert_eq!(lot.position_to_park().unwrap(), Position::new(2));
    }

    #[test]
    fn test_position_to_park_prefers_one_after_front_is_freed() {
        // Positions 1-5 filled, then 1-4 freed: the scan restarts at 1
        // rather than continuing past the remaining occupant at 5.
        let mut lot = lot_with_capacity(9);
        let tickets: Vec<_> = (1..=5)
            .map(|i| lot.park(vehicle(&format!("AA-{i:04}"))).unwrap())
            .collect();

        for ticket in &tickets[..4] {
            lot.fetch(ticket).unwrap();
        }

        assert_eq!(lot.position_to_park().unwrap(), Position::new(1));
    }

    #[test]
    fn test_no_two_active_tickets_share_a_position() {
        let mut lot = lot_with_capacity(9);
        let mut positions: Vec<_> = (1..=9)
            .map(|i| lot.park(vehicle(&format!("AA-{i:04}"))).unwrap().position)
            .collect();

        positions.sort_unstable();
        positions.dedup();
        assert_eq!(positions.len(), 9);
    }

    #[test]
    fn test_park_on_full_lot_leaves_lot_untouched() {
        let mut lot = lot_with_capacity(2);
        lot.park(vehicle("AA-0001")).unwrap();
        lot.park(vehicle("AA-0002")).unwrap();

        let err = lot.park(vehicle("AA-0003")).unwrap_err();
        assert!(matches!(err, LotKeeperError::NoAvailablePosition));
        assert_eq!(lot.available_capacity(), 0);
        assert!(lot.is_full());
    }

    #[test]
    fn test_fetch_with_unknown_ticket_leaves_lot_untouched() {
        let mut lot = lot_with_capacity(2);
        lot.park(vehicle("AA-0001")).unwrap();

        let forged = Ticket::new("ZZ-9999", Position::new(1), LotId::default());
        let err = lot.fetch(&forged).unwrap_err();
        assert!(matches!(err, LotKeeperError::UnrecognizedTicket));
        assert_eq!(lot.available_capacity(), 1);
    }

    #[test]
    fn test_contains_tracks_ticket_lifecycle() {
        let mut lot = lot_with_capacity(2);
        let ticket = lot.park(vehicle("AA-0001")).unwrap();
        assert!(lot.contains(&ticket));

        lot.fetch(&ticket).unwrap();
        assert!(!lot.contains(&ticket));
    }

    #[test]
    fn test_available_position_rate_at_empty_half_and_full() {
        let mut lot = lot_with_capacity(4);
        assert!((lot.available_position_rate() - 1.0).abs() < f64::EPSILON);

        lot.park(vehicle("AA-0001")).unwrap();
        lot.park(vehicle("AA-0002")).unwrap();
        assert!((lot.available_position_rate() - 0.5).abs() < f64::EPSILON);

        lot.park(vehicle("AA-0003")).unwrap();
        lot.park(vehicle("AA-0004")).unwrap();
        assert!((lot.available_position_rate() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_error_messages_are_stable() {
        assert_eq!(
            LotKeeperError::NoAvailablePosition.to_string(),
            "No available position."
        );
        assert_eq!(
            LotKeeperError::UnrecognizedTicket.to_string(),
            "Unrecognized parking ticket."
        );
    }
}
