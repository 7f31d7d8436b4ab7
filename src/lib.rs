//! lotkeeper - a parking-position allocator and ticket lifecycle manager
//!
//! This crate models a single parking facility: arriving vehicles are
//! assigned the lowest free position, receive a ticket binding vehicle to
//! position, and surrender that ticket to leave. The interesting pieces:
//! - Deterministic lowest-free-position allocation with reusable slots
//! - Tickets as structural value objects, keying the occupancy map directly
//! - Uniform rejection of forged and stale credentials
//!
//! The lot is a plain mutable value with no interior locking; a host that
//! shares one across threads wraps it in a mutex so each operation runs as
//! one atomic step.
//!
//! # Example
//!
//! ```rust
//! use lotkeeper::{ParkingLot, Vehicle};
//!
//! let mut lot = ParkingLot::new();
//! let ticket = lot.park(Vehicle::new("AB-1234"))?;
//! assert!(lot.contains(&ticket));
//!
//! let vehicle = lot.fetch(&ticket)?;
//! assert_eq!(vehicle.plate().as_str(), "AB-1234");
//! # Ok::<(), lotkeeper::LotKeeperError>(())
//! ```

#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod generator;

// Re-export commonly used types
pub use crate::core::{LotBuilder, LotId, ParkingLot, PlateNumber, Position, Ticket, Vehicle};
pub use error::{LotKeeperError, Result};
