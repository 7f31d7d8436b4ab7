//! Core domain types for position allocation and ticket lifecycle
//!
//! The allocator lives in [`lot`]; the value types it trades in are split
//! one per module. Everything here is synchronous, in-memory, and free of
//! I/O. Outer surfaces (CLI, config) depend on this module, never the
//! other way around.

mod lot;
mod plate;
mod position;
mod ticket;
mod vehicle;

pub use lot::{LotBuilder, LotId, ParkingLot};
pub use plate::PlateNumber;
pub use position::Position;
pub use ticket::Ticket;
pub use vehicle::Vehicle;
