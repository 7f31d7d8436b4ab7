//! Plate number collaborator
//!
//! The allocator never manufactures vehicle identifiers; something outside
//! it does. This module is that collaborator for the CLI surfaces: a
//! generator of plate-like strings, seedable so scripted runs are
//! reproducible. Uniqueness is best effort only; the core compares plates
//! for equality and assumes nothing more.

use crate::core::PlateNumber;
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;

static PLATE_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2}-[0-9]{4}$").expect("plate format regex is valid"));

/// Whether `input` looks like a generated plate (`AB-1234`)
///
/// Used to sanity-check manual entry in the console. The allocator itself
/// accepts any plate.
#[must_use]
pub fn is_plate_like(input: &str) -> bool {
    PLATE_FORMAT.is_match(input)
}

/// Produces plate-like vehicle identifiers.
pub struct PlateGenerator {
    rng: StdRng,
}

impl PlateGenerator {
    /// Create a generator seeded from system entropy
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed, for reproducible runs
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw the next plate
    pub fn next_plate(&mut self) -> PlateNumber {
        let first = char::from(b'A' + self.rng.gen_range(0..26u8));
        let second = char::from(b'A' + self.rng.gen_range(0..26u8));
        let digits: u16 = self.rng.gen_range(0..10_000);
        PlateNumber::new(format!("{first}{second}-{digits:04}"))
    }
}

impl Default for PlateGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for PlateGenerator {
    type Item = PlateNumber;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_plate())
    }
}
