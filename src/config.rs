//! Construction-time configuration
//!
//! A lot is configured once, at construction: capacity plus the optional
//! identity attributes an external registry may care about. Values layer
//! in the usual order (defaults, then an optional `lotkeeper.toml` file,
//! then `LOTKEEPER_*` environment variables), and CLI flags override
//! whatever was loaded. None of this influences allocation behavior.

use crate::core::{LotId, ParkingLot};
use crate::error::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for constructing a [`ParkingLot`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LotConfig {
    /// Registry identifier, 0 when unregistered
    pub id: u32,
    /// Display name for registry listings
    pub name: Option<String>,
    /// Number of positions
    pub capacity: u32,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            id: 0,
            name: None,
            capacity: ParkingLot::DEFAULT_CAPACITY,
        }
    }
}

impl LotConfig {
    /// Load configuration from `lotkeeper.toml` (if present) and the
    /// `LOTKEEPER_*` environment, falling back to defaults
    pub fn load_or_default() -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name("lotkeeper").required(false))
            .add_source(Environment::with_prefix("LOTKEEPER").try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load configuration from an explicit file, still honoring
    /// environment overrides
    pub fn load_from(path: &Path) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from(path))
            .add_source(Environment::with_prefix("LOTKEEPER").try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Construct the configured lot
    ///
    /// # Errors
    ///
    /// Returns [`LotKeeperError::InvalidCapacity`](crate::error::LotKeeperError::InvalidCapacity)
    /// if the configured capacity is zero.
    pub fn build_lot(&self) -> Result<ParkingLot> {
        let mut builder = ParkingLot::builder()
            .id(LotId::new(self.id))
            .capacity(self.capacity);
        if let Some(name) = &self.name {
            builder = builder.name(name.clone());
        }
        builder.build()
    }
}
