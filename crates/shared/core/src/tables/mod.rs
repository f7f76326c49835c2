//! Constant policy tables referenced by house configuration
//!
//! Kept as plain values so a host can swap them (tests, custom realms)
//! without touching the configuration record.

mod faction;
mod price;

use serde::{Deserialize, Serialize};

pub use faction::FactionTable;
pub use price::{PriceBounds, PriceDefaults};

/// Tables a house configuration is constructed against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseTables {
    pub factions: FactionTable,
    pub prices: PriceDefaults,
}

impl HouseTables {
    pub const STANDARD: HouseTables = HouseTables {
        factions: FactionTable::STANDARD,
        prices: PriceDefaults::STANDARD,
    };
}
