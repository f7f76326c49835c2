//! Auction House Bot Core Domain
//!
//! Pure domain types for the auction house bot: item qualities, item
//! classes, house kinds and the constant tables a house configuration
//! is built against.
//! This crate contains no I/O and is 100% unit testable.

pub mod entities;
pub mod tables;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    HouseKind, ITEM_LANE_OFFSET, ItemClass, ItemQuality, LANE_COUNT, NORMAL_LANE, QUALITY_COUNT,
    UNCOMMON_LANE,
};
pub use tables::{FactionTable, HouseTables, PriceBounds, PriceDefaults};
pub use values::{FactionId, HouseId, Lane};
