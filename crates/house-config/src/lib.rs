//! Auction House Bot - House Configuration
//!
//! Tunables for a single simulated auction house and the values derived
//! from them:
//!
//! - **Prices**: listing and bid bounds per quality, with table defaults
//! - **Percentages**: target lane mix, normalized to total 100
//! - **Quotas**: absolute listing targets per lane, always summing to max items
//! - **Live counts**: listings currently held per lane
//! - **Settings**: JSON document applied to a house at startup or reload
//!
//! ## Lanes
//!
//! ```text
//!  lane   0   1   2   3   4   5   6 │  7   8   9  10  11  12  13
//!        ───────── trade goods ──── │ ────────── items ──────────
//!         poor normal ...  artifact │ poor normal ...    artifact
//! ```
//!
//! Rounding drift in the quotas is absorbed by lane 1 (normal trade goods),
//! falling back to lane 2 (uncommon trade goods).

pub mod config;
pub mod error;
pub mod quota;
pub mod settings;

// Re-export main types
pub use config::{AuctionHouseConfig, MAX_BID_PERCENT};
pub use error::{Result, SettingsError};
pub use quota::{Normalization, PERCENT_TOLERANCE, Percentages, Quotas};
pub use settings::{BotSettings, HouseSettings, default_percentages};
