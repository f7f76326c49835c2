//! Settings document for the auction house bot
//!
//! One [`HouseSettings`] block per house, loaded from JSON:
//!
//! ```json
//! {
//!   "alliance": { "max_items": 1000, "percentages": [0, 27, 12, 10, 1, 0, 0, 0, 10, 30, 8, 2, 0, 0] },
//!   "horde":    { "max_items": 1000 },
//!   "neutral":  { "max_items": 0 }
//! }
//! ```
//!
//! Missing fields take their defaults; prices left at 0 fall back to the
//! per-quality table defaults when read back from the configuration.

use std::path::Path;

use ahbot_core::{HouseKind, QUALITY_COUNT};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SettingsError};
use crate::quota::{self, Percentages};

/// Lane mix used when a house does not set its own: trade goods first, then items
pub fn default_percentages() -> Percentages {
    [
        // trade goods: poor .. artifact
        dec!(0),
        dec!(27),
        dec!(12),
        dec!(10),
        dec!(1),
        dec!(0),
        dec!(0),
        // items: poor .. artifact
        dec!(0),
        dec!(10),
        dec!(30),
        dec!(8),
        dec!(2),
        dec!(0),
        dec!(0),
    ]
}

/// Tunables for one house
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HouseSettings {
    /// Lower listing bound (0 = same as max)
    pub min_items: u32,
    /// Listing budget (0 = house idle)
    pub max_items: u32,
    /// Target mix per lane, trade goods then items
    pub percentages: Percentages,
    /// Lower listing price per quality (0 = table default)
    pub min_price: [u32; QUALITY_COUNT],
    /// Upper listing price per quality (0 = table default)
    pub max_price: [u32; QUALITY_COUNT],
    /// Lower bid as a percentage of buyout, per quality
    pub min_bid_price: [u32; QUALITY_COUNT],
    /// Upper bid as a percentage of buyout, per quality
    pub max_bid_price: [u32; QUALITY_COUNT],
    /// Largest stack listed per quality
    pub max_stack: [u32; QUALITY_COUNT],
    /// Price the buyer pass pays per quality
    pub buyer_price: [u32; QUALITY_COUNT],
    /// Minutes between buyer passes
    pub bidding_interval: u32,
    /// Bids placed per buyer pass
    pub bids_per_interval: u32,
}

impl Default for HouseSettings {
    fn default() -> Self {
        Self {
            min_items: 0,
            max_items: 0,
            percentages: default_percentages(),
            min_price: [0; QUALITY_COUNT],
            max_price: [0; QUALITY_COUNT],
            min_bid_price: [0; QUALITY_COUNT],
            max_bid_price: [0; QUALITY_COUNT],
            max_stack: [0; QUALITY_COUNT],
            buyer_price: [0; QUALITY_COUNT],
            bidding_interval: 1,
            bids_per_interval: 1,
        }
    }
}

impl HouseSettings {
    /// Reject percentages the normalization step cannot make sense of
    pub fn validate(&self, house: &str) -> Result<()> {
        for (lane, &value) in self.percentages.iter().enumerate() {
            if value < Decimal::ZERO {
                return Err(SettingsError::NegativePercentage {
                    house: house.to_string(),
                    lane,
                    value,
                });
            }
        }

        if quota::checked_total(&self.percentages).is_none() {
            return Err(SettingsError::PercentageOverflow {
                house: house.to_string(),
            });
        }

        Ok(())
    }

    pub fn with_max_items(mut self, max_items: u32) -> Self {
        self.max_items = max_items;
        self
    }
}

/// Settings for every house the bot runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotSettings {
    pub alliance: HouseSettings,
    pub horde: HouseSettings,
    pub neutral: HouseSettings,
}

impl BotSettings {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        for kind in HouseKind::ALL {
            self.house(kind).validate(&kind.to_string())?;
        }
        Ok(())
    }

    pub fn house(&self, kind: HouseKind) -> &HouseSettings {
        match kind {
            HouseKind::Alliance => &self.alliance,
            HouseKind::Horde => &self.horde,
            HouseKind::Neutral => &self.neutral,
        }
    }
}
