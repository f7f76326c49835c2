use serde::{Deserialize, Serialize};

use super::item_class::ItemClass;
use crate::values::Lane;

/// Number of item quality tiers (poor through artifact)
pub const QUALITY_COUNT: usize = 7;

/// Offset added to a quality to reach its non trade-goods lane
pub const ITEM_LANE_OFFSET: usize = QUALITY_COUNT;

/// Number of counting lanes: one trade-goods lane and one item lane per quality
pub const LANE_COUNT: usize = QUALITY_COUNT * 2;

/// Lane that absorbs quota rounding corrections first
pub const NORMAL_LANE: Lane = ItemQuality::Normal as Lane;

/// Fallback lane for quota corrections when the normal lane is too small
pub const UNCOMMON_LANE: Lane = ItemQuality::Uncommon as Lane;

/// Item rarity, ordered from poor to artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemQuality {
    Poor = 0,
    Normal = 1,
    Uncommon = 2,
    Rare = 3,
    Epic = 4,
    Legendary = 5,
    Artifact = 6,
}

impl ItemQuality {
    pub const ALL: [ItemQuality; QUALITY_COUNT] = [
        ItemQuality::Poor,
        ItemQuality::Normal,
        ItemQuality::Uncommon,
        ItemQuality::Rare,
        ItemQuality::Epic,
        ItemQuality::Legendary,
        ItemQuality::Artifact,
    ];

    /// Position of this quality in per-quality arrays
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a quality by its ordinal, `None` past artifact
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Counting lane for an item of this quality.
    ///
    /// Trade goods keep the quality as their lane; every other class is
    /// shifted into the item half of the lane table.
    pub fn lane(self, class: ItemClass) -> Lane {
        if class.is_trade_goods() {
            self.index()
        } else {
            self.index() + ITEM_LANE_OFFSET
        }
    }
}
