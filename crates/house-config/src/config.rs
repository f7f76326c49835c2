//! Per auction house configuration record
//!
//! Holds the tunables for one house and the live listing counts the bot
//! keeps while it runs. Indexed operations never fail: setters ignore an
//! out-of-range tier and getters report 0 for it.

use ahbot_core::{
    FactionId, HouseId, HouseKind, HouseTables, ItemClass, ItemQuality, LANE_COUNT, Lane,
    QUALITY_COUNT,
};
use log::{debug, info, warn};
use rust_decimal::Decimal;

use crate::quota::{self, Normalization, Percentages, Quotas};
use crate::settings::HouseSettings;

/// Bid prices are a percentage of the buyout and never exceed it
pub const MAX_BID_PERCENT: u32 = 100;

/// Tunables and live counts for a single auction house
#[derive(Debug, Clone, PartialEq)]
pub struct AuctionHouseConfig {
    /// Server auction house id
    house_id: HouseId,
    /// Faction the house's listings are posted under
    faction_id: FactionId,
    /// Tables the faction and price defaults were resolved from
    tables: HouseTables,

    /// Lower listing bound as configured (see `min_items()` for the effective value)
    min_items: u32,
    /// Listing budget; quotas always total this
    max_items: u32,

    /// Configured lower listing price per quality (0 = table default)
    min_price: [u32; QUALITY_COUNT],
    /// Configured upper listing price per quality (0 = table default)
    max_price: [u32; QUALITY_COUNT],
    /// Lower bid as a percentage of buyout, per quality
    min_bid_price: [u32; QUALITY_COUNT],
    /// Upper bid as a percentage of buyout, per quality
    max_bid_price: [u32; QUALITY_COUNT],
    /// Largest stack listed per quality
    max_stack: [u32; QUALITY_COUNT],
    /// Price the buyer pass is willing to pay, per quality
    buyer_price: [u32; QUALITY_COUNT],

    /// Target mix per lane, normalized to total 100
    items_percent: Percentages,
    /// Listing target per lane derived from the mix and max items
    item_quotas: Quotas,
    /// Listings currently held per lane
    item_counts: [u32; LANE_COUNT],

    /// Minutes between buyer passes
    bidding_interval: u32,
    /// Bids placed per buyer pass
    bids_per_interval: u32,
}

impl AuctionHouseConfig {
    /// Create a configuration for `house_id` using the standard tables
    pub fn new(house_id: HouseId) -> Self {
        Self::with_tables(house_id, HouseTables::STANDARD)
    }

    /// Create a configuration resolving faction and price defaults from `tables`
    pub fn with_tables(house_id: HouseId, tables: HouseTables) -> Self {
        Self {
            house_id,
            faction_id: tables.factions.faction_for(house_id),
            tables,
            min_items: 0,
            max_items: 0,
            min_price: [0; QUALITY_COUNT],
            max_price: [0; QUALITY_COUNT],
            min_bid_price: [0; QUALITY_COUNT],
            max_bid_price: [0; QUALITY_COUNT],
            max_stack: [0; QUALITY_COUNT],
            buyer_price: [0; QUALITY_COUNT],
            items_percent: [Decimal::ZERO; LANE_COUNT],
            item_quotas: [0; LANE_COUNT],
            item_counts: [0; LANE_COUNT],
            bidding_interval: 1,
            bids_per_interval: 1,
        }
    }

    pub fn for_kind(kind: HouseKind) -> Self {
        Self::new(kind.id())
    }

    pub fn house_id(&self) -> HouseId {
        self.house_id
    }

    pub fn faction_id(&self) -> FactionId {
        self.faction_id
    }

    /// A house with no item budget lists nothing
    pub fn is_enabled(&self) -> bool {
        self.max_items > 0
    }

    // === Item budget ===

    pub fn set_min_items(&mut self, value: u32) {
        self.min_items = value;
    }

    /// Effective lower listing bound.
    ///
    /// Never exceeds the maximum: an unset minimum or one above the maximum
    /// resolves to the maximum.
    pub fn min_items(&self) -> u32 {
        if self.min_items == 0 && self.max_items > 0 {
            return self.max_items;
        }
        if self.max_items > 0 && self.min_items > self.max_items {
            return self.max_items;
        }
        self.min_items
    }

    /// Set the listing budget and re-derive quotas from it
    pub fn set_max_items(&mut self, value: u32) {
        self.max_items = value;
        self.calculate_percents();
    }

    pub fn max_items(&self) -> u32 {
        self.max_items
    }

    // === Prices ===

    pub fn set_min_price(&mut self, quality: usize, value: u32) {
        write(&mut self.min_price, quality, value);
    }

    /// Lower listing price for a quality.
    ///
    /// Unset falls back to the table default; a minimum above the effective
    /// maximum resolves to that maximum.
    pub fn min_price(&self, quality: usize) -> u32 {
        let Some(default) = self.tables.prices.min_for(quality) else {
            return 0;
        };

        let min = self.min_price[quality];
        if min == 0 {
            return default;
        }

        min.min(self.max_price(quality))
    }

    pub fn set_max_price(&mut self, quality: usize, value: u32) {
        write(&mut self.max_price, quality, value);
    }

    /// Upper listing price for a quality, table default when unset
    pub fn max_price(&self, quality: usize) -> u32 {
        let Some(default) = self.tables.prices.max_for(quality) else {
            return 0;
        };

        match self.max_price[quality] {
            0 => default,
            max => max,
        }
    }

    pub fn set_min_bid_price(&mut self, quality: usize, value: u32) {
        write(&mut self.min_bid_price, quality, value);
    }

    pub fn min_bid_price(&self, quality: usize) -> u32 {
        read(&self.min_bid_price, quality).min(MAX_BID_PERCENT)
    }

    pub fn set_max_bid_price(&mut self, quality: usize, value: u32) {
        write(&mut self.max_bid_price, quality, value);
    }

    pub fn max_bid_price(&self, quality: usize) -> u32 {
        read(&self.max_bid_price, quality).min(MAX_BID_PERCENT)
    }

    pub fn set_max_stack(&mut self, quality: usize, value: u32) {
        write(&mut self.max_stack, quality, value);
    }

    pub fn max_stack(&self, quality: usize) -> u32 {
        read(&self.max_stack, quality)
    }

    pub fn set_buyer_price(&mut self, quality: usize, value: u32) {
        write(&mut self.buyer_price, quality, value);
    }

    pub fn buyer_price(&self, quality: usize) -> u32 {
        read(&self.buyer_price, quality)
    }

    // === Buyer pacing ===

    pub fn set_bidding_interval(&mut self, minutes: u32) {
        self.bidding_interval = minutes;
    }

    pub fn bidding_interval(&self) -> u32 {
        self.bidding_interval
    }

    pub fn set_bids_per_interval(&mut self, bids: u32) {
        self.bids_per_interval = bids;
    }

    pub fn bids_per_interval(&self) -> u32 {
        self.bids_per_interval
    }

    // === Percentages & quotas ===

    /// Store lane percentages and re-derive quotas.
    ///
    /// A zero total disables the house (max items forced to 0). A total
    /// further than 0.1 from 100 is rescaled proportionally. A set whose
    /// total overflows is discarded and also disables the house.
    pub fn set_percentages(&mut self, percentages: Percentages) -> Normalization {
        let mut percentages = percentages;
        let outcome = quota::normalize(&mut percentages);

        match outcome {
            Normalization::Disabled => {
                info!(
                    "[AHBOT] House {}: all percentages are zero, house disabled",
                    self.house_id
                );
                self.max_items = 0;
            }
            Normalization::Rescaled { total } => {
                warn!(
                    "[AHBOT] House {}: percentages don't add up to 100 (was {}), they have been auto-normalized",
                    self.house_id, total
                );
            }
            Normalization::Overflowed => {
                warn!(
                    "[AHBOT] House {}: percentage total overflows, house disabled",
                    self.house_id
                );
                self.max_items = 0;
                percentages = [Decimal::ZERO; LANE_COUNT];
            }
            Normalization::Unchanged => {}
        }

        self.items_percent = percentages;
        self.calculate_percents();
        outcome
    }

    /// Stored (possibly normalized) percentage for a lane
    pub fn percentage(&self, lane: Lane) -> Decimal {
        self.items_percent
            .get(lane)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn percentages(&self) -> &Percentages {
        &self.items_percent
    }

    /// Re-derive lane quotas from the stored percentages and max items
    pub fn calculate_percents(&mut self) {
        self.item_quotas = quota::derive_quotas(&self.items_percent, self.max_items);
    }

    /// Quota for a lane
    pub fn percents(&self, lane: Lane) -> u32 {
        read(&self.item_quotas, lane)
    }

    pub fn quotas(&self) -> &Quotas {
        &self.item_quotas
    }

    // === Live counts ===

    /// Count one more listing in `lane`
    pub fn increase_item_counts(&mut self, lane: Lane) {
        if let Some(count) = self.item_counts.get_mut(lane) {
            *count = count.saturating_add(1);
        }
    }

    /// Count one fewer listing in `lane`; stays at zero when already empty
    pub fn decrease_item_counts(&mut self, lane: Lane) {
        let Some(count) = self.item_counts.get_mut(lane) else {
            return;
        };

        if *count == 0 {
            warn!(
                "[AHBOT] House {}: item count for lane {} would drop below zero",
                self.house_id, lane
            );
            return;
        }

        *count -= 1;
    }

    pub fn increase_item_counts_for(&mut self, class: ItemClass, quality: ItemQuality) {
        self.increase_item_counts(quality.lane(class));
    }

    pub fn decrease_item_counts_for(&mut self, class: ItemClass, quality: ItemQuality) {
        self.decrease_item_counts(quality.lane(class));
    }

    pub fn reset_item_counts(&mut self) {
        self.item_counts.fill(0);
    }

    pub fn total_item_counts(&self) -> u32 {
        self.item_counts
            .iter()
            .fold(0u32, |total, &count| total.saturating_add(count))
    }

    pub fn item_counts(&self, lane: Lane) -> u32 {
        read(&self.item_counts, lane)
    }

    // === Settings ===

    /// Overwrite every tunable from `settings`.
    ///
    /// Live counts are kept. Max items is written before the percentages so
    /// the quotas are derived from the new budget.
    pub fn apply(&mut self, settings: &HouseSettings) {
        self.min_items = settings.min_items;
        self.max_items = settings.max_items;
        self.min_price = settings.min_price;
        self.max_price = settings.max_price;
        self.min_bid_price = settings.min_bid_price;
        self.max_bid_price = settings.max_bid_price;
        self.max_stack = settings.max_stack;
        self.buyer_price = settings.buyer_price;
        self.bidding_interval = settings.bidding_interval;
        self.bids_per_interval = settings.bids_per_interval;
        self.set_percentages(settings.percentages);

        debug!(
            "[AHBOT] House {} (faction {}): items {}..{}, quotas {:?}",
            self.house_id,
            self.faction_id,
            self.min_items(),
            self.max_items,
            self.item_quotas
        );
    }
}

fn read(values: &[u32], index: usize) -> u32 {
    values.get(index).copied().unwrap_or(0)
}

fn write(values: &mut [u32], index: usize, value: u32) {
    if let Some(slot) = values.get_mut(index) {
        *slot = value;
    }
}
