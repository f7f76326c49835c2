//! Bootstrap - per-house configuration setup
//!
//! Handles module initialization for the bot:
//! - Building one configuration per auction house
//! - Applying the settings document to each house
//! - Sharing the houses between the seller and buyer passes

use std::path::Path;
use std::sync::Arc;

use ahbot_core::{HouseId, HouseKind, HouseTables, ItemClass, ItemQuality, Lane};
use ahbot_house_config::{AuctionHouseConfig, BotSettings};
use dashmap::DashMap;
use log::info;

use crate::error::{BotError, Result};

/// The set of auction houses the bot populates.
///
/// Houses live in a `DashMap` keyed by house id, so passes working on
/// different houses do not block each other. Cloning shares the same houses.
#[derive(Debug)]
pub struct AuctionHouseBot {
    houses: Arc<DashMap<HouseId, AuctionHouseConfig>>,
}

impl AuctionHouseBot {
    /// Build every house from `settings` with the standard tables
    pub fn new(settings: &BotSettings) -> Self {
        Self::with_tables(settings, HouseTables::STANDARD)
    }

    /// Build every house from `settings`, resolving factions and price
    /// defaults from `tables`
    pub fn with_tables(settings: &BotSettings, tables: HouseTables) -> Self {
        let houses = DashMap::new();

        for kind in HouseKind::ALL {
            let mut config = AuctionHouseConfig::with_tables(kind.id(), tables);
            config.apply(settings.house(kind));

            info!(
                "[AHBOT] Registered {} house {} (faction {}) with {}..{} items",
                kind,
                config.house_id(),
                config.faction_id(),
                config.min_items(),
                config.max_items()
            );

            houses.insert(kind.id(), config);
        }

        Self {
            houses: Arc::new(houses),
        }
    }

    /// Load the settings document at `path` and build every house from it
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let settings = BotSettings::from_path(path)?;
        Ok(Self::new(&settings))
    }

    /// Ids of the registered houses, ascending
    pub fn house_ids(&self) -> Vec<HouseId> {
        let mut ids: Vec<HouseId> = self.houses.iter().map(|h| *h.key()).collect();
        ids.sort_unstable();
        ids
    }

    /// Snapshot of one house
    pub fn house(&self, house_id: HouseId) -> Result<AuctionHouseConfig> {
        self.with_house(house_id, |config| config.clone())
    }

    /// Read a house in place.
    ///
    /// `f` runs while the house's `DashMap` shard is locked. Calling back into
    /// the bot from inside `f` (`record_listing`, `reset_counts`,
    /// `total_listed`, ...) can deadlock; copy what you need out instead.
    pub fn with_house<R>(
        &self,
        house_id: HouseId,
        f: impl FnOnce(&AuctionHouseConfig) -> R,
    ) -> Result<R> {
        self.houses
            .get(&house_id)
            .map(|config| f(config.value()))
            .ok_or(BotError::UnknownHouse(house_id))
    }

    /// Mutate a house in place.
    ///
    /// `f` runs while the house's `DashMap` shard is write-locked, blocking
    /// every other access to that shard. Calling back into the bot from
    /// inside `f` deadlocks.
    pub fn with_house_mut<R>(
        &self,
        house_id: HouseId,
        f: impl FnOnce(&mut AuctionHouseConfig) -> R,
    ) -> Result<R> {
        self.houses
            .get_mut(&house_id)
            .map(|mut config| f(config.value_mut()))
            .ok_or(BotError::UnknownHouse(house_id))
    }

    /// Count an auction the bot just listed
    pub fn record_listing(
        &self,
        house_id: HouseId,
        class: ItemClass,
        quality: ItemQuality,
    ) -> Result<()> {
        self.with_house_mut(house_id, |config| {
            config.increase_item_counts_for(class, quality)
        })
    }

    /// Count an auction that sold, expired or was cancelled
    pub fn record_removal(
        &self,
        house_id: HouseId,
        class: ItemClass,
        quality: ItemQuality,
    ) -> Result<()> {
        self.with_house_mut(house_id, |config| {
            config.decrease_item_counts_for(class, quality)
        })
    }

    /// Listings still missing from a lane's quota
    pub fn shortfall(&self, house_id: HouseId, lane: Lane) -> Result<u32> {
        self.with_house(house_id, |config| {
            config.percents(lane).saturating_sub(config.item_counts(lane))
        })
    }

    /// Clear live counts in every house before a recount
    pub fn reset_counts(&self) {
        for mut house in self.houses.iter_mut() {
            house.value_mut().reset_item_counts();
        }
    }

    /// Live listings across every house
    pub fn total_listed(&self) -> u32 {
        self.houses
            .iter()
            .fold(0u32, |total, house| {
                total.saturating_add(house.value().total_item_counts())
            })
    }

    /// Re-apply settings to every house, keeping live counts
    pub fn reload(&self, settings: &BotSettings) {
        for kind in HouseKind::ALL {
            if let Some(mut house) = self.houses.get_mut(&kind.id()) {
                house.value_mut().apply(settings.house(kind));
                info!("[AHBOT] Reloaded {} house settings", kind);
            }
        }
    }
}

impl Clone for AuctionHouseBot {
    fn clone(&self) -> Self {
        Self {
            houses: Arc::clone(&self.houses),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahbot_house_config::HouseSettings;

    fn settings() -> BotSettings {
        BotSettings {
            alliance: HouseSettings::default().with_max_items(100),
            horde: HouseSettings::default().with_max_items(200),
            neutral: HouseSettings::default(),
        }
    }

    #[test]
    fn test_bootstrap_creates_houses() {
        let bot = AuctionHouseBot::new(&settings());

        assert_eq!(bot.house_ids(), vec![2, 6, 7]);
        assert_eq!(bot.house(2).unwrap().faction_id(), 55);
        assert_eq!(bot.house(6).unwrap().max_items(), 200);
        assert!(!bot.house(7).unwrap().is_enabled());
    }

    #[test]
    fn test_unknown_house() {
        let bot = AuctionHouseBot::new(&settings());

        assert!(matches!(bot.house(1), Err(BotError::UnknownHouse(1))));
        assert!(
            bot.record_listing(9, ItemClass::Weapon, ItemQuality::Rare)
                .is_err()
        );
    }

    #[test]
    fn test_clone_shares_houses() {
        let bot = AuctionHouseBot::new(&settings());
        let other = bot.clone();

        other
            .record_listing(2, ItemClass::TradeGoods, ItemQuality::Normal)
            .unwrap();

        assert_eq!(bot.with_house(2, |h| h.item_counts(1)).unwrap(), 1);
    }
}
