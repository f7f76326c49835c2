//! Auction House Bot Runner
//!
//! Module initialization for the auction house bot:
//!
//! - **Bootstrap**: one configuration per house, built from the settings document
//! - **Registry**: shared access for the seller and buyer passes
//! - **Listing counts**: record listings and removals, read remaining quota
//!
//! ## Architecture
//!
//! ```text
//!   settings.json ──► BotSettings ──► AuctionHouseBot
//!                                          │
//!            ┌─────────────────────────────┼─────────────────────────────┐
//!            ▼                             ▼                             ▼
//!   Alliance house (2)            Horde house (6)              Neutral house (7)
//!   faction 55                    faction 29                   faction 120
//!            │                             │                             │
//!            └──────── record_listing / record_removal / shortfall ──────┘
//!                                          ▲
//!                                          │
//!                               Seller / buyer passes
//! ```

pub mod bootstrap;
pub mod error;

// Re-export main types
pub use bootstrap::AuctionHouseBot;
pub use error::{BotError, Result};
