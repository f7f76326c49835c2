//! Bootstrap errors

use ahbot_core::HouseId;
use ahbot_house_config::SettingsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Unknown auction house: {0}")]
    UnknownHouse(HouseId),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}

pub type Result<T> = std::result::Result<T, BotError>;
