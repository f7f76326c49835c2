//! Settings errors

use ahbot_core::Lane;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Negative percentage {value} for {house} lane {lane}")]
    NegativePercentage {
        house: String,
        lane: Lane,
        value: Decimal,
    },

    #[error("Percentage total for {house} does not fit in a decimal")]
    PercentageOverflow { house: String },
}

pub type Result<T> = std::result::Result<T, SettingsError>;
