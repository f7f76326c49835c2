use serde::{Deserialize, Serialize};

use crate::entities::{ItemQuality, QUALITY_COUNT};

/// Default listing price bounds for one quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBounds {
    pub min: u32,
    pub max: u32,
}

impl PriceBounds {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Per-quality fallback prices used when a house leaves a bound unset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceDefaults {
    bounds: [PriceBounds; QUALITY_COUNT],
}

impl PriceDefaults {
    pub const STANDARD: PriceDefaults = PriceDefaults {
        bounds: [
            PriceBounds::new(100, 150), // poor
            PriceBounds::new(150, 250), // normal
            PriceBounds::new(200, 300), // uncommon
            PriceBounds::new(250, 350), // rare
            PriceBounds::new(300, 450), // epic
            PriceBounds::new(400, 550), // legendary
            PriceBounds::new(500, 650), // artifact
        ],
    };

    pub fn new(bounds: [PriceBounds; QUALITY_COUNT]) -> Self {
        Self { bounds }
    }

    /// Bounds for a quality index, `None` when out of range
    pub fn get(&self, quality: usize) -> Option<PriceBounds> {
        self.bounds.get(quality).copied()
    }

    pub fn for_quality(&self, quality: ItemQuality) -> PriceBounds {
        self.bounds[quality.index()]
    }

    pub fn min_for(&self, quality: usize) -> Option<u32> {
        self.get(quality).map(|b| b.min)
    }

    pub fn max_for(&self, quality: usize) -> Option<u32> {
        self.get(quality).map(|b| b.max)
    }
}

impl Default for PriceDefaults {
    fn default() -> Self {
        Self::STANDARD
    }
}
