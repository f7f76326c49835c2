use serde::{Deserialize, Serialize};

use crate::entities::HouseKind;
use crate::values::{FactionId, HouseId};

/// Faction assigned to each auction house.
///
/// Ids that do not name a known house get `fallback`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionTable {
    pub alliance: FactionId,
    pub horde: FactionId,
    pub neutral: FactionId,
    pub fallback: FactionId,
}

impl FactionTable {
    pub const STANDARD: FactionTable = FactionTable {
        alliance: 55,
        horde: 29,
        neutral: 120,
        fallback: 120,
    };

    pub fn faction_for(&self, house_id: HouseId) -> FactionId {
        match HouseKind::from_id(house_id) {
            Some(HouseKind::Alliance) => self.alliance,
            Some(HouseKind::Horde) => self.horde,
            Some(HouseKind::Neutral) => self.neutral,
            None => self.fallback,
        }
    }
}

impl Default for FactionTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
