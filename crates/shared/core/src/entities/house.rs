use serde::{Deserialize, Serialize};

use crate::values::HouseId;

/// The three auction houses the bot populates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseKind {
    Alliance,
    Horde,
    Neutral,
}

impl HouseKind {
    pub const ALL: [HouseKind; 3] = [HouseKind::Alliance, HouseKind::Horde, HouseKind::Neutral];

    /// Server-side auction house id
    pub fn id(self) -> HouseId {
        match self {
            HouseKind::Alliance => 2,
            HouseKind::Horde => 6,
            HouseKind::Neutral => 7,
        }
    }

    pub fn from_id(id: HouseId) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

impl std::fmt::Display for HouseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HouseKind::Alliance => write!(f, "alliance"),
            HouseKind::Horde => write!(f, "horde"),
            HouseKind::Neutral => write!(f, "neutral"),
        }
    }
}
