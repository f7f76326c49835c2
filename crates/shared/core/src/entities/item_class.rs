use serde::{Deserialize, Serialize};

/// Item class as stored in item templates.
///
/// Only the trade-goods distinction affects lane selection; the remaining
/// variants exist so callers can pass template data through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemClass {
    Consumable,
    Container,
    Weapon,
    Gem,
    Armor,
    Reagent,
    Projectile,
    TradeGoods,
    Generic,
    Recipe,
    Money,
    Quiver,
    Quest,
    Key,
    Permanent,
    Miscellaneous,
    Glyph,
    /// Class id not known to this build
    Other(u32),
}

impl ItemClass {
    /// Map a template class id to the enum
    pub fn from_id(id: u32) -> Self {
        match id {
            0 => ItemClass::Consumable,
            1 => ItemClass::Container,
            2 => ItemClass::Weapon,
            3 => ItemClass::Gem,
            4 => ItemClass::Armor,
            5 => ItemClass::Reagent,
            6 => ItemClass::Projectile,
            7 => ItemClass::TradeGoods,
            8 => ItemClass::Generic,
            9 => ItemClass::Recipe,
            10 => ItemClass::Money,
            11 => ItemClass::Quiver,
            12 => ItemClass::Quest,
            13 => ItemClass::Key,
            14 => ItemClass::Permanent,
            15 => ItemClass::Miscellaneous,
            16 => ItemClass::Glyph,
            other => ItemClass::Other(other),
        }
    }

    /// Template class id
    pub fn id(self) -> u32 {
        match self {
            ItemClass::Consumable => 0,
            ItemClass::Container => 1,
            ItemClass::Weapon => 2,
            ItemClass::Gem => 3,
            ItemClass::Armor => 4,
            ItemClass::Reagent => 5,
            ItemClass::Projectile => 6,
            ItemClass::TradeGoods => 7,
            ItemClass::Generic => 8,
            ItemClass::Recipe => 9,
            ItemClass::Money => 10,
            ItemClass::Quiver => 11,
            ItemClass::Quest => 12,
            ItemClass::Key => 13,
            ItemClass::Permanent => 14,
            ItemClass::Miscellaneous => 15,
            ItemClass::Glyph => 16,
            ItemClass::Other(id) => id,
        }
    }

    pub fn is_trade_goods(self) -> bool {
        matches!(self, ItemClass::TradeGoods)
    }
}
