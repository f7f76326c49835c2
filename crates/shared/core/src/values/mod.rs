/// Auction house identifier as used by the game server
pub type HouseId = u32;

/// Faction template identifier attached to an auction house
pub type FactionId = u32;

/// Index into the per-lane arrays (percentages, quotas, live counts)
pub type Lane = usize;
