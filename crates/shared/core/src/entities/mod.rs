mod house;
mod item_class;
mod quality;

pub use house::HouseKind;
pub use item_class::ItemClass;
pub use quality::{
    ITEM_LANE_OFFSET, ItemQuality, LANE_COUNT, NORMAL_LANE, QUALITY_COUNT, UNCOMMON_LANE,
};
