//! Errors raised while parsing catalog names or constructing characters and items

use crate::types::EquipmentSlot;
use thiserror::Error;

/// Parse and construction errors for the aggregation core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapleError {
    #[error("Level {level} is outside the valid range {min}..={max}")]
    InvalidLevel { level: u32, min: u32, max: u32 },
    #[error("Unknown class: {0}")]
    UnknownClass(String),
    #[error("Unknown stat: {0}")]
    UnknownStat(String),
    #[error("Unknown equipment slot: {0}")]
    UnknownEquipmentSlot(String),
    #[error("Unknown world: {0}")]
    UnknownWorld(String),
    #[error("Equipment can only have up to {max} lines of {group}, got {count}")]
    InvalidEquipment {
        group: &'static str,
        count: usize,
        max: usize,
    },
    #[error("Item for slot {item} was stored under slot {key}")]
    SlotMismatch {
        key: EquipmentSlot,
        item: EquipmentSlot,
    },
}
