//! Persistence records for characters and equipment
//!
//! Records hold raw data exactly as stored. Converting a record into a
//! [`Character`](crate::Character) or [`EquipmentItem`] re-runs every
//! construction check, so a deserialized value is always valid.

use crate::class::CharClass;
use crate::equipment::{EquipmentItem, Line};
use crate::error::MapleError;
use crate::statline::Statline;
use crate::types::{EquipmentSlot, World};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw line data for one equipment item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub name: String,
    pub equip_type: EquipmentSlot,
    #[serde(default)]
    pub base_stats: Statline,
    /// Scroll and star force stats
    #[serde(default)]
    pub scroll_stats: Statline,
    #[serde(default)]
    pub potential: Vec<Line>,
    #[serde(default)]
    pub bonus_potential: Vec<Line>,
    #[serde(default)]
    pub bonus_stats: Vec<Line>,
}

impl EquipmentRecord {
    /// An item with no stat lines
    pub fn new(name: impl Into<String>, equip_type: EquipmentSlot) -> Self {
        EquipmentRecord {
            name: name.into(),
            equip_type,
            base_stats: Statline::new(),
            scroll_stats: Statline::new(),
            potential: Vec::new(),
            bonus_potential: Vec::new(),
            bonus_stats: Vec::new(),
        }
    }

    pub fn with_base_stats(mut self, stats: Statline) -> Self {
        self.base_stats = stats;
        self
    }

    pub fn with_scroll_stats(mut self, stats: Statline) -> Self {
        self.scroll_stats = stats;
        self
    }

    pub fn with_potential(mut self, lines: Vec<Line>) -> Self {
        self.potential = lines;
        self
    }

    pub fn with_bonus_potential(mut self, lines: Vec<Line>) -> Self {
        self.bonus_potential = lines;
        self
    }

    pub fn with_bonus_stats(mut self, lines: Vec<Line>) -> Self {
        self.bonus_stats = lines;
        self
    }

    /// Validate and build the item
    pub fn build(self) -> Result<EquipmentItem, MapleError> {
        EquipmentItem::new(self)
    }
}

/// Stored form of a character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    pub level: u32,
    #[serde(alias = "char_class")]
    pub character_class: CharClass,
    #[serde(default)]
    pub world: Option<World>,
    /// Acquired link level per class
    #[serde(default)]
    pub link_skills: BTreeMap<CharClass, u32>,
    /// Every slot, `null` when empty
    #[serde(default)]
    pub equips: BTreeMap<EquipmentSlot, Option<EquipmentItem>>,
}
