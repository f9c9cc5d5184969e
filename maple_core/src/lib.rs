//! maple_core - Stat aggregation engine for MapleStory character builds
//!
//! This library provides:
//! - Stat catalog: every stat with its default and combination rule
//! - Class taxonomy: branch, governing stats and weapon per class
//! - LinkRegistry: cooperative link skill bonuses keyed by class
//! - EquipmentItem: validated, immutable bundles of stat lines
//! - Character: folds gear, links, level and world into one Statline

#[macro_use]
mod macros;

pub mod character;
pub mod class;
pub mod config;
pub mod constants;
pub mod equipment;
pub mod error;
pub mod link;
pub mod record;
pub mod source;
pub mod statline;
pub mod types;

pub mod prelude;

// Re-export core types for convenience
pub use character::Character;
pub use class::{CharClass, ClassBranch, WeaponType, DEX_PIRATES, STR_PIRATES};
pub use config::ConfigError;
pub use equipment::{EquipmentItem, Line};
pub use error::MapleError;
pub use link::{LinkContributor, LinkRegistry, LinkStatTerm};
pub use record::{CharacterRecord, EquipmentRecord};
pub use source::{BaseStatsSource, GearSource, LinkSkillSource, StatSource, WorldSource};
pub use statline::{CombinationRule, Stat, StatAccumulator, StatDomain, Statline};
pub use types::{EquipmentSlot, Resolve, World};
