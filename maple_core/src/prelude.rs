//! Prelude module for convenient imports
//!
//! ```rust
//! use maple_core::prelude::*;
//! ```

// Core types
pub use crate::character::Character;
pub use crate::equipment::EquipmentItem;
pub use crate::record::EquipmentRecord;
pub use crate::statline::{Stat, Statline};
pub use crate::types::{EquipmentSlot, World};

// Taxonomy
pub use crate::class::{CharClass, ClassBranch};
pub use crate::link::LinkRegistry;

// Errors
pub use crate::error::MapleError;
