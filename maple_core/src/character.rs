//! Character - the aggregate root owning class, level, loadout and link levels

use crate::class::{CharClass, ClassBranch, WeaponType};
use crate::constants::{MAX_LEVEL, MIN_LEVEL, PURE_SECONDARY_STAT};
use crate::equipment::EquipmentItem;
use crate::error::MapleError;
use crate::link::LinkRegistry;
use crate::record::CharacterRecord;
use crate::source::{
    job_tier, pure_primary_stat, resolve_sources, BaseStatsSource, GearSource, LinkSkillSource,
    StatSource, WorldSource,
};
use crate::statline::{Stat, Statline};
use crate::types::{EquipmentSlot, Resolve, World};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// A character build
///
/// Every aggregate read folds the current state from scratch, so no read can
/// observe stale equipment or link levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CharacterRecord", into = "CharacterRecord")]
pub struct Character {
    pub name: String,
    level: u32,
    class: CharClass,
    world: Option<World>,
    in_reboot: bool,
    primary_stat: Stat,
    secondary_stat: Stat,
    equips: BTreeMap<EquipmentSlot, EquipmentItem>,
    link_levels: BTreeMap<CharClass, u32>,
}

impl Character {
    /// Create a character with an empty loadout and no link skills
    pub fn new(
        name: impl Into<String>,
        level: u32,
        class: impl Resolve<CharClass>,
        world: Option<World>,
    ) -> Result<Self, MapleError> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            return Err(MapleError::InvalidLevel {
                level,
                min: MIN_LEVEL,
                max: MAX_LEVEL,
            });
        }
        let class = class.resolve()?;

        Ok(Character {
            name: name.into(),
            level,
            class,
            world,
            in_reboot: world.is_some_and(World::is_reboot),
            primary_stat: class.primary_stat(),
            secondary_stat: class.secondary_stat(),
            equips: BTreeMap::new(),
            link_levels: BTreeMap::new(),
        })
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn class(&self) -> CharClass {
        self.class
    }

    pub fn branch(&self) -> ClassBranch {
        self.class.branch()
    }

    pub fn weapon(&self) -> WeaponType {
        self.class.weapon()
    }

    /// Change class; level, loadout and link levels are untouched
    pub fn set_class(&mut self, class: CharClass) {
        debug!(character = %self.name, from = %self.class, to = %class, "class changed");
        self.class = class;
        self.primary_stat = class.primary_stat();
        self.secondary_stat = class.secondary_stat();
    }

    pub fn world(&self) -> Option<World> {
        self.world
    }

    /// Whether the reboot damage bonus applies
    pub fn in_reboot(&self) -> bool {
        self.in_reboot
    }

    /// Move to another world, updating the reboot flag to match
    pub fn set_world(&mut self, world: Option<World>) {
        self.world = world;
        self.in_reboot = world.is_some_and(World::is_reboot);
        debug!(character = %self.name, ?world, in_reboot = self.in_reboot, "world changed");
    }

    pub fn primary_stat(&self) -> Stat {
        self.primary_stat
    }

    pub fn secondary_stat(&self) -> Stat {
        self.secondary_stat
    }

    /// Job tier (1-5) reached at the current level
    pub fn job_tier(&self) -> u8 {
        job_tier(self.level)
    }

    /// Primary stat gained purely from leveling up
    pub fn pure_primary_stat(&self) -> u32 {
        pure_primary_stat(self.level)
    }

    pub fn pure_secondary_stat(&self) -> u32 {
        PURE_SECONDARY_STAT
    }

    // === Equipment Methods ===

    /// Equip an item into its own slot, returning whatever it displaced
    pub fn equip(&mut self, item: EquipmentItem) -> Option<EquipmentItem> {
        let slot = item.equip_type();
        debug!(character = %self.name, %slot, item = item.name(), "equip");
        self.equips.insert(slot, item)
    }

    /// Unequip an item from a slot, returning it if present
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<EquipmentItem> {
        let item = self.equips.remove(&slot);
        if item.is_some() {
            debug!(character = %self.name, %slot, "unequip");
        }
        item
    }

    /// Get a reference to the item equipped in a slot
    pub fn equipped(&self, slot: EquipmentSlot) -> Option<&EquipmentItem> {
        self.equips.get(&slot)
    }

    /// Every slot with its item, empty slots included
    pub fn loadout(&self) -> impl Iterator<Item = (EquipmentSlot, Option<&EquipmentItem>)> + '_ {
        EquipmentSlot::ALL
            .iter()
            .map(|slot| (*slot, self.equips.get(slot)))
    }

    /// Get all equipped items
    pub fn all_equipped(&self) -> impl Iterator<Item = &EquipmentItem> {
        self.equips.values()
    }

    // === Link Skill Methods ===

    /// Record the link level acquired from a class; 0 removes the entry
    pub fn set_link_level(&mut self, class: CharClass, level: u32) -> Option<u32> {
        debug!(character = %self.name, %class, level, "link level set");
        if level == 0 {
            self.link_levels.remove(&class)
        } else {
            self.link_levels.insert(class, level)
        }
    }

    /// Acquired link level for a class (0 when not acquired)
    pub fn link_level(&self, class: CharClass) -> u32 {
        self.link_levels.get(&class).copied().unwrap_or(0)
    }

    pub fn link_levels(&self) -> &BTreeMap<CharClass, u32> {
        &self.link_levels
    }

    // === Aggregation ===

    /// Every contributing source, in application order
    pub fn sources<'a>(&'a self, registry: &'a LinkRegistry) -> Vec<Box<dyn StatSource + 'a>> {
        let mut sources: Vec<Box<dyn StatSource + 'a>> = vec![Box::new(BaseStatsSource::new(
            self.level,
            self.primary_stat,
            self.secondary_stat,
        ))];

        for item in self.equips.values() {
            sources.push(Box::new(GearSource::new(item)));
        }

        let link_level = self.link_level(self.class);
        if link_level > 0 {
            if let Some(link) = registry.contributor_for(self.class) {
                sources.push(Box::new(LinkSkillSource::new(link, link_level)));
            }
        }

        sources.push(Box::new(WorldSource::new(self.in_reboot)));
        sources
    }

    /// Resolve the full statline using the bundled link skill table
    pub fn resolved_statline(&self) -> Statline {
        self.resolved_statline_with(LinkRegistry::standard())
    }

    /// Resolve the full statline against a specific link skill registry
    pub fn resolved_statline_with(&self, registry: &LinkRegistry) -> Statline {
        resolve_sources(&self.sources(registry))
    }

    /// Resolved value of a single stat
    pub fn stat(&self, stat: Stat) -> f64 {
        self.resolved_statline().get(stat)
    }

    /// Stored form of this character
    pub fn to_record(&self) -> CharacterRecord {
        CharacterRecord::from(self.clone())
    }
}

impl TryFrom<CharacterRecord> for Character {
    type Error = MapleError;

    fn try_from(record: CharacterRecord) -> Result<Self, Self::Error> {
        let mut character = Character::new(
            record.name,
            record.level,
            record.character_class,
            record.world,
        )?;

        for (class, level) in record.link_skills {
            character.set_link_level(class, level);
        }

        for (key, item) in record.equips {
            let Some(item) = item else { continue };
            if item.equip_type() != key {
                return Err(MapleError::SlotMismatch {
                    key,
                    item: item.equip_type(),
                });
            }
            character.equip(item);
        }

        Ok(character)
    }
}

impl From<Character> for CharacterRecord {
    fn from(mut character: Character) -> Self {
        let equips = EquipmentSlot::ALL
            .iter()
            .map(|slot| (*slot, character.equips.remove(slot)))
            .collect();

        CharacterRecord {
            name: character.name,
            level: character.level,
            character_class: character.class,
            world: character.world,
            link_skills: character.link_levels,
            equips,
        }
    }
}
