//! Link skill registry - cooperative bonuses keyed by the class that unlocks them

use crate::class::CharClass;
use crate::config::{parse_link_configs, ConfigError};
use crate::statline::{Stat, Statline};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// One linear stat term of a link skill: `per_level * level + base`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkStatTerm {
    pub stat: Stat,
    #[serde(default)]
    pub per_level: f64,
    #[serde(default)]
    pub base: f64,
}

impl LinkStatTerm {
    pub fn value_at(&self, level: u32) -> f64 {
        self.per_level * level as f64 + self.base
    }
}

/// A level-bounded cooperative bonus unlocked by a fixed set of classes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkContributor {
    pub id: String,
    pub name: String,
    pub classes: Vec<CharClass>,
    pub max_level: u32,
    #[serde(default)]
    pub stats: Vec<LinkStatTerm>,
}

impl LinkContributor {
    /// Clamp a level into `1..=max_level`
    pub fn clamp_level(&self, level: u32) -> u32 {
        level.clamp(1, self.max_level.max(1))
    }

    /// Stats granted at a level; out-of-range levels are clamped first
    pub fn stats(&self, level: u32) -> Statline {
        let level = self.clamp_level(level);
        self.stats
            .iter()
            .map(|term| (term.stat, term.value_at(level)))
            .collect()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_level == 0 {
            return Err(ConfigError::ValidationError(format!(
                "link skill '{}' must have a max_level of at least 1",
                self.id
            )));
        }
        if self.classes.is_empty() {
            return Err(ConfigError::MissingCatalogEntry(format!(
                "link skill '{}' is not unlocked by any class",
                self.id
            )));
        }
        Ok(())
    }
}

/// Immutable lookup from class to the link skill it unlocks
#[derive(Debug, Clone, Default)]
pub struct LinkRegistry {
    contributors: Vec<LinkContributor>,
    by_class: HashMap<CharClass, usize>,
}

static STANDARD_LINKS: OnceLock<LinkRegistry> = OnceLock::new();

impl LinkRegistry {
    /// Build a registry, failing if two contributors claim the same class
    pub fn from_contributors(contributors: Vec<LinkContributor>) -> Result<Self, ConfigError> {
        let mut by_class = HashMap::new();
        for (idx, contributor) in contributors.iter().enumerate() {
            contributor.validate()?;
            for class in &contributor.classes {
                if let Some(&first) = by_class.get(class) {
                    let first: &LinkContributor = &contributors[first];
                    return Err(ConfigError::DuplicateLinkClass {
                        class: *class,
                        first: first.id.clone(),
                        second: contributor.id.clone(),
                    });
                }
                by_class.insert(*class, idx);
            }
        }
        Ok(LinkRegistry {
            contributors,
            by_class,
        })
    }

    /// The bundled link skill table, built once per process
    pub fn standard() -> &'static LinkRegistry {
        STANDARD_LINKS.get_or_init(|| {
            parse_link_configs(include_str!("../../config/link_skills.toml"))
                .expect("bundled link skill table is valid")
        })
    }

    /// Contributor unlocked by a class, if any
    pub fn contributor_for(&self, class: CharClass) -> Option<&LinkContributor> {
        self.by_class.get(&class).map(|&idx| &self.contributors[idx])
    }

    /// Contributor with the given id
    pub fn get(&self, id: &str) -> Option<&LinkContributor> {
        self.contributors.iter().find(|c| c.id == id)
    }

    pub fn contributors(&self) -> &[LinkContributor] {
        &self.contributors
    }

    pub fn len(&self) -> usize {
        self.contributors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contributors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contributor(id: &str, classes: Vec<CharClass>, max_level: u32) -> LinkContributor {
        LinkContributor {
            id: id.to_string(),
            name: id.to_string(),
            classes,
            max_level,
            stats: vec![LinkStatTerm {
                stat: Stat::Dmg,
                per_level: 5.0,
                base: 1.0,
            }],
        }
    }

    #[test]
    fn test_standard_registry_loads() {
        let registry = LinkRegistry::standard();
        assert_eq!(registry.len(), 12);

        let pirate = registry.contributor_for(CharClass::Corsair).unwrap();
        assert_eq!(pirate.id, "pirate_blessing");
        assert_eq!(pirate.max_level, 6);
    }

    #[test]
    fn test_pirate_blessing_scaling() {
        let pirate = LinkRegistry::standard().get("pirate_blessing").unwrap();
        assert_eq!(pirate.stats(1).get(Stat::All), 20.0);
        assert_eq!(pirate.stats(6).get(Stat::All), 70.0);
    }

    #[test]
    fn test_focus_spirit_grants_two_stats() {
        let bt = LinkRegistry::standard()
            .contributor_for(CharClass::BeastTamer)
            .unwrap();
        let stats = bt.stats(2);
        assert_eq!(stats.get(Stat::Boss), 7.0);
        assert_eq!(stats.get(Stat::Crit), 7.0);
    }

    #[test]
    fn test_level_is_clamped() {
        let link = contributor("solus", vec![CharClass::Ark], 2);
        assert_eq!(link.stats(0), link.stats(1));
        assert_eq!(link.stats(99), link.stats(2));
        assert_eq!(link.stats(2).get(Stat::Dmg), 11.0);
    }

    #[test]
    fn test_classes_without_links() {
        let registry = LinkRegistry::standard();
        assert!(registry.contributor_for(CharClass::Hero).is_none());
        assert!(registry.contributor_for(CharClass::Beginner).is_none());
    }

    #[test]
    fn test_duplicate_class_fails_fast() {
        let result = LinkRegistry::from_contributors(vec![
            contributor("fury_unleashed", vec![CharClass::DemonAvenger], 3),
            contributor("wild_rage", vec![CharClass::DemonAvenger], 3),
        ]);
        match result {
            Err(ConfigError::DuplicateLinkClass { class, first, second }) => {
                assert_eq!(class, CharClass::DemonAvenger);
                assert_eq!(first, "fury_unleashed");
                assert_eq!(second, "wild_rage");
            }
            other => panic!("expected duplicate class error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_max_level_is_rejected() {
        let result = LinkRegistry::from_contributors(vec![contributor("broken", vec![CharClass::Ark], 0)]);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_contributor_without_classes_is_rejected() {
        let result = LinkRegistry::from_contributors(vec![contributor("orphan", vec![], 2)]);
        assert!(matches!(result, Err(ConfigError::MissingCatalogEntry(_))));
    }

    #[test]
    fn test_levels_never_decrease_stats() {
        for link in LinkRegistry::standard().contributors() {
            for level in 1..link.max_level {
                let lower = link.stats(level);
                let higher = link.stats(level + 1);
                for (stat, value) in lower.iter() {
                    assert!(higher.get(stat) >= value, "{} {stat}", link.id);
                }
            }
        }
    }
}
