//! Link skill configuration loading

use super::ConfigError;
use crate::link::{LinkContributor, LinkRegistry};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for link skill configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksConfig {
    #[serde(rename = "links")]
    pub links: Vec<LinkContributor>,
}

/// Load a link skill registry from a TOML file
pub fn load_link_configs(path: &Path) -> Result<LinkRegistry, ConfigError> {
    let config: LinksConfig = super::load_toml(path)?;
    LinkRegistry::from_contributors(config.links)
}

/// Load a link skill registry from a TOML string
pub fn parse_link_configs(content: &str) -> Result<LinkRegistry, ConfigError> {
    let config: LinksConfig = super::parse_toml(content)?;
    LinkRegistry::from_contributors(config.links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::CharClass;
    use crate::statline::Stat;

    #[test]
    fn test_parse_links() {
        let toml = r#"
[[links]]
id = "judgment"
name = "Judgment"
classes = ["kinesis"]
max_level = 2

[[links.stats]]
stat = "crit_dmg"
per_level = 2
"#;

        let registry = parse_link_configs(toml).unwrap();
        let judgment = registry.contributor_for(CharClass::Kinesis).unwrap();
        assert_eq!(judgment.name, "Judgment");
        assert!((judgment.stats(2).get(Stat::CritDmg) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_class_is_a_parse_error() {
        let toml = r#"
[[links]]
id = "mystery"
name = "Mystery"
classes = ["NECROMANCER"]
max_level = 1
"#;

        assert!(matches!(parse_link_configs(toml), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_duplicate_claims_fail_at_load() {
        let toml = r#"
[[links]]
id = "fury_unleashed"
name = "Fury Unleashed"
classes = ["DEMON_AVENGER"]
max_level = 3

[[links]]
id = "wild_rage"
name = "Wild Rage"
classes = ["DEMON_AVENGER"]
max_level = 3
"#;

        assert!(matches!(
            parse_link_configs(toml),
            Err(ConfigError::DuplicateLinkClass { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_link_configs(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
