//! Stat catalog - every stat kind with its default value and combination rule

use serde::{Deserialize, Serialize};

named_enum! {
    /// Every kind of stat a source can contribute
    pub enum Stat: UnknownStat {
        All => "ALL",
        Str => "STR",
        Dex => "DEX",
        Int => "INT",
        Luk => "LUK",
        Att => "ATT",
        Matt => "MATT",
        PctAll => "PCT_ALL",
        PctStr => "PCT_STR",
        PctDex => "PCT_DEX",
        PctInt => "PCT_INT",
        PctLuk => "PCT_LUK",
        PctAtt => "PCT_ATT",
        PctMatt => "PCT_MATT",
        /// Boss damage %
        Boss => "BOSS",
        /// Ignore enemy defense, as a fraction in [0, 1)
        Ied => "IED",
        Crit => "CRIT",
        CritDmg => "CRIT_DMG",
        FlatDmg => "FLAT_DMG",
        /// Damage bonus %
        Dmg => "DMG",
        DropRate => "DROP_RATE",
        MesoRate => "MESO_RATE",
    }
}

/// How two contributions to the same stat combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CombinationRule {
    /// `accumulated + incoming`
    Additive,
    /// `1 - (1 - accumulated) * (1 - incoming)`
    ///
    /// Each source applies to the portion left over by the previous ones, so
    /// any number of sources below 1.0 stays below 1.0.
    Diminishing,
}

impl CombinationRule {
    /// Combine an accumulated value with one more contribution
    pub fn merge(self, accumulated: f64, incoming: f64) -> f64 {
        match self {
            CombinationRule::Additive => accumulated + incoming,
            CombinationRule::Diminishing => 1.0 - (1.0 - accumulated) * (1.0 - incoming),
        }
    }
}

/// Numeric domain a stat's values live in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatDomain {
    /// Whole numbers (flat stats and whole percentages)
    Integer,
    /// Fractional values
    Decimal,
}

impl Stat {
    /// Combination rule used when merging contributions to this stat
    pub const fn rule(self) -> CombinationRule {
        match self {
            Stat::Ied => CombinationRule::Diminishing,
            Stat::All
            | Stat::Str
            | Stat::Dex
            | Stat::Int
            | Stat::Luk
            | Stat::Att
            | Stat::Matt
            | Stat::PctAll
            | Stat::PctStr
            | Stat::PctDex
            | Stat::PctInt
            | Stat::PctLuk
            | Stat::PctAtt
            | Stat::PctMatt
            | Stat::Boss
            | Stat::Crit
            | Stat::CritDmg
            | Stat::FlatDmg
            | Stat::Dmg
            | Stat::DropRate
            | Stat::MesoRate => CombinationRule::Additive,
        }
    }

    /// Domain of this stat's values
    pub const fn domain(self) -> StatDomain {
        match self {
            Stat::Ied | Stat::CritDmg => StatDomain::Decimal,
            Stat::All
            | Stat::Str
            | Stat::Dex
            | Stat::Int
            | Stat::Luk
            | Stat::Att
            | Stat::Matt
            | Stat::PctAll
            | Stat::PctStr
            | Stat::PctDex
            | Stat::PctInt
            | Stat::PctLuk
            | Stat::PctAtt
            | Stat::PctMatt
            | Stat::Boss
            | Stat::Crit
            | Stat::FlatDmg
            | Stat::Dmg
            | Stat::DropRate
            | Stat::MesoRate => StatDomain::Integer,
        }
    }

    /// Value of this stat when no source contributes to it
    ///
    /// Every stat starts at zero, whatever its domain.
    pub const fn default_value(self) -> f64 {
        0.0
    }

    /// Whether a single contribution is meaningful under this stat's rule
    ///
    /// Diminishing stats are fractions in `[0, 1)`; a contribution of 1.0 or
    /// more saturates the stat, and a negative one pushes it past 1.0.
    pub fn in_rule_range(self, value: f64) -> bool {
        match self.rule() {
            CombinationRule::Additive => value.is_finite(),
            CombinationRule::Diminishing => (0.0..1.0).contains(&value),
        }
    }

    /// Merge one contribution into an accumulated value using this stat's rule
    pub fn merge(self, accumulated: f64, incoming: f64) -> f64 {
        self.rule().merge(accumulated, incoming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ied_is_the_only_diminishing_stat() {
        let diminishing: Vec<_> = Stat::ALL
            .iter()
            .filter(|s| s.rule() == CombinationRule::Diminishing)
            .collect();
        assert_eq!(diminishing, vec![&Stat::Ied]);
    }

    #[test]
    fn test_defaults_are_zero() {
        for stat in Stat::ALL {
            assert_eq!(stat.default_value(), 0.0, "{stat}");
        }
    }

    #[test]
    fn test_additive_merge() {
        assert!((Stat::Boss.merge(30.0, 12.0) - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_diminishing_merge() {
        // 1 - (1 - 0.4) * (1 - 0.3) = 1 - 0.42 = 0.58
        assert!((Stat::Ied.merge(0.4, 0.3) - 0.58).abs() < 1e-12);
        // Starting from the default gives the incoming value back
        assert!((Stat::Ied.merge(0.0, 0.35) - 0.35).abs() < 1e-12);
    }

    #[test]
    fn test_rule_range() {
        assert!(Stat::Ied.in_rule_range(0.0));
        assert!(Stat::Ied.in_rule_range(0.35));
        assert!(!Stat::Ied.in_rule_range(1.0));
        assert!(!Stat::Ied.in_rule_range(40.0));
        assert!(!Stat::Ied.in_rule_range(-0.1));
        assert!(Stat::Boss.in_rule_range(40.0));
        assert!(Stat::Att.in_rule_range(-10.0));
        assert!(!Stat::Att.in_rule_range(f64::NAN));
    }

    #[test]
    fn test_parse_stat_names() {
        assert_eq!("pct_str".parse::<Stat>(), Ok(Stat::PctStr));
        assert_eq!("IED".parse::<Stat>(), Ok(Stat::Ied));
        assert!("ARMOUR".parse::<Stat>().is_err());
    }
}
