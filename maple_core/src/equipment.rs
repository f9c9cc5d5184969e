//! Equipment items - immutable bundles of stat lines

use crate::constants::{MAX_BONUS_POTENTIAL_LINES, MAX_BONUS_STAT_LINES, MAX_POTENTIAL_LINES};
use crate::error::MapleError;
use crate::record::EquipmentRecord;
use crate::statline::{Stat, StatAccumulator, Statline};
use crate::types::EquipmentSlot;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A single `(stat, value)` line from a potential or bonus roll
pub type Line = (Stat, f64);

/// An equipment item with its resolved stats
///
/// Line-group sizes are checked at construction and the combined statline is
/// computed once; the item never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EquipmentRecord", into = "EquipmentRecord")]
pub struct EquipmentItem {
    name: String,
    equip_type: EquipmentSlot,
    base_stats: Statline,
    /// Scroll and star force stats
    scroll_stats: Statline,
    potential: Vec<Line>,
    bonus_potential: Vec<Line>,
    bonus_stats: Vec<Line>,
    stats: Statline,
}

fn check_lines(group: &'static str, lines: &[Line], max: usize) -> Result<(), MapleError> {
    if lines.len() > max {
        return Err(MapleError::InvalidEquipment {
            group,
            count: lines.len(),
            max,
        });
    }
    Ok(())
}

fn warn_out_of_range(item: &str, group: &str, lines: impl IntoIterator<Item = (Stat, f64)>) {
    for (stat, value) in lines {
        if !stat.in_rule_range(value) {
            warn!(item, group, %stat, value, "stat value outside the range its rule expects");
        }
    }
}

impl EquipmentItem {
    /// Validate raw line data and resolve the item's statline
    pub fn new(record: EquipmentRecord) -> Result<Self, MapleError> {
        check_lines("potential", &record.potential, MAX_POTENTIAL_LINES)?;
        check_lines("bonus potential", &record.bonus_potential, MAX_BONUS_POTENTIAL_LINES)?;
        check_lines("bonus stats", &record.bonus_stats, MAX_BONUS_STAT_LINES)?;

        warn_out_of_range(&record.name, "base", record.base_stats.iter());
        warn_out_of_range(&record.name, "scroll", record.scroll_stats.iter());
        for (group, lines) in [
            ("potential", &record.potential),
            ("bonus potential", &record.bonus_potential),
            ("bonus stats", &record.bonus_stats),
        ] {
            warn_out_of_range(&record.name, group, lines.iter().copied());
        }

        let mut acc = StatAccumulator::new();
        acc.add_statline(&record.base_stats);
        acc.add_statline(&record.scroll_stats);
        acc.add_lines(&record.potential);
        acc.add_lines(&record.bonus_potential);
        acc.add_lines(&record.bonus_stats);
        let stats = acc.finish();

        Ok(EquipmentItem {
            name: record.name,
            equip_type: record.equip_type,
            base_stats: record.base_stats,
            scroll_stats: record.scroll_stats,
            potential: record.potential,
            bonus_potential: record.bonus_potential,
            bonus_stats: record.bonus_stats,
            stats,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Slot this item occupies
    pub fn equip_type(&self) -> EquipmentSlot {
        self.equip_type
    }

    /// Combined stats from every line group
    pub fn stats(&self) -> &Statline {
        &self.stats
    }

    pub fn base_stats(&self) -> &Statline {
        &self.base_stats
    }

    pub fn scroll_stats(&self) -> &Statline {
        &self.scroll_stats
    }

    pub fn potential(&self) -> &[Line] {
        &self.potential
    }

    pub fn bonus_potential(&self) -> &[Line] {
        &self.bonus_potential
    }

    pub fn bonus_stats(&self) -> &[Line] {
        &self.bonus_stats
    }

    /// Raw line data this item was built from
    pub fn to_record(&self) -> EquipmentRecord {
        EquipmentRecord {
            name: self.name.clone(),
            equip_type: self.equip_type,
            base_stats: self.base_stats.clone(),
            scroll_stats: self.scroll_stats.clone(),
            potential: self.potential.clone(),
            bonus_potential: self.bonus_potential.clone(),
            bonus_stats: self.bonus_stats.clone(),
        }
    }
}

impl TryFrom<EquipmentRecord> for EquipmentItem {
    type Error = MapleError;

    fn try_from(record: EquipmentRecord) -> Result<Self, Self::Error> {
        EquipmentItem::new(record)
    }
}

impl From<EquipmentItem> for EquipmentRecord {
    fn from(item: EquipmentItem) -> Self {
        EquipmentRecord {
            name: item.name,
            equip_type: item.equip_type,
            base_stats: item.base_stats,
            scroll_stats: item.scroll_stats,
            potential: item.potential,
            bonus_potential: item.bonus_potential,
            bonus_stats: item.bonus_stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knuckle() -> EquipmentRecord {
        EquipmentRecord::new("Arcane Umbra Knuckle", EquipmentSlot::Weapon)
            .with_base_stats(Statline::from([
                (Stat::Str, 100.0),
                (Stat::Dex, 100.0),
                (Stat::Att, 276.0),
                (Stat::Boss, 30.0),
                (Stat::Ied, 0.2),
            ]))
            .with_scroll_stats(Statline::from([(Stat::Att, 150.0)]))
    }

    #[test]
    fn test_three_potential_lines_allowed() {
        let item = knuckle()
            .with_potential(vec![(Stat::PctAtt, 13.0), (Stat::Boss, 40.0), (Stat::Ied, 0.4)])
            .build()
            .unwrap();
        assert_eq!(item.potential().len(), 3);
    }

    #[test]
    fn test_out_of_range_ied_still_builds() {
        let item = knuckle()
            .with_potential(vec![(Stat::Ied, 40.0)])
            .build()
            .unwrap();
        assert!(!Stat::Ied.in_rule_range(item.potential()[0].1));
        // 1 - (1 - 0.2) * (1 - 40) = 32.2
        assert!((item.stats().get(Stat::Ied) - 32.2).abs() < 1e-9);
    }

    #[test]
    fn test_four_potential_lines_rejected() {
        let result = knuckle()
            .with_potential(vec![
                (Stat::PctAtt, 13.0),
                (Stat::PctAtt, 10.0),
                (Stat::Boss, 40.0),
                (Stat::Ied, 0.4),
            ])
            .build();
        assert_eq!(
            result,
            Err(MapleError::InvalidEquipment {
                group: "potential",
                count: 4,
                max: 3,
            })
        );
    }

    #[test]
    fn test_bonus_group_limits() {
        let four = vec![(Stat::Str, 1.0); 4];
        let five = vec![(Stat::Str, 1.0); 5];

        assert!(knuckle().with_bonus_potential(four.clone()).build().is_err());
        assert!(knuckle().with_bonus_stats(four).build().is_ok());
        assert!(matches!(
            knuckle().with_bonus_stats(five).build(),
            Err(MapleError::InvalidEquipment { group: "bonus stats", .. })
        ));
    }

    #[test]
    fn test_stats_fold_every_group() {
        let item = knuckle()
            .with_potential(vec![(Stat::PctAtt, 12.0), (Stat::Ied, 0.4)])
            .with_bonus_potential(vec![(Stat::Att, 11.0)])
            .with_bonus_stats(vec![(Stat::Boss, 12.0), (Stat::Dmg, 6.0)])
            .build()
            .unwrap();

        let stats = item.stats();
        assert_eq!(stats.get(Stat::Att), 276.0 + 150.0 + 11.0);
        assert_eq!(stats.get(Stat::Boss), 42.0);
        assert_eq!(stats.get(Stat::PctAtt), 12.0);
        assert_eq!(stats.get(Stat::Dmg), 6.0);
        // 1 - 0.8 * 0.6
        assert!((stats.get(Stat::Ied) - 0.52).abs() < 1e-12);
    }

    #[test]
    fn test_empty_item_has_default_stats() {
        let item = EquipmentRecord::new("Blank Ring", EquipmentSlot::Ring1)
            .build()
            .unwrap();
        assert!(item.stats().is_empty());
        assert_eq!(item.equip_type(), EquipmentSlot::Ring1);
    }

    #[test]
    fn test_json_round_trip_keeps_lines() {
        let item = knuckle()
            .with_potential(vec![(Stat::Boss, 40.0)])
            .build()
            .unwrap();
        let json = serde_json::to_string(&item).unwrap();
        let parsed: EquipmentItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }

    #[test]
    fn test_deserializing_invalid_item_fails() {
        let json = r#"{
            "name": "Overloaded Hat",
            "equip_type": "hat",
            "potential": [["STR", 12], ["STR", 12], ["STR", 12], ["STR", 12]]
        }"#;
        let err = serde_json::from_str::<EquipmentItem>(json).unwrap_err();
        assert!(err.to_string().contains("potential"));
    }
}
