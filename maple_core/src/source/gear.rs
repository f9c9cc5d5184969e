//! GearSource - Stats from an equipped item

use crate::equipment::EquipmentItem;
use crate::source::StatSource;
use crate::statline::StatAccumulator;

/// Stats from one equipped item
pub struct GearSource<'a> {
    pub item: &'a EquipmentItem,
}

impl<'a> GearSource<'a> {
    /// Create a new gear source
    pub fn new(item: &'a EquipmentItem) -> Self {
        GearSource { item }
    }
}

impl StatSource for GearSource<'_> {
    fn id(&self) -> &str {
        self.item.name()
    }

    fn priority(&self) -> i32 {
        0 // Gear applies at default priority
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.add_statline(self.item.stats());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::EquipmentRecord;
    use crate::statline::{Stat, Statline};
    use crate::types::EquipmentSlot;

    #[test]
    fn test_gear_source_applies_item_stats() {
        let item = EquipmentRecord::new("Pitched Boss Belt", EquipmentSlot::Belt)
            .with_base_stats(Statline::from([(Stat::All, 150.0), (Stat::Att, 150.0)]))
            .build()
            .unwrap();
        let source = GearSource::new(&item);
        let mut acc = StatAccumulator::new();
        source.apply(&mut acc);

        assert_eq!(source.id(), "Pitched Boss Belt");
        assert_eq!(acc.get(Stat::All), 150.0);
        assert_eq!(acc.get(Stat::Att), 150.0);
    }
}
