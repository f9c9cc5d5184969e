//! Saved items and characters come back with exactly the values they held

use maple_core::prelude::*;
use proptest::prelude::*;

fn stat() -> impl Strategy<Value = Stat> {
    prop::sample::select(Stat::ALL.to_vec())
}

fn value() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1e6f64..1e6,
        0.0f64..1.0,
        -1e16f64..1e16,
        prop::num::f64::SUBNORMAL | prop::num::f64::ZERO,
    ]
}

fn lines(max: usize) -> impl Strategy<Value = Vec<(Stat, f64)>> {
    prop::collection::vec((stat(), value()), 0..=max)
}

fn item() -> impl Strategy<Value = EquipmentItem> {
    (lines(6), lines(3), lines(3), lines(3), lines(4)).prop_map(
        |(base, potential, bonus_potential, bonus_stats, scroll)| {
            EquipmentRecord::new("Rolled Knuckle", EquipmentSlot::Weapon)
                .with_base_stats(base.into_iter().collect())
                .with_scroll_stats(scroll.into_iter().collect())
                .with_potential(potential)
                .with_bonus_potential(bonus_potential)
                .with_bonus_stats(bonus_stats)
                .build()
                .unwrap()
        },
    )
}

proptest! {
    #[test]
    fn item_survives_json(item in item()) {
        let json = serde_json::to_string(&item).unwrap();
        let parsed: EquipmentItem = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed.stats(), item.stats());
        prop_assert_eq!(parsed, item);
    }

    #[test]
    fn character_statline_survives_json(item in item(), level in 1u32..=275) {
        let mut character = Character::new("Somi", level, CharClass::Buccaneer, Some(World::Reboot)).unwrap();
        character.set_link_level(CharClass::Buccaneer, 6);
        character.equip(item);

        let json = serde_json::to_string(&character).unwrap();
        let parsed: Character = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed.resolved_statline(), character.resolved_statline());
        prop_assert_eq!(parsed, character);
    }
}
