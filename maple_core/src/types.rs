//! Core types shared across the aggregation engine

use crate::error::MapleError;

/// Input accepted wherever a catalog value is expected: the value itself
/// (which resolves to itself) or its name, matched case-insensitively.
pub trait Resolve<T> {
    fn resolve(self) -> Result<T, MapleError>;
}

named_enum! {
    /// Equipment slot for gear
    ///
    /// `Ring1` is the default ring slot.
    pub enum EquipmentSlot: UnknownEquipmentSlot {
        Weapon => "WEAPON",
        Secondary => "SECONDARY",
        Emblem => "EMBLEM",
        Hat => "HAT",
        Top => "TOP",
        Bottom => "BOTTOM",
        Shoe => "SHOE",
        Glove => "GLOVE",
        Cape => "CAPE",
        Shoulder => "SHOULDER",
        Ring1 => "RING_1",
        Ring2 => "RING_2",
        Ring3 => "RING_3",
        Ring4 => "RING_4",
        Pendant1 => "PENDANT_1",
        Pendant2 => "PENDANT_2",
        Belt => "BELT",
        Earring => "EARRING",
        Face => "FACE",
        Eye => "EYE",
        Pocket => "POCKET",
        Badge => "BADGE",
        Medal => "MEDAL",
        Android => "ANDROID",
        Heart => "HEART",
        Totem1 => "TOTEM_1",
        Totem2 => "TOTEM_2",
        Totem3 => "TOTEM_3",
        PetEquip1 => "PET_EQUIP_1",
        PetEquip2 => "PET_EQUIP_2",
        PetEquip3 => "PET_EQUIP_3",
        CashRing1 => "CASH_RING_1",
        CashRing2 => "CASH_RING_2",
        CashRing3 => "CASH_RING_3",
        CashRing4 => "CASH_RING_4",
        CashPendant => "CASH_PENDANT",
    }
}

named_enum! {
    /// Game world a character lives in
    pub enum World: UnknownWorld {
        Bera => "BERA",
        Scania => "SCANIA",
        Aurora => "AURORA",
        Elysium => "ELYSIUM",
        Luna => "LUNA",
        Reboot => "REBOOT",
        RebootEu => "REBOOT_EU",
    }
}

impl World {
    /// Reboot worlds grant a flat damage bonus to every character
    pub fn is_reboot(self) -> bool {
        matches!(self, World::Reboot | World::RebootEu)
    }
}
