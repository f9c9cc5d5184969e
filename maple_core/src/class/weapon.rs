//! Weapon type used by each class

use super::CharClass;
use serde::{Deserialize, Serialize};

/// Weapon family a class fights with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeaponType {
    OneHandedSword,
    TwoHandedSword,
    OneHandedBlunt,
    TwoHandedBlunt,
    Spear,
    Polearm,
    Desperado,
    LongSword,
    Bladecaster,
    Katana,
    ArmCannon,
    Staff,
    Wand,
    ShiningRod,
    PsyLimiter,
    LucentGauntlet,
    Fan,
    Scepter,
    Bow,
    Crossbow,
    AncientBow,
    DualBowguns,
    WhisperShot,
    Claw,
    Dagger,
    Cane,
    Chain,
    RitualFan,
    Knuckle,
    Gun,
    HandCannon,
    SoulShooter,
}

impl CharClass {
    /// Weapon this class equips
    pub const fn weapon(self) -> WeaponType {
        use CharClass::*;
        match self {
            Beginner | Shadower | DualBlade => WeaponType::Dagger,
            Hero | DawnWarrior | Kaiser => WeaponType::TwoHandedSword,
            Paladin => WeaponType::TwoHandedBlunt,
            DarkKnight => WeaponType::Spear,
            Aran => WeaponType::Polearm,
            Mihile => WeaponType::OneHandedSword,
            Blaster => WeaponType::ArmCannon,
            DemonSlayer => WeaponType::OneHandedBlunt,
            DemonAvenger => WeaponType::Desperado,
            Zero => WeaponType::LongSword,
            Adele => WeaponType::Bladecaster,
            Hayato => WeaponType::Katana,
            FpArchmage | IlArchmage | Bishop | BlazeWizard | BattleMage => WeaponType::Staff,
            Evan | Lara => WeaponType::Wand,
            Luminous => WeaponType::ShiningRod,
            Kinesis => WeaponType::PsyLimiter,
            Ilium => WeaponType::LucentGauntlet,
            Kanna => WeaponType::Fan,
            BeastTamer => WeaponType::Scepter,
            Bowmaster | WindArcher => WeaponType::Bow,
            Marksman | WildHunter => WeaponType::Crossbow,
            Pathfinder => WeaponType::AncientBow,
            Mercedes => WeaponType::DualBowguns,
            Kain => WeaponType::WhisperShot,
            NightLord | NightWalker => WeaponType::Claw,
            Phantom => WeaponType::Cane,
            Cadena => WeaponType::Chain,
            Hoyoung => WeaponType::RitualFan,
            Buccaneer | ThunderBreaker | Shade | Ark => WeaponType::Knuckle,
            Corsair | Jett | Mechanic => WeaponType::Gun,
            CannonMaster => WeaponType::HandCannon,
            AngelicBuster => WeaponType::SoulShooter,
        }
    }
}
