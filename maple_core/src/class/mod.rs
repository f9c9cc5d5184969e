//! Class taxonomy - branch, governing stats and weapon for every class

mod weapon;

pub use weapon::WeaponType;

use crate::statline::Stat;
use serde::{Deserialize, Serialize};

/// Coarse grouping of classes sharing a governing-stat convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassBranch {
    /// Unbranched root class
    Beginner,
    /// Melee, strength-based
    Warrior,
    /// Casters
    Magician,
    /// Ranged, dexterity-based
    Bowman,
    /// Melee, luck-based
    Thief,
    /// Mixed: strength or dexterity depending on the class
    Pirate,
}

named_enum! {
    /// Character class
    pub enum CharClass: UnknownClass {
        Beginner => "BEGINNER",
        // Warriors
        Hero => "HERO",
        Paladin => "PALADIN",
        DarkKnight => "DARK_KNIGHT",
        DawnWarrior => "DAWN_WARRIOR",
        Aran => "ARAN",
        Mihile => "MIHILE",
        Blaster => "BLASTER",
        DemonSlayer => "DEMON_SLAYER",
        DemonAvenger => "DEMON_AVENGER",
        Kaiser => "KAISER",
        Zero => "ZERO",
        Adele => "ADELE",
        Hayato => "HAYATO",
        // Magicians
        FpArchmage => "FP_ARCHMAGE",
        IlArchmage => "IL_ARCHMAGE",
        Bishop => "BISHOP",
        BlazeWizard => "BLAZE_WIZARD",
        Evan => "EVAN",
        Luminous => "LUMINOUS",
        BattleMage => "BATTLE_MAGE",
        Kinesis => "KINESIS",
        Ilium => "ILIUM",
        Kanna => "KANNA",
        Lara => "LARA",
        BeastTamer => "BEAST_TAMER",
        // Bowmen
        Bowmaster => "BOWMASTER",
        Marksman => "MARKSMAN",
        Pathfinder => "PATHFINDER",
        WindArcher => "WIND_ARCHER",
        Mercedes => "MERCEDES",
        WildHunter => "WILD_HUNTER",
        Kain => "KAIN",
        // Thieves
        NightLord => "NIGHT_LORD",
        Shadower => "SHADOWER",
        DualBlade => "DUAL_BLADE",
        NightWalker => "NIGHT_WALKER",
        Phantom => "PHANTOM",
        Cadena => "CADENA",
        Hoyoung => "HOYOUNG",
        // Pirates
        Buccaneer => "BUCCANEER",
        Corsair => "CORSAIR",
        CannonMaster => "CANNON_MASTER",
        ThunderBreaker => "THUNDER_BREAKER",
        Shade => "SHADE",
        AngelicBuster => "ANGELIC_BUSTER",
        Jett => "JETT",
        Mechanic => "MECHANIC",
        Ark => "ARK",
    }
}

/// Pirates governed by strength
pub const STR_PIRATES: &[CharClass] = &[
    CharClass::Buccaneer,
    CharClass::CannonMaster,
    CharClass::ThunderBreaker,
    CharClass::Shade,
    CharClass::Ark,
];

/// Pirates governed by dexterity, overriding the branch's strength default
pub const DEX_PIRATES: &[CharClass] = &[
    CharClass::Corsair,
    CharClass::AngelicBuster,
    CharClass::Jett,
    CharClass::Mechanic,
];

impl CharClass {
    /// Branch this class belongs to
    pub const fn branch(self) -> ClassBranch {
        use CharClass::*;
        match self {
            Beginner => ClassBranch::Beginner,
            Hero | Paladin | DarkKnight | DawnWarrior | Aran | Mihile | Blaster | DemonSlayer
            | DemonAvenger | Kaiser | Zero | Adele | Hayato => ClassBranch::Warrior,
            FpArchmage | IlArchmage | Bishop | BlazeWizard | Evan | Luminous | BattleMage
            | Kinesis | Ilium | Kanna | Lara | BeastTamer => ClassBranch::Magician,
            Bowmaster | Marksman | Pathfinder | WindArcher | Mercedes | WildHunter | Kain => {
                ClassBranch::Bowman
            }
            NightLord | Shadower | DualBlade | NightWalker | Phantom | Cadena | Hoyoung => {
                ClassBranch::Thief
            }
            Buccaneer | Corsair | CannonMaster | ThunderBreaker | Shade | AngelicBuster | Jett
            | Mechanic | Ark => ClassBranch::Pirate,
        }
    }

    fn is_dex_based(self) -> bool {
        match self.branch() {
            ClassBranch::Bowman => true,
            ClassBranch::Pirate => DEX_PIRATES.contains(&self),
            _ => false,
        }
    }

    /// Stat that governs this class's damage
    pub fn primary_stat(self) -> Stat {
        match self.branch() {
            ClassBranch::Magician => Stat::Int,
            _ if self.is_dex_based() => Stat::Dex,
            ClassBranch::Thief => Stat::Luk,
            _ => Stat::Str,
        }
    }

    /// Secondary stat for this class
    pub fn secondary_stat(self) -> Stat {
        match self.branch() {
            ClassBranch::Magician => Stat::Luk,
            _ if self.is_dex_based() => Stat::Str,
            _ => Stat::Dex,
        }
    }
}
