//! Fixed game rules

/// Lowest valid character level
pub const MIN_LEVEL: u32 = 1;

/// Highest valid character level
pub const MAX_LEVEL: u32 = 275;

/// Levels at which each job advancement becomes available
pub const JOB_ADVANCEMENT_LEVELS: [u32; 5] = [10, 30, 60, 100, 200];

/// Highest job tier
pub const MAX_JOB_TIER: u8 = 5;

/// Primary stat gained per level: `PURE_STAT_PER_LEVEL * level + PURE_STAT_BASE`
pub const PURE_STAT_PER_LEVEL: u32 = 5;
pub const PURE_STAT_BASE: u32 = 4;

/// Extra primary stat from the third job advancement
pub const THIRD_JOB_STAT_BONUS: u32 = 5;

/// Extra primary stat from the fourth job advancement onwards
pub const FOURTH_JOB_STAT_BONUS: u32 = 10;

/// Secondary stat every character has from character creation
pub const PURE_SECONDARY_STAT: u32 = 4;

/// Damage bonus granted to characters on a reboot world
pub const REBOOT_DAMAGE_BONUS: f64 = 65.0;

/// Maximum potential lines on one item
pub const MAX_POTENTIAL_LINES: usize = 3;

/// Maximum bonus potential lines on one item
pub const MAX_BONUS_POTENTIAL_LINES: usize = 3;

/// Maximum bonus stat lines on one item
pub const MAX_BONUS_STAT_LINES: usize = 4;
