//! BaseStatsSource - Pure stats from character level

use crate::constants::{
    FOURTH_JOB_STAT_BONUS, JOB_ADVANCEMENT_LEVELS, MAX_JOB_TIER, PURE_SECONDARY_STAT,
    PURE_STAT_BASE, PURE_STAT_PER_LEVEL, THIRD_JOB_STAT_BONUS,
};
use crate::source::StatSource;
use crate::statline::{Stat, StatAccumulator};

/// Job tier (1-5) for a level
///
/// The tier is one more than the number of advancement levels reached.
pub fn job_tier(level: u32) -> u8 {
    JOB_ADVANCEMENT_LEVELS
        .iter()
        .position(|&required| level < required)
        .map(|idx| idx as u8 + 1)
        .unwrap_or(MAX_JOB_TIER)
}

/// Primary stat gained purely from leveling up
pub fn pure_primary_stat(level: u32) -> u32 {
    let stat = PURE_STAT_PER_LEVEL * level + PURE_STAT_BASE;
    match job_tier(level) {
        tier if tier >= 4 => stat + FOURTH_JOB_STAT_BONUS,
        3 => stat + THIRD_JOB_STAT_BONUS,
        _ => stat,
    }
}

/// Stats from base character level
pub struct BaseStatsSource {
    pub level: u32,
    pub primary: Stat,
    pub secondary: Stat,
}

impl BaseStatsSource {
    /// Create a new base stats source
    pub fn new(level: u32, primary: Stat, secondary: Stat) -> Self {
        BaseStatsSource {
            level,
            primary,
            secondary,
        }
    }
}

impl StatSource for BaseStatsSource {
    fn id(&self) -> &str {
        "base_stats"
    }

    fn priority(&self) -> i32 {
        -100 // Base stats apply first
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.add(self.primary, pure_primary_stat(self.level) as f64);
        stats.add(self.secondary, PURE_SECONDARY_STAT as f64);
    }
}
