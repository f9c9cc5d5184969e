//! StatSource - Trait and implementations for stat providers

mod base_stats;
mod gear;
mod link;
mod world;

pub use base_stats::{job_tier, pure_primary_stat, BaseStatsSource};
pub use gear::GearSource;
pub use link::LinkSkillSource;
pub use world::WorldSource;

use crate::statline::{StatAccumulator, Statline};

/// Trait for anything that contributes stats to a character
pub trait StatSource: Send + Sync {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Priority for application order (higher = applied later)
    /// Default priority is 0.
    /// Suggested priorities:
    /// - Base stats: -100
    /// - Gear: 0
    /// - Link skills: 100
    /// - World: 200
    fn priority(&self) -> i32 {
        0
    }

    /// Apply this source's stats to the accumulator
    fn apply(&self, stats: &mut StatAccumulator);
}

/// Fold every source, in priority order, into one statline
///
/// Sources with equal priority apply in the order given.
pub fn resolve_sources(sources: &[Box<dyn StatSource + '_>]) -> Statline {
    let mut sorted: Vec<_> = sources.iter().collect();
    sorted.sort_by_key(|s| s.priority());

    let mut accumulator = StatAccumulator::new();
    for source in sorted {
        source.apply(&mut accumulator);
    }
    accumulator.finish()
}
