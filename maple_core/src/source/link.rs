//! LinkSkillSource - Stats from an acquired link skill

use crate::link::LinkContributor;
use crate::source::StatSource;
use crate::statline::StatAccumulator;

/// Stats from one link skill at an acquired level
pub struct LinkSkillSource<'a> {
    pub link: &'a LinkContributor,
    pub level: u32,
}

impl<'a> LinkSkillSource<'a> {
    /// Create a new link skill source; the level is clamped when applied
    pub fn new(link: &'a LinkContributor, level: u32) -> Self {
        LinkSkillSource { link, level }
    }
}

impl StatSource for LinkSkillSource<'_> {
    fn id(&self) -> &str {
        &self.link.id
    }

    fn priority(&self) -> i32 {
        100
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.add_statline(&self.link.stats(self.level));
    }
}
