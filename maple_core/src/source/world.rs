//! WorldSource - Flat bonus from the character's world

use crate::constants::REBOOT_DAMAGE_BONUS;
use crate::source::StatSource;
use crate::statline::{Stat, StatAccumulator};

/// Reboot world damage bonus, applied once when the flag is set
pub struct WorldSource {
    pub in_reboot: bool,
}

impl WorldSource {
    pub fn new(in_reboot: bool) -> Self {
        WorldSource { in_reboot }
    }
}

impl StatSource for WorldSource {
    fn id(&self) -> &str {
        "world"
    }

    fn priority(&self) -> i32 {
        200
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        if self.in_reboot {
            stats.add(Stat::Dmg, REBOOT_DAMAGE_BONUS);
        }
    }
}
