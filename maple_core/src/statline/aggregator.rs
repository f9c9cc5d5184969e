//! StatAccumulator - Collects contributions before producing a Statline

use super::{Stat, Statline};
use std::collections::BTreeMap;

/// Accumulates stat contributions from various sources
///
/// Every contribution is a single `(Stat, value)` pair folded through the
/// stat's combination rule, starting from the catalog default.
#[derive(Debug, Clone, Default)]
pub struct StatAccumulator {
    values: BTreeMap<Stat, f64>,
}

impl StatAccumulator {
    /// Create an accumulator holding only catalog defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a single contribution
    pub fn add(&mut self, stat: Stat, value: f64) {
        let current = self
            .values
            .get(&stat)
            .copied()
            .unwrap_or(stat.default_value());
        self.values.insert(stat, stat.merge(current, value));
    }

    /// Merge every entry of a statline
    pub fn add_statline(&mut self, statline: &Statline) {
        for (stat, value) in statline.iter() {
            self.add(stat, value);
        }
    }

    /// Merge a sequence of contributions
    pub fn add_lines<'a>(&mut self, lines: impl IntoIterator<Item = &'a (Stat, f64)>) {
        for &(stat, value) in lines {
            self.add(stat, value);
        }
    }

    /// Current accumulated value for a stat
    pub fn get(&self, stat: Stat) -> f64 {
        self.values
            .get(&stat)
            .copied()
            .unwrap_or(stat.default_value())
    }

    /// Freeze the accumulated values into a Statline
    pub fn finish(self) -> Statline {
        Statline::from_values(self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_accumulator_yields_defaults() {
        let statline = StatAccumulator::new().finish();
        assert!(statline.is_empty());
        assert_eq!(statline.get(Stat::Str), 0.0);
    }

    #[test]
    fn test_accumulates_by_rule() {
        let mut acc = StatAccumulator::new();
        acc.add(Stat::Str, 10.0);
        acc.add(Stat::Str, 15.0);
        acc.add(Stat::Ied, 0.5);
        acc.add(Stat::Ied, 0.5);

        assert!((acc.get(Stat::Str) - 25.0).abs() < f64::EPSILON);
        assert!((acc.get(Stat::Ied) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_lines_merge_like_statlines() {
        let lines = [(Stat::Boss, 30.0), (Stat::Boss, 35.0), (Stat::Ied, 0.3)];
        let mut from_lines = StatAccumulator::new();
        from_lines.add_lines(&lines);

        let mut from_statlines = StatAccumulator::new();
        for line in &lines {
            from_statlines.add_statline(&Statline::from_iter([*line]));
        }

        assert_eq!(from_lines.finish(), from_statlines.finish());
    }
}
