//! Statline - a resolved assignment of values to stats

mod aggregator;
mod catalog;

pub use aggregator::StatAccumulator;
pub use catalog::{CombinationRule, Stat, StatDomain};

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Mapping from stat to value; stats absent from the mapping hold their
/// catalog default.
///
/// A Statline is always the result of a merge and is never mutated after
/// construction. Build one from `(Stat, value)` pairs or through a
/// [`StatAccumulator`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statline {
    values: BTreeMap<Stat, f64>,
}

impl Statline {
    /// An empty statline (every stat at its default)
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_values(values: BTreeMap<Stat, f64>) -> Self {
        Statline { values }
    }

    /// Value of a stat, or its default if no source contributed to it
    pub fn get(&self, stat: Stat) -> f64 {
        self.values
            .get(&stat)
            .copied()
            .unwrap_or(stat.default_value())
    }

    /// Value of an integer-domain stat, rounded to the nearest whole number
    pub fn get_int(&self, stat: Stat) -> i64 {
        self.get(stat).round() as i64
    }

    /// Explicitly contributed entries, in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (Stat, f64)> + '_ {
        self.values.iter().map(|(stat, value)| (*stat, *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Merge two statlines into a new one
    pub fn merge(&self, other: &Statline) -> Statline {
        Statline::combine([self, other])
    }

    /// Merge any number of statlines, in order
    pub fn combine<'a>(statlines: impl IntoIterator<Item = &'a Statline>) -> Statline {
        let mut acc = StatAccumulator::new();
        for statline in statlines {
            acc.add_statline(statline);
        }
        acc.finish()
    }
}

impl FromIterator<(Stat, f64)> for Statline {
    /// Repeated stats merge through their combination rule
    fn from_iter<I: IntoIterator<Item = (Stat, f64)>>(iter: I) -> Self {
        let mut acc = StatAccumulator::new();
        for (stat, value) in iter {
            acc.add(stat, value);
        }
        acc.finish()
    }
}

impl<const N: usize> From<[(Stat, f64); N]> for Statline {
    fn from(lines: [(Stat, f64); N]) -> Self {
        lines.into_iter().collect()
    }
}

/// Largest magnitude below which every whole `f64` is an exact integer
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

impl Serialize for Statline {
    /// Integer-domain stats with whole values serialize as integers, as long
    /// as the value is exactly representable as one
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (stat, value) in &self.values {
            if stat.domain() == StatDomain::Integer
                && value.fract() == 0.0
                && value.abs() <= MAX_EXACT_INTEGER
            {
                map.serialize_entry(stat, &(*value as i64))?;
            } else {
                map.serialize_entry(stat, value)?;
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Statline {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = BTreeMap::<Stat, f64>::deserialize(deserializer)?;
        Ok(Statline::from_values(values))
    }
}
