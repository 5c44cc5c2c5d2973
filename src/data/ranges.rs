use std::collections::BTreeSet;

use serde::Deserialize;

/// Latest year a range may name; year headers are at most four digits in practice.
pub const MAX_YEAR: i32 = 9999;

/// Range used when the dashboard runs without a range selector.
pub const FIXED_RANGE_LABEL: &str = "1981-2000";

/// A named, inclusive span of calendar years.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct YearRange {
    pub label: String,
    pub first: i32,
    pub last: i32,
}

impl YearRange {
    /// Build a range labelled `"{first}-{last}"`.
    pub fn new(first: i32, last: i32) -> Self {
        YearRange {
            label: format!("{first}-{last}"),
            first,
            last,
        }
    }

    pub fn years(&self) -> BTreeSet<i32> {
        (self.first..=self.last).collect()
    }
}

/// The ordered set of ranges offered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearRanges {
    ranges: Vec<YearRange>,
}

impl Default for YearRanges {
    fn default() -> Self {
        YearRanges::new(default_ranges())
    }
}

impl YearRanges {
    pub fn new(ranges: Vec<YearRange>) -> Self {
        YearRanges { ranges }
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.ranges.iter().map(|r| r.label.as_str())
    }

    pub fn get(&self, label: &str) -> Option<&YearRange> {
        self.ranges.iter().find(|r| r.label == label)
    }

    /// Years for `label`; empty for an unknown label.
    pub fn resolve(&self, label: &str) -> BTreeSet<i32> {
        self.get(label).map(YearRange::years).unwrap_or_default()
    }
}

pub fn default_ranges() -> Vec<YearRange> {
    vec![
        YearRange::new(1960, 1980),
        YearRange::new(1981, 2000),
        YearRange::new(2001, 2020),
        YearRange::new(2021, 2023),
        YearRange::new(1960, 2023),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_labels_in_order() {
        let ranges = YearRanges::default();
        let labels: Vec<&str> = ranges.labels().collect();
        assert_eq!(
            labels,
            ["1960-1980", "1981-2000", "2001-2020", "2021-2023", "1960-2023"]
        );
        assert!(ranges.get(FIXED_RANGE_LABEL).is_some());
    }

    #[test]
    fn resolve_is_inclusive() {
        let ranges = YearRanges::default();
        let years = ranges.resolve("2021-2023");
        assert_eq!(years.into_iter().collect::<Vec<_>>(), vec![2021, 2022, 2023]);
        assert_eq!(ranges.resolve("1960-2023").len(), 64);
        assert_eq!(ranges.resolve("1981-2000").len(), 20);
    }

    #[test]
    fn unknown_label_resolves_to_nothing() {
        assert!(YearRanges::default().resolve("1900-1910").is_empty());
    }
}
