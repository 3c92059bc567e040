//! Per-label running aggregates and the final aggregate report.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Final ground truth for one label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    /// Number of entries generated for the label
    pub values: u64,
    /// Sum of all values for the label, narrowed to 32 bits
    pub value: i32,
}

/// Aggregates keyed by label, ordered by label for stable rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregateReport(BTreeMap<String, Aggregate>);

impl AggregateReport {
    /// Get the aggregate for a label.
    pub fn get(&self, label: &str) -> Option<&Aggregate> {
        self.0.get(label)
    }

    /// Number of labels in the report.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(label, aggregate)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Aggregate)> {
        self.0.iter().map(|(label, aggregate)| (label.as_str(), aggregate))
    }

    /// Sum of entry counts over all labels.
    pub fn total_values(&self) -> u64 {
        self.0.values().map(|a| a.values).sum()
    }
}

impl FromIterator<(String, Aggregate)> for AggregateReport {
    fn from_iter<I: IntoIterator<Item = (String, Aggregate)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Narrow a widened accumulator to 32 bits with two's-complement wraparound.
pub fn narrow_i32(sum: i64) -> i32 {
    sum as i32
}

/// Count and widened sum per label index, owned by a single generation run.
///
/// Sums use wrapping 64-bit adds. The low 32 bits of a wrapped sum are the
/// same as those of the exact sum, so [`narrow_i32`] stays exact.
#[derive(Debug, Clone)]
pub struct RunningAggregates {
    counts: Vec<u64>,
    sums: Vec<i64>,
}

impl RunningAggregates {
    /// Create zeroed aggregates for `labels` label slots.
    pub fn new(labels: usize) -> Self {
        Self {
            counts: vec![0; labels],
            sums: vec![0; labels],
        }
    }

    /// Whether adding `value` to the label's sum would exceed `i32::MAX`.
    pub fn would_overflow(&self, index: usize, value: i32) -> bool {
        self.sums[index].wrapping_add(i64::from(value)) > i64::from(i32::MAX)
    }

    /// Account one entry with `value` for the label at `index`.
    pub fn record(&mut self, index: usize, value: i32) {
        self.sums[index] = self.sums[index].wrapping_add(i64::from(value));
        self.counts[index] += 1;
    }

    pub fn count(&self, index: usize) -> u64 {
        self.counts[index]
    }

    /// Widened, not yet narrowed, sum for the label at `index`.
    pub fn sum(&self, index: usize) -> i64 {
        self.sums[index]
    }

    /// Total number of recorded entries across all labels.
    pub fn total_count(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Convert into the final report.
    ///
    /// `labels` must be the label list the indices refer to. Labels that
    /// never received an entry are reported with zero count and sum.
    pub fn finish(self, labels: &[String]) -> AggregateReport {
        labels
            .iter()
            .zip(self.counts.into_iter().zip(self.sums))
            .map(|(label, (values, sum))| {
                (
                    label.clone(),
                    Aggregate {
                        values,
                        value: narrow_i32(sum),
                    },
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_record_and_finish() {
        let mut running = RunningAggregates::new(3);
        for (index, value) in [(0, 56), (0, -3), (2, 2), (1, -700), (0, 11), (2, -2)] {
            running.record(index, value);
        }

        assert_eq!(running.total_count(), 6);
        assert_eq!(running.count(0), 3);
        assert_eq!(running.sum(0), 64);

        let report = running.finish(&labels(&["A", "B", "C"]));
        assert_eq!(report.len(), 3);
        assert_eq!(report.total_values(), 6);
        assert_eq!(
            report.get("A"),
            Some(&Aggregate {
                values: 3,
                value: 64
            })
        );
        assert_eq!(
            report.get("B"),
            Some(&Aggregate {
                values: 1,
                value: -700
            })
        );
        assert_eq!(report.get("C"), Some(&Aggregate { values: 2, value: 0 }));
    }

    #[test]
    fn test_unused_label_is_reported() {
        let mut running = RunningAggregates::new(2);
        running.record(0, 5);

        let report = running.finish(&labels(&["A", "B"]));
        assert_eq!(report.get("B"), Some(&Aggregate::default()));
    }

    #[test]
    fn test_would_overflow() {
        let mut running = RunningAggregates::new(1);
        assert!(!running.would_overflow(0, i32::MAX));

        running.record(0, i32::MAX);
        assert!(running.would_overflow(0, 1));
        assert!(!running.would_overflow(0, 0));
        assert!(!running.would_overflow(0, -1));
    }

    #[test]
    fn test_narrow_wraps() {
        assert_eq!(narrow_i32(i64::from(i32::MAX) + 1), i32::MIN);
        assert_eq!(narrow_i32(2 * i64::from(i32::MAX)), -2);
        assert_eq!(narrow_i32(-1), -1);
        assert_eq!(narrow_i32(1 << 32), 0);
    }

    #[test]
    fn test_widened_sum_does_not_narrow_early() {
        let mut running = RunningAggregates::new(1);
        running.record(0, i32::MAX);
        running.record(0, i32::MAX);
        running.record(0, -i32::MAX);

        assert_eq!(running.sum(0), i64::from(i32::MAX));
        let report = running.finish(&labels(&["A"]));
        assert_eq!(report.get("A").map(|a| a.value), Some(i32::MAX));
    }

    #[test]
    fn test_report_serializes_as_label_map() {
        let mut running = RunningAggregates::new(2);
        running.record(1, -3);
        let report = running.finish(&labels(&["b", "a"]));

        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"a":{"values":1,"value":-3},"b":{"values":0,"value":0}}"#
        );

        let parsed: AggregateReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
