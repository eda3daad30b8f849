use serde::{Deserialize, Serialize};

/// A half-open range along one axis of an edge.
///
/// Emitted intervals always satisfy `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    /// Creates a new interval.
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Intersection of two ranges, or `None` if they overlap with zero measure.
    #[must_use]
    pub fn overlap(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(Self { start, end })
    }

    /// Length of the interval.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }
}

/// Merges overlapping or touching intervals and returns the union, sorted by start.
#[must_use]
pub fn merge_intervals(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for seg in sorted {
        match merged.last_mut() {
            Some(last) if seg.start <= last.end => last.end = last.end.max(seg.end),
            _ => merged.push(seg),
        }
    }
    merged
}

/// Subtracts `shared` from `[edge_start, edge_end]` and returns the visible gaps.
///
/// The shared intervals are merged first so that overlapping claims from
/// different neighbors never produce duplicate gaps. With no shared intervals
/// the whole edge is returned.
#[must_use]
pub fn non_shared_segments(edge_start: f64, edge_end: f64, shared: &[Interval]) -> Vec<Interval> {
    if shared.is_empty() {
        return vec![Interval::new(edge_start, edge_end)];
    }

    let mut visible = Vec::new();
    let mut cursor = edge_start;
    for m in merge_intervals(shared) {
        if cursor < m.start {
            visible.push(Interval::new(cursor, m.start));
        }
        cursor = cursor.max(m.end);
    }
    if cursor < edge_end {
        visible.push(Interval::new(cursor, edge_end));
    }
    visible
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn iv(start: f64, end: f64) -> Interval {
        Interval::new(start, end)
    }

    #[test]
    fn no_shared_returns_full_edge() {
        assert_eq!(non_shared_segments(0.0, 115.0, &[]), vec![iv(0.0, 115.0)]);
    }

    #[test]
    fn full_cover_returns_empty() {
        assert!(non_shared_segments(0.0, 100.0, &[iv(0.0, 100.0)]).is_empty());
    }

    #[test]
    fn prefix_shared_leaves_tail() {
        assert_eq!(
            non_shared_segments(0.0, 115.0, &[iv(0.0, 55.0)]),
            vec![iv(55.0, 115.0)]
        );
    }

    #[test]
    fn middle_shared_leaves_two_gaps() {
        assert_eq!(
            non_shared_segments(0.0, 100.0, &[iv(20.0, 60.0)]),
            vec![iv(0.0, 20.0), iv(60.0, 100.0)]
        );
    }

    #[test]
    fn overlapping_claims_merge_before_subtracting() {
        let shared = [iv(40.0, 70.0), iv(10.0, 50.0), iv(65.0, 80.0)];
        assert_eq!(
            non_shared_segments(0.0, 100.0, &shared),
            vec![iv(0.0, 10.0), iv(80.0, 100.0)]
        );
    }

    #[test]
    fn disjoint_claims_leave_inner_gap() {
        let shared = [iv(60.0, 100.0), iv(0.0, 30.0)];
        assert_eq!(non_shared_segments(0.0, 100.0, &shared), vec![iv(30.0, 60.0)]);
    }

    #[test]
    fn touching_claims_merge() {
        let merged = merge_intervals(&[iv(50.0, 100.0), iv(0.0, 50.0)]);
        assert_eq!(merged, vec![iv(0.0, 100.0)]);
    }

    #[test]
    fn overlap_rejects_corner_contact() {
        assert!(iv(0.0, 10.0).overlap(&iv(10.0, 20.0)).is_none());
        assert_eq!(iv(0.0, 10.0).overlap(&iv(5.0, 20.0)).unwrap(), iv(5.0, 10.0));
    }

    fn interval_strategy() -> impl Strategy<Value = Interval> {
        (0u32..100, 1u32..50).prop_map(|(s, len)| iv(f64::from(s), f64::from(s + len)))
    }

    proptest! {
        #[test]
        fn merged_input_yields_same_gaps(
            shared in prop::collection::vec(interval_strategy(), 0..8)
        ) {
            let merged = merge_intervals(&shared);
            let from_raw = non_shared_segments(0.0, 150.0, &shared);
            let from_merged = non_shared_segments(0.0, 150.0, &merged);
            prop_assert_eq!(from_raw, from_merged);
        }

        #[test]
        fn merged_intervals_are_disjoint_and_sorted(
            shared in prop::collection::vec(interval_strategy(), 1..8)
        ) {
            let merged = merge_intervals(&shared);
            for pair in merged.windows(2) {
                prop_assert!(pair[0].end < pair[1].start);
            }
        }

        #[test]
        fn gaps_never_overlap_shared(shared in prop::collection::vec(interval_strategy(), 1..8)) {
            for gap in non_shared_segments(0.0, 150.0, &shared) {
                prop_assert!(gap.start < gap.end);
                for s in &shared {
                    prop_assert!(gap.overlap(s).is_none());
                }
            }
        }
    }
}
