//! Grouping of consecutive years into fixed-size buckets

use std::ops::Range;

/// A one-row-per-year aggregate that can be merged into a compact row
pub trait YearlyRow: Sized {
    /// Row type produced for a group of consecutive years
    type Compact;

    /// Year used in the row label
    fn year_label(&self) -> i64;

    /// Value that compression must conserve
    fn total(&self) -> f64;

    /// Merge a non-empty group of consecutive years
    ///
    /// Additive fields are summed; running totals and balances come from the
    /// last year of the group.
    fn merge(group: &[Self], year_range: String) -> Self::Compact;
}

/// Compress `rows` into at most `max_rows` rows, preserving order and totals
pub fn compress<R: YearlyRow>(rows: &[R], max_rows: usize) -> Vec<R::Compact> {
    group_ranges(rows.len(), max_rows)
        .into_iter()
        .map(|range| {
            let group = &rows[range];
            let first = group[0].year_label();
            let last = group[group.len() - 1].year_label();
            R::merge(group, year_range_label(first, last))
        })
        .collect()
}

/// Sum of the conserved value across a series
pub fn series_total<R: YearlyRow>(rows: &[R]) -> f64 {
    rows.iter().map(R::total).sum()
}

/// Index ranges of each output row
///
/// Groups are `ceil(len / max_rows)` years wide, filled from the earliest
/// year; the last group takes the remainder. `max_rows == 0` yields one group
/// per year.
pub fn group_ranges(len: usize, max_rows: usize) -> Vec<Range<usize>> {
    if len == 0 {
        return Vec::new();
    }
    if max_rows == 0 || len <= max_rows {
        return (0..len).map(|i| i..i + 1).collect();
    }

    let per_group = len.div_ceil(max_rows);
    (0..len)
        .step_by(per_group)
        .map(|start| start..(start + per_group).min(len))
        .collect()
}

/// `"2024"` for a single year, `"2024-2026"` for a span
pub fn year_range_label(first: i64, last: i64) -> String {
    if first == last {
        first.to_string()
    } else {
        format!("{}-{}", first, last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(group_ranges(0, 5).is_empty());
        assert!(group_ranges(0, 0).is_empty());
    }

    #[test]
    fn test_fits_budget_is_unchanged() {
        assert_eq!(group_ranges(3, 5), vec![0..1, 1..2, 2..3]);
        assert_eq!(group_ranges(5, 5), vec![0..1, 1..2, 2..3, 3..4, 4..5]);
    }

    #[test]
    fn test_zero_budget_disables_compression() {
        assert_eq!(group_ranges(4, 0).len(), 4);
    }

    #[test]
    fn test_fixed_size_chunks_from_start() {
        // 30 years in 10 rows: 3 years each
        let ranges = group_ranges(30, 10);
        assert_eq!(ranges.len(), 10);
        assert!(ranges.iter().all(|r| r.len() == 3));

        // 25 years in 10 rows: groups of 3, last one short
        let ranges = group_ranges(25, 10);
        assert_eq!(ranges.len(), 9);
        assert_eq!(ranges[0], 0..3);
        assert_eq!(ranges[8], 24..25);

        // 7 years in 3 rows: 3, 3, 1
        assert_eq!(group_ranges(7, 3), vec![0..3, 3..6, 6..7]);
    }

    #[test]
    fn test_single_row_budget() {
        assert_eq!(group_ranges(12, 1), vec![0..12]);
    }

    #[test]
    fn test_ranges_cover_every_index_once() {
        for len in 1..60 {
            for max_rows in 1..15 {
                let ranges = group_ranges(len, max_rows);
                assert!(ranges.len() <= max_rows, "len {} max {}", len, max_rows);
                let covered: Vec<usize> = ranges.into_iter().flatten().collect();
                assert_eq!(covered, (0..len).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(year_range_label(2024, 2024), "2024");
        assert_eq!(year_range_label(2024, 2026), "2024-2026");
        assert_eq!(year_range_label(1, 5), "1-5");
    }
}
