//! Hours reporting engine.
//!
//! The storage layer fetches one filtered, joined row set (hours log +
//! volunteer identity + optional event identity); this module turns that row
//! set into report output. Detail mode passes the rows through untouched;
//! summary mode buckets them by a grouping dimension and sums hours per
//! bucket. Because both modes read the same row set, the summary totals
//! always partition the detail totals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Group label for hours logged without an event.
pub const UNASSIGNED_EVENT_LABEL: &str = "Unassigned";

// ---------------------------------------------------------------------------
// Wire enums
// ---------------------------------------------------------------------------

/// Report presentation mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportView {
    /// One row per matching hours log, joined with volunteer/event identity.
    #[default]
    Detail,
    /// One row per group key with total hours.
    Summary,
}

/// Grouping dimension for summary reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportGroup {
    /// Bucket by the volunteer's display name.
    #[default]
    Volunteer,
    /// Bucket by event name; entries without an event fall under
    /// [`UNASSIGNED_EVENT_LABEL`].
    Event,
    /// Bucket by the `YYYY-MM` prefix of the entry date.
    Month,
}

/// A single summary output row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub group: String,
    pub hours: f64,
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Turn a caller-supplied substring filter into a `LIKE` pattern.
///
/// All text filters go through this one function so the matching rule
/// (trim, case-fold, substring) cannot drift between filters. The storage
/// layer pairs the result with `lower(column) LIKE`.
pub fn like_pattern(query: &str) -> String {
    format!("%{}%", query.trim().to_lowercase())
}

/// The `YYYY-MM` month bucket key for a calendar date.
///
/// Each date renders to exactly one key, so no entry can land in two
/// month buckets.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Select the grouping key for one entry.
pub fn group_key(
    group: ReportGroup,
    volunteer_name: &str,
    event_name: Option<&str>,
    date: NaiveDate,
) -> String {
    match group {
        ReportGroup::Volunteer => volunteer_name.to_string(),
        ReportGroup::Event => event_name
            .unwrap_or(UNASSIGNED_EVENT_LABEL)
            .to_string(),
        ReportGroup::Month => month_key(date),
    }
}

/// Sum hours per distinct group key.
///
/// Output is ordered by total hours descending; equal totals order by group
/// key ascending so repeated runs over the same data produce identical
/// output.
pub fn summarize<I>(entries: I) -> Vec<SummaryRow>
where
    I: IntoIterator<Item = (String, f64)>,
{
    use std::collections::BTreeMap;

    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for (key, hours) in entries {
        *totals.entry(key).or_insert(0.0) += hours;
    }

    let mut rows: Vec<SummaryRow> = totals
        .into_iter()
        .map(|(group, hours)| SummaryRow { group, hours })
        .collect();

    // BTreeMap iteration already yields keys ascending; a stable sort on
    // hours preserves that order among ties.
    rows.sort_by(|a, b| b.hours.partial_cmp(&a.hours).unwrap_or(std::cmp::Ordering::Equal));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().expect("test date must parse")
    }

    // Entries from the worked scenario: two volunteers, one unassigned log.
    fn scenario() -> Vec<(String, Option<String>, NaiveDate, f64)> {
        vec![
            ("Alex".into(), Some("Pantry".into()), d("2024-01-05"), 2.5),
            ("Alex".into(), None, d("2024-01-20"), 1.5),
            ("Priya".into(), Some("Pantry".into()), d("2024-02-01"), 3.0),
        ]
    }

    fn keyed(group: ReportGroup) -> Vec<(String, f64)> {
        scenario()
            .into_iter()
            .map(|(vol, event, date, hours)| {
                (group_key(group, &vol, event.as_deref(), date), hours)
            })
            .collect()
    }

    #[test]
    fn summarize_by_volunteer_orders_by_total_desc() {
        let rows = summarize(keyed(ReportGroup::Volunteer));
        assert_eq!(
            rows,
            vec![
                SummaryRow { group: "Alex".into(), hours: 4.0 },
                SummaryRow { group: "Priya".into(), hours: 3.0 },
            ]
        );
    }

    #[test]
    fn summarize_by_event_buckets_null_event_as_unassigned() {
        let rows = summarize(keyed(ReportGroup::Event));
        assert_eq!(
            rows,
            vec![
                SummaryRow { group: "Pantry".into(), hours: 5.5 },
                SummaryRow { group: "Unassigned".into(), hours: 1.5 },
            ]
        );
    }

    #[test]
    fn summarize_by_month_uses_calendar_buckets() {
        let rows = summarize(keyed(ReportGroup::Month));
        assert_eq!(
            rows,
            vec![
                SummaryRow { group: "2024-01".into(), hours: 4.0 },
                SummaryRow { group: "2024-02".into(), hours: 3.0 },
            ]
        );
    }

    #[test]
    fn summary_totals_partition_the_detail_totals() {
        let detail_total: f64 = scenario().iter().map(|(_, _, _, h)| h).sum();
        for group in [ReportGroup::Volunteer, ReportGroup::Event, ReportGroup::Month] {
            let summary_total: f64 = summarize(keyed(group)).iter().map(|r| r.hours).sum();
            assert!(
                (summary_total - detail_total).abs() < f64::EPSILON,
                "{group:?} summary dropped or double-counted hours"
            );
        }
    }

    #[test]
    fn equal_totals_tie_break_on_group_key_ascending() {
        let rows = summarize(vec![
            ("Zoe".to_string(), 2.0),
            ("Ana".to_string(), 2.0),
            ("Mid".to_string(), 2.0),
        ]);
        let keys: Vec<&str> = rows.iter().map(|r| r.group.as_str()).collect();
        assert_eq!(keys, vec!["Ana", "Mid", "Zoe"]);
    }

    #[test]
    fn empty_input_produces_empty_output() {
        assert!(summarize(Vec::new()).is_empty());
    }

    #[test]
    fn like_pattern_trims_and_folds_case() {
        assert_eq!(like_pattern("  PanTry "), "%pantry%");
        assert_eq!(like_pattern(""), "%%");
    }

    #[test]
    fn month_key_is_zero_padded() {
        assert_eq!(month_key(d("2024-03-09")), "2024-03");
        assert_eq!(month_key(d("2024-12-31")), "2024-12");
    }

    #[test]
    fn wire_enums_deserialize_lowercase() {
        let view: ReportView = serde_json::from_str("\"summary\"").unwrap();
        assert_eq!(view, ReportView::Summary);
        let group: ReportGroup = serde_json::from_str("\"month\"").unwrap();
        assert_eq!(group, ReportGroup::Month);
    }
}
