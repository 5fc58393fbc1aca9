use regex::Regex;

use crate::model::UserRecord;

/// Filter records by case-insensitive substring match on the first name.
///
/// An empty term matches everything. The result is always a subsequence of
/// `records` in original order — the filtered view is a projection of the
/// store, never a reordering.
pub fn filter_records<'a>(records: &'a [UserRecord], term: &str) -> Vec<&'a UserRecord> {
    if term.is_empty() {
        return records.iter().collect();
    }
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|r| r.first.to_lowercase().contains(&needle))
        .collect()
}

/// Regex for highlighting the matched part of a first name in the list view.
/// The term is escaped — search is plain substring, not regex.
pub fn highlight_re(term: &str) -> Option<Regex> {
    if term.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", regex::escape(term))).ok()
}
