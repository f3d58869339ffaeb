//! Per-person history totals used by the fairness comparator.
//!
//! Aggregates are recomputed from scratch over the full travel set on every
//! evaluation. The set is bounded by an organization's trip history, so a
//! plain scan is cheaper and simpler than maintaining incremental counters,
//! and it cannot drift from the stored records.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::diary::diary_days;
use crate::travel::Travel;

/// Lifetime totals for one person.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct History {
    /// Travels counted toward fairness.
    pub travel_count: u32,
    /// Diary-days counted toward fairness.
    pub diary_days: f64,
}

/// Whether a travel's frozen selection is charged to its members' history
/// as of `reference`.
///
/// True when the reservation is finalized for a future trip (locked before
/// start), when the trip is in progress, or when it has concluded. An open
/// travel that has not started charges nothing: applicants pay no fairness
/// cost for mere candidacy.
pub fn counts_toward_history(travel: &Travel, reference: NaiveDate) -> bool {
    let finalized_future = reference < travel.start_date && travel.is_locked;
    let underway = reference >= travel.start_date && reference <= travel.end_date;
    let concluded = reference > travel.end_date;
    finalized_future || underway || concluded
}

/// Computes per-person totals across the full travel set.
///
/// Each included travel credits every member of its `selected_volunteers`
/// with one travel and the travel's diary-days. Travels with no frozen
/// selection contribute nothing. A stored travel whose date range fails
/// validation is skipped rather than failing the whole scan; the validated
/// write path never produces one.
pub fn compute_aggregates(
    travels: &[Travel],
    reference: NaiveDate,
) -> HashMap<String, History> {
    let mut totals: HashMap<String, History> = HashMap::new();
    for travel in travels {
        if !counts_toward_history(travel, reference) {
            continue;
        }
        let Ok(days) = diary_days(travel.start_date, travel.end_date, travel.half_last_day)
        else {
            continue;
        };
        for volunteer in &travel.selected_volunteers {
            let entry = totals.entry(volunteer.clone()).or_default();
            entry.travel_count += 1;
            entry.diary_days += days;
        }
    }
    totals
}
