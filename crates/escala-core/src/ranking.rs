//! The fairness comparator that orders a travel's applicants.
//!
//! Three keys, in priority order:
//! 1. fewer historical diary-days first;
//! 2. on a tie, higher rank weight (more senior) first;
//! 3. on a further tie, earlier application first.
//!
//! The application index is unique per travel, so the order is strictly
//! total and the same inputs always produce the same sequence.

use std::collections::HashMap;

use serde::Serialize;

use crate::aggregate::History;
use crate::rank::RankTable;
use crate::travel::Travel;

/// One applicant with the figures the comparator ranked them by.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedVolunteer {
    pub name: String,
    /// Historical diary-days charged to this person.
    pub diary_days: f64,
    /// Historical travels charged to this person.
    pub travel_count: u32,
    /// Seniority weight of the leading rank token.
    pub rank_weight: u32,
    /// Zero-based position in the application order.
    pub applied_at: usize,
    /// On a locked travel, membership in the frozen selection; on an open
    /// one, whether this applicant would currently be selected.
    pub selected: bool,
}

/// Ranks a travel's full applicant list.
///
/// Applicants missing from `aggregates` rank with zero history. The result
/// covers every applicant, selected or not, so the list stays auditable
/// after a lock; a volunteer frozen into the selection who later withdrew
/// simply no longer appears here.
#[allow(clippy::cast_possible_truncation, reason = "slots fit in usize")]
pub fn rank_volunteers(
    travel: &Travel,
    aggregates: &HashMap<String, History>,
    ranks: &RankTable,
) -> Vec<RankedVolunteer> {
    let mut entries: Vec<RankedVolunteer> = travel
        .volunteers
        .iter()
        .enumerate()
        .map(|(applied_at, name)| {
            let history = aggregates.get(name).copied().unwrap_or_default();
            RankedVolunteer {
                name: name.clone(),
                diary_days: history.diary_days,
                travel_count: history.travel_count,
                rank_weight: ranks.weight_of(name),
                applied_at,
                selected: false,
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        a.diary_days
            .total_cmp(&b.diary_days)
            .then_with(|| b.rank_weight.cmp(&a.rank_weight))
            .then_with(|| a.applied_at.cmp(&b.applied_at))
    });

    let slots = travel.slots as usize;
    for (position, entry) in entries.iter_mut().enumerate() {
        entry.selected = if travel.is_locked {
            travel.selected_volunteers.contains(&entry.name)
        } else {
            position < slots
        };
    }
    entries
}

/// The top `min(slots, applicants)` of the ranking, in rank order.
#[allow(clippy::cast_possible_truncation, reason = "slots fit in usize")]
pub fn select_top(
    travel: &Travel,
    aggregates: &HashMap<String, History>,
    ranks: &RankTable,
) -> Vec<String> {
    rank_volunteers(travel, aggregates, ranks)
        .into_iter()
        .take(travel.slots as usize)
        .map(|entry| entry.name)
        .collect()
}
