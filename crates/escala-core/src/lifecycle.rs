//! Lifecycle transitions: sign-up, withdraw, lock and unlock.
//!
//! These are pure transitions over a single travel. The registry wraps each
//! one in its own transaction so a precondition failure leaves the stored
//! record untouched. Lock is the only transition that consults aggregates;
//! the caller computes them from a freshly read travel set and passes them
//! in together with the reference date, so nothing here reads a clock.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::aggregate::History;
use crate::error::EngineError;
use crate::rank::RankTable;
use crate::ranking::select_top;
use crate::travel::Travel;

/// Appends a volunteer to the applicant list.
///
/// Fails if the travel is locked, has started as of `reference`, or already
/// lists this volunteer.
pub fn sign_up(
    travel: &mut Travel,
    volunteer: &str,
    reference: NaiveDate,
) -> Result<(), EngineError> {
    if travel.is_locked {
        return Err(EngineError::AlreadyLocked);
    }
    if reference >= travel.start_date {
        return Err(EngineError::AlreadyStarted);
    }
    if travel.volunteers.iter().any(|v| v == volunteer) {
        return Err(EngineError::AlreadyApplied(volunteer.to_string()));
    }
    travel.volunteers.push(volunteer.to_string());
    Ok(())
}

/// Removes a volunteer from the applicant list.
///
/// Valid on locked travels: the frozen `selected_volunteers` is deliberately
/// left intact, so a selection can outlive the applicant's candidacy. Only
/// the next lock recomputes it.
pub fn withdraw(travel: &mut Travel, volunteer: &str) -> Result<(), EngineError> {
    let Some(position) = travel.volunteers.iter().position(|v| v == volunteer) else {
        return Err(EngineError::NotApplied(volunteer.to_string()));
    };
    travel.volunteers.remove(position);
    Ok(())
}

/// Freezes the allocation decision.
///
/// Ranks the full applicant list and copies the top `min(slots, applicants)`
/// into `selected_volunteers`. The applicant list itself is untouched.
/// Re-locking an already-locked travel is rejected: an admin must unlock
/// first, which makes any recomputation of a frozen decision explicit.
#[allow(clippy::cast_possible_truncation, reason = "slots fit in usize")]
pub fn lock(
    travel: &mut Travel,
    aggregates: &HashMap<String, History>,
    ranks: &RankTable,
) -> Result<(), EngineError> {
    if travel.is_locked {
        return Err(EngineError::AlreadyLocked);
    }
    let selection = select_top(travel, aggregates, ranks);
    if selection.len() > travel.slots as usize {
        return Err(EngineError::CapacityExceeded {
            selected: selection.len(),
            slots: travel.slots,
        });
    }
    tracing::debug!(
        travel = %travel.id,
        selected = selection.len(),
        slots = travel.slots,
        "freezing allocation"
    );
    travel.selected_volunteers = selection;
    travel.is_locked = true;
    Ok(())
}

/// Reverses a lock, clearing the frozen selection.
///
/// The applicant list stays as it was; nothing is recomputed until the next
/// lock.
pub fn unlock(travel: &mut Travel) -> Result<(), EngineError> {
    if !travel.is_locked {
        return Err(EngineError::NotLocked);
    }
    travel.selected_volunteers.clear();
    travel.is_locked = false;
    Ok(())
}
