//! Diary-day accounting.
//!
//! A diary-day is the unit of per-day compensation. A travel spans whole
//! calendar days inclusive of both endpoints; when `half_last_day` is set
//! the final day counts as 0.5. The same calculation feeds both display and
//! fairness accounting, so the two can never diverge.

use chrono::NaiveDate;

use crate::error::EngineError;
use crate::travel::validate_dates;

/// Fractional number of compensable days for a date range.
///
/// Strictly positive for every valid range: the smallest case is a
/// single half-day (`start == end`, `half_last_day` set) at 0.5.
#[allow(clippy::cast_precision_loss, reason = "day spans are tiny")]
pub fn diary_days(
    start: NaiveDate,
    end: NaiveDate,
    half_last_day: bool,
) -> Result<f64, EngineError> {
    validate_dates(start, end)?;
    let span = (end - start).num_days() + 1;
    let discount = if half_last_day { 0.5 } else { 0.0 };
    Ok(span as f64 - discount)
}

/// Total monetary cost for a number of diary-days, when cost is tracked.
pub fn total_cost(days: f64, daily_rate: Option<f64>) -> Option<f64> {
    daily_rate.map(|rate| days * rate)
}
