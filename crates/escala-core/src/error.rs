use chrono::NaiveDate;
use thiserror::Error;

/// Engine errors.
///
/// Every precondition violation surfaces as one of these variants; no
/// transition partially mutates a travel before failing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// End date precedes start date.
    #[error("end date {end} is before start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    /// Slot count must be at least one.
    #[error("slot count must be positive")]
    InvalidSlots,
    /// Daily rate, when tracked, cannot be negative.
    #[error("daily rate cannot be negative: {0}")]
    NegativeRate(f64),
    /// Lock requested on a travel that is already locked.
    #[error("travel is already locked")]
    AlreadyLocked,
    /// Unlock requested on a travel that is not locked.
    #[error("travel is not locked")]
    NotLocked,
    /// Sign-up requested on or after the travel's start date.
    #[error("travel has already started")]
    AlreadyStarted,
    /// Sign-up requested by someone already on the applicant list.
    #[error("{0} has already applied")]
    AlreadyApplied(String),
    /// Withdraw requested by someone not on the applicant list.
    #[error("{0} has not applied to this travel")]
    NotApplied(String),
    /// The computed selection exceeds the slot count. This is a programming
    /// error, not a user-facing condition: the selection is always truncated
    /// to the slot count before this check.
    #[error("selection of {selected} volunteers exceeds {slots} slots")]
    CapacityExceeded { selected: usize, slots: u32 },
}
