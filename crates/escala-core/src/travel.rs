//! The travel record and its lifecycle phases.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A scheduled group trip with a fixed volunteer capacity.
///
/// `volunteers` is the applicant list in application order; a name appears
/// at most once. `selected_volunteers` is the subset frozen by the most
/// recent lock and is empty whenever `is_locked` is false. Lock and unlock
/// never touch `volunteers` — only sign-up and withdraw do — so the full
/// applicant history stays inspectable after a decision is made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Travel {
    pub id: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub slots: u32,
    /// Cost per diary-day; `None` means cost is not tracked for this travel.
    pub daily_rate: Option<f64>,
    /// If set, the final calendar day counts as half a diary-day.
    pub half_last_day: bool,
    pub volunteers: Vec<String>,
    pub selected_volunteers: Vec<String>,
    /// Display/retention flag only; never consulted by allocation.
    pub archived: bool,
    pub is_locked: bool,
}

impl Travel {
    /// Creates an open, unlocked travel with empty applicant and selection
    /// lists, validating all inputs.
    pub fn new(
        id: String,
        destination: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        slots: u32,
        daily_rate: Option<f64>,
        half_last_day: bool,
    ) -> Result<Self, EngineError> {
        validate_dates(start_date, end_date)?;
        validate_slots(slots)?;
        validate_rate(daily_rate)?;
        Ok(Self {
            id,
            destination,
            start_date,
            end_date,
            slots,
            daily_rate,
            half_last_day,
            volunteers: Vec::new(),
            selected_volunteers: Vec::new(),
            archived: false,
            is_locked: false,
        })
    }

    /// Lifecycle phase of this travel as of `reference`.
    ///
    /// `archived` is orthogonal to the phase and is not reflected here.
    pub fn phase(&self, reference: NaiveDate) -> TravelPhase {
        if reference < self.start_date {
            if self.is_locked {
                TravelPhase::ProcessingAllocation
            } else {
                TravelPhase::Open
            }
        } else if reference <= self.end_date {
            TravelPhase::InProgress
        } else {
            TravelPhase::Concluded
        }
    }
}

/// Where a travel sits in its lifecycle, relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelPhase {
    /// Not yet started, sign-up open.
    Open,
    /// Not yet started but the selection is frozen.
    ProcessingAllocation,
    /// Between start and end date, inclusive.
    InProgress,
    /// Past the end date.
    Concluded,
}

impl fmt::Display for TravelPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Open => "open",
            Self::ProcessingAllocation => "processing allocation",
            Self::InProgress => "in progress",
            Self::Concluded => "concluded",
        };
        write!(f, "{s}")
    }
}

/// Rejects date ranges where the end precedes the start.
pub fn validate_dates(start: NaiveDate, end: NaiveDate) -> Result<(), EngineError> {
    if end < start {
        return Err(EngineError::InvalidDateRange { start, end });
    }
    Ok(())
}

/// Rejects a zero slot count.
pub fn validate_slots(slots: u32) -> Result<(), EngineError> {
    if slots == 0 {
        return Err(EngineError::InvalidSlots);
    }
    Ok(())
}

/// Rejects a negative daily rate. `None` (cost not tracked) is valid.
pub fn validate_rate(rate: Option<f64>) -> Result<(), EngineError> {
    if let Some(rate) = rate {
        if rate < 0.0 {
            return Err(EngineError::NegativeRate(rate));
        }
    }
    Ok(())
}
