//! Core domain logic for escala.
//!
//! This crate contains the fundamental types and logic for:
//! - Diary accounting: fractional compensable days per travel
//! - Aggregates: per-person lifetime travel and diary-day totals
//! - Ranking: the fairness comparator that orders applicants
//! - Lifecycle: sign-up, withdraw, lock and unlock transitions
//!
//! Everything here is pure: no I/O, no ambient clock. Time-sensitive
//! functions take an explicit reference date so callers (and tests) decide
//! what "today" means.

pub mod aggregate;
pub mod diary;
mod error;
pub mod lifecycle;
pub mod rank;
pub mod ranking;
pub mod travel;

pub use aggregate::{History, compute_aggregates, counts_toward_history};
pub use diary::{diary_days, total_cost};
pub use error::EngineError;
pub use lifecycle::{lock, sign_up, unlock, withdraw};
pub use rank::RankTable;
pub use ranking::{RankedVolunteer, rank_volunteers, select_top};
pub use travel::{Travel, TravelPhase};
