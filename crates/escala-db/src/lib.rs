//! Travel registry for escala.
//!
//! Persists travel records using `rusqlite` and wraps every mutation in a
//! single immediate transaction: read the record, apply the core transition,
//! write the record, commit. A precondition failure rolls the transaction
//! back, so the caller either observes the full read-modify-write or no
//! change at all. Locking additionally reads the full travel set inside the
//! same transaction, so aggregates are always derived from a snapshot that
//! is consistent with the record being frozen.
//!
//! # Thread Safety
//!
//! [`Registry`] wraps a `rusqlite::Connection`, which is `Send` but not
//! `Sync`: an instance can move between threads but needs external
//! synchronization (or one instance per thread) to be shared. Concurrent
//! processes are serialized per write by SQLite itself, and the `version`
//! column guards any read-outside/write-inside pattern a caller might build
//! on top of [`Registry::get`].
//!
//! # Schema
//!
//! Dates are stored as TEXT in ISO 8601 (`YYYY-MM-DD`), so lexicographic
//! ordering matches chronological ordering. The applicant and selection
//! lists are JSON arrays in TEXT columns; element order is application
//! order and rank order respectively.

use std::path::Path;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rusqlite::{Connection, TransactionBehavior, params};
use thiserror::Error;
use uuid::Uuid;

use escala_core::{EngineError, RankTable, Travel, compute_aggregates};

/// Registry errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// An error from the underlying database.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// The travel id does not resolve to a record.
    #[error("travel not found: {0}")]
    NotFound(String),
    /// A precondition or validation failure from the core engine.
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// The record changed between read and write.
    #[error("travel {id} was modified concurrently")]
    VersionConflict { id: String },
    /// A stored date failed to parse.
    #[error("invalid date for travel {id}: {value}")]
    DateParse {
        id: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    /// A stored volunteer list failed to decode.
    #[error("invalid volunteer list for travel {id}")]
    ListDecode {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Fields for creating a travel. The registry owns id assignment.
#[derive(Debug, Clone)]
pub struct NewTravel {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub slots: u32,
    pub daily_rate: Option<f64>,
    pub half_last_day: bool,
}

/// Partial field update for an existing travel.
///
/// `None` leaves a field unchanged. For `daily_rate`, `Some(None)` stops
/// tracking cost for the travel.
#[derive(Debug, Clone, Default)]
pub struct TravelUpdate {
    pub destination: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub slots: Option<u32>,
    pub daily_rate: Option<Option<f64>>,
    pub half_last_day: Option<bool>,
}

/// Database-backed travel registry.
///
/// See the [module documentation](self) for transaction and thread-safety
/// notes.
pub struct Registry {
    conn: Connection,
}

impl Registry {
    /// Opens a registry at the given path, creating it if necessary.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        let conn = Connection::open(path)?;
        let registry = Self { conn };
        registry.init()?;
        Ok(registry)
    }

    /// Opens an in-memory registry.
    ///
    /// Useful for testing. The data is destroyed when the connection closes.
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        let registry = Self { conn };
        registry.init()?;
        Ok(registry)
    }

    /// Initializes the schema. Idempotent.
    fn init(&self) -> Result<(), DbError> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS travels (
                id TEXT PRIMARY KEY,
                destination TEXT NOT NULL,
                start_date TEXT NOT NULL,
                end_date TEXT NOT NULL,
                slots INTEGER NOT NULL,
                daily_rate REAL,
                half_last_day INTEGER NOT NULL DEFAULT 0,
                volunteers TEXT NOT NULL DEFAULT '[]',
                selected_volunteers TEXT NOT NULL DEFAULT '[]',
                archived INTEGER NOT NULL DEFAULT 0,
                is_locked INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                version INTEGER NOT NULL DEFAULT 1
            );

            CREATE INDEX IF NOT EXISTS idx_travels_start ON travels(start_date);
            ",
        )?;
        Ok(())
    }

    /// Creates an open travel with a fresh id, validating all fields.
    pub fn create(&mut self, new: &NewTravel) -> Result<Travel, DbError> {
        let travel = Travel::new(
            Uuid::new_v4().to_string(),
            new.destination.clone(),
            new.start_date,
            new.end_date,
            new.slots,
            new.daily_rate,
            new.half_last_day,
        )?;
        let now = format_timestamp(Utc::now());
        self.conn.execute(
            "
            INSERT INTO travels
            (id, destination, start_date, end_date, slots, daily_rate, half_last_day,
             volunteers, selected_volunteers, archived, is_locked, created_at, updated_at, version)
            VALUES (?, ?, ?, ?, ?, ?, ?, '[]', '[]', 0, 0, ?, ?, 1)
            ",
            params![
                travel.id,
                travel.destination,
                travel.start_date.to_string(),
                travel.end_date.to_string(),
                travel.slots,
                travel.daily_rate,
                travel.half_last_day,
                now,
                now,
            ],
        )?;
        tracing::debug!(travel = %travel.id, destination = %travel.destination, "travel created");
        Ok(travel)
    }

    /// Reads one travel by id.
    pub fn get(&self, id: &str) -> Result<Travel, DbError> {
        read_travel(&self.conn, id).map(|(travel, _)| travel)
    }

    /// Lists all travels, most recent start date first.
    pub fn list(&self) -> Result<Vec<Travel>, DbError> {
        list_travels(&self.conn)
    }

    /// Applies a partial field update, re-validating the merged record.
    ///
    /// Lifecycle state (applicants, selection, lock, archive flag) is not
    /// editable through this path. While a travel is locked, its dates and
    /// half-day flag are frozen too (they define the diary-days already
    /// charged to the frozen selection), and slots cannot shrink below the
    /// selection size. Unlock first to make such a change.
    #[allow(clippy::cast_possible_truncation, reason = "slots fit in usize")]
    pub fn update_details(&mut self, id: &str, update: &TravelUpdate) -> Result<Travel, DbError> {
        self.mutate(id, |travel| {
            if travel.is_locked
                && (update.start_date.is_some()
                    || update.end_date.is_some()
                    || update.half_last_day.is_some())
            {
                return Err(EngineError::AlreadyLocked);
            }
            if let Some(destination) = &update.destination {
                travel.destination = destination.clone();
            }
            if let Some(start_date) = update.start_date {
                travel.start_date = start_date;
            }
            if let Some(end_date) = update.end_date {
                travel.end_date = end_date;
            }
            if let Some(slots) = update.slots {
                travel.slots = slots;
            }
            if let Some(daily_rate) = update.daily_rate {
                travel.daily_rate = daily_rate;
            }
            if let Some(half_last_day) = update.half_last_day {
                travel.half_last_day = half_last_day;
            }
            escala_core::travel::validate_dates(travel.start_date, travel.end_date)?;
            escala_core::travel::validate_slots(travel.slots)?;
            escala_core::travel::validate_rate(travel.daily_rate)?;
            if travel.is_locked && travel.selected_volunteers.len() > travel.slots as usize {
                return Err(EngineError::CapacityExceeded {
                    selected: travel.selected_volunteers.len(),
                    slots: travel.slots,
                });
            }
            Ok(())
        })
    }

    /// Sets or clears the archive flag. Purely a display/retention state.
    pub fn set_archived(&mut self, id: &str, archived: bool) -> Result<Travel, DbError> {
        self.mutate(id, |travel| {
            travel.archived = archived;
            Ok(())
        })
    }

    /// Deletes a travel record.
    pub fn delete(&mut self, id: &str) -> Result<(), DbError> {
        let deleted = self
            .conn
            .execute("DELETE FROM travels WHERE id = ?", params![id])?;
        if deleted == 0 {
            return Err(DbError::NotFound(id.to_string()));
        }
        tracing::debug!(travel = %id, "travel deleted");
        Ok(())
    }

    /// Appends a volunteer to the applicant list.
    pub fn sign_up(
        &mut self,
        id: &str,
        volunteer: &str,
        reference: NaiveDate,
    ) -> Result<Travel, DbError> {
        self.mutate(id, |travel| escala_core::sign_up(travel, volunteer, reference))
    }

    /// Removes a volunteer from the applicant list.
    pub fn withdraw(&mut self, id: &str, volunteer: &str) -> Result<Travel, DbError> {
        self.mutate(id, |travel| escala_core::withdraw(travel, volunteer))
    }

    /// Freezes the allocation for a travel.
    ///
    /// Aggregates are recomputed from the full travel set read inside the
    /// same transaction as the write.
    pub fn lock(
        &mut self,
        id: &str,
        reference: NaiveDate,
        ranks: &RankTable,
    ) -> Result<Travel, DbError> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let travels = list_travels(&tx)?;
        let aggregates = compute_aggregates(&travels, reference);
        let (mut travel, version) = read_travel(&tx, id)?;
        escala_core::lock(&mut travel, &aggregates, ranks)?;
        write_travel(&tx, &travel, version)?;
        tx.commit()?;
        tracing::debug!(travel = %id, selected = travel.selected_volunteers.len(), "travel locked");
        Ok(travel)
    }

    /// Reverses a lock, clearing the frozen selection.
    pub fn unlock(&mut self, id: &str) -> Result<Travel, DbError> {
        let travel = self.mutate(id, escala_core::unlock)?;
        tracing::debug!(travel = %id, "travel unlocked");
        Ok(travel)
    }

    /// Read-modify-write helper: one immediate transaction per mutation.
    fn mutate<F>(&mut self, id: &str, apply: F) -> Result<Travel, DbError>
    where
        F: FnOnce(&mut Travel) -> Result<(), EngineError>,
    {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let (mut travel, version) = read_travel(&tx, id)?;
        apply(&mut travel)?;
        write_travel(&tx, &travel, version)?;
        tx.commit()?;
        Ok(travel)
    }
}

const TRAVEL_COLUMNS: &str = "id, destination, start_date, end_date, slots, daily_rate, \
     half_last_day, volunteers, selected_volunteers, archived, is_locked, version";

#[derive(Debug)]
struct TravelRow {
    id: String,
    destination: String,
    start_date: String,
    end_date: String,
    slots: u32,
    daily_rate: Option<f64>,
    half_last_day: bool,
    volunteers: String,
    selected_volunteers: String,
    archived: bool,
    is_locked: bool,
    version: i64,
}

fn travel_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<TravelRow> {
    Ok(TravelRow {
        id: row.get(0)?,
        destination: row.get(1)?,
        start_date: row.get(2)?,
        end_date: row.get(3)?,
        slots: row.get(4)?,
        daily_rate: row.get(5)?,
        half_last_day: row.get(6)?,
        volunteers: row.get(7)?,
        selected_volunteers: row.get(8)?,
        archived: row.get(9)?,
        is_locked: row.get(10)?,
        version: row.get(11)?,
    })
}

fn decode_row(row: TravelRow) -> Result<(Travel, i64), DbError> {
    let start_date = parse_date(&row.start_date, &row.id)?;
    let end_date = parse_date(&row.end_date, &row.id)?;
    let volunteers = parse_list(&row.volunteers, &row.id)?;
    let selected_volunteers = parse_list(&row.selected_volunteers, &row.id)?;
    let travel = Travel {
        id: row.id,
        destination: row.destination,
        start_date,
        end_date,
        slots: row.slots,
        daily_rate: row.daily_rate,
        half_last_day: row.half_last_day,
        volunteers,
        selected_volunteers,
        archived: row.archived,
        is_locked: row.is_locked,
    };
    Ok((travel, row.version))
}

fn read_travel(conn: &Connection, id: &str) -> Result<(Travel, i64), DbError> {
    let query = format!("SELECT {TRAVEL_COLUMNS} FROM travels WHERE id = ?");
    let mut stmt = conn.prepare(&query)?;
    let row = stmt
        .query_row(params![id], travel_from_row)
        .map_err(|err| match err {
            rusqlite::Error::QueryReturnedNoRows => DbError::NotFound(id.to_string()),
            other => DbError::Sqlite(other),
        })?;
    decode_row(row)
}

fn list_travels(conn: &Connection) -> Result<Vec<Travel>, DbError> {
    let query =
        format!("SELECT {TRAVEL_COLUMNS} FROM travels ORDER BY start_date DESC, id ASC");
    let mut stmt = conn.prepare(&query)?;
    let rows = stmt.query_map([], travel_from_row)?;
    let mut travels = Vec::new();
    for row in rows {
        let (travel, _) = decode_row(row?)?;
        travels.push(travel);
    }
    Ok(travels)
}

fn write_travel(conn: &Connection, travel: &Travel, expected_version: i64) -> Result<(), DbError> {
    let volunteers = encode_list(&travel.volunteers, &travel.id)?;
    let selected = encode_list(&travel.selected_volunteers, &travel.id)?;
    let updated = conn.execute(
        "
        UPDATE travels
        SET destination = ?, start_date = ?, end_date = ?, slots = ?, daily_rate = ?,
            half_last_day = ?, volunteers = ?, selected_volunteers = ?, archived = ?,
            is_locked = ?, updated_at = ?, version = version + 1
        WHERE id = ? AND version = ?
        ",
        params![
            travel.destination,
            travel.start_date.to_string(),
            travel.end_date.to_string(),
            travel.slots,
            travel.daily_rate,
            travel.half_last_day,
            volunteers,
            selected,
            travel.archived,
            travel.is_locked,
            format_timestamp(Utc::now()),
            travel.id,
            expected_version,
        ],
    )?;
    if updated == 0 {
        return Err(DbError::VersionConflict {
            id: travel.id.clone(),
        });
    }
    Ok(())
}

fn parse_date(value: &str, id: &str) -> Result<NaiveDate, DbError> {
    value.parse().map_err(|source| DbError::DateParse {
        id: id.to_string(),
        value: value.to_string(),
        source,
    })
}

fn parse_list(value: &str, id: &str) -> Result<Vec<String>, DbError> {
    serde_json::from_str(value).map_err(|source| DbError::ListDecode {
        id: id.to_string(),
        source,
    })
}

fn encode_list(list: &[String], id: &str) -> Result<String, DbError> {
    serde_json::to_string(list).map_err(|source| DbError::ListDecode {
        id: id.to_string(),
        source,
    })
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
