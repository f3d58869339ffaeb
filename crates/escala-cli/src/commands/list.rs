//! List command implementation.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use escala_core::{Travel, TravelPhase, diary_days, total_cost};
use escala_db::Registry;

use crate::commands::util::format_days;

/// One travel's row in the JSON listing.
#[derive(Debug, Serialize)]
struct TravelRow<'a> {
    #[serde(flatten)]
    travel: &'a Travel,
    phase: TravelPhase,
    diary_days: f64,
    total_cost: Option<f64>,
}

pub fn run<W: Write>(
    writer: &mut W,
    registry: &Registry,
    reference: NaiveDate,
    all: bool,
    json: bool,
) -> Result<()> {
    let travels: Vec<Travel> = registry
        .list()?
        .into_iter()
        .filter(|travel| all || !travel.archived)
        .collect();

    if json {
        let rows = travels
            .iter()
            .map(|travel| {
                let days = diary_days(travel.start_date, travel.end_date, travel.half_last_day)?;
                Ok(TravelRow {
                    travel,
                    phase: travel.phase(reference),
                    diary_days: days,
                    total_cost: total_cost(days, travel.daily_rate),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        writeln!(writer, "{}", serde_json::to_string_pretty(&rows)?)?;
        return Ok(());
    }

    if travels.is_empty() {
        writeln!(writer, "No travels registered.")?;
        return Ok(());
    }

    for travel in &travels {
        let days = diary_days(travel.start_date, travel.end_date, travel.half_last_day)?;
        let archived = if travel.archived { "  (archived)" } else { "" };
        writeln!(writer, "{}  {}", travel.id, travel.destination)?;
        writeln!(
            writer,
            "  {} to {}  [{}]{archived}",
            travel.start_date,
            travel.end_date,
            travel.phase(reference)
        )?;
        let mut line = format!(
            "  slots {}  applicants {}  diary-days {}",
            travel.slots,
            travel.volunteers.len(),
            format_days(days)
        );
        if let Some(cost) = total_cost(days, travel.daily_rate) {
            line.push_str(&format!("  cost {cost:.2}"));
        }
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
