//! Show command implementation.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use escala_core::{
    RankTable, RankedVolunteer, Travel, TravelPhase, compute_aggregates, diary_days,
    rank_volunteers, total_cost,
};
use escala_db::Registry;

use crate::commands::util::format_days;

/// Full travel report for the JSON output.
#[derive(Debug, Serialize)]
struct TravelReport<'a> {
    #[serde(flatten)]
    travel: &'a Travel,
    phase: TravelPhase,
    diary_days: f64,
    total_cost: Option<f64>,
    ranking: &'a [RankedVolunteer],
}

pub fn run<W: Write>(
    writer: &mut W,
    registry: &Registry,
    id: &str,
    reference: NaiveDate,
    ranks: &RankTable,
    json: bool,
) -> Result<()> {
    let travel = registry.get(id)?;
    let history = compute_aggregates(&registry.list()?, reference);
    let ranking = rank_volunteers(&travel, &history, ranks);
    let days = diary_days(travel.start_date, travel.end_date, travel.half_last_day)?;

    if json {
        let report = TravelReport {
            travel: &travel,
            phase: travel.phase(reference),
            diary_days: days,
            total_cost: total_cost(days, travel.daily_rate),
            ranking: &ranking,
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    let archived = if travel.archived { "  (archived)" } else { "" };
    writeln!(
        writer,
        "{} ({} to {})",
        travel.destination, travel.start_date, travel.end_date
    )?;
    writeln!(writer, "Phase: {}{archived}", travel.phase(reference))?;
    let mut line = format!(
        "Slots: {}  Applicants: {}  Diary-days: {}",
        travel.slots,
        travel.volunteers.len(),
        format_days(days)
    );
    if let Some(cost) = total_cost(days, travel.daily_rate) {
        line.push_str(&format!("  Cost: {cost:.2}"));
    }
    writeln!(writer, "{line}")?;
    writeln!(writer)?;

    if ranking.is_empty() {
        writeln!(writer, "No applicants yet.")?;
        return Ok(());
    }

    writeln!(writer, "RANKING")?;
    for (position, entry) in ranking.iter().enumerate() {
        let marker = if entry.selected { "[x]" } else { "[ ]" };
        writeln!(
            writer,
            "{:>2}. {marker} {:<20}  {} diary-days, {} travels, weight {}",
            position + 1,
            entry.name,
            format_days(entry.diary_days),
            entry.travel_count,
            entry.rank_weight
        )?;
    }
    Ok(())
}
