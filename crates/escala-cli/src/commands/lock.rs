//! Lock command implementation.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;

use escala_core::RankTable;
use escala_db::Registry;

pub fn run<W: Write>(
    writer: &mut W,
    registry: &mut Registry,
    id: &str,
    reference: NaiveDate,
    ranks: &RankTable,
) -> Result<()> {
    let travel = registry.lock(id, reference, ranks)?;
    writeln!(
        writer,
        "Locked {}: {} of {} slots filled",
        travel.destination,
        travel.selected_volunteers.len(),
        travel.slots
    )?;
    for name in &travel.selected_volunteers {
        writeln!(writer, "  {name}")?;
    }
    Ok(())
}
