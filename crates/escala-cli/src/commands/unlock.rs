//! Unlock command implementation.

use std::io::Write;

use anyhow::Result;

use escala_db::Registry;

use crate::commands::util::count_applicants;

pub fn run<W: Write>(writer: &mut W, registry: &mut Registry, id: &str) -> Result<()> {
    let travel = registry.unlock(id)?;
    writeln!(
        writer,
        "Unlocked {}: selection cleared, {} kept",
        travel.destination,
        count_applicants(travel.volunteers.len())
    )?;
    Ok(())
}
