//! Volunteer withdrawal command implementation.

use std::io::Write;

use anyhow::Result;

use escala_db::Registry;

use crate::commands::util::count_applicants;

pub fn run<W: Write>(writer: &mut W, registry: &mut Registry, id: &str, name: &str) -> Result<()> {
    let travel = registry.withdraw(id, name)?;
    writeln!(
        writer,
        "{} withdrew from {} ({} remain)",
        name,
        travel.destination,
        count_applicants(travel.volunteers.len())
    )?;
    Ok(())
}
