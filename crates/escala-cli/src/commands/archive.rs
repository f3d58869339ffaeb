//! Archive and unarchive command implementation.

use std::io::Write;

use anyhow::Result;

use escala_db::Registry;

pub fn run<W: Write>(
    writer: &mut W,
    registry: &mut Registry,
    id: &str,
    archived: bool,
) -> Result<()> {
    let travel = registry.set_archived(id, archived)?;
    let verb = if archived { "Archived" } else { "Unarchived" };
    writeln!(writer, "{verb} {}", travel.destination)?;
    Ok(())
}
