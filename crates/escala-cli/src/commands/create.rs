//! Create command implementation.

use std::io::Write;

use anyhow::Result;

use escala_core::diary_days;
use escala_db::{NewTravel, Registry};

use crate::cli::CreateArgs;
use crate::commands::util::format_days;

pub fn run<W: Write>(writer: &mut W, registry: &mut Registry, args: &CreateArgs) -> Result<()> {
    let travel = registry.create(&NewTravel {
        destination: args.destination.clone(),
        start_date: args.start,
        end_date: args.end,
        slots: args.slots,
        daily_rate: args.daily_rate,
        half_last_day: args.half_last_day,
    })?;
    let days = diary_days(travel.start_date, travel.end_date, travel.half_last_day)?;

    writeln!(writer, "Created travel {}", travel.id)?;
    writeln!(
        writer,
        "  {} from {} to {}, {} slots, {} diary-days",
        travel.destination,
        travel.start_date,
        travel.end_date,
        travel.slots,
        format_days(days)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn reports_id_and_diary_days() {
        let mut registry = Registry::open_in_memory().unwrap();
        let args = CreateArgs {
            destination: "Natal".to_string(),
            start: date("2025-01-10"),
            end: date("2025-01-12"),
            slots: 2,
            daily_rate: Some(200.0),
            half_last_day: true,
        };
        let mut output = Vec::new();
        run(&mut output, &mut registry, &args).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("Created travel "));
        assert!(output.contains("Natal from 2025-01-10 to 2025-01-12, 2 slots, 2.5 diary-days"));

        let travels = registry.list().unwrap();
        assert_eq!(travels.len(), 1);
        assert_eq!(travels[0].destination, "Natal");
    }

    #[test]
    fn rejects_inverted_dates() {
        let mut registry = Registry::open_in_memory().unwrap();
        let args = CreateArgs {
            destination: "Natal".to_string(),
            start: date("2025-01-12"),
            end: date("2025-01-10"),
            slots: 2,
            daily_rate: None,
            half_last_day: false,
        };
        let mut output = Vec::new();
        assert!(run(&mut output, &mut registry, &args).is_err());
        assert!(registry.list().unwrap().is_empty());
    }
}
