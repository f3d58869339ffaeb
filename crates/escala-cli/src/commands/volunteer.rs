//! Volunteer sign-up command implementation.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;

use escala_db::Registry;

use crate::commands::util::count_applicants;

pub fn run<W: Write>(
    writer: &mut W,
    registry: &mut Registry,
    id: &str,
    name: &str,
    reference: NaiveDate,
) -> Result<()> {
    let travel = registry.sign_up(id, name, reference)?;
    writeln!(
        writer,
        "{} applied to {} ({})",
        name,
        travel.destination,
        count_applicants(travel.volunteers.len())
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use escala_db::NewTravel;

    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn seed(registry: &mut Registry) -> String {
        registry
            .create(&NewTravel {
                destination: "Natal".to_string(),
                start_date: date("2025-03-01"),
                end_date: date("2025-03-03"),
                slots: 2,
                daily_rate: None,
                half_last_day: false,
            })
            .unwrap()
            .id
    }

    #[test]
    fn records_the_application() {
        let mut registry = Registry::open_in_memory().unwrap();
        let id = seed(&mut registry);
        let mut output = Vec::new();
        run(&mut output, &mut registry, &id, "Sd PM Bob", date("2025-01-01")).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Sd PM Bob applied to Natal (1 applicant)"));
        assert_eq!(registry.get(&id).unwrap().volunteers, vec!["Sd PM Bob"]);
    }

    #[test]
    fn duplicate_application_is_an_error() {
        let mut registry = Registry::open_in_memory().unwrap();
        let id = seed(&mut registry);
        let mut output = Vec::new();
        run(&mut output, &mut registry, &id, "Sd PM Bob", date("2025-01-01")).unwrap();
        let result = run(&mut output, &mut registry, &id, "Sd PM Bob", date("2025-01-01"));
        assert!(result.is_err());
    }

    #[test]
    fn sign_up_after_start_is_an_error() {
        let mut registry = Registry::open_in_memory().unwrap();
        let id = seed(&mut registry);
        let mut output = Vec::new();
        let result = run(&mut output, &mut registry, &id, "Sd PM Bob", date("2025-03-01"));
        assert!(result.is_err());
    }
}
