//! Delete command implementation.

use std::io::Write;

use anyhow::Result;

use escala_db::Registry;

pub fn run<W: Write>(writer: &mut W, registry: &mut Registry, id: &str) -> Result<()> {
    registry.delete(id)?;
    writeln!(writer, "Deleted travel {id}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use escala_db::NewTravel;

    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn removes_the_record() {
        let mut registry = Registry::open_in_memory().unwrap();
        let id = registry
            .create(&NewTravel {
                destination: "Natal".to_string(),
                start_date: date("2025-03-01"),
                end_date: date("2025-03-03"),
                slots: 2,
                daily_rate: None,
                half_last_day: false,
            })
            .unwrap()
            .id;

        let mut output = Vec::new();
        run(&mut output, &mut registry, &id).unwrap();
        assert!(registry.get(&id).is_err());
    }

    #[test]
    fn deleting_twice_is_an_error() {
        let mut registry = Registry::open_in_memory().unwrap();
        let mut output = Vec::new();
        assert!(run(&mut output, &mut registry, "missing").is_err());
    }
}
