//! Edit command implementation.

use std::io::Write;

use anyhow::{Result, bail};

use escala_db::{Registry, TravelUpdate};

use crate::cli::EditArgs;

pub fn run<W: Write>(writer: &mut W, registry: &mut Registry, args: &EditArgs) -> Result<()> {
    let update = TravelUpdate {
        destination: args.destination.clone(),
        start_date: args.start,
        end_date: args.end,
        slots: args.slots,
        daily_rate: if args.clear_daily_rate {
            Some(None)
        } else {
            args.daily_rate.map(Some)
        },
        half_last_day: args.half_last_day,
    };
    if update.destination.is_none()
        && update.start_date.is_none()
        && update.end_date.is_none()
        && update.slots.is_none()
        && update.daily_rate.is_none()
        && update.half_last_day.is_none()
    {
        bail!("nothing to edit: pass at least one field flag");
    }

    let travel = registry.update_details(&args.id, &update)?;
    writeln!(
        writer,
        "Updated {}: {} to {}, {} slots",
        travel.destination, travel.start_date, travel.end_date, travel.slots
    )?;
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

    fn seed(registry: &mut Registry) -> String {
        registry
            .create(&NewTravel {
                destination: "Natal".to_string(),
                start_date: date("2025-03-01"),
                end_date: date("2025-03-05"),
                slots: 3,
                daily_rate: Some(150.0),
                half_last_day: false,
            })
            .unwrap()
            .id
    }

    fn no_op_args(id: String) -> EditArgs {
        EditArgs {
            id,
            destination: None,
            start: None,
            end: None,
            slots: None,
            daily_rate: None,
            clear_daily_rate: false,
            half_last_day: None,
        }
    }

    #[test]
    fn updates_only_the_named_fields() {
        let mut registry = Registry::open_in_memory().unwrap();
        let id = seed(&mut registry);
        let args = EditArgs {
            slots: Some(5),
            ..no_op_args(id.clone())
        };
        let mut output = Vec::new();
        run(&mut output, &mut registry, &args).unwrap();

        let travel = registry.get(&id).unwrap();
        assert_eq!(travel.slots, 5);
        assert_eq!(travel.destination, "Natal");
        assert_eq!(travel.daily_rate, Some(150.0));
    }

    #[test]
    fn clear_daily_rate_drops_the_cost() {
        let mut registry = Registry::open_in_memory().unwrap();
        let id = seed(&mut registry);
        let args = EditArgs {
            clear_daily_rate: true,
            ..no_op_args(id.clone())
        };
        let mut output = Vec::new();
        run(&mut output, &mut registry, &args).unwrap();
        assert_eq!(registry.get(&id).unwrap().daily_rate, None);
    }

    #[test]
    fn refuses_an_empty_edit() {
        let mut registry = Registry::open_in_memory().unwrap();
        let id = seed(&mut registry);
        let mut output = Vec::new();
        assert!(run(&mut output, &mut registry, &no_op_args(id)).is_err());
    }
}
