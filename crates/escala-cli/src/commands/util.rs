//! Shared output formatting helpers.

/// Formats a diary-day figure: whole values without a decimal, half values
/// with one ("3", "2.5").
pub fn format_days(days: f64) -> String {
    if days.fract().abs() < f64::EPSILON {
        format!("{days:.0}")
    } else {
        format!("{days:.1}")
    }
}

/// Formats an applicant count with the right plural ("1 applicant",
/// "3 applicants").
pub fn count_applicants(count: usize) -> String {
    if count == 1 {
        "1 applicant".to_string()
    } else {
        format!("{count} applicants")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applicant_count_pluralizes() {
        assert_eq!(count_applicants(0), "0 applicants");
        assert_eq!(count_applicants(1), "1 applicant");
        assert_eq!(count_applicants(3), "3 applicants");
    }

    #[test]
    fn whole_days_drop_the_decimal() {
        assert_eq!(format_days(3.0), "3");
        assert_eq!(format_days(1.0), "1");
    }

    #[test]
    fn half_days_keep_one_decimal() {
        assert_eq!(format_days(2.5), "2.5");
        assert_eq!(format_days(0.5), "0.5");
    }
}
