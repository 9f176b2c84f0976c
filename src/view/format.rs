//! Number formatting for cards and narrative text

/// Shortest representation of a number: `25.0` prints as `25`, `12.5` as `12.5`
pub fn number(value: f64) -> String {
    format!("{}", value)
}

/// Percentage as received, without normalization
pub fn percent(value: f64) -> String {
    format!("{}%", number(value))
}

/// Fixed one-decimal precision of the exact binary value; exact ties round
/// away from zero
pub fn one_decimal(value: f64) -> String {
    let scaled = value * 10.0;
    // Only a tie when the scaling itself was exact
    if scaled.fract().abs() == 0.5 && value.mul_add(10.0, -scaled) == 0.0 {
        format!("{:.1}", scaled.round() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}

/// Hours with one decimal, e.g. `18.4h`
pub fn hours(value: f64) -> String {
    format!("{}h", one_decimal(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_drops_trailing_zero() {
        assert_eq!(number(25.0), "25");
        assert_eq!(number(12.5), "12.5");
        assert_eq!(number(0.0), "0");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(25.0), "25%");
        assert_eq!(percent(33.33), "33.33%");
    }

    #[test]
    fn test_one_decimal() {
        assert_eq!(one_decimal(18.4), "18.4");
        assert_eq!(one_decimal(18.0), "18.0");
        assert_eq!(one_decimal(2.04), "2.0");
        assert_eq!(one_decimal(0.0), "0.0");
    }

    #[test]
    fn test_one_decimal_near_ties_round_the_stored_value() {
        // 18.45, 1.45 and 0.35 are stored just below the written decimal
        assert_eq!(one_decimal(18.45), "18.4");
        assert_eq!(one_decimal(1.45), "1.4");
        assert_eq!(one_decimal(0.35), "0.3");
        assert_eq!(hours(18.45), "18.4h");
    }

    #[test]
    fn test_one_decimal_ties_round_up() {
        assert_eq!(one_decimal(18.25), "18.3");
        assert_eq!(one_decimal(0.75), "0.8");
    }

    #[test]
    fn test_hours() {
        assert_eq!(hours(18.4), "18.4h");
        assert_eq!(hours(36.0), "36.0h");
    }
}
