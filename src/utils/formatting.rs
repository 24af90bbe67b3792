/// Render a JSON number the way a browser would coerce it to text: integral
/// values without a decimal point, everything else via the shortest float
/// representation. No separators, no rounding.
pub fn display_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_drop_the_decimal_point() {
        assert_eq!(display_number(1234.0), "1234");
        assert_eq!(display_number(0.0), "0");
        assert_eq!(display_number(-42.0), "-42");
    }

    #[test]
    fn fractional_values_keep_their_digits() {
        assert_eq!(display_number(1234.5), "1234.5");
        assert_eq!(display_number(99.99), "99.99");
    }
}
