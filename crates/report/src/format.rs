//! Numeric formatting for parameter text blocks.
//!
//! Fit results and FWHM are printed with two significant digits in the
//! style of printf `%g`: positional within [1e-4, 1e2), scientific
//! outside, trailing zeros trimmed.

/// Format with two significant digits, `%.2g` style.
pub fn format_g2(value: f64) -> String {
    format_g(value, 2)
}

/// Format with `sig` significant digits, `%g` style.
pub fn format_g(value: f64, sig: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let sig = sig.max(1);

    // Round to `sig` significant digits first; the positional/scientific
    // decision uses the exponent after rounding (9.96 rounds to 1.0e1).
    let sci = format!("{:.*e}", sig - 1, value);
    let (mantissa, exp) = sci
        .split_once('e')
        .expect("scientific notation always contains an exponent");
    let exp: i32 = exp.parse().expect("exponent is an integer");

    let negative = mantissa.starts_with('-');
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    let sign = if negative { "-" } else { "" };

    if exp < -4 || exp >= sig as i32 {
        let mantissa = trim_fraction(mantissa);
        let exp_sign = if exp < 0 { '-' } else { '+' };
        return format!("{mantissa}e{exp_sign}{:02}", exp.abs());
    }

    if exp < 0 {
        let leading_zeros = "0".repeat((-exp - 1) as usize);
        let positional = format!("{sign}0.{leading_zeros}{digits}");
        return trim_fraction(&positional);
    }

    let int_len = (exp + 1) as usize;
    if int_len >= digits.len() {
        // All significant digits are integral; pad if rounding shortened.
        let padded = format!("{digits:0<int_len$}");
        return format!("{sign}{padded}");
    }
    let positional = format!("{sign}{}.{}", &digits[..int_len], &digits[int_len..]);
    trim_fraction(&positional)
}

/// Drop trailing fractional zeros and a dangling decimal point.
fn trim_fraction(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_stay_positional() {
        assert_eq!(format_g2(48.0), "48");
        assert_eq!(format_g2(10.0), "10");
        assert_eq!(format_g2(1.0), "1");
        assert_eq!(format_g2(60.0), "60");
    }

    #[test]
    fn test_two_significant_digits() {
        assert_eq!(format_g2(1.23), "1.2");
        assert_eq!(format_g2(3.6), "3.6");
        assert_eq!(format_g2(0.05), "0.05");
        assert_eq!(format_g2(1.26), "1.3");
    }

    #[test]
    fn test_small_values() {
        assert_eq!(format_g2(0.000123), "0.00012");
        assert_eq!(format_g2(0.0000123), "1.2e-05");
    }

    #[test]
    fn test_large_values_go_scientific() {
        assert_eq!(format_g2(12345.0), "1.2e+04");
        assert_eq!(format_g2(100.0), "1e+02");
        // Rounding can push the exponent over the positional limit.
        assert_eq!(format_g2(99.6), "1e+02");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_g2(-1.23), "-1.2");
        assert_eq!(format_g2(-12345.0), "-1.2e+04");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_g2(0.0), "0");
    }
}
