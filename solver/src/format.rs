//! Output rendering.
//!
//! [`format_general`] follows C's `%g`: `precision` significant digits,
//! trailing zeros removed, exponent notation when the decimal exponent is
//! below -4 or at least `precision`.

use crate::constants::{OUTPUT_LABEL, OUTPUT_SIGNIFICANT_DIGITS};
use crate::estimator::Estimate;

/// Render `value` in `%g` style with `precision` significant digits.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    // Scientific rendering fixes the post-rounding exponent.
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exp.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exp) as usize;
        let fixed = format!("{:.*}", decimals, value);
        strip_trailing_zeros(&fixed).to_string()
    }
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// The single result line, without the newline: `estimate of pi is <value> `.
pub fn output_line(estimate: &Estimate) -> String {
    format!(
        "{} {} ",
        OUTPUT_LABEL,
        format_general(estimate.value, OUTPUT_SIGNIFICANT_DIGITS)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(v: f64) -> String {
        format_general(v, 6)
    }

    #[test]
    fn test_fixed_notation() {
        assert_eq!(g(std::f64::consts::PI), "3.14159");
        assert_eq!(g(3.1415926), "3.14159");
        assert_eq!(g(4.0), "4");
        assert_eq!(g(2.5), "2.5");
        assert_eq!(g(123456.0), "123456");
        assert_eq!(g(0.0001), "0.0001");
        assert_eq!(g(3.14172), "3.14172");
    }

    #[test]
    fn test_exponent_notation() {
        assert_eq!(g(1234567.0), "1.23457e+06");
        assert_eq!(g(0.00001), "1e-05");
        assert_eq!(g(1.5e-10), "1.5e-10");
        assert_eq!(g(1e100), "1e+100");
    }

    #[test]
    fn test_rounding_carries_into_exponent() {
        assert_eq!(g(9.9999996), "10");
        assert_eq!(g(999999.7), "1e+06");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(g(0.0), "0");
        assert_eq!(g(-0.0), "-0");
        assert_eq!(g(f64::NAN), "nan");
        assert_eq!(g(f64::INFINITY), "inf");
        assert_eq!(g(-2.5), "-2.5");
    }

    #[test]
    fn test_output_line_has_trailing_space() {
        let est = Estimate {
            iterations: 4,
            inside: 3,
            value: 3.0,
        };
        assert_eq!(output_line(&est), "estimate of pi is 3 ");
    }
}
