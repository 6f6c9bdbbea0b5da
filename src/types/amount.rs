use crate::types::ParseError;
use rust_decimal::Decimal;
use std::str::FromStr;

const INFINITY: &str = "Infinity";

/// Parses the longest numeric prefix of `value` into a float.
///
/// Leading whitespace is skipped and anything after the numeric prefix is ignored,
/// so `"12.5 USD"` yields `12.5`. When no numeric prefix exists the result is `NaN`,
/// which then propagates through any sum it takes part in.
pub fn parse_amount_lossy(value: &str) -> f64 {
    let value = value.trim_start();
    let bytes = value.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if value[end..].starts_with(INFINITY) {
        return if value.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let integer_digits = count_digits(&bytes[end..]);
    end += integer_digits;

    let mut fraction_digits = 0;

    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[end + 1..]);
        end += 1 + fraction_digits;
    }

    if integer_digits + fraction_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exponent_end = end + 1;

        if matches!(bytes.get(exponent_end), Some(b'+') | Some(b'-')) {
            exponent_end += 1;
        }

        let exponent_digits = count_digits(&bytes[exponent_end..]);

        //NOTE: A dangling exponent marker ("5e") is not part of the number
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    value[..end].parse().unwrap_or(f64::NAN)
}

/// Parses `value` as an exact decimal, rejecting anything that is not entirely numeric.
pub fn parse_amount_strict(value: &str) -> Result<Decimal, ParseError> {
    Decimal::from_str(value.trim())
        .map_err(|_| ParseError::InvalidAmount(value.to_string()))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}
