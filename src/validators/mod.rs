//! Pure, independent validators over a value string given an AI spec.
//!
//! Each validator takes `(&AiSpec, &str)` and returns either a `bool` or a
//! `Result` carrying the decoded typed value; none of them share state or
//! consult the dictionary or the input beyond the slice they're given.

mod charset;
mod check_digit;
mod date;
mod decimal;
mod length;

pub use charset::{is_cset39, is_cset82};
pub use check_digit::mod10_check_digit;
pub use date::{parse_date, DateValue};
pub use decimal::{decode_decimal, DecimalValue};
pub use length::length_in_bounds;

use crate::ai::{AiSpec, DataType};
use crate::result::DiagnosticTag;

/// Runs every applicable validator for `(spec, raw_value)` and returns the
/// ordered list of failures. An empty list means `valid = true`.
/// `century_pivot` feeds the date validator's 2-digit-year resolution.
#[must_use]
pub fn validate(spec: &AiSpec, raw_value: &str, century_pivot: u8) -> Vec<DiagnosticTag> {
    let mut errors = Vec::new();

    if !length_in_bounds(spec, raw_value) {
        errors.push(DiagnosticTag::InvalidLength);
    }

    let charset_ok = match spec.data_type {
        DataType::Numeric => raw_value.bytes().all(|b| b.is_ascii_digit()),
        DataType::Alphanumeric => raw_value.bytes().all(is_cset82),
    };
    if !charset_ok {
        errors.push(DiagnosticTag::InvalidCharacters);
    }

    if spec.check_digit && charset_ok && !mod10_check_digit(raw_value) {
        errors.push(DiagnosticTag::InvalidCheckDigit);
    }

    if let Some(format) = spec.date_format {
        if parse_date(raw_value, format, century_pivot).is_err() {
            errors.push(DiagnosticTag::InvalidDate);
        }
    }

    errors
}

/// Computes the typed value for an element once it has passed (or failed)
/// [`validate`]. Falls back to `TypedValue::Text` when no richer
/// interpretation applies or the value doesn't parse.
#[must_use]
pub fn typed_value(
    spec: &AiSpec,
    raw_value: &str,
    century_pivot: u8,
) -> crate::result::TypedValue {
    use crate::result::TypedValue;

    if let Some(format) = spec.date_format {
        if let Ok(date) = parse_date(raw_value, format, century_pivot) {
            return TypedValue::Date {
                year: date.year,
                month: date.month,
                day: date.day,
                day_unspecified: date.day_unspecified,
            };
        }
    }

    if let Some(d) = spec.decimal_position {
        if let Ok(dec) = decode_decimal(raw_value, d) {
            return TypedValue::Decimal {
                value: dec.value,
                formatted: dec.formatted,
            };
        }
    }

    if matches!(spec.data_type, DataType::Numeric) {
        if let Ok(n) = raw_value.parse::<i64>() {
            return TypedValue::Integer(n);
        }
    }

    TypedValue::Text(raw_value.to_owned())
}
