//! Decimal decoding for weight/measure AIs (the `310n`..`369n` family).

#[derive(Debug, Clone, PartialEq)]
pub struct DecimalValue {
    pub value: f64,
    pub formatted: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalError {
    NonDigit,
    Empty,
}

impl DecimalValue {
    fn new(formatted: String, value: f64) -> Self {
        Self { value, formatted }
    }
}

/// Decodes `raw_value` as an integer divided by `10^decimal_position`.
/// `raw_value` must already be known to be all-digit.
pub fn decode_decimal(raw_value: &str, decimal_position: u8) -> Result<DecimalValue, DecimalError> {
    if raw_value.is_empty() {
        return Err(DecimalError::Empty);
    }
    if !raw_value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecimalError::NonDigit);
    }

    let digits = raw_value.as_bytes();
    let d = decimal_position as usize;

    let formatted = if d == 0 {
        raw_value.to_owned()
    } else if digits.len() <= d {
        let mut padded = "0".repeat(d - digits.len() + 1);
        padded.push_str(raw_value);
        let split = padded.len() - d;
        format!("{}.{}", &padded[..split], &padded[split..])
    } else {
        let split = digits.len() - d;
        format!("{}.{}", &raw_value[..split], &raw_value[split..])
    };

    let int_value: u64 = raw_value.parse().map_err(|_| DecimalError::NonDigit)?;
    let value = int_value as f64 / 10f64.powi(decimal_position as i32);

    Ok(DecimalValue::new(formatted, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_position_three_shifts_point() {
        let v = decode_decimal("012345", 3).unwrap();
        assert_eq!(v.formatted, "012.345");
        assert!((v.value - 12.345).abs() < 1e-9);
    }

    #[test]
    fn decimal_position_zero_is_passthrough() {
        let v = decode_decimal("000123", 0).unwrap();
        assert_eq!(v.formatted, "000123");
        assert!((v.value - 123.0).abs() < 1e-9);
    }

    #[test]
    fn decimal_position_exceeds_digit_count() {
        let v = decode_decimal("5", 3).unwrap();
        assert_eq!(v.formatted, "0.005");
    }

    #[test]
    fn rejects_non_digit() {
        assert!(decode_decimal("12a456", 2).is_err());
    }

    #[test]
    fn rejects_empty() {
        assert!(decode_decimal("", 2).is_err());
    }
}
