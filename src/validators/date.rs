//! Date parsing and calendar validation.

use crate::ai::DateFormat;

/// A decoded, calendar-validated date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateValue {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    /// `true` for a `YYMMD0` value whose day digits were `00` (a
    /// day-unspecified date). `day` is then set to the last day of the
    /// month so the value still orders and compares sensibly.
    pub day_unspecified: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateError {
    WrongLength,
    NonDigit,
    MonthOutOfRange,
    DayOutOfRange,
    HourOutOfRange,
}

fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

fn two_digits(bytes: &[u8], start: usize) -> Result<u8, DateError> {
    let slice = bytes.get(start..start + 2).ok_or(DateError::WrongLength)?;
    if !slice.iter().all(u8::is_ascii_digit) {
        return Err(DateError::NonDigit);
    }
    Ok((slice[0] - b'0') * 10 + (slice[1] - b'0'))
}

fn century_for(yy: u8, century_pivot: u8) -> u16 {
    if yy >= century_pivot {
        1900 + u16::from(yy)
    } else {
        2000 + u16::from(yy)
    }
}

/// Parses `raw` (already known to have the AI's declared length) under
/// `format`, using `century_pivot` to resolve 2-digit years.
pub fn parse_date(raw: &str, format: DateFormat, century_pivot: u8) -> Result<DateValue, DateError> {
    match format {
        DateFormat::YyMmDd => parse_yymmdd(raw, century_pivot, false),
        DateFormat::YyMmD0 => parse_yymmdd(raw, century_pivot, true),
        DateFormat::YyyyMmDd => parse_yyyymmdd(raw),
        DateFormat::YyMmDdHh => parse_yymmddhh(raw, century_pivot),
    }
}

fn parse_yymmdd(raw: &str, century_pivot: u8, allow_day_zero: bool) -> Result<DateValue, DateError> {
    let bytes = raw.as_bytes();
    if bytes.len() != 6 {
        return Err(DateError::WrongLength);
    }
    if !bytes.iter().all(u8::is_ascii_digit) {
        return Err(DateError::NonDigit);
    }
    let yy = two_digits(bytes, 0)?;
    let mm = two_digits(bytes, 2)?;
    let dd = two_digits(bytes, 4)?;

    let year = century_for(yy, century_pivot);
    if !(1..=12).contains(&mm) {
        return Err(DateError::MonthOutOfRange);
    }

    if dd == 0 {
        if !allow_day_zero {
            return Err(DateError::DayOutOfRange);
        }
        return Ok(DateValue {
            year,
            month: mm,
            day: days_in_month(year, mm),
            day_unspecified: true,
        });
    }

    if dd > days_in_month(year, mm) {
        return Err(DateError::DayOutOfRange);
    }

    Ok(DateValue {
        year,
        month: mm,
        day: dd,
        day_unspecified: false,
    })
}

fn parse_yyyymmdd(raw: &str) -> Result<DateValue, DateError> {
    let bytes = raw.as_bytes();
    if bytes.len() != 8 {
        return Err(DateError::WrongLength);
    }
    if !bytes.iter().all(u8::is_ascii_digit) {
        return Err(DateError::NonDigit);
    }
    let year = bytes[0..4]
        .iter()
        .fold(0u16, |acc, &b| acc * 10 + u16::from(b - b'0'));
    let mm = two_digits(bytes, 4)?;
    let dd = two_digits(bytes, 6)?;

    if !(1..=12).contains(&mm) {
        return Err(DateError::MonthOutOfRange);
    }
    if dd == 0 || dd > days_in_month(year, mm) {
        return Err(DateError::DayOutOfRange);
    }

    Ok(DateValue {
        year,
        month: mm,
        day: dd,
        day_unspecified: false,
    })
}

fn parse_yymmddhh(raw: &str, century_pivot: u8) -> Result<DateValue, DateError> {
    let bytes = raw.as_bytes();
    if bytes.len() != 8 {
        return Err(DateError::WrongLength);
    }
    if !bytes.iter().all(u8::is_ascii_digit) {
        return Err(DateError::NonDigit);
    }
    let date = parse_yymmdd(&raw[..6], century_pivot, false)?;
    let hh = two_digits(bytes, 6)?;
    if hh > 23 {
        return Err(DateError::HourOutOfRange);
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yymmdd_resolves_century_with_default_pivot() {
        let date = parse_date("280430", DateFormat::YyMmDd, 51).unwrap();
        assert_eq!(date, DateValue { year: 2028, month: 4, day: 30, day_unspecified: false });
    }

    #[test]
    fn yymmdd_pivot_selects_1900s() {
        let date = parse_date("600101", DateFormat::YyMmDd, 51).unwrap();
        assert_eq!(date.year, 1960);
    }

    #[test]
    fn yymmd0_day_zero_is_unspecified() {
        let date = parse_date("290400", DateFormat::YyMmD0, 51).unwrap();
        assert_eq!(date.year, 2029);
        assert_eq!(date.month, 4);
        assert!(date.day_unspecified);
        assert_eq!(date.day, 30); // April has 30 days.
    }

    #[test]
    fn yymmdd_rejects_day_zero() {
        assert!(parse_date("290400", DateFormat::YyMmDd, 51).is_err());
    }

    #[test]
    fn rejects_invalid_month() {
        assert!(parse_date("281300", DateFormat::YyMmD0, 51).is_err());
    }

    #[test]
    fn rejects_february_30() {
        assert!(parse_date("280230", DateFormat::YyMmD0, 51).is_err());
    }

    #[test]
    fn accepts_leap_day() {
        assert!(parse_date("280229", DateFormat::YyMmDd, 51).is_ok());
        assert!(parse_date("290229", DateFormat::YyMmDd, 51).is_err());
    }

    #[test]
    fn yyyymmdd_uses_explicit_year() {
        let date = parse_date("20280430", DateFormat::YyyyMmDd, 51).unwrap();
        assert_eq!(date.year, 2028);
    }

    #[test]
    fn yymmddhh_validates_hour() {
        assert!(parse_date("28043023", DateFormat::YyMmDdHh, 51).is_ok());
        assert!(parse_date("28043024", DateFormat::YyMmDdHh, 51).is_err());
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(parse_date("2804300", DateFormat::YyMmDd, 51).is_err());
        assert!(parse_date("28043", DateFormat::YyMmDd, 51).is_err());
    }
}
