//! `BDAY` value parsing.

use chrono::NaiveDate;

/// Date encodings accepted in a `BDAY` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `YYYYMMDD`
    Compact,
    /// `YYYY-MM-DD`
    Hyphenated,
    /// `YYYY/MM/DD`
    Slashed,
}

impl DateFormat {
    /// Formats in the order they are attempted.
    pub const PRIORITY: [Self; 3] = [Self::Compact, Self::Hyphenated, Self::Slashed];

    /// Parses `value` in this encoding.
    #[must_use]
    pub fn parse(self, value: &str) -> Option<NaiveDate> {
        match self {
            Self::Compact => parse_compact(value),
            Self::Hyphenated => parse_separated(value, '-'),
            Self::Slashed => parse_separated(value, '/'),
        }
    }
}

/// `YYYYMMDD`: exactly eight ASCII digits.
fn parse_compact(value: &str) -> Option<NaiveDate> {
    if value.len() != 8 || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let year: i32 = value[..4].parse().ok()?;
    let month: u32 = value[4..6].parse().ok()?;
    let day: u32 = value[6..8].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// `YYYY<sep>MM<sep>DD`: four, two and two ASCII digits.
fn parse_separated(value: &str, separator: char) -> Option<NaiveDate> {
    let mut fields = value.split(separator);
    let (year, month, day) = (fields.next()?, fields.next()?, fields.next()?);

    if fields.next().is_some() || year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return None;
    }

    parse_compact(&format!("{year}{month}{day}"))
}

/// Parses a raw `BDAY` value into a date.
///
/// Anything from the first `T` onwards is a time component and is dropped.
/// The remainder is tried against each [`DateFormat`] in priority order and
/// the first match wins.
#[must_use]
pub fn parse_birthday_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.split_once('T').map_or(value, |(date, _time)| date);

    DateFormat::PRIORITY
        .into_iter()
        .find_map(|format| format.parse(date_part))
}
