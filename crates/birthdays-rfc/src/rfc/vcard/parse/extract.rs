//! Birthday extraction from a single vCard record.

use chrono::NaiveDate;

use super::date::parse_birthday_date;
use crate::rfc::vcard::core::Birthday;

const STRUCTURED_NAME_PREFIX: &str = "N:";
const FORMATTED_NAME_PREFIX: &str = "FN:";
const UID_PREFIX: &str = "UID:";
const BDAY_PROPERTY: &str = "BDAY";
const BARE_BDAY_PREFIX: &str = "BDAY:";
const TYPED_DATE_MARKER: &str = ";VALUE=date:";

/// Extracts the birthday of the contact described by `record`.
///
/// Every line is trimmed and matched by exact, case-sensitive prefix. When a
/// field appears more than once the last occurrence wins; for `BDAY` only
/// lines whose value parses replace an earlier date.
///
/// The display name is `FN`, falling back to the raw `N` value when `FN` is
/// empty. Returns `None` when no date could be parsed or both names are
/// empty. Unparseable `BDAY` values are logged and otherwise ignored.
#[must_use]
pub fn extract_birthday(record: &str) -> Option<Birthday> {
    let mut structured_name = "";
    let mut formatted_name = "";
    let mut uid = "";
    let mut date: Option<NaiveDate> = None;

    for (index, raw_line) in record.split('\n').enumerate() {
        let line = raw_line.trim();

        if let Some(value) = line.strip_prefix(STRUCTURED_NAME_PREFIX) {
            structured_name = value;
        }
        if let Some(value) = line.strip_prefix(FORMATTED_NAME_PREFIX) {
            formatted_name = value;
        }
        if let Some(value) = line.strip_prefix(UID_PREFIX) {
            uid = value;
        }

        if let Some(value) = birthday_value(line).filter(|value| !value.is_empty()) {
            if let Some(parsed) = parse_birthday_date(value) {
                date = Some(parsed);
            } else {
                tracing::warn!(line = index + 1, value = %value, "Failed to parse birthday date");
            }
        }
    }

    let date = date?;
    let display_name = if formatted_name.is_empty() {
        structured_name
    } else {
        formatted_name
    };

    Birthday::new(uid, display_name, date)
}

/// Returns the value of a `BDAY` line in either the typed
/// (`BDAY;VALUE=date:value`) or the bare (`BDAY:value`) form.
///
/// A line carrying the typed marker never falls back to the bare form, and
/// yields nothing unless the marker occurs exactly once.
fn birthday_value(line: &str) -> Option<&str> {
    if !line.starts_with(BDAY_PROPERTY) {
        return None;
    }

    if let Some((_, value)) = line.split_once(TYPED_DATE_MARKER) {
        return (!value.contains(TYPED_DATE_MARKER)).then_some(value);
    }

    line.strip_prefix(BARE_BDAY_PREFIX)
}
