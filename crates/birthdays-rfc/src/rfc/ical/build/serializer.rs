//! Birthday feed serializer (RFC 5545).
//!
//! Text values are written verbatim: commas, semicolons, backslashes and
//! newlines in contact names are not escaped and long lines are not folded.

use chrono::{Datelike, NaiveDate};

use crate::rfc::vcard::Birthday;

/// `PRODID` of every generated feed.
pub const PRODUCT_ID: &str = "-//CardDAV Birthdays//EN";

const CRLF: &str = "\r\n";

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push_str(CRLF);
}

/// Serializes birthdays into a complete `VCALENDAR` document.
///
/// Emits one `VEVENT` per birthday, in input order. An empty slice yields a
/// calendar with no events. `_today` is the reference date of the request and
/// does not affect the output.
#[must_use]
pub fn serialize_birthdays(birthdays: &[Birthday], _today: NaiveDate) -> String {
    let mut out = String::new();

    push_line(&mut out, "BEGIN:VCALENDAR");
    push_line(&mut out, "VERSION:2.0");
    push_line(&mut out, &format!("PRODID:{PRODUCT_ID}"));
    push_line(&mut out, "CALSCALE:GREGORIAN");

    for birthday in birthdays {
        out.push_str(&serialize_birthday_event(birthday));
    }

    push_line(&mut out, "END:VCALENDAR");

    out
}

/// Serializes a single birthday as a yearly-recurring all-day `VEVENT`.
///
/// The event `UID` is the display name with spaces removed followed by
/// `-birthday-{year}`; two contacts sharing both produce the same `UID`.
#[must_use]
pub fn serialize_birthday_event(birthday: &Birthday) -> String {
    let name = birthday.display_name();
    let date = birthday.date();
    let mut out = String::new();

    push_line(&mut out, "BEGIN:VEVENT");
    push_line(
        &mut out,
        &format!("UID:{}-birthday-{}", name.replace(' ', ""), date.year()),
    );
    push_line(
        &mut out,
        &format!("DTSTART;VALUE=DATE:{}", date.format("%Y%m%d")),
    );
    push_line(&mut out, "RRULE:FREQ=YEARLY");
    push_line(&mut out, &format!("SUMMARY:{name}'s Birthday"));
    push_line(
        &mut out,
        &format!("DESCRIPTION:{name} born on {}", date.format("%Y-%m-%d")),
    );
    push_line(&mut out, "TRANSP:TRANSPARENT");
    push_line(&mut out, "END:VEVENT");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn birthday(name: &str, date: NaiveDate) -> Birthday {
        Birthday::new("", name, date).unwrap()
    }

    fn today() -> NaiveDate {
        ymd(2026, 10, 19)
    }

    fn lines(document: &str) -> Vec<&str> {
        document
            .strip_suffix(CRLF)
            .unwrap_or(document)
            .split(CRLF)
            .collect()
    }

    #[test]
    fn empty_feed_has_only_header_and_footer() {
        let document = serialize_birthdays(&[], today());

        assert_eq!(
            document,
            "BEGIN:VCALENDAR\r\n\
             VERSION:2.0\r\n\
             PRODID:-//CardDAV Birthdays//EN\r\n\
             CALSCALE:GREGORIAN\r\n\
             END:VCALENDAR\r\n"
        );
    }

    #[test]
    fn single_event_layout() {
        let document = serialize_birthdays(&[birthday("Jane Doe", ymd(2003, 6, 15))], today());

        assert_eq!(
            lines(&document),
            vec![
                "BEGIN:VCALENDAR",
                "VERSION:2.0",
                "PRODID:-//CardDAV Birthdays//EN",
                "CALSCALE:GREGORIAN",
                "BEGIN:VEVENT",
                "UID:JaneDoe-birthday-2003",
                "DTSTART;VALUE=DATE:20030615",
                "RRULE:FREQ=YEARLY",
                "SUMMARY:Jane Doe's Birthday",
                "DESCRIPTION:Jane Doe born on 2003-06-15",
                "TRANSP:TRANSPARENT",
                "END:VEVENT",
                "END:VCALENDAR",
            ]
        );
    }

    #[test]
    fn events_keep_input_order() {
        let input = [
            birthday("Charlie", ymd(1990, 1, 1)),
            birthday("Alice", ymd(1985, 12, 31)),
            birthday("Bob", ymd(2000, 2, 29)),
        ];
        let document = serialize_birthdays(&input, today());

        let summaries: Vec<&str> = lines(&document)
            .into_iter()
            .filter(|line| line.starts_with("SUMMARY:"))
            .collect();
        assert_eq!(
            summaries,
            vec![
                "SUMMARY:Charlie's Birthday",
                "SUMMARY:Alice's Birthday",
                "SUMMARY:Bob's Birthday",
            ]
        );
    }

    #[test]
    fn every_line_ends_with_crlf() {
        let input = [
            birthday("Jane Doe", ymd(2003, 6, 15)),
            birthday("John Roe", ymd(1970, 1, 1)),
        ];
        let document = serialize_birthdays(&input, today());

        assert!(document.ends_with(CRLF));
        for (i, byte) in document.bytes().enumerate() {
            if byte == b'\n' {
                assert_eq!(document.as_bytes()[i - 1], b'\r', "bare LF at byte {i}");
            }
        }
    }

    #[test]
    fn reference_date_does_not_change_output() {
        let input = [birthday("Jane Doe", ymd(2003, 6, 15))];

        assert_eq!(
            serialize_birthdays(&input, ymd(2020, 1, 1)),
            serialize_birthdays(&input, ymd(2030, 12, 31))
        );
    }

    #[test]
    fn duplicate_names_and_years_share_uid() {
        let input = [
            birthday("Jane Doe", ymd(2003, 6, 15)),
            birthday("JaneDoe", ymd(2003, 9, 1)),
        ];
        let document = serialize_birthdays(&input, today());

        assert_eq!(document.matches("UID:JaneDoe-birthday-2003\r\n").count(), 2);
    }

    #[test]
    fn leap_day_and_early_years() {
        let event = serialize_birthday_event(&birthday("Leap", ymd(1904, 2, 29)));

        assert!(event.contains("UID:Leap-birthday-1904\r\n"));
        assert!(event.contains("DTSTART;VALUE=DATE:19040229\r\n"));
        assert!(event.contains("DESCRIPTION:Leap born on 1904-02-29\r\n"));
    }

    #[test]
    fn special_characters_are_not_escaped() {
        // Known limitation: names are emitted verbatim, so format-significant
        // characters pass straight through into the document.
        let event = serialize_birthday_event(&birthday("Doe;Jane,\\x", ymd(2003, 6, 15)));

        assert!(event.contains("SUMMARY:Doe;Jane,\\x's Birthday\r\n"));
        assert!(event.contains("UID:Doe;Jane,\\x-birthday-2003\r\n"));
    }

    #[test]
    fn embedded_newline_breaks_line_structure() {
        // Known limitation: a newline in a name produces a bare LF.
        let event = serialize_birthday_event(&birthday("Jane\nDoe", ymd(2003, 6, 15)));

        assert!(event.contains("SUMMARY:Jane\nDoe's Birthday\r\n"));
    }

    #[test]
    fn long_lines_are_not_folded() {
        let name = "X".repeat(100);
        let event = serialize_birthday_event(&birthday(&name, ymd(2003, 6, 15)));

        assert!(event.contains(&format!("SUMMARY:{name}'s Birthday\r\n")));
    }
}
