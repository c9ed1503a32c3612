//! Contact and calendar format handling for the birthday feed.
//!
//! - [`rfc::vcard`] extracts birthdays from vCard records
//! - [`rfc::ical`] serializes birthdays into an iCalendar feed
//! - [`rfc::dav`] builds the `CardDAV` query and reads its multistatus reply

pub mod error;
pub mod rfc;
