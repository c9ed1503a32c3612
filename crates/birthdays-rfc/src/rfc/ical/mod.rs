//! iCalendar output (RFC 5545).
//!
//! Only serialization is needed: birthdays are published as a feed of
//! yearly-recurring all-day events.

pub mod build;

pub use build::serialize_birthdays;
