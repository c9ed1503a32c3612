//! iCalendar serialization (RFC 5545).
//!
//! - Serializer: birthday feed documents with CRLF line endings

mod serializer;

pub use serializer::{PRODUCT_ID, serialize_birthday_event, serialize_birthdays};
