//! DAV XML request builders.

mod addressbook_query;

pub use addressbook_query::{BIRTHDAY_CARD_PROPERTIES, addressbook_query_body};
