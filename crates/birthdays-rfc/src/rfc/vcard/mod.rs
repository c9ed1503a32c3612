//! vCard birthday extraction.
//!
//! `CardDAV` servers hand back one vCard per contact. Only a handful of
//! properties matter for a birthday feed (`FN`, `N`, `UID` and `BDAY`), so
//! records are scanned line by line rather than parsed into a full object
//! model.
//!
//! ## Usage
//!
//! ```rust
//! use birthdays_rfc::rfc::vcard::extract_birthday;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:Jane Doe\r\n\
//! BDAY:2003-06-15\r\n\
//! END:VCARD\r\n";
//!
//! let birthday = extract_birthday(input).unwrap();
//! assert_eq!(birthday.display_name(), "Jane Doe");
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - The extracted `Birthday` value
//! - [`parse`] - Record scanning and `BDAY` date parsing

pub mod core;
pub mod parse;

pub use core::Birthday;
pub use parse::{DateFormat, extract_birthday, parse_birthday_date};
