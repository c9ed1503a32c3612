//! vCard birthday parsing.
//!
//! ## Features
//!
//! - Prefix matching on trimmed lines (`FN:`, `N:`, `UID:`, `BDAY`)
//! - Bare (`BDAY:`) and typed (`BDAY;VALUE=date:`) birthday forms
//! - Compact, hyphenated and slashed date encodings
//! - Time components (`T...`) are discarded

mod date;
mod extract;

pub use date::{DateFormat, parse_birthday_date};
pub use extract::extract_birthday;
