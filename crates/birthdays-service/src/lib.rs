//! Address book registry, `CardDAV` fetching and feed generation.

pub mod addressbook;
pub mod carddav;
pub mod error;
pub mod feed;
