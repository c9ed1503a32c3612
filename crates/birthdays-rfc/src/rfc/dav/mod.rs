//! `CardDAV` (RFC 6352) request and response XML.
//!
//! - [`build`] - The `addressbook-query` REPORT body
//! - [`parse`] - `address-data` extraction from a multistatus response

pub mod build;
pub mod parse;

pub use build::addressbook_query_body;
pub use parse::parse_address_data;

/// `WebDAV` namespace.
pub const DAV_NAMESPACE: &str = "DAV:";
/// `CardDAV` namespace.
pub const CARDDAV_NAMESPACE: &str = "urn:ietf:params:xml:ns:carddav";
