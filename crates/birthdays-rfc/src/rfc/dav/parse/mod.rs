//! DAV XML response parsing using the `quick-xml` crate.

mod multistatus;

pub use multistatus::parse_address_data;
