//! Core vCard-derived types.

mod birthday;

pub use birthday::Birthday;
