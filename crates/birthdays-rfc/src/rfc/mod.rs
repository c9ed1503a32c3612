pub mod dav;
pub mod ical;
pub mod vcard;
