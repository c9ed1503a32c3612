//! HTTP front end serving `CardDAV` birthdays as iCalendar feeds.

pub mod app;
pub mod error;
pub mod middleware;
pub mod state;
