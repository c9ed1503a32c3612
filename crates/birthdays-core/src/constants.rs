/// Route component constants shared across crates
pub const APP_ROUTE_COMPONENT: &str = "app";
pub const HEALTHCHECK_ROUTE_COMPONENT: &str = "healthcheck";
pub const HEALTHCHECK_ROUTE_PATH: &str =
    const_str::concat!("/", APP_ROUTE_COMPONENT, "/", HEALTHCHECK_ROUTE_COMPONENT);

/// Path parameter naming the requested address book.
pub const ADDRESS_BOOK_PARAM: &str = "address_book";
pub const ADDRESS_BOOK_ROUTE: &str = const_str::concat!("{", ADDRESS_BOOK_PARAM, "}");

/// Query (or form) field carrying the caller's API key.
pub const API_KEY_PARAM: &str = "apiKey";

pub const CALENDAR_CONTENT_TYPE: &str = "text/calendar; charset=utf-8";
pub const CALENDAR_FILENAME_SUFFIX: &str = "-birthdays.ics";
