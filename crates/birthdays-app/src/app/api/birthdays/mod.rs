mod feed;
#[cfg(test)]
mod feed_tests;

use salvo::Router;

use crate::middleware::api_key::ApiKeyMiddleware;
use birthdays_core::constants::ADDRESS_BOOK_ROUTE;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(ADDRESS_BOOK_ROUTE)
        .hoop(ApiKeyMiddleware)
        .get(feed::feed)
}
