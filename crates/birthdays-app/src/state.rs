//! Shared request state: settings, the address book registry and the feed
//! generator, injected into the depot once per request.

use std::sync::Arc;

use salvo::async_trait;

use crate::error::AppResult;
use birthdays_core::config::Settings;
use birthdays_core::error::CoreError;
use birthdays_service::addressbook::AddressBooks;
use birthdays_service::feed::BirthdayFeed;

/// Hoop handler making the shared state available to downstream handlers.
pub struct AppStateHandler {
    settings: Arc<Settings>,
    books: Arc<AddressBooks>,
    feed: Arc<BirthdayFeed>,
}

impl AppStateHandler {
    #[must_use]
    pub fn new(settings: Settings, books: AddressBooks, feed: BirthdayFeed) -> Self {
        Self {
            settings: Arc::new(settings),
            books: Arc::new(books),
            feed: Arc::new(feed),
        }
    }
}

#[async_trait]
impl salvo::Handler for AppStateHandler {
    #[tracing::instrument(skip_all)]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.settings));
        depot.inject(Arc::clone(&self.books));
        depot.inject(Arc::clone(&self.feed));
    }
}

fn obtain<T: Send + Sync + 'static>(depot: &salvo::Depot, missing: &'static str) -> AppResult<Arc<T>> {
    depot
        .obtain::<Arc<T>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation(missing).into())
}

/// ## Summary
/// Retrieves the application settings from the depot.
///
/// ## Errors
/// Returns an error if the settings are not found in the depot.
pub fn get_settings_from_depot(depot: &salvo::Depot) -> AppResult<Arc<Settings>> {
    obtain(depot, "Settings not found in depot")
}

/// ## Errors
/// Returns an error if the registry is not found in the depot.
pub fn get_address_books_from_depot(depot: &salvo::Depot) -> AppResult<Arc<AddressBooks>> {
    obtain(depot, "Address books not found in depot")
}

/// ## Errors
/// Returns an error if the generator is not found in the depot.
pub fn get_feed_from_depot(depot: &salvo::Depot) -> AppResult<Arc<BirthdayFeed>> {
    obtain(depot, "Birthday feed not found in depot")
}
