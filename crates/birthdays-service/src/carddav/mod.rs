//! Contact retrieval from remote `CardDAV` servers.

mod client;

pub use client::CardDavClient;

use crate::addressbook::AddressBook;
use crate::error::ServiceResult;

/// Source of raw vCard records for an address book.
pub trait CardSource {
    /// ## Summary
    /// Fetches the raw text of every card in `book`, in server order.
    ///
    /// ## Errors
    /// Returns an error if the cards cannot be retrieved.
    fn fetch_cards(
        &self,
        book: &AddressBook,
    ) -> impl Future<Output = ServiceResult<Vec<String>>> + Send;
}
