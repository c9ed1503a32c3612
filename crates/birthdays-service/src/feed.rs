//! Birthday feed generation: fetch cards, extract birthdays, serialize.

use chrono::{Local, NaiveDate};

use birthdays_rfc::rfc::ical::serialize_birthdays;
use birthdays_rfc::rfc::vcard::{Birthday, extract_birthday};

use crate::addressbook::AddressBook;
use crate::carddav::{CardDavClient, CardSource};
use crate::error::ServiceResult;

/// Extracts birthdays from raw vCard records, keeping input order and
/// skipping records without a usable name and date.
#[must_use]
pub fn collect_birthdays<I, S>(cards: I) -> Vec<Birthday>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    cards
        .into_iter()
        .filter_map(|card| extract_birthday(card.as_ref()))
        .collect()
}

/// Renders raw vCard records into an iCalendar birthday feed.
#[must_use]
pub fn render_feed(cards: &[String], today: NaiveDate) -> String {
    let birthdays = collect_birthdays(cards);

    tracing::info!(
        cards = cards.len(),
        birthdays = birthdays.len(),
        "Extracted birthdays"
    );

    serialize_birthdays(&birthdays, today)
}

/// Produces birthday feeds for address books.
#[derive(Debug, Clone, Default)]
pub struct BirthdayFeed<S = CardDavClient> {
    source: S,
}

impl<S: CardSource + Sync> BirthdayFeed<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// ## Summary
    /// Fetches every card in `book` and returns the birthday feed as
    /// iCalendar text. Each call performs a full fetch.
    ///
    /// ## Errors
    /// Returns an error if the cards cannot be fetched.
    #[tracing::instrument(skip(self, book), fields(address_book = %book.name))]
    pub async fn generate(&self, book: &AddressBook) -> ServiceResult<String> {
        let cards = self.source.fetch_cards(book).await?;

        Ok(render_feed(&cards, Local::now().date_naive()))
    }
}
