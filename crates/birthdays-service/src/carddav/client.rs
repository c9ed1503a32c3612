//! `CardDAV` client issuing `addressbook-query` REPORTs.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};

use birthdays_core::error::CoreError;
use birthdays_rfc::rfc::dav::{addressbook_query_body, parse_address_data};

use super::CardSource;
use crate::addressbook::AddressBook;
use crate::error::{ServiceError, ServiceResult};

const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

/// HTTP client for `CardDAV` collections.
#[derive(Debug, Clone, Default)]
pub struct CardDavClient {
    client: reqwest::Client,
}

impl CardDavClient {
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl CardSource for CardDavClient {
    /// ## Summary
    /// Sends an `addressbook-query` REPORT (`Depth: 1`) to the address book
    /// URL using HTTP basic auth and returns the `address-data` of every
    /// `propstat` in the response.
    ///
    /// ## Errors
    /// Returns an error if the request fails, the server answers with
    /// anything but `207 Multi-Status`, or the response body is not a
    /// well-formed multistatus document.
    #[tracing::instrument(skip(self, book), fields(address_book = %book.name, url = %book.url))]
    async fn fetch_cards(&self, book: &AddressBook) -> ServiceResult<Vec<String>> {
        let method = Method::from_bytes(b"REPORT")
            .map_err(|_err| CoreError::InvariantViolation("REPORT is a valid HTTP method"))?;
        let body = addressbook_query_body()?;

        tracing::debug!("Sending addressbook-query REPORT");

        let response = self
            .client
            .request(method, &book.url)
            .basic_auth(&book.username, Some(&book.password))
            .header(CONTENT_TYPE, XML_CONTENT_TYPE)
            .header("Depth", "1")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::MULTI_STATUS {
            tracing::warn!(status = %status, "Unexpected status from CardDAV server");
            return Err(ServiceError::UnexpectedStatus {
                url: book.url.clone(),
                status,
            });
        }

        let bytes = response.bytes().await?;
        let cards = parse_address_data(&bytes)?;

        tracing::debug!(count = cards.len(), "Fetched cards");

        Ok(cards)
    }
}
