//! Address book registry.
//!
//! Maps the logical name a caller requests to the `CardDAV` collection URL
//! and credentials used to fetch it. The registry is read once at startup
//! from a JSON array:
//!
//! ```json
//! [
//!   { "name": "family", "url": "https://dav.example.com/addressbooks/me/family/",
//!     "username": "me", "password": "secret" }
//! ]
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::ServiceResult;

/// A remote `CardDAV` address book and the credentials to read it.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct AddressBook {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "URL", alias = "Url")]
    pub url: String,
    #[serde(alias = "Username")]
    pub username: String,
    #[serde(alias = "Password")]
    pub password: String,
}

impl std::fmt::Debug for AddressBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressBook")
            .field("name", &self.name)
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Address books indexed by name.
#[derive(Debug, Clone, Default)]
pub struct AddressBooks {
    books: HashMap<String, AddressBook>,
}

impl AddressBooks {
    /// Indexes `books` by name. A later book replaces an earlier one with the
    /// same name.
    #[must_use]
    pub fn from_books(books: impl IntoIterator<Item = AddressBook>) -> Self {
        let books = books
            .into_iter()
            .map(|book| (book.name.clone(), book))
            .collect();
        Self { books }
    }

    /// ## Summary
    /// Parses a JSON array of address books.
    ///
    /// ## Errors
    /// Returns an error if the JSON is malformed or does not describe a list
    /// of address books.
    pub fn parse(json: &str) -> ServiceResult<Self> {
        let books: Vec<AddressBook> = serde_json::from_str(json)?;
        Ok(Self::from_books(books))
    }

    /// ## Summary
    /// Reads and parses the address book file at `path`.
    ///
    /// ## Errors
    /// Returns an error if the file cannot be read or parsed.
    #[tracing::instrument]
    pub async fn load(path: &Path) -> ServiceResult<Self> {
        let json = tokio::fs::read_to_string(path).await?;
        let books = Self::parse(&json)?;

        tracing::info!(count = books.len(), "Address books loaded");

        Ok(books)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AddressBook> {
        self.books.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
