//! Birthday extracted from a contact record.

use chrono::NaiveDate;

/// A contact's birthday.
///
/// Always carries a non-empty display name and a full calendar date; records
/// missing either never produce a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    uid: String,
    display_name: String,
    date: NaiveDate,
}

impl Birthday {
    /// Creates a birthday, or `None` when the display name is empty.
    #[must_use]
    pub fn new(
        uid: impl Into<String>,
        display_name: impl Into<String>,
        date: NaiveDate,
    ) -> Option<Self> {
        let display_name = display_name.into();
        if display_name.is_empty() {
            return None;
        }

        Some(Self {
            uid: uid.into(),
            display_name,
            date,
        })
    }

    /// The contact's `UID`, possibly empty.
    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }
}
