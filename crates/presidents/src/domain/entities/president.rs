//! President - Stored record of a head of state
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// President - the persisted record
///
/// `id` is assigned by the repository on first save and never changes
/// afterwards. Descriptive fields are optional because a full update may
/// clear them; `term_to` is absent for an ongoing term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct President {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub political_party: Option<String>,
    pub term_from: Option<NaiveDate>,
    pub term_to: Option<NaiveDate>,
}

impl President {
    /// Create an unsaved President (no id yet)
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        political_party: impl Into<String>,
        term_from: NaiveDate,
        term_to: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            surname: Some(surname.into()),
            political_party: Some(political_party.into()),
            term_from: Some(term_from),
            term_to,
        }
    }

    /// Same record with the given identity
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// "Name Surname", skipping whichever part is missing
    pub fn full_name(&self) -> String {
        [self.name.as_deref(), self.surname.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
