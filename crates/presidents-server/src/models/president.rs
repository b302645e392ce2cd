//! President wire models and mapping to the domain entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use presidents::{Page, President};

/// President as exchanged with API callers
///
/// Every field is optional so the same shape carries create, full-update
/// and partial-update payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresidentDto {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub political_party: Option<String>,
    #[schema(example = "1797-03-04")]
    pub term_from: Option<NaiveDate>,
    #[schema(example = "1801-03-04")]
    pub term_to: Option<NaiveDate>,
}

impl PresidentDto {
    pub fn from_domain(president: President) -> Self {
        Self {
            id: president.id,
            name: president.name,
            surname: president.surname,
            political_party: president.political_party,
            term_from: president.term_from,
            term_to: president.term_to,
        }
    }

    pub fn into_domain(self) -> President {
        President {
            id: self.id,
            name: self.name,
            surname: self.surname,
            political_party: self.political_party,
            term_from: self.term_from,
            term_to: self.term_to,
        }
    }
}

// ============================================
// Request/Response DTOs
// ============================================

/// Query parameters for paginated listing
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Zero-based page index (default 0)
    pub page_number: Option<i64>,
    /// Page size (default from server configuration)
    pub page_size: Option<i64>,
}

impl PaginationQuery {
    /// Page number and size, filling in whichever was omitted
    pub fn resolve(&self, default_page_size: i64) -> (i64, i64) {
        (
            self.page_number.unwrap_or(0),
            self.page_size.unwrap_or(default_page_size),
        )
    }
}

/// One page of Presidents
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresidentPageResponse {
    pub content: Vec<PresidentDto>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl From<Page<PresidentDto>> for PresidentPageResponse {
    fn from(page: Page<PresidentDto>) -> Self {
        Self {
            content: page.content,
            page_number: page.page_number,
            page_size: page.page_size,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
        }
    }
}
