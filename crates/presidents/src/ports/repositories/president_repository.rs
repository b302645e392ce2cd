//! President Repository Port
//!
//! Abstract interface for President persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Page, PageRequest, President};

/// Repository interface for President entities
#[async_trait]
pub trait PresidentRepository: Send + Sync {
    /// Find all Presidents, ordered by id
    async fn find_all(&self) -> Result<Vec<President>, DomainError>;

    /// Find one page of Presidents, ordered by id
    async fn find_page(&self, request: PageRequest) -> Result<Page<President>, DomainError>;

    /// Find Presidents whose name matches exactly
    async fn find_by_name(&self, name: &str) -> Result<Vec<President>, DomainError>;

    /// Find Presidents whose political party matches exactly
    async fn find_by_political_party(&self, party: &str) -> Result<Vec<President>, DomainError>;

    /// Find a President by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<President>, DomainError>;

    /// Save a President: update when the id exists, otherwise insert with a new id
    async fn save(&self, president: &President) -> Result<President, DomainError>;

    /// Overwrite an existing President in one statement; `None` when the id is not stored
    async fn update(&self, president: &President) -> Result<Option<President>, DomainError>;

    /// Delete a President by ID, returning whether a row was removed
    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError>;
}
