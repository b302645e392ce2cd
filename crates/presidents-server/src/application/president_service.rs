//! President Application Service (Use Case)
//!
//! Orchestrates President lookups and mutations over a PresidentRepository
//! and maps results to the wire shape.

use std::sync::Arc;

use presidents::{DomainError, Page, PageRequest, President, PresidentRepository};

use crate::models::PresidentDto;

const ENTITY: &str = "President";

/// Application service for President operations
pub struct PresidentService<R: PresidentRepository> {
    repo: Arc<R>,
}

impl<R: PresidentRepository> PresidentService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get all Presidents in repository order
    pub async fn list_all(&self) -> Result<Vec<PresidentDto>, DomainError> {
        let presidents = self.repo.find_all().await?;
        Ok(presidents.into_iter().map(PresidentDto::from_domain).collect())
    }

    /// Get one page of Presidents
    pub async fn list_paginated(
        &self,
        page_number: i64,
        page_size: i64,
    ) -> Result<Page<PresidentDto>, DomainError> {
        let request = PageRequest::of(page_number, page_size)?;
        let page = self.repo.find_page(request).await?;
        Ok(page.map(PresidentDto::from_domain))
    }

    /// Find Presidents by exact name; no match is a NotFound error
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<PresidentDto>, DomainError> {
        let presidents = self.repo.find_by_name(name).await?;
        if presidents.is_empty() {
            tracing::debug!("No President named '{}'", name);
            return Err(DomainError::not_found_by(ENTITY, "name", name));
        }
        Ok(presidents.into_iter().map(PresidentDto::from_domain).collect())
    }

    /// Find Presidents by exact political party; no match is an empty result
    pub async fn find_by_party(&self, party: &str) -> Result<Vec<PresidentDto>, DomainError> {
        let presidents = self.repo.find_by_political_party(party).await?;
        Ok(presidents.into_iter().map(PresidentDto::from_domain).collect())
    }

    /// Persist a new President
    pub async fn create(&self, dto: PresidentDto) -> Result<PresidentDto, DomainError> {
        let saved = self.repo.save(&dto.into_domain()).await?;

        tracing::info!("Created President: {} ({:?})", saved.full_name(), saved.id);

        Ok(PresidentDto::from_domain(saved))
    }

    /// Overwrite every field of an existing President, or create it when the id is unknown.
    ///
    /// On the overwrite path the request itself is returned, not the stored
    /// record.
    pub async fn full_update(&self, dto: PresidentDto) -> Result<PresidentDto, DomainError> {
        let id = required_id(&dto)?;

        // Every field is replaced, so the stored record is never read first
        let overwritten = dto.clone().into_domain();
        if self.repo.update(&overwritten).await?.is_none() {
            tracing::debug!("President {} not found, creating instead", id);
            return self.create(dto).await;
        }

        tracing::info!("Updated President: {}", id);

        Ok(dto)
    }

    /// Copy the fields present in the request onto an existing President
    pub async fn partial_update(&self, dto: PresidentDto) -> Result<PresidentDto, DomainError> {
        let id = required_id(&dto)?;

        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))?;

        let merged = President {
            id: current.id,
            name: dto.name.or(current.name),
            surname: dto.surname.or(current.surname),
            political_party: dto.political_party.or(current.political_party),
            term_from: dto.term_from.or(current.term_from),
            term_to: dto.term_to.or(current.term_to),
        };

        // The row can disappear between the read and the write
        let saved = self
            .repo
            .update(&merged)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))?;

        tracing::info!("Patched President: {}", id);

        Ok(PresidentDto::from_domain(saved))
    }

    /// Delete a President; deleting an unknown id is not an error
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let deleted = self.repo.delete_by_id(id).await?;
        if deleted {
            tracing::info!("Deleted President: {}", id);
        }
        Ok(())
    }
}

fn required_id(dto: &PresidentDto) -> Result<i64, DomainError> {
    dto.id.ok_or_else(|| {
        DomainError::InvalidArgument("President id must be provided for an update".to_string())
    })
}
