//! PostgreSQL implementation of PresidentRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use presidents::{DomainError, Page, PageRequest, President, PresidentRepository};

/// PostgreSQL implementation of PresidentRepository
pub struct PgPresidentRepository {
    pool: PgPool,
}

impl PgPresidentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct PresidentRow {
    id: i64,
    name: Option<String>,
    surname: Option<String>,
    political_party: Option<String>,
    term_from: Option<NaiveDate>,
    term_to: Option<NaiveDate>,
}

impl From<PresidentRow> for President {
    fn from(row: PresidentRow) -> Self {
        Self {
            id: Some(row.id),
            name: row.name,
            surname: row.surname,
            political_party: row.political_party,
            term_from: row.term_from,
            term_to: row.term_to,
        }
    }
}

#[async_trait]
impl PresidentRepository for PgPresidentRepository {
    async fn find_all(&self) -> Result<Vec<President>, DomainError> {
        let rows = sqlx::query_as::<_, PresidentRow>("SELECT * FROM presidents ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<President>, DomainError> {
        let offset = i64::try_from(request.offset()).map_err(|_| {
            DomainError::InvalidArgument(format!("Page offset {} is too large", request.offset()))
        })?;

        // Count and slice must see the same snapshot
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM presidents")
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        let rows = sqlx::query_as::<_, PresidentRow>(
            "SELECT * FROM presidents ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(i64::from(request.page_size()))
        .bind(offset)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(Page::new(
            rows.into_iter().map(Into::into).collect(),
            request,
            u64::try_from(total).unwrap_or_default(),
        ))
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<President>, DomainError> {
        let rows = sqlx::query_as::<_, PresidentRow>(
            "SELECT * FROM presidents WHERE name = $1 ORDER BY id",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_political_party(&self, party: &str) -> Result<Vec<President>, DomainError> {
        let rows = sqlx::query_as::<_, PresidentRow>(
            "SELECT * FROM presidents WHERE political_party = $1 ORDER BY id",
        )
        .bind(party)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<President>, DomainError> {
        let row = sqlx::query_as::<_, PresidentRow>("SELECT * FROM presidents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn save(&self, president: &President) -> Result<President, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        // An id that is not in the table is treated like no id at all
        let existing_id = match president.id {
            Some(id) => {
                let exists = sqlx::query_scalar::<_, bool>(
                    "SELECT EXISTS(SELECT 1 FROM presidents WHERE id = $1)",
                )
                .bind(id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| DomainError::Repository(e.to_string()))?;
                exists.then_some(id)
            }
            None => None,
        };

        let row = match existing_id {
            Some(id) => {
                sqlx::query_as::<_, PresidentRow>(
                    r#"
                    UPDATE presidents
                    SET name = $2, surname = $3, political_party = $4, term_from = $5, term_to = $6
                    WHERE id = $1
                    RETURNING *
                    "#,
                )
                .bind(id)
                .bind(&president.name)
                .bind(&president.surname)
                .bind(&president.political_party)
                .bind(president.term_from)
                .bind(president.term_to)
                .fetch_one(&mut *tx)
                .await
            }
            None => {
                sqlx::query_as::<_, PresidentRow>(
                    r#"
                    INSERT INTO presidents (name, surname, political_party, term_from, term_to)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING *
                    "#,
                )
                .bind(&president.name)
                .bind(&president.surname)
                .bind(&president.political_party)
                .bind(president.term_from)
                .bind(president.term_to)
                .fetch_one(&mut *tx)
                .await
            }
        }
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }

    async fn update(&self, president: &President) -> Result<Option<President>, DomainError> {
        let Some(id) = president.id else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, PresidentRow>(
            r#"
            UPDATE presidents
            SET name = $2, surname = $3, political_party = $4, term_from = $5, term_to = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&president.name)
        .bind(&president.surname)
        .bind(&president.political_party)
        .bind(president.term_from)
        .bind(president.term_to)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM presidents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
