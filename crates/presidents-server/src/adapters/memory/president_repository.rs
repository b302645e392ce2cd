//! In-memory implementation of PresidentRepository

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use presidents::{DomainError, Page, PageRequest, President, PresidentRepository};

#[derive(Default)]
struct Store {
    presidents: BTreeMap<i64, President>,
    last_id: i64,
}

impl Store {
    fn insert(&mut self, president: &President) -> President {
        self.last_id += 1;
        let stored = president.clone().with_id(self.last_id);
        self.presidents.insert(self.last_id, stored.clone());
        stored
    }
}

/// Process-local repository ordered by id, with sequential id assignment
#[derive(Default)]
pub struct InMemoryPresidentRepository {
    store: RwLock<Store>,
}

impl InMemoryPresidentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with the given Presidents; ids are reassigned in order
    pub fn with_presidents(presidents: impl IntoIterator<Item = President>) -> Self {
        let mut store = Store::default();
        for president in presidents {
            store.insert(&president);
        }
        Self {
            store: RwLock::new(store),
        }
    }

    fn matching<F>(store: &Store, predicate: F) -> Vec<President>
    where
        F: Fn(&President) -> bool,
    {
        store
            .presidents
            .values()
            .filter(|p| predicate(p))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl PresidentRepository for InMemoryPresidentRepository {
    async fn find_all(&self) -> Result<Vec<President>, DomainError> {
        let store = self.store.read().await;
        Ok(store.presidents.values().cloned().collect())
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<President>, DomainError> {
        let store = self.store.read().await;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let content = store
            .presidents
            .values()
            .skip(offset)
            .take(request.page_size() as usize)
            .cloned()
            .collect();

        Ok(Page::new(content, request, store.presidents.len() as u64))
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<President>, DomainError> {
        let store = self.store.read().await;
        Ok(Self::matching(&store, |p| p.name.as_deref() == Some(name)))
    }

    async fn find_by_political_party(&self, party: &str) -> Result<Vec<President>, DomainError> {
        let store = self.store.read().await;
        Ok(Self::matching(&store, |p| {
            p.political_party.as_deref() == Some(party)
        }))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<President>, DomainError> {
        let store = self.store.read().await;
        Ok(store.presidents.get(&id).cloned())
    }

    async fn save(&self, president: &President) -> Result<President, DomainError> {
        let mut store = self.store.write().await;
        match president.id {
            Some(id) if store.presidents.contains_key(&id) => {
                store.presidents.insert(id, president.clone());
                Ok(president.clone())
            }
            _ => Ok(store.insert(president)),
        }
    }

    async fn update(&self, president: &President) -> Result<Option<President>, DomainError> {
        let mut store = self.store.write().await;
        let Some(slot) = president.id.and_then(|id| store.presidents.get_mut(&id)) else {
            return Ok(None);
        };
        *slot = president.clone();
        Ok(Some(president.clone()))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let mut store = self.store.write().await;
        Ok(store.presidents.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn president(name: &str, surname: &str, party: &str, from: i32) -> President {
        President::new(
            name,
            surname,
            party,
            NaiveDate::from_ymd_opt(from, 3, 4).unwrap(),
            None,
        )
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = InMemoryPresidentRepository::new();

        let first = repo
            .save(&president("George", "Washington", "Independent", 1789))
            .await
            .unwrap();
        let second = repo
            .save(&president("John", "Adams", "Federalist", 1797))
            .await
            .unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[tokio::test]
    async fn test_save_with_unknown_id_inserts_with_new_id() {
        let repo = InMemoryPresidentRepository::with_presidents([president(
            "George",
            "Washington",
            "Independent",
            1789,
        )]);

        let saved = repo
            .save(&president("John", "Adams", "Federalist", 1797).with_id(99))
            .await
            .unwrap();

        assert_eq!(saved.id, Some(2));
        assert!(repo.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_with_existing_id_replaces() {
        let repo = InMemoryPresidentRepository::with_presidents([president(
            "John",
            "Adams",
            "Federalist",
            1797,
        )]);

        let mut changed = repo.find_by_id(1).await.unwrap().unwrap();
        changed.surname = Some("Quincy Adams".to_string());
        repo.save(&changed).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].surname.as_deref(), Some("Quincy Adams"));
    }

    #[tokio::test]
    async fn test_update_never_inserts() {
        let repo = InMemoryPresidentRepository::with_presidents([president(
            "John",
            "Adams",
            "Federalist",
            1797,
        )]);

        let mut changed = president("John", "Adams", "Whig", 1797).with_id(1);
        let updated = repo.update(&changed).await.unwrap();
        assert_eq!(updated.unwrap().political_party.as_deref(), Some("Whig"));

        changed.id = Some(7);
        assert!(repo.update(&changed).await.unwrap().is_none());
        changed.id = None;
        assert!(repo.update(&changed).await.unwrap().is_none());
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_page_slices_in_id_order() {
        let repo = InMemoryPresidentRepository::with_presidents([
            president("George", "Washington", "Independent", 1789),
            president("John", "Adams", "Federalist", 1797),
            president("Thomas", "Jefferson", "Democratic-Republican", 1801),
        ]);

        let page = repo
            .find_page(PageRequest::of(1, 2).unwrap())
            .await
            .unwrap();

        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].surname.as_deref(), Some("Jefferson"));
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.total_pages, 2);
    }

    #[tokio::test]
    async fn test_delete_reports_whether_removed() {
        let repo = InMemoryPresidentRepository::with_presidents([president(
            "John",
            "Adams",
            "Federalist",
            1797,
        )]);

        assert!(repo.delete_by_id(1).await.unwrap());
        assert!(!repo.delete_by_id(1).await.unwrap());
    }
}
