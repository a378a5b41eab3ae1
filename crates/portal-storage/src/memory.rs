use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use portal_core::repository::{ReadRepository, Repository, Result};
use portal_core::{Code, LinkEntry, StorageError};

/// In-memory implementation of the repository contract using DashMap.
///
/// DashMap uses sharded locks, so requests touching different codes do not
/// block each other. Inserts go through the entry API, which makes the
/// uniqueness check and the write a single atomic step per shard.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    storage: DashMap<String, String>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, code: &Code) -> Result<Option<LinkEntry>> {
        Ok(self
            .storage
            .get(code.as_str())
            .map(|url| LinkEntry::new(code.clone(), url.value().clone())))
    }

    async fn exists(&self, code: &Code) -> Result<bool> {
        Ok(self.storage.contains_key(code.as_str()))
    }

    async fn list(&self) -> Result<Vec<LinkEntry>> {
        let mut entries: Vec<LinkEntry> = self
            .storage
            .iter()
            .map(|item| {
                LinkEntry::new(Code::new_unchecked(item.key().clone()), item.value().clone())
            })
            .collect();
        entries.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(entries)
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, entry: LinkEntry) -> Result<()> {
        match self.storage.entry(entry.code.into_string()) {
            Entry::Occupied(occupied) => Err(StorageError::Conflict(occupied.key().clone())),
            Entry::Vacant(vacant) => {
                vacant.insert(entry.url);
                Ok(())
            }
        }
    }

    async fn update(&self, code: &Code, url: &str) -> Result<bool> {
        let Some(mut current) = self.storage.get_mut(code.as_str()) else {
            return Ok(false);
        };
        *current = url.to_string();
        Ok(true)
    }

    async fn delete(&self, code: &Code) -> Result<bool> {
        Ok(self.storage.remove(code.as_str()).is_some())
    }
}
