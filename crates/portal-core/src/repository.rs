use crate::code::Code;
use crate::error::StorageError;
use crate::link::LinkEntry;
use async_trait::async_trait;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of the `links` table.
///
/// This trait provides only the read operations from [`Repository`],
/// allowing consumers that never write to hold a narrower handle.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the entry for a given short code.
    /// Returns `None` if the code does not exist.
    async fn get(&self, code: &Code) -> Result<Option<LinkEntry>>;

    /// Checks whether a short code already exists.
    async fn exists(&self, code: &Code) -> Result<bool>;

    /// Returns every entry ordered by code ascending.
    async fn list(&self) -> Result<Vec<LinkEntry>>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Inserts a new entry.
    ///
    /// Implementations must reject an existing code with
    /// `Err(StorageError::Conflict)` atomically, even when racing another
    /// insert for the same code.
    async fn insert(&self, entry: LinkEntry) -> Result<()>;

    /// Replaces the URL of an existing entry.
    /// Returns `false` if no entry with this code exists.
    async fn update(&self, code: &Code, url: &str) -> Result<bool>;

    /// Deletes the entry for a given short code.
    /// Returns `true` if the entry existed and was removed.
    async fn delete(&self, code: &Code) -> Result<bool>;
}
