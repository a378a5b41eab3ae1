use crate::error::Result;
use crate::link::LinkEntry;
use async_trait::async_trait;

/// The code to URL registry.
///
/// Write operations take raw strings as decoded by the transport and
/// validate them here, before any storage round trip.
#[async_trait]
pub trait Registry: Send + Sync + 'static {
    /// Registers a new code. Fails with `Conflict` if the code is taken.
    async fn create(&self, code: &str, url: &str) -> Result<LinkEntry>;

    /// Points an existing code at a new URL. Fails with `NotFound` if absent.
    async fn update(&self, code: &str, url: &str) -> Result<LinkEntry>;

    /// Removes a code. Removing an absent code succeeds.
    async fn delete(&self, code: &str) -> Result<()>;

    /// Looks up a code. Any string is a legal key.
    async fn get(&self, code: &str) -> Result<LinkEntry>;

    /// Returns all entries ordered by code ascending.
    async fn list(&self) -> Result<Vec<LinkEntry>>;
}
