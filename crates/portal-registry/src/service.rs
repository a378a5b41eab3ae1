use crate::config::RegistryConfig;
use async_trait::async_trait;
use portal_core::error::Result;
use portal_core::link::parse_url;
use portal_core::{
    Code, LinkEntry, Registry, RegistryError, Repository, StorageError, ValidationError,
};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// A concrete implementation of the [`Registry`] trait.
///
/// This service wraps a [`Repository`] and handles:
/// - Trimming and validating codes and URLs
/// - Rejecting reserved codes
/// - Translating storage outcomes into registry errors
///
/// Uniqueness is ultimately enforced by the repository. The existence check
/// in [`Registry::create`] only yields a `Conflict` before paying for a
/// failed insert.
#[derive(Debug)]
pub struct RegistryService<R> {
    repository: Arc<R>,
    config: RegistryConfig,
}

impl<R> Clone for RegistryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            config: self.config.clone(),
        }
    }
}

impl<R: Repository> RegistryService<R> {
    pub fn new(repository: R, config: RegistryConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            config,
        }
    }

    /// Checks field presence first, then the code itself.
    fn validate_new(
        &self,
        code: &str,
        url: &str,
    ) -> std::result::Result<(Code, String), ValidationError> {
        let code = required("code", code)?;
        let url = parse_url(url)?;
        Ok((Code::parse(code, &self.config.reserved)?, url))
    }

    /// Runs one storage round trip, bounded by the configured timeout.
    async fn storage<T, F>(&self, operation: &'static str, fut: F) -> Result<T>
    where
        F: Future<Output = std::result::Result<T, StorageError>> + Send,
    {
        let outcome = match self.config.storage_timeout {
            None => fut.await,
            Some(limit) => match tokio::time::timeout(limit, fut).await {
                Ok(outcome) => outcome,
                Err(_) => Err(StorageError::Timeout(format!(
                    "{operation} did not complete within {limit:?}"
                ))),
            },
        };
        outcome.map_err(RegistryError::from)
    }
}

fn required<'a>(
    field: &'static str,
    raw: &'a str,
) -> std::result::Result<&'a str, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(value)
}

#[async_trait]
impl<R: Repository> Registry for RegistryService<R> {
    async fn create(&self, code: &str, url: &str) -> Result<LinkEntry> {
        let (code, url) = self
            .validate_new(code, url)
            .inspect_err(|e| debug!(code = %code.trim(), error = %e, "rejected create"))?;

        if self
            .storage("exists", self.repository.exists(&code))
            .await?
        {
            warn!(code = %code, "short code already exists");
            return Err(RegistryError::Conflict(code.into_string()));
        }

        let entry = LinkEntry::new(code, url);
        self.storage("insert", self.repository.insert(entry.clone()))
            .await?;

        info!(code = %entry.code, url = %entry.url, "created link");
        Ok(entry)
    }

    async fn update(&self, code: &str, url: &str) -> Result<LinkEntry> {
        let code = Code::new_unchecked(required("code", code)?);
        let url = parse_url(url)?;

        if !self
            .storage("update", self.repository.update(&code, &url))
            .await?
        {
            debug!(code = %code, "update of unknown short code");
            return Err(RegistryError::NotFound(code.into_string()));
        }

        info!(code = %code, url = %url, "updated link");
        Ok(LinkEntry::new(code, url))
    }

    async fn delete(&self, code: &str) -> Result<()> {
        let code = Code::new_unchecked(required("code", code)?);

        let removed = self
            .storage("delete", self.repository.delete(&code))
            .await?;

        info!(code = %code, removed, "deleted link");
        Ok(())
    }

    async fn get(&self, code: &str) -> Result<LinkEntry> {
        trace!(code = %code, "looking up short code");
        let code = Code::new_unchecked(code);

        match self.storage("get", self.repository.get(&code)).await? {
            Some(entry) => Ok(entry),
            None => Err(RegistryError::NotFound(code.into_string())),
        }
    }

    async fn list(&self) -> Result<Vec<LinkEntry>> {
        let entries = self.storage("list", self.repository.list()).await?;
        debug!(count = entries.len(), "listed links");
        Ok(entries)
    }
}
