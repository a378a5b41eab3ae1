use std::sync::Arc;

use crate::resolver::{MissReason, RedirectStatus, RedirectTarget, Resolution, Resolver};
use async_trait::async_trait;
use portal_core::{Registry, RegistryError};
use tracing::{debug, trace};

/// Service for handling short code redirects.
///
/// Holds no state of its own; every call is a single read through the
/// registry.
pub struct ResolverService<G: ?Sized> {
    registry: Arc<G>,
}

impl<G: ?Sized> Clone for ResolverService<G> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<G: Registry + ?Sized> ResolverService<G> {
    /// Creates a new ResolverService reading through the given registry.
    pub fn new(registry: Arc<G>) -> Self {
        Self { registry }
    }

    /// Resolves a raw request path to a redirect or a documented miss.
    ///
    /// # Arguments
    ///
    /// * `path` - The request path, with or without its leading `/`
    ///
    /// # Returns
    ///
    /// * `Ok(Resolution::Redirect(_))` - The stored URL with a 302 status
    /// * `Ok(Resolution::Miss(_))` - The path was empty or the code is unknown
    /// * `Err(e)` - If the registry could not reach its storage
    pub async fn resolve(&self, path: &str) -> portal_core::error::Result<Resolution> {
        Resolver::resolve(self, path).await
    }
}

/// Strips a single leading separator. Anything else is left untouched.
fn candidate_code(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

#[async_trait]
impl<G: Registry + ?Sized> Resolver for ResolverService<G> {
    async fn resolve(&self, path: &str) -> portal_core::error::Result<Resolution> {
        let candidate = candidate_code(path);
        if candidate.is_empty() {
            trace!(path = %path, "empty path");
            return Ok(Resolution::Miss(MissReason::EmptyPath));
        }

        match self.registry.get(candidate).await {
            Ok(entry) => {
                debug!(code = %entry.code, url = %entry.url, "resolved short code");
                Ok(Resolution::Redirect(RedirectTarget {
                    url: entry.url,
                    status: RedirectStatus::Temporary,
                }))
            }
            Err(RegistryError::NotFound(_)) => {
                trace!(code = %candidate, "short code not found");
                Ok(Resolution::Miss(MissReason::CodeNotFound(
                    candidate.to_string(),
                )))
            }
            Err(other) => Err(other),
        }
    }
}
