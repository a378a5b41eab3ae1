use async_trait::async_trait;
use portal_core::error::Result;

/// HTTP status used for a successful resolution. Always temporary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectStatus {
    Temporary,
}

impl RedirectStatus {
    pub fn as_u16(self) -> u16 {
        match self {
            RedirectStatus::Temporary => 302,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    /// The stored URL, exactly as registered.
    pub url: String,
    pub status: RedirectStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissReason {
    /// Nothing followed the leading separator.
    EmptyPath,
    /// The candidate code is not registered.
    CodeNotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Redirect(RedirectTarget),
    Miss(MissReason),
}

#[async_trait]
pub trait Resolver: Send + Sync + 'static {
    /// Resolves a raw request path such as `/abc123`.
    ///
    /// Storage failures are returned as errors, never as a miss.
    async fn resolve(&self, path: &str) -> Result<Resolution>;
}
