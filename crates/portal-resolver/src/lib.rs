//! Turns inbound request paths into redirect directives.
//!
//! [`ResolverService`] is a thin consumer of the read path of a
//! [`portal_core::Registry`]:
//!
//! ```rust,no_run
//! use portal_registry::{RegistryConfig, RegistryService};
//! use portal_resolver::{Resolution, ResolverService};
//! use portal_storage::InMemoryRepository;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = RegistryService::new(InMemoryRepository::new(), RegistryConfig::default());
//! let resolver = ResolverService::new(Arc::new(registry));
//!
//! if let Resolution::Redirect(target) = resolver.resolve("/abc123").await? {
//!     println!("Redirect to: {}", target.url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod resolver;
pub mod service;

pub use resolver::{MissReason, RedirectStatus, RedirectTarget, Resolution, Resolver};
pub use service::ResolverService;
