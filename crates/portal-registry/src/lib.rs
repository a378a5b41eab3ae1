//! Registry service implementation.
//!
//! [`RegistryService`] enforces the naming rules for short codes and
//! mediates every read and write against a [`portal_core::Repository`].

pub mod config;
pub mod service;

pub use config::RegistryConfig;
pub use portal_core::{Registry, RegistryError};
pub use service::RegistryService;
