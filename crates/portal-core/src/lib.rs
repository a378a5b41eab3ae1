//! Core types and traits for the Portal redirect registry.
//!
//! This crate provides the shared vocabulary used by the storage backends,
//! the registry service, the resolver and the HTTP gateway.

pub mod code;
pub mod error;
pub mod link;
pub mod registry;
pub mod repository;
pub mod reserved;

pub use code::Code;
pub use error::{ErrorKind, RegistryError, StorageError, ValidationError};
pub use link::LinkEntry;
pub use registry::Registry;
pub use repository::{ReadRepository, Repository};
pub use reserved::ReservedNames;
