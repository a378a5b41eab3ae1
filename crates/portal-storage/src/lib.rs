//! Repository backends for the `links` table.

pub mod error;
pub mod memory;
pub mod mysql;

pub use memory::InMemoryRepository;
pub use mysql::MySqlRepository;
pub use portal_core::{ReadRepository, Repository, StorageError};
