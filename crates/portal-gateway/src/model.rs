pub mod link;

pub use link::{DeleteResponse, HealthResponse, LinkForm};
