//! HTTP front for the Portal redirect registry.
//!
//! Routes `/api/*` to registry operations and every other path to the
//! resolver. See [`App::router`] for the route table.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
pub mod telemetry;

pub use app::App;
pub use error::AppError;
pub use state::{AppState, RouteConfig};
