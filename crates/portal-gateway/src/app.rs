use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    api_not_found_handler, create_link_handler, delete_link_handler, health_handler,
    list_links_handler, redirect_handler, update_link_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the full route table.
    ///
    /// `/api/*` is answered with JSON and allows any origin. Paths outside
    /// `/api` fall through to the resolver.
    pub fn router(state: AppState) -> Router {
        let api = Router::new()
            .route("/create", post(create_link_handler))
            .route("/update", post(update_link_handler))
            .route("/delete", post(delete_link_handler))
            .route("/list", get(list_links_handler))
            .route("/health", get(health_handler))
            .fallback(api_not_found_handler)
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );

        let mut router = Router::new().nest("/api", api);

        if let Some(dir) = &state.routes().assets_dir {
            router = router
                .route_service("/ui.html", ServeFile::new(dir.join("ui.html")))
                .route_service("/error.html", ServeFile::new(dir.join("error.html")));
        }

        router
            .fallback(redirect_handler)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
