use std::path::PathBuf;
use std::sync::Arc;

use portal_core::Registry;
use portal_resolver::{Resolver, ResolverService};
use typed_builder::TypedBuilder;

pub const DEFAULT_UI_ENTRY: &str = "/ui.html";

/// Where the gateway sends clients that did not hit a registered code.
#[derive(Debug, Clone, TypedBuilder)]
pub struct RouteConfig {
    /// Redirect target for the empty path.
    #[builder(default = DEFAULT_UI_ENTRY.to_string(), setter(into))]
    pub ui_entry: String,
    /// When set, unknown codes redirect here with `?code=` instead of a 404.
    #[builder(default, setter(strip_option, into))]
    pub error_page: Option<String>,
    /// Directory serving `ui.html` and `error.html`.
    #[builder(default, setter(strip_option, into))]
    pub assets_dir: Option<PathBuf>,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Clone)]
pub struct AppState {
    registry: Arc<dyn Registry>,
    resolver: Arc<dyn Resolver>,
    routes: Arc<RouteConfig>,
}

impl AppState {
    pub fn new(registry: Arc<dyn Registry>, routes: RouteConfig) -> Self {
        let resolver: Arc<dyn Resolver> = Arc::new(ResolverService::new(Arc::clone(&registry)));
        Self {
            registry,
            resolver,
            routes: Arc::new(routes),
        }
    }

    pub fn registry(&self) -> &dyn Registry {
        self.registry.as_ref()
    }

    pub fn resolver(&self) -> &dyn Resolver {
        self.resolver.as_ref()
    }

    pub fn routes(&self) -> &RouteConfig {
        &self.routes
    }
}
