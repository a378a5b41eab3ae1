use clap::{Parser, ValueEnum};
use portal_gateway::telemetry::LogFormat;
use portal_gateway::RouteConfig;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const LISTEN_ADDR_ENV: &str = "PORTAL_GATEWAY_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "PORTAL_GATEWAY_STORAGE_BACKEND";
pub const MYSQL_DSN_ENV: &str = "PORTAL_GATEWAY_MYSQL_DSN";
pub const MYSQL_MAX_CONNECTIONS_ENV: &str = "PORTAL_GATEWAY_MYSQL_MAX_CONNECTIONS";
pub const STORAGE_TIMEOUT_MS_ENV: &str = "PORTAL_GATEWAY_STORAGE_TIMEOUT_MS";
pub const RESERVED_NAMES_ENV: &str = "PORTAL_GATEWAY_RESERVED_NAMES";
pub const UI_ENTRY_ENV: &str = "PORTAL_GATEWAY_UI_ENTRY";
pub const ERROR_PAGE_ENV: &str = "PORTAL_GATEWAY_ERROR_PAGE";
pub const ASSETS_DIR_ENV: &str = "PORTAL_GATEWAY_ASSETS_DIR";
pub const LOG_FORMAT_ENV: &str = "PORTAL_GATEWAY_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_MYSQL_MAX_CONNECTIONS: &str = "5";

/// Pool acquire timeout used when no storage timeout is configured.
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "mysql")]
    Mysql,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Mysql => write!(f, "mysql"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "portal-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = MYSQL_DSN_ENV, required_if_eq("storage", "mysql"))]
    pub mysql_dsn: Option<String>,

    #[arg(
        long,
        env = MYSQL_MAX_CONNECTIONS_ENV,
        default_value = DEFAULT_MYSQL_MAX_CONNECTIONS
    )]
    pub mysql_max_connections: u32,

    /// Upper bound for one storage round trip, in milliseconds.
    #[arg(long, env = STORAGE_TIMEOUT_MS_ENV)]
    pub storage_timeout_ms: Option<u64>,

    /// Extra codes to reserve on top of the built-in ones.
    #[arg(long = "reserved-name", env = RESERVED_NAMES_ENV, value_delimiter = ',')]
    pub reserved_names: Vec<String>,

    /// Where `/` redirects to.
    #[arg(long, env = UI_ENTRY_ENV, default_value = portal_gateway::state::DEFAULT_UI_ENTRY)]
    pub ui_entry: String,

    /// When set, unknown codes redirect to `<error-page>?code=<code>`.
    #[arg(long, env = ERROR_PAGE_ENV)]
    pub error_page: Option<String>,

    /// Directory holding `ui.html` and `error.html`.
    #[arg(long, env = ASSETS_DIR_ENV)]
    pub assets_dir: Option<PathBuf>,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl CLI {
    pub fn storage_timeout(&self) -> Option<Duration> {
        self.storage_timeout_ms.map(Duration::from_millis)
    }

    pub fn acquire_timeout(&self) -> Duration {
        self.storage_timeout().unwrap_or(DEFAULT_ACQUIRE_TIMEOUT)
    }

    pub fn route_config(&self) -> RouteConfig {
        RouteConfig {
            ui_entry: self.ui_entry.clone(),
            error_page: self.error_page.clone(),
            assets_dir: self.assets_dir.clone(),
        }
    }
}
