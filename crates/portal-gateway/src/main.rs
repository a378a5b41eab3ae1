mod cli;

use std::sync::Arc;

use crate::cli::{StorageBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use portal_core::{Registry, Repository, ReservedNames};
use portal_gateway::{telemetry, App, AppState};
use portal_registry::{RegistryConfig, RegistryService};
use portal_storage::{InMemoryRepository, MySqlRepository};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    telemetry::init(config.log_format)?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        "starting gateway server"
    );

    let registry_config = RegistryConfig {
        reserved: ReservedNames::default().with_extra(&config.reserved_names),
        storage_timeout: config.storage_timeout(),
    };

    let registry = match config.storage {
        StorageBackendArg::InMemory => {
            shared_registry(InMemoryRepository::new(), registry_config)
        }
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .as_deref()
                .context("mysql dsn is required when storage backend is mysql")?;
            let repository = MySqlRepository::connect_with(
                mysql_dsn,
                config.mysql_max_connections,
                config.acquire_timeout(),
            )
            .await
            .context("failed to connect to mysql")?;
            shared_registry(repository, registry_config)
        }
    };

    let app = App::router(AppState::new(registry, config.route_config()));

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}

fn shared_registry<R: Repository>(repository: R, config: RegistryConfig) -> Arc<dyn Registry> {
    Arc::new(RegistryService::new(repository, config))
}
