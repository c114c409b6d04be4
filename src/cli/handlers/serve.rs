//! Web server command handler.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::cli::ServeArgs;
use crate::cli::config::Config;
use crate::store::{SqliteStore, get_schema_version};
use crate::web;

/// Opens the store, builds the router, and serves it until interrupted.
pub fn handle_serve(args: &ServeArgs, db_path: &Path, config: &Config) -> Result<()> {
    let store = SqliteStore::open(db_path)
        .with_context(|| format!("failed to open database: {}", db_path.display()))?;
    let version =
        get_schema_version(store.conn()).context("failed to read schema version")?;
    info!(db = %db_path.display(), schema = version, "store opened");

    let app = web::app(store).context("failed to build templates")?;
    let addr = config.bind_addr(args.bind.as_deref());

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;
        info!(addr = %addr, "listening");
        axum::serve(listener, app).await.context("server error")
    })
}
