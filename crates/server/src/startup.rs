use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, CatalogConfig, ServerConfig};
use models::seed::seed_menu;
use service::menu::{InMemoryMenuRepository, MenuService};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Build handler state with the catalog seeded according to config.
pub fn build_state(cfg: &CatalogConfig) -> ServerState {
    let items = if cfg.seed { seed_menu() } else { Vec::new() };
    let repo = InMemoryMenuRepository::with_items(items, cfg.id_strategy);
    ServerState::new(MenuService::new(std::sync::Arc::new(repo)))
}

pub fn build_app(cfg: &AppConfig) -> Router {
    routes::build_router(build_state(&cfg.catalog), build_cors())
}

fn load_bind_addr(cfg: &ServerConfig) -> Result<SocketAddr, StartupError> {
    cfg.bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("{}: {e}", cfg.bind_addr())))
}

/// Public entry: build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg);
    info!(
        seed = cfg.catalog.seed,
        id_strategy = ?cfg.catalog.id_strategy,
        "menu catalog ready"
    );

    let addr = load_bind_addr(&cfg.server)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
