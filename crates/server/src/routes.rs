use std::sync::Arc;

use axum::{
    middleware,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::Health;
use service::menu::{InMemoryMenuRepository, MenuService};

use crate::{openapi, request_log};

pub mod menu;

pub type MenuCatalog = MenuService<InMemoryMenuRepository>;

/// Shared handler state. The catalog is owned here and handed to every
/// handler through axum's `State`.
#[derive(Clone)]
pub struct ServerState {
    pub menu: Arc<MenuCatalog>,
}

impl ServerState {
    pub fn new(menu: MenuCatalog) -> Self {
        Self { menu: Arc::new(menu) }
    }
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let menu_routes = Router::new()
        .route("/api/menu", get(menu::list).post(menu::create))
        .route(
            "/api/menu/:id",
            get(menu::get).put(menu::update).delete(menu::delete),
        );

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .merge(menu_routes)
        .with_state(state)
        .layer(middleware::from_fn(request_log::log_request))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 请求到达时打点
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
