use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::types::Message;
use models::MenuItem;
use serde_json::Value;
use tracing::info;

use crate::{errors::JsonApiError, routes::ServerState};

pub const DELETED_MESSAGE: &str = "Menu item deleted successfully";

type JsonBody = Result<Json<Value>, JsonRejection>;

/// Path ids are whole base-10 integers. Anything else can never match a
/// stored item and is answered like an unknown id.
fn parse_id(raw: &str) -> Result<u64, JsonApiError> {
    raw.parse::<u64>().map_err(|_| JsonApiError::not_found())
}

#[utoipa::path(
    get, path = "/api/menu", tag = "menu",
    responses((status = 200, description = "All menu items in insertion order", body = [crate::openapi::MenuItemDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<MenuItem>>, JsonApiError> {
    let items = state.menu.list().await?;
    info!(count = items.len(), "list menu items");
    Ok(Json(items))
}

#[utoipa::path(
    get, path = "/api/menu/{id}", tag = "menu",
    params(("id" = u64, Path, description = "Menu item id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::MenuItemDoc),
        (status = 404, description = "Not Found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<MenuItem>, JsonApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.menu.get(id).await?))
}

#[utoipa::path(
    post, path = "/api/menu", tag = "menu",
    request_body = crate::openapi::MenuItemInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::MenuItemDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorsDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: JsonBody,
) -> Result<(StatusCode, Json<MenuItem>), JsonApiError> {
    let Json(body) = body.map_err(JsonApiError::malformed_body)?;
    let item = state.menu.create(&body).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put, path = "/api/menu/{id}", tag = "menu",
    params(("id" = u64, Path, description = "Menu item id")),
    request_body = crate::openapi::MenuItemInputDoc,
    responses(
        (status = 200, description = "Replaced", body = crate::openapi::MenuItemDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorsDoc),
        (status = 404, description = "Not Found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: JsonBody,
) -> Result<Json<MenuItem>, JsonApiError> {
    let Json(body) = body.map_err(JsonApiError::malformed_body)?;
    // 非数字 id 也要先校验请求体；id 从 1 开始，0 不会命中任何记录
    let id = id.parse::<u64>().unwrap_or(0);
    Ok(Json(state.menu.replace(id, &body).await?))
}

#[utoipa::path(
    delete, path = "/api/menu/{id}", tag = "menu",
    params(("id" = u64, Path, description = "Menu item id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, JsonApiError> {
    let id = parse_id(&id)?;
    state.menu.delete(id).await?;
    Ok(Json(Message::new(DELETED_MESSAGE)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_only_whole_integers() {
        assert_eq!(parse_id("7").unwrap(), 7);
        for raw in ["abc", "3abc", "-1", "1.5", ""] {
            let err = parse_id(raw).unwrap_err();
            assert_eq!(err.status(), StatusCode::NOT_FOUND, "{raw}");
        }
    }
}
