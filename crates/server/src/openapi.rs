use axum::Json;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MenuItemDoc {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// appetizer | entree | dessert | beverage
    #[schema(example = "entree")]
    pub category: String,
    pub ingredients: Vec<String>,
    pub available: Option<bool>,
}

#[derive(ToSchema)]
pub struct MenuItemInputDoc {
    /// at least 3 characters
    pub name: String,
    /// at least 10 characters
    pub description: String,
    /// greater than 0
    pub price: f64,
    #[schema(example = "appetizer")]
    pub category: String,
    /// at least one entry
    pub ingredients: Vec<String>,
    /// defaults to true on create
    pub available: Option<bool>,
}

#[derive(ToSchema)]
pub struct ViolationDoc {
    pub field: String,
    #[schema(example = "too_short")]
    pub rule: String,
    pub msg: String,
    #[schema(example = "body")]
    pub location: String,
}

#[derive(ToSchema)]
pub struct ErrorsDoc { pub errors: Vec<ViolationDoc> }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::menu::list,
        crate::routes::menu::get,
        crate::routes::menu::create,
        crate::routes::menu::update,
        crate::routes::menu::delete,
    ),
    components(
        schemas(
            HealthResponse,
            MenuItemDoc,
            MenuItemInputDoc,
            ViolationDoc,
            ErrorsDoc,
            MessageDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "menu")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_menu_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/health", "/api/menu", "/api/menu/{id}"] {
            assert!(doc.paths.paths.contains_key(path), "{path}");
        }
    }
}
