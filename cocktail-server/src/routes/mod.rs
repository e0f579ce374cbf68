mod health;
mod recipes;
mod response;

pub use health::health_routes;
pub use recipes::recipe_routes;
pub use response::ApiResponse;

use axum::{routing::get, Router};
use cocktail::catalog::RecipeCatalog;

pub const API_PREFIX: &str = "/api/v1";

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: RecipeCatalog,
}

impl AppState {
    pub fn new(catalog: RecipeCatalog) -> Self {
        Self { catalog }
    }
}

/// The versioned API, to be nested under [API_PREFIX].
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(api_root))
        .merge(recipe_routes())
}

async fn api_root() -> &'static str {
    "Root of API"
}
