//! Recipe endpoints under `/api/v1/recipes`.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use cocktail::collection::Document;
use cocktail::common::{Value, DOC_ID, RECIPE_NAME};
use cocktail::query::{where_contains, where_equal, Selection};
use cocktail::recipe::field_path;
use serde::Deserialize;

use crate::routes::{ApiResponse, AppState};

const LIST_PREFIX: &str = "list-";
const EQUALS_SUFFIX: &str = "-equals";
const CONTAINS_SUFFIX: &str = "-contains";

pub fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes/all", get(find_all))
        .route("/recipes/all/count", get(count_all))
        .route("/recipes/all/{listing}", get(list_all))
        .route("/recipes/all/{listing}/distinct", get(list_all_distinct))
        .route("/recipes/get/by-name/{name}", get(get_by_name))
        .route("/recipes/get/by-id/{id}", get(get_by_id))
        .route("/recipes/create", post(create))
        .route("/recipes/update/by-name/{name}", post(update_by_name))
        .route("/recipes/update/by-id/{id}", post(update_by_id))
        .route("/recipes/duplicate/by-name/{name}", post(duplicate_by_name))
        .route("/recipes/duplicate/by-id/{id}", post(duplicate_by_id))
        .route("/recipes/delete/by-name/{name}", post(delete_by_name))
        .route("/recipes/delete/by-id/{id}", post(delete_by_id))
        .route("/recipes/{selector}/{value}", get(search))
        .route("/recipes/{selector}/{value}/count", get(search_count))
        .route("/recipes/{selector}/{value}/{listing}", get(search_list))
        .route(
            "/recipes/{selector}/{value}/{listing}/distinct",
            get(search_list_distinct),
        )
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchParams {
    #[serde(default)]
    accent_sensitive: bool,
}

/// Parses a `{key}-equals` or `{key}-contains` segment into a
/// case-insensitive selection on the aliased field.
fn search_selection(selector: &str, value: &str, params: &SearchParams) -> Option<Selection> {
    if let Some(key) = selector.strip_suffix(EQUALS_SUFFIX) {
        (!key.is_empty()).then(|| {
            where_equal(&field_path(key), value, true, params.accent_sensitive)
        })
    } else if let Some(key) = selector.strip_suffix(CONTAINS_SUFFIX) {
        (!key.is_empty()).then(|| {
            where_contains(&field_path(key), value, true, params.accent_sensitive)
        })
    } else {
        None
    }
}

fn listing_field(listing: &str) -> Option<&str> {
    listing.strip_prefix(LIST_PREFIX).filter(|f| !f.is_empty())
}

fn by_name(name: &str) -> Selection {
    where_equal(RECIPE_NAME, name, false, false)
}

fn by_id(id: &str) -> Selection {
    where_equal(DOC_ID, id, false, false)
}

fn unknown_route<T>(segment: &str) -> ApiResponse<T> {
    tracing::debug!(segment, "no recipe route for segment");
    ApiResponse::not_found(&format!("Unknown route segment '{segment}'"))
}

fn payload_rejected<T>(rejection: JsonRejection) -> ApiResponse<T> {
    ApiResponse::bad_request(&format!("Invalid request body: {}", rejection.body_text()))
}

fn path_rejected<T>(rejection: PathRejection) -> ApiResponse<T> {
    ApiResponse::bad_request(&format!("Invalid path: {}", rejection.body_text()))
}

fn query_rejected<T>(rejection: QueryRejection) -> ApiResponse<T> {
    ApiResponse::bad_request(&format!("Invalid query string: {}", rejection.body_text()))
}

type PathParam<P> = Result<Path<P>, PathRejection>;
type SearchQuery = Result<Query<SearchParams>, QueryRejection>;

fn search_input<P, T>(
    path: PathParam<P>,
    query: SearchQuery,
) -> Result<(P, SearchParams), ApiResponse<T>> {
    let Path(segments) = path.map_err(path_rejected)?;
    let Query(params) = query.map_err(query_rejected)?;
    Ok((segments, params))
}

fn list(
    state: &AppState,
    selection: &Selection,
    listing: &str,
    distinct: bool,
) -> ApiResponse<Vec<Value>> {
    match listing_field(listing) {
        Some(field) => state.catalog.list(selection, field, distinct).into(),
        None => unknown_route(listing),
    }
}

async fn find_all(State(state): State<AppState>) -> ApiResponse<Vec<Document>> {
    state.catalog.find_all(&Selection::all()).into()
}

async fn count_all(State(state): State<AppState>) -> ApiResponse<usize> {
    state.catalog.count_all(&Selection::all()).into()
}

async fn list_all(
    State(state): State<AppState>,
    path: PathParam<String>,
) -> ApiResponse<Vec<Value>> {
    let Path(listing) = match path {
        Ok(segment) => segment,
        Err(rejection) => return path_rejected(rejection),
    };
    list(&state, &Selection::all(), &listing, false)
}

async fn list_all_distinct(
    State(state): State<AppState>,
    path: PathParam<String>,
) -> ApiResponse<Vec<Value>> {
    let Path(listing) = match path {
        Ok(segment) => segment,
        Err(rejection) => return path_rejected(rejection),
    };
    list(&state, &Selection::all(), &listing, true)
}

async fn search(
    State(state): State<AppState>,
    path: PathParam<(String, String)>,
    query: SearchQuery,
) -> ApiResponse<Vec<Document>> {
    let ((selector, value), params) = match search_input(path, query) {
        Ok(input) => input,
        Err(response) => return response,
    };
    match search_selection(&selector, &value, &params) {
        Some(selection) => state.catalog.find_all(&selection).into(),
        None => unknown_route(&selector),
    }
}

async fn search_count(
    State(state): State<AppState>,
    path: PathParam<(String, String)>,
    query: SearchQuery,
) -> ApiResponse<usize> {
    let ((selector, value), params) = match search_input(path, query) {
        Ok(input) => input,
        Err(response) => return response,
    };
    match search_selection(&selector, &value, &params) {
        Some(selection) => state.catalog.count_all(&selection).into(),
        None => unknown_route(&selector),
    }
}

async fn search_list(
    State(state): State<AppState>,
    path: PathParam<(String, String, String)>,
    query: SearchQuery,
) -> ApiResponse<Vec<Value>> {
    let ((selector, value, listing), params) = match search_input(path, query) {
        Ok(input) => input,
        Err(response) => return response,
    };
    match search_selection(&selector, &value, &params) {
        Some(selection) => list(&state, &selection, &listing, false),
        None => unknown_route(&selector),
    }
}

async fn search_list_distinct(
    State(state): State<AppState>,
    path: PathParam<(String, String, String)>,
    query: SearchQuery,
) -> ApiResponse<Vec<Value>> {
    let ((selector, value, listing), params) = match search_input(path, query) {
        Ok(input) => input,
        Err(response) => return response,
    };
    match search_selection(&selector, &value, &params) {
        Some(selection) => list(&state, &selection, &listing, true),
        None => unknown_route(&selector),
    }
}

async fn get_by_name(
    State(state): State<AppState>,
    path: PathParam<String>,
) -> ApiResponse<Option<Document>> {
    let Path(name) = match path {
        Ok(segment) => segment,
        Err(rejection) => return path_rejected(rejection),
    };
    state.catalog.find_one(&by_name(&name)).into()
}

async fn get_by_id(
    State(state): State<AppState>,
    path: PathParam<String>,
) -> ApiResponse<Option<Document>> {
    let Path(id) = match path {
        Ok(segment) => segment,
        Err(rejection) => return path_rejected(rejection),
    };
    state.catalog.find_one(&by_id(&id)).into()
}

async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Document>, JsonRejection>,
) -> ApiResponse<Document> {
    match payload {
        Ok(Json(payload)) => state.catalog.create_recipe(&payload).into(),
        Err(rejection) => payload_rejected(rejection),
    }
}

async fn update_by_name(
    State(state): State<AppState>,
    path: PathParam<String>,
    payload: Result<Json<Document>, JsonRejection>,
) -> ApiResponse<cocktail::catalog::UpdateSummary> {
    let Path(name) = match path {
        Ok(segment) => segment,
        Err(rejection) => return path_rejected(rejection),
    };
    match payload {
        Ok(Json(payload)) => state.catalog.update_one(&by_name(&name), &payload).into(),
        Err(rejection) => payload_rejected(rejection),
    }
}

async fn update_by_id(
    State(state): State<AppState>,
    path: PathParam<String>,
    payload: Result<Json<Document>, JsonRejection>,
) -> ApiResponse<cocktail::catalog::UpdateSummary> {
    let Path(id) = match path {
        Ok(segment) => segment,
        Err(rejection) => return path_rejected(rejection),
    };
    match payload {
        Ok(Json(payload)) => state.catalog.update_one(&by_id(&id), &payload).into(),
        Err(rejection) => payload_rejected(rejection),
    }
}

async fn duplicate_by_name(
    State(state): State<AppState>,
    path: PathParam<String>,
) -> ApiResponse<Document> {
    let Path(name) = match path {
        Ok(segment) => segment,
        Err(rejection) => return path_rejected(rejection),
    };
    state.catalog.duplicate(&by_name(&name)).into()
}

async fn duplicate_by_id(
    State(state): State<AppState>,
    path: PathParam<String>,
) -> ApiResponse<Document> {
    let Path(id) = match path {
        Ok(segment) => segment,
        Err(rejection) => return path_rejected(rejection),
    };
    state.catalog.duplicate(&by_id(&id)).into()
}

async fn delete_by_name(
    State(state): State<AppState>,
    path: PathParam<String>,
) -> ApiResponse<cocktail::catalog::DeleteSummary> {
    let Path(name) = match path {
        Ok(segment) => segment,
        Err(rejection) => return path_rejected(rejection),
    };
    state.catalog.delete_one(&by_name(&name)).into()
}

async fn delete_by_id(
    State(state): State<AppState>,
    path: PathParam<String>,
) -> ApiResponse<cocktail::catalog::DeleteSummary> {
    let Path(id) = match path {
        Ok(segment) => segment,
        Err(rejection) => return path_rejected(rejection),
    };
    state.catalog.delete_one(&by_id(&id)).into()
}
