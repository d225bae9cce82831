use axum::{extract::{Query, State}, http::StatusCode, Json};
use serde::Deserialize;

use models::category::{self, CategoryInput};
use service::{db::category_service, pagination::Pagination};

use crate::errors::{ErrorStatus, JsonApiError};
use crate::routes::ServerState;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[utoipa::path(
    get, path = "/categories", tag = "categories",
    params(ListQuery),
    responses((status = 200, description = "All categories ordered by id"))
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<category::Model>>, JsonApiError> {
    let page = Pagination::from_query(q.page, q.per_page);
    category_service::list_categories(&state.db, page)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, ErrorStatus::CATALOG))
}

#[utoipa::path(
    post, path = "/categories", tag = "categories",
    request_body = crate::openapi::CategoryInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 409, description = "Name already used"),
        (status = 422, description = "Invalid body")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CategoryInput>,
) -> Result<(StatusCode, Json<category::Model>), JsonApiError> {
    category_service::create_category(&state.db, &input)
        .await
        .map(|c| (StatusCode::CREATED, Json(c)))
        .map_err(|e| JsonApiError::from_service(e, ErrorStatus::CATALOG))
}
