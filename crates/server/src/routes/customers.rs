use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use serde::Deserialize;

use models::customer::{self, CustomerInput};
use service::{db::customer_service, pagination::Pagination};

use crate::errors::{ErrorStatus, JsonApiError};
use crate::routes::ServerState;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// cpf prefix
    pub cpf: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

fn api_error(e: service::errors::ServiceError) -> JsonApiError {
    JsonApiError::from_service(e, ErrorStatus::CUSTOMERS)
}

#[utoipa::path(
    get, path = "/customers", tag = "customers",
    params(ListQuery),
    responses((status = 200, description = "Customers ordered by id"))
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<customer::Model>>, JsonApiError> {
    let page = Pagination::from_query(q.page, q.per_page);
    customer_service::list_customers(&state.db, q.cpf.as_deref(), page)
        .await
        .map(Json)
        .map_err(api_error)
}

#[utoipa::path(
    get, path = "/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    responses((status = 200, description = "Customer"), (status = 404, description = "Not found"))
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<customer::Model>, JsonApiError> {
    customer_service::get_customer(&state.db, id).await.map(Json).map_err(api_error)
}

#[utoipa::path(
    post, path = "/customers", tag = "customers",
    request_body = crate::openapi::CustomerInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Invalid body"),
        (status = 409, description = "cpf already registered")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CustomerInput>,
) -> Result<(StatusCode, Json<customer::Model>), JsonApiError> {
    customer_service::create_customer(&state.db, &input)
        .await
        .map(|c| (StatusCode::CREATED, Json(c)))
        .map_err(api_error)
}

#[utoipa::path(
    put, path = "/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    request_body = crate::openapi::CustomerInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Invalid body"),
        (status = 404, description = "Not found"),
        (status = 409, description = "cpf used by another customer")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<CustomerInput>,
) -> Result<Json<customer::Model>, JsonApiError> {
    customer_service::update_customer(&state.db, id, &input).await.map(Json).map_err(api_error)
}
