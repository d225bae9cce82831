use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use serde::Deserialize;
use tracing::info;

use models::rental::{self, RentalInput};
use service::{
    errors::ServiceError,
    pagination::Pagination,
    rental::{self as lifecycle, RentalFilter, RentalView},
};

use crate::errors::{ErrorStatus, JsonApiError};
use crate::routes::ServerState;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    pub customer_id: Option<i32>,
    pub game_id: Option<i32>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

fn api_error(e: ServiceError) -> JsonApiError {
    JsonApiError::from_service(e, ErrorStatus::RENTALS)
}

#[utoipa::path(
    get, path = "/rentals", tag = "rentals",
    params(ListQuery),
    responses((status = 200, description = "Rentals with customer and game summaries"))
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<RentalView>>, JsonApiError> {
    let filter = RentalFilter { customer_id: q.customer_id, game_id: q.game_id };
    let page = Pagination::from_query(q.page, q.per_page);
    let list = lifecycle::list_rentals(&state.db, filter, page).await.map_err(api_error)?;
    info!(count = list.len(), "list rentals");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/rentals/{id}", tag = "rentals",
    params(("id" = i32, Path, description = "Rental id")),
    responses((status = 200, description = "Rental"), (status = 404, description = "Not found"))
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<RentalView>, JsonApiError> {
    lifecycle::get_rental(&state.db, id).await.map(Json).map_err(api_error)
}

#[utoipa::path(
    post, path = "/rentals", tag = "rentals",
    request_body = crate::openapi::RentalInputDoc,
    responses(
        (status = 201, description = "Created; originalPrice = pricePerDay * daysRented"),
        (status = 400, description = "Unknown customer or game, no copy available, or invalid daysRented"),
        (status = 422, description = "Malformed body")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<RentalInput>,
) -> Result<(StatusCode, Json<rental::Model>), JsonApiError> {
    lifecycle::create_rental(&state.db, input)
        .await
        .map(|r| (StatusCode::CREATED, Json(r)))
        .map_err(api_error)
}

#[utoipa::path(
    post, path = "/rentals/{id}/return", tag = "rentals",
    params(("id" = i32, Path, description = "Rental id")),
    responses(
        (status = 200, description = "Closed; delayFee computed"),
        (status = 400, description = "Already returned"),
        (status = 404, description = "Not found")
    )
)]
pub async fn close(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<rental::Model>, JsonApiError> {
    lifecycle::close_rental(&state.db, id).await.map(Json).map_err(api_error)
}

#[utoipa::path(
    delete, path = "/rentals/{id}", tag = "rentals",
    params(("id" = i32, Path, description = "Rental id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Rental already returned"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, JsonApiError> {
    lifecycle::delete_rental(&state.db, id).await.map_err(api_error)?;
    Ok(StatusCode::OK)
}
