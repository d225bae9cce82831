use axum::{extract::{Query, State}, http::StatusCode, Json};
use serde::Deserialize;

use models::game::{self, GameInput};
use service::{db::game_service::{self, GameView}, pagination::Pagination};

use crate::errors::{ErrorStatus, JsonApiError};
use crate::routes::ServerState;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Case-insensitive name prefix
    pub name: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[utoipa::path(
    get, path = "/games", tag = "games",
    params(ListQuery),
    responses((status = 200, description = "Games with their category name"))
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<GameView>>, JsonApiError> {
    let page = Pagination::from_query(q.page, q.per_page);
    game_service::list_games(&state.db, q.name.as_deref(), page)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, ErrorStatus::CATALOG))
}

#[utoipa::path(
    post, path = "/games", tag = "games",
    request_body = crate::openapi::GameInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Unknown category"),
        (status = 409, description = "Name already used"),
        (status = 422, description = "Invalid body")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<GameInput>,
) -> Result<(StatusCode, Json<game::Model>), JsonApiError> {
    game_service::create_game(&state.db, &input)
        .await
        .map(|g| (StatusCode::CREATED, Json(g)))
        .map_err(|e| JsonApiError::from_service(e, ErrorStatus::CATALOG))
}
