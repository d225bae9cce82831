use serde::Deserialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[allow(dead_code)]
#[derive(Deserialize, ToSchema)]
pub struct CategoryInputDoc { pub name: String }

#[allow(dead_code)]
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameInputDoc {
    pub name: String,
    pub image: String,
    pub stock_total: i32,
    /// Minor currency units per day
    pub price_per_day: i64,
    pub category_id: i32,
}

#[allow(dead_code)]
#[derive(Deserialize, ToSchema)]
pub struct CustomerInputDoc {
    pub name: String,
    /// 10 or 11 digits
    pub phone: String,
    /// 11 digits
    pub cpf: String,
    /// YYYY-MM-DD
    pub birthday: String,
}

#[allow(dead_code)]
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RentalInputDoc {
    pub customer_id: i32,
    pub game_id: i32,
    pub days_rented: i32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::categories::list,
        crate::routes::categories::create,
        crate::routes::games::list,
        crate::routes::games::create,
        crate::routes::customers::list,
        crate::routes::customers::get,
        crate::routes::customers::create,
        crate::routes::customers::update,
        crate::routes::rentals::list,
        crate::routes::rentals::get,
        crate::routes::rentals::create,
        crate::routes::rentals::close,
        crate::routes::rentals::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CategoryInputDoc,
            GameInputDoc,
            CustomerInputDoc,
            RentalInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "categories"),
        (name = "games"),
        (name = "customers"),
        (name = "rentals")
    )
)]
pub struct ApiDoc;
