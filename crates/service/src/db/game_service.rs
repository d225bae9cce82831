use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Serialize;
use tracing::{info, instrument, warn};

use models::{category, game::{self, GameInput}};

use crate::{db::query::prefix_ci, errors::ServiceError, pagination::{self, Pagination}};

const DUPLICATE: &str = "game already exists";

/// Game row plus the name of its category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    #[serde(flatten)]
    pub game: game::Model,
    pub category_name: String,
}

/// List games with their category name, optionally filtered by a
/// case-insensitive name prefix.
#[instrument(skip(db))]
pub async fn list_games(
    db: &DatabaseConnection,
    name_prefix: Option<&str>,
    page: Option<Pagination>,
) -> Result<Vec<GameView>, ServiceError> {
    let mut finder = game::Entity::find().order_by_asc(game::Column::Id);
    if let Some(prefix) = name_prefix.filter(|p| !p.is_empty()) {
        finder = finder.filter(prefix_ci((game::Entity, game::Column::Name), prefix));
    }
    let rows = pagination::apply(finder, page)
        .find_also_related(category::Entity)
        .all(db)
        .await?;
    Ok(rows
        .into_iter()
        .filter_map(|(g, c)| match c {
            Some(c) => Some(GameView { game: g, category_name: c.name }),
            None => {
                warn!(game_id = g.id, category_id = g.category_id, "game references missing category");
                None
            }
        })
        .collect())
}

/// Create a game after checking its category exists and its name is free.
#[instrument(skip(db, input), fields(name = %input.name, category_id = input.category_id))]
pub async fn create_game(db: &DatabaseConnection, input: &GameInput) -> Result<game::Model, ServiceError> {
    input.validate()?;
    if category::Entity::find_by_id(input.category_id).one(db).await?.is_none() {
        return Err(ServiceError::reference("category"));
    }
    let name = input.name.trim();
    if game::find_by_name(db, name).await?.is_some() {
        return Err(ServiceError::Conflict(DUPLICATE.into()));
    }
    let am = game::ActiveModel {
        name: Set(name.to_string()),
        image: Set(input.image.trim().to_string()),
        stock_total: Set(input.stock_total),
        price_per_day: Set(input.price_per_day),
        category_id: Set(input.category_id),
        ..Default::default()
    };
    let created = am.insert(db).await.map_err(|e| ServiceError::from_db(e, DUPLICATE))?;
    info!(game_id = created.id, price_per_day = created.price_per_day, "game_created");
    Ok(created)
}
