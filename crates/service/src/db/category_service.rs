use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::{info, instrument};

use models::category::{self, CategoryInput};

use crate::{errors::ServiceError, pagination::{self, Pagination}};

const DUPLICATE: &str = "category already exists";

/// List categories ordered by id.
pub async fn list_categories(
    db: &DatabaseConnection,
    page: Option<Pagination>,
) -> Result<Vec<category::Model>, ServiceError> {
    let finder = category::Entity::find().order_by_asc(category::Column::Id);
    Ok(pagination::apply(finder, page).all(db).await?)
}

/// Create a category; names are unique.
#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_category(
    db: &DatabaseConnection,
    input: &CategoryInput,
) -> Result<category::Model, ServiceError> {
    input.validate()?;
    let name = input.name.trim();
    if category::find_by_name(db, name).await?.is_some() {
        return Err(ServiceError::Conflict(DUPLICATE.into()));
    }
    let am = category::ActiveModel { name: Set(name.to_string()), ..Default::default() };
    let created = am.insert(db).await.map_err(|e| ServiceError::from_db(e, DUPLICATE))?;
    info!(category_id = created.id, "category_created");
    Ok(created)
}
