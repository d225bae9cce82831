use sea_orm::{entity::prelude::*, QueryFilter};
use serde::{Deserialize, Serialize};

use crate::{category, errors::ModelError, rental, validation::{Violations, NAME_MAX_LEN}};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub image: String,
    pub stock_total: i32,
    /// Minor currency units.
    pub price_per_day: i64,
    pub category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Category, Rental }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::CategoryId)
                .to(category::Column::Id)
                .into(),
            Relation::Rental => Entity::has_many(rental::Entity).into(),
        }
    }
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef { Relation::Category.def() }
}

impl Related<rental::Entity> for Entity {
    fn to() -> RelationDef { Relation::Rental.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Body of `POST /games`.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInput {
    pub name: String,
    pub image: String,
    pub stock_total: i32,
    pub price_per_day: i64,
    pub category_id: i32,
}

impl GameInput {
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut v = Violations::new();
        v.non_blank("name", &self.name)
            .max_len("name", &self.name, NAME_MAX_LEN)
            .non_blank("image", &self.image)
            .at_least("stockTotal", self.stock_total.into(), 1)
            .at_least("pricePerDay", self.price_per_day, 1)
            .at_least("categoryId", self.category_id.into(), 1);
        v.into_result()
    }
}

pub async fn find_by_name<C: ConnectionTrait>(db: &C, name: &str) -> Result<Option<Model>, DbErr> {
    Entity::find().filter(Column::Name.eq(name)).one(db).await
}
