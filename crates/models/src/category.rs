use sea_orm::{entity::prelude::*, QueryFilter};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, game, validation::{Violations, NAME_MAX_LEN}};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Game }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Game => Entity::has_many(game::Entity).into(),
        }
    }
}

impl Related<game::Entity> for Entity {
    fn to() -> RelationDef { Relation::Game.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Body of `POST /categories`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CategoryInput {
    pub name: String,
}

impl CategoryInput {
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut v = Violations::new();
        v.non_blank("name", &self.name).max_len("name", &self.name, NAME_MAX_LEN);
        v.into_result()
    }
}

pub async fn find_by_name<C: ConnectionTrait>(db: &C, name: &str) -> Result<Option<Model>, DbErr> {
    Entity::find().filter(Column::Name.eq(name)).one(db).await
}
