use chrono::Utc;
use sea_orm::{entity::prelude::*, QueryFilter};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, rental, validation::{parse_iso_date, Violations, NAME_MAX_LEN}};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub phone: String,
    #[sea_orm(unique)]
    pub cpf: String,
    pub birthday: Date,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Rental }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Rental => Entity::has_many(rental::Entity).into(),
        }
    }
}

impl Related<rental::Entity> for Entity {
    fn to() -> RelationDef { Relation::Rental.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Body of `POST /customers` and `PUT /customers/{id}` (full replacement).
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CustomerInput {
    pub name: String,
    pub phone: String,
    pub cpf: String,
    pub birthday: String,
}

impl CustomerInput {
    pub fn validate(&self) -> Result<(), ModelError> {
        let today = Utc::now().date_naive();
        let mut v = Violations::new();
        v.non_blank("name", &self.name)
            .max_len("name", &self.name, NAME_MAX_LEN)
            .digits("phone", &self.phone, 10, 11)
            .digits("cpf", &self.cpf, 11, 11)
            .iso_date("birthday", &self.birthday, Some(today));
        v.into_result()
    }

    /// Birthday as a calendar date; only meaningful after `validate` passed.
    pub fn birthday(&self) -> Result<Date, ModelError> {
        parse_iso_date(&self.birthday)
            .ok_or_else(|| ModelError::validation("\"birthday\" must be in ISO 8601 date format"))
    }
}

/// Customer holding `cpf`, ignoring `except` (the row being updated).
pub async fn find_by_cpf<C: ConnectionTrait>(
    db: &C,
    cpf: &str,
    except: Option<i32>,
) -> Result<Option<Model>, DbErr> {
    let mut finder = Entity::find().filter(Column::Cpf.eq(cpf));
    if let Some(id) = except {
        finder = finder.filter(Column::Id.ne(id));
    }
    finder.one(db).await
}
