use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{customer, errors::ModelError, game, validation::Violations};

/// A rental is open while `return_date` is `None`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rental")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_id: i32,
    pub game_id: i32,
    pub rent_date: DateTimeWithTimeZone,
    pub days_rented: i32,
    pub return_date: Option<DateTimeWithTimeZone>,
    /// `price_per_day * days_rented` at creation; never recomputed.
    pub original_price: i64,
    pub delay_fee: Option<i64>,
}

impl Model {
    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Customer, Game }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Customer => Entity::belongs_to(customer::Entity)
                .from(Column::CustomerId)
                .to(customer::Column::Id)
                .into(),
            Relation::Game => Entity::belongs_to(game::Entity)
                .from(Column::GameId)
                .to(game::Column::Id)
                .into(),
        }
    }
}

impl Related<customer::Entity> for Entity {
    fn to() -> RelationDef { Relation::Customer.def() }
}

impl Related<game::Entity> for Entity {
    fn to() -> RelationDef { Relation::Game.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Body of `POST /rentals`.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalInput {
    pub customer_id: i32,
    pub game_id: i32,
    pub days_rented: i32,
}

impl RentalInput {
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut v = Violations::new();
        v.at_least("customerId", self.customer_id.into(), 1)
            .at_least("gameId", self.game_id.into(), 1)
            .at_least("daysRented", self.days_rented.into(), 1);
        v.into_result()
    }
}
