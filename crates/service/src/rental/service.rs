use std::collections::{BTreeSet, HashMap};

use chrono::Utc;
use sea_orm::{
    prelude::DateTimeWithTimeZone, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use serde::Serialize;
use tracing::{info, instrument, warn};

use models::{
    category, customer, game,
    rental::{self, RentalInput},
};

use super::rules;
use crate::{errors::ServiceError, pagination::{self, Pagination}};

#[derive(Debug, Clone, Copy, Default)]
pub struct RentalFilter {
    pub customer_id: Option<i32>,
    pub game_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerSummary {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
    pub category_name: String,
}

/// Rental row with the customer and game it points at.
#[derive(Debug, Clone, Serialize)]
pub struct RentalView {
    #[serde(flatten)]
    pub rental: rental::Model,
    pub customer: CustomerSummary,
    pub game: GameSummary,
}

pub async fn create_rental(db: &DatabaseConnection, input: RentalInput) -> Result<rental::Model, ServiceError> {
    create_rental_at(db, input, Utc::now().into()).await
}

/// Open a rental priced at the game's current daily price.
///
/// Checks, in order: field rules, customer exists, game exists, a copy is
/// free. The game row stays locked until commit so concurrent rentals of the
/// same game see each other when counting open rentals.
#[instrument(
    skip(db, input),
    fields(customer_id = input.customer_id, game_id = input.game_id, days_rented = input.days_rented)
)]
pub async fn create_rental_at(
    db: &DatabaseConnection,
    input: RentalInput,
    now: DateTimeWithTimeZone,
) -> Result<rental::Model, ServiceError> {
    input.validate()?;

    let txn = db.begin().await?;
    if customer::Entity::find_by_id(input.customer_id).one(&txn).await?.is_none() {
        return Err(ServiceError::reference("customer"));
    }
    let game = game::Entity::find_by_id(input.game_id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::reference("game"))?;

    let open = rental::Entity::find()
        .filter(rental::Column::GameId.eq(game.id))
        .filter(rental::Column::ReturnDate.is_null())
        .count(&txn)
        .await?;
    rules::ensure_available(open, game.stock_total)?;
    let original_price = rules::original_price(game.price_per_day, input.days_rented)?;

    let am = rental::ActiveModel {
        customer_id: Set(input.customer_id),
        game_id: Set(game.id),
        rent_date: Set(now),
        days_rented: Set(input.days_rented),
        return_date: Set(None),
        original_price: Set(original_price),
        delay_fee: Set(None),
        ..Default::default()
    };
    let created = am.insert(&txn).await?;
    txn.commit().await?;

    info!(rental_id = created.id, original_price, "rental_created");
    Ok(created)
}

pub async fn close_rental(db: &DatabaseConnection, id: i32) -> Result<rental::Model, ServiceError> {
    close_rental_at(db, id, Utc::now().into()).await
}

/// Return a rental: stamp `return_date` and record the delay fee (0 when on
/// time) in a single update. A second close on the same id is a conflict.
#[instrument(skip(db))]
pub async fn close_rental_at(
    db: &DatabaseConnection,
    id: i32,
    now: DateTimeWithTimeZone,
) -> Result<rental::Model, ServiceError> {
    let txn = db.begin().await?;
    let found = rental::Entity::find_by_id(id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("rental"))?;
    rules::ensure_open(&found)?;

    let game = game::Entity::find_by_id(found.game_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::reference("game"))?;
    let settlement = rules::settle(&found, game.price_per_day, now);

    let mut am: rental::ActiveModel = found.into();
    am.return_date = Set(Some(settlement.return_date));
    am.delay_fee = Set(Some(settlement.delay_fee));
    let closed = am.update(&txn).await?;
    txn.commit().await?;

    info!(
        rental_id = closed.id,
        elapsed_days = settlement.elapsed_days,
        delay_fee = settlement.delay_fee,
        "rental_closed"
    );
    Ok(closed)
}

/// Delete an open rental. Closed rentals are kept.
#[instrument(skip(db))]
pub async fn delete_rental(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    let found = rental::Entity::find_by_id(id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("rental"))?;
    if !found.is_open() {
        return Err(ServiceError::Conflict("rental already returned; only open rentals can be deleted".into()));
    }
    rental::Entity::delete_by_id(found.id).exec(&txn).await?;
    txn.commit().await?;

    info!(rental_id = id, "rental_deleted");
    Ok(())
}

/// List rentals ordered by id; filters combine with AND.
#[instrument(skip(db))]
pub async fn list_rentals(
    db: &DatabaseConnection,
    filter: RentalFilter,
    page: Option<Pagination>,
) -> Result<Vec<RentalView>, ServiceError> {
    let mut finder = rental::Entity::find().order_by_asc(rental::Column::Id);
    if let Some(cid) = filter.customer_id {
        finder = finder.filter(rental::Column::CustomerId.eq(cid));
    }
    if let Some(gid) = filter.game_id {
        finder = finder.filter(rental::Column::GameId.eq(gid));
    }
    let rows = pagination::apply(finder, page)
        .find_also_related(customer::Entity)
        .all(db)
        .await?;
    enrich(db, rows).await
}

pub async fn get_rental(db: &DatabaseConnection, id: i32) -> Result<RentalView, ServiceError> {
    let row = rental::Entity::find_by_id(id)
        .find_also_related(customer::Entity)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("rental"))?;
    enrich(db, vec![row])
        .await?
        .pop()
        .ok_or_else(|| ServiceError::Db(format!("rental {} has dangling references", id)))
}

async fn enrich(
    db: &DatabaseConnection,
    rows: Vec<(rental::Model, Option<customer::Model>)>,
) -> Result<Vec<RentalView>, ServiceError> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    let game_ids: BTreeSet<i32> = rows.iter().map(|(r, _)| r.game_id).collect();
    let games: HashMap<i32, (game::Model, Option<category::Model>)> = game::Entity::find()
        .filter(game::Column::Id.is_in(game_ids))
        .find_also_related(category::Entity)
        .all(db)
        .await?
        .into_iter()
        .map(|(g, c)| (g.id, (g, c)))
        .collect();

    let views = rows
        .into_iter()
        .filter_map(|(r, c)| {
            let Some(c) = c else {
                warn!(rental_id = r.id, customer_id = r.customer_id, "rental references missing customer");
                return None;
            };
            let Some((g, cat)) = games.get(&r.game_id) else {
                warn!(rental_id = r.id, game_id = r.game_id, "rental references missing game");
                return None;
            };
            let game = GameSummary {
                id: g.id,
                name: g.name.clone(),
                category_id: g.category_id,
                category_name: cat.as_ref().map(|c| c.name.clone()).unwrap_or_default(),
            };
            Some(RentalView { rental: r, customer: CustomerSummary { id: c.id, name: c.name }, game })
        })
        .collect();
    Ok(views)
}
