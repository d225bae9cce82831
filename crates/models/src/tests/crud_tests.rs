use anyhow::Result;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use uuid::Uuid;

use super::setup_test_db;
use crate::{category, customer, game, rental};

fn unique(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4())
}

fn unique_cpf() -> String {
    format!("{:011}", Uuid::new_v4().as_u128() % 100_000_000_000)
}

async fn insert_category(db: &sea_orm::DatabaseConnection) -> Result<category::Model> {
    let am = category::ActiveModel { name: Set(unique("cat")), ..Default::default() };
    Ok(am.insert(db).await?)
}

/// Category -> game -> customer -> rental, then lookups by the helper queries
#[tokio::test]
async fn test_entity_roundtrip() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let cat = insert_category(&db).await?;
    let found = category::find_by_name(&db, &cat.name).await?;
    assert_eq!(found.map(|c| c.id), Some(cat.id));

    let g = game::ActiveModel {
        name: Set(unique("game")),
        image: Set("http://example.com/g.png".into()),
        stock_total: Set(2),
        price_per_day: Set(1500),
        category_id: Set(cat.id),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    assert_eq!(game::find_by_name(&db, &g.name).await?.map(|x| x.id), Some(g.id));

    let cpf = unique_cpf();
    let c = customer::ActiveModel {
        name: Set("Maria".into()),
        phone: Set("21999999999".into()),
        cpf: Set(cpf.clone()),
        birthday: Set(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    assert_eq!(customer::find_by_cpf(&db, &cpf, None).await?.map(|x| x.id), Some(c.id));
    // the row itself is excluded when checking for other holders
    assert!(customer::find_by_cpf(&db, &cpf, Some(c.id)).await?.is_none());

    let r = rental::ActiveModel {
        customer_id: Set(c.id),
        game_id: Set(g.id),
        rent_date: Set(Utc::now().into()),
        days_rented: Set(3),
        return_date: Set(None),
        original_price: Set(4500),
        delay_fee: Set(None),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    assert!(r.is_open());

    let open = rental::Entity::find()
        .filter(rental::Column::GameId.eq(g.id))
        .filter(rental::Column::ReturnDate.is_null())
        .count(&db)
        .await?;
    assert_eq!(open, 1);

    // Cleanup in reverse order
    rental::Entity::delete_by_id(r.id).exec(&db).await?;
    customer::Entity::delete_by_id(c.id).exec(&db).await?;
    game::Entity::delete_by_id(g.id).exec(&db).await?;
    category::Entity::delete_by_id(cat.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_unique_category_name() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let cat = insert_category(&db).await?;
    let dup = category::ActiveModel { name: Set(cat.name.clone()), ..Default::default() }
        .insert(&db)
        .await;
    assert!(dup.is_err());

    let rows = category::Entity::find()
        .filter(category::Column::Name.eq(cat.name.clone()))
        .count(&db)
        .await?;
    assert_eq!(rows, 1);

    category::Entity::delete_by_id(cat.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_game_requires_existing_category() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let res = game::ActiveModel {
        name: Set(unique("orphan")),
        image: Set("x".into()),
        stock_total: Set(1),
        price_per_day: Set(100),
        category_id: Set(i32::MAX),
        ..Default::default()
    }
    .insert(&db)
    .await;
    assert!(res.is_err());
    Ok(())
}
