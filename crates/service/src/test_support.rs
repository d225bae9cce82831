#![cfg(test)]
use chrono::NaiveDate;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::db::connect_with_config;
use models::{category, customer, game};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use tokio::sync::OnceCell;
use uuid::Uuid;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

fn test_config() -> DatabaseConfig {
    let mut cfg = DatabaseConfig::from_env();
    cfg.max_connections = cfg.max_connections.max(20);
    cfg.min_connections = 1;
    cfg.connect_timeout_secs = 5;
    cfg.acquire_timeout_secs = 10;
    cfg
}

/// Fresh connection to a migrated database, or `None` to skip the test
/// (`SKIP_DB_TESTS` set, no `DATABASE_URL`, or database unreachable).
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return None;
    }
    let migrated = MIGRATED
        .get_or_init(|| async {
            // Run migrations exactly once, with a throwaway connection
            match connect_with_config(&test_config()).await {
                Ok(db) => match migration::Migrator::up(&db, None).await {
                    Ok(()) => true,
                    Err(e) => {
                        eprintln!("skip: migrate up failed: {}", e);
                        false
                    }
                },
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    false
                }
            }
        })
        .await;
    if !*migrated {
        return None;
    }
    // Return a fresh connection for the current test's runtime
    connect_with_config(&test_config()).await.ok()
}

pub fn unique(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4())
}

/// Random 11-digit cpf.
pub fn unique_cpf() -> String {
    format!("{:011}", Uuid::new_v4().as_u128() % 100_000_000_000)
}

pub async fn seed_category(db: &DatabaseConnection) -> Result<category::Model, anyhow::Error> {
    let am = category::ActiveModel { name: Set(unique("category")), ..Default::default() };
    Ok(am.insert(db).await?)
}

pub async fn seed_game(
    db: &DatabaseConnection,
    price_per_day: i64,
    stock_total: i32,
) -> Result<game::Model, anyhow::Error> {
    let cat = seed_category(db).await?;
    let am = game::ActiveModel {
        name: Set(unique("game")),
        image: Set("http://example.com/cover.png".into()),
        stock_total: Set(stock_total),
        price_per_day: Set(price_per_day),
        category_id: Set(cat.id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn seed_customer(db: &DatabaseConnection) -> Result<customer::Model, anyhow::Error> {
    let am = customer::ActiveModel {
        name: Set(unique("customer")),
        phone: Set("21999999999".into()),
        cpf: Set(unique_cpf()),
        birthday: Set(NaiveDate::from_ymd_opt(1990, 5, 17).expect("valid date")),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
