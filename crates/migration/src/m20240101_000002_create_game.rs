//! Create `game` table.
//! Prices are stored as integer minor units.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_auto(Game::Id))
                    .col(string_len(Game::Name, 128).unique_key().not_null())
                    .col(text(Game::Image).not_null())
                    .col(integer(Game::StockTotal).not_null().check(Expr::col(Game::StockTotal).gte(1)))
                    .col(big_integer(Game::PricePerDay).not_null().check(Expr::col(Game::PricePerDay).gte(1)))
                    .col(integer(Game::CategoryId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_category")
                            .from(Game::Table, Game::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Game::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Game {
    Table,
    Id,
    Name,
    Image,
    StockTotal,
    PricePerDay,
    CategoryId,
}

#[derive(DeriveIden)]
enum Category { Table, Id }
