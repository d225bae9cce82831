use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Game: lookup by category
        manager
            .create_index(
                Index::create()
                    .name("idx_game_category")
                    .table(Game::Table)
                    .col(Game::CategoryId)
                    .to_owned(),
            )
            .await?;

        // Rental: list filters
        manager
            .create_index(
                Index::create()
                    .name("idx_rental_customer")
                    .table(Rental::Table)
                    .col(Rental::CustomerId)
                    .to_owned(),
            )
            .await?;

        // Rental: open-rental count per game (availability check)
        manager
            .create_index(
                Index::create()
                    .name("idx_rental_game_return")
                    .table(Rental::Table)
                    .col(Rental::GameId)
                    .col(Rental::ReturnDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_rental_game_return").table(Rental::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_rental_customer").table(Rental::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_game_category").table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Game { Table, CategoryId }

#[derive(DeriveIden)]
enum Rental { Table, CustomerId, GameId, ReturnDate }
