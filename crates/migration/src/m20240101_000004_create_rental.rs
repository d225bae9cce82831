//! Create `rental` table.
//!
//! A row is open while `return_date` is NULL. `original_price` is frozen at
//! creation; `delay_fee` is written once, when the rental is closed.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rental::Table)
                    .if_not_exists()
                    .col(pk_auto(Rental::Id))
                    .col(integer(Rental::CustomerId).not_null())
                    .col(integer(Rental::GameId).not_null())
                    .col(timestamp_with_time_zone(Rental::RentDate).not_null())
                    .col(integer(Rental::DaysRented).not_null().check(Expr::col(Rental::DaysRented).gte(1)))
                    .col(timestamp_with_time_zone_null(Rental::ReturnDate))
                    .col(big_integer(Rental::OriginalPrice).not_null())
                    .col(big_integer_null(Rental::DelayFee))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_customer")
                            .from(Rental::Table, Rental::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_game")
                            .from(Rental::Table, Rental::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Rental::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Rental {
    Table,
    Id,
    CustomerId,
    GameId,
    RentDate,
    DaysRented,
    ReturnDate,
    OriginalPrice,
    DelayFee,
}

#[derive(DeriveIden)]
enum Customer { Table, Id }

#[derive(DeriveIden)]
enum Game { Table, Id }
