use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Passenger::Table)
                    .if_not_exists()
                    .col(pk_auto(Passenger::Id))
                    .col(integer_uniq(Passenger::UserId))
                    .col(string_len(Passenger::Name, 100))
                    .col(string_len_uniq(Passenger::Passport, 20))
                    .col(string_len(Passenger::Phone, 15).default(""))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_passenger_user_id")
                            .from(Passenger::Table, Passenger::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Passenger::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Passenger {
    Table,
    Id,
    UserId,
    Name,
    Passport,
    Phone,
}
