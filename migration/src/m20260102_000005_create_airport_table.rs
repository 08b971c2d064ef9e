use sea_orm_migration::{prelude::*, schema::*};

use super::m20260102_000004_create_city_table::City;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Airport::Table)
                    .if_not_exists()
                    .col(pk_auto(Airport::Id))
                    .col(string_len(Airport::Name, 100))
                    .col(string_len_uniq(Airport::Code, 10))
                    .col(integer(Airport::CityId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_airport_city_id")
                            .from(Airport::Table, Airport::CityId)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Airport::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Airport {
    Table,
    Id,
    Name,
    Code,
    CityId,
}
