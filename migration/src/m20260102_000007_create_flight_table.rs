use sea_orm_migration::{prelude::*, schema::*};

use super::m20260102_000005_create_airport_table::Airport;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flight::Table)
                    .if_not_exists()
                    .col(pk_auto(Flight::Id))
                    .col(string_len(Flight::Name, 50))
                    .col(integer(Flight::OriginId))
                    .col(integer(Flight::DestinationId))
                    .col(integer(Flight::DistanceKm))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_origin_id")
                            .from(Flight::Table, Flight::OriginId)
                            .to(Airport::Table, Airport::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_destination_id")
                            .from(Flight::Table, Flight::DestinationId)
                            .to(Airport::Table, Airport::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Flight::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Flight {
    Table,
    Id,
    Name,
    OriginId,
    DestinationId,
    DistanceKm,
}
