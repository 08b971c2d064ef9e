use sea_orm_migration::{prelude::*, schema::*};

use super::m20260102_000006_create_passenger_table::Passenger;
use super::m20260102_000007_create_flight_table::Flight;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The composite primary key is what keeps a double-submitted join
        // from producing two enrollment rows.
        manager
            .create_table(
                Table::create()
                    .table(FlightPassenger::Table)
                    .if_not_exists()
                    .col(integer(FlightPassenger::FlightId))
                    .col(integer(FlightPassenger::PassengerId))
                    .primary_key(
                        Index::create()
                            .name("pk_flight_passenger")
                            .col(FlightPassenger::FlightId)
                            .col(FlightPassenger::PassengerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_passenger_flight_id")
                            .from(FlightPassenger::Table, FlightPassenger::FlightId)
                            .to(Flight::Table, Flight::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_passenger_passenger_id")
                            .from(FlightPassenger::Table, FlightPassenger::PassengerId)
                            .to(Passenger::Table, Passenger::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_flight_passenger_passenger_id")
                    .table(FlightPassenger::Table)
                    .col(FlightPassenger::PassengerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FlightPassenger::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FlightPassenger {
    Table,
    FlightId,
    PassengerId,
}
