//! `SeaORM` Entity, generated from the flightbook migrations

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "flight")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub origin_id: i32,
    pub destination_id: i32,
    pub distance_km: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::airport::Entity",
        from = "Column::OriginId",
        to = "super::airport::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Origin,
    #[sea_orm(
        belongs_to = "super::airport::Entity",
        from = "Column::DestinationId",
        to = "super::airport::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Destination,
    #[sea_orm(has_many = "super::flight_passenger::Entity")]
    FlightPassenger,
}

impl Related<super::flight_passenger::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightPassenger.def()
    }
}

impl Related<super::passenger::Entity> for Entity {
    fn to() -> RelationDef {
        super::flight_passenger::Relation::Passenger.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::flight_passenger::Relation::Flight.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
