//! `SeaORM` Entity, generated from the flightbook migrations

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "flight_passenger")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub flight_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub passenger_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::flight::Entity",
        from = "Column::FlightId",
        to = "super::flight::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Flight,
    #[sea_orm(
        belongs_to = "super::passenger::Entity",
        from = "Column::PassengerId",
        to = "super::passenger::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Passenger,
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl Related<super::passenger::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Passenger.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
