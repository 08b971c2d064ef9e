//! `SeaORM` Entity, generated from the flightbook migrations

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "passenger")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub passport: String,
    pub phone: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::flight_passenger::Entity")]
    FlightPassenger,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::flight_passenger::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightPassenger.def()
    }
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        super::flight_passenger::Relation::Flight.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::flight_passenger::Relation::Passenger.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
