//! `SeaORM` Entity, generated from the flightbook migrations

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "city")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::airport::Entity")]
    Airport,
}

impl Related<super::airport::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Airport.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
