use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::enrollment::EnrollmentRepository,
    model::passenger::{CreatePassengerParam, Passenger, UpdatePassengerParam},
};

pub struct PassengerRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PassengerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreatePassengerParam) -> Result<Passenger, DbErr> {
        let passenger = entity::passenger::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            name: ActiveValue::Set(param.name),
            passport: ActiveValue::Set(param.passport),
            phone: ActiveValue::Set(param.phone),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(passenger.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Passenger with id {} not found after creation",
                passenger.id
            )))
    }

    /// Creates the profile unless the account already has one, then returns the
    /// account's profile either way.
    pub async fn get_or_create(&self, param: CreatePassengerParam) -> Result<Passenger, DbErr> {
        let user_id = param.user_id;

        entity::prelude::Passenger::insert(entity::passenger::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            name: ActiveValue::Set(param.name),
            passport: ActiveValue::Set(param.passport),
            phone: ActiveValue::Set(param.phone),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::passenger::Column::UserId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.find_by_user_id(user_id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Passenger for user {} not found after creation",
                user_id
            )))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Passenger>, DbErr> {
        let result = entity::prelude::Passenger::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        result.map(with_user).transpose()
    }

    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Passenger>, DbErr> {
        let result = entity::prelude::Passenger::find()
            .filter(entity::passenger::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        result.map(with_user).transpose()
    }

    pub async fn get_all(&self) -> Result<Vec<Passenger>, DbErr> {
        entity::prelude::Passenger::find()
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::passenger::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(with_user)
            .collect()
    }

    /// Roster of a flight, ordered by passenger ID.
    pub async fn get_by_flight(&self, flight_id: i32) -> Result<Vec<Passenger>, DbErr> {
        let ids = EnrollmentRepository::new(self.db)
            .passenger_ids(flight_id)
            .await?;

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Passenger::find()
            .filter(entity::passenger::Column::Id.is_in(ids))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::passenger::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(with_user)
            .collect()
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdatePassengerParam,
    ) -> Result<Option<Passenger>, DbErr> {
        let Some(passenger) = entity::prelude::Passenger::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::passenger::ActiveModel = passenger.into();
        active.name = ActiveValue::Set(param.name);
        active.phone = ActiveValue::Set(param.phone);
        active.update(self.db).await?;

        self.find_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Passenger::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn with_user(
    (passenger, user): (entity::passenger::Model, Option<entity::user::Model>),
) -> Result<Passenger, DbErr> {
    let user = user.ok_or(DbErr::RecordNotFound(format!(
        "User {} for passenger {} not found",
        passenger.user_id, passenger.id
    )))?;

    Ok(Passenger::from_entity(passenger, &user))
}
