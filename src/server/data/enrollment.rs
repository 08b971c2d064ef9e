//! Flight ↔ passenger enrollment edges.

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};
use std::collections::HashMap;

pub struct EnrollmentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EnrollmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Writes the `(flight_id, passenger_id)` edge unless it already exists.
    ///
    /// The composite primary key decides the outcome, so two concurrent calls for
    /// the same pair produce exactly one row and exactly one `true`.
    ///
    /// # Returns
    /// - `Ok(true)` - The edge was created by this call
    /// - `Ok(false)` - The edge already existed
    pub async fn insert_if_absent(&self, flight_id: i32, passenger_id: i32) -> Result<bool, DbErr> {
        let inserted = entity::prelude::FlightPassenger::insert(
            entity::flight_passenger::ActiveModel {
                flight_id: ActiveValue::Set(flight_id),
                passenger_id: ActiveValue::Set(passenger_id),
            },
        )
        .on_conflict(
            OnConflict::columns([
                entity::flight_passenger::Column::FlightId,
                entity::flight_passenger::Column::PassengerId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// IDs of the passengers enrolled on `flight_id`.
    pub async fn passenger_ids(&self, flight_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::FlightPassenger::find()
            .filter(entity::flight_passenger::Column::FlightId.eq(flight_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.passenger_id).collect())
    }

    /// Counts enrollments per flight. Flights with no passengers are absent.
    pub async fn count_by_flights(&self, flight_ids: Vec<i32>) -> Result<HashMap<i32, u64>, DbErr> {
        if flight_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::FlightPassenger::find()
            .filter(entity::flight_passenger::Column::FlightId.is_in(flight_ids))
            .all(self.db)
            .await?;

        let mut counts = HashMap::new();
        for row in rows {
            *counts.entry(row.flight_id).or_insert(0) += 1;
        }

        Ok(counts)
    }
}
