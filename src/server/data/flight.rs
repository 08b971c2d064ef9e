use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::{airport::AirportRepository, enrollment::EnrollmentRepository},
    model::flight::{Flight, ValidFlightParam},
};

pub struct FlightRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FlightRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a flight and returns it with both airports resolved
    pub async fn create(&self, param: ValidFlightParam) -> Result<Flight, DbErr> {
        let flight = entity::flight::ActiveModel {
            name: ActiveValue::Set(param.name),
            origin_id: ActiveValue::Set(param.origin_id),
            destination_id: ActiveValue::Set(param.destination_id),
            distance_km: ActiveValue::Set(param.distance_km),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(flight.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Flight with id {} not found after creation",
                flight.id
            )))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Flight>, DbErr> {
        let Some(flight) = entity::prelude::Flight::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.assemble(vec![flight]).await?.pop())
    }

    pub async fn get_all(&self) -> Result<Vec<Flight>, DbErr> {
        let flights = entity::prelude::Flight::find()
            .order_by_asc(entity::flight::Column::Id)
            .all(self.db)
            .await?;

        self.assemble(flights).await
    }

    /// Flights the passenger is enrolled on, oldest first
    pub async fn get_by_passenger(&self, passenger_id: i32) -> Result<Vec<Flight>, DbErr> {
        let flights = entity::prelude::Flight::find()
            .inner_join(entity::prelude::FlightPassenger)
            .filter(entity::flight_passenger::Column::PassengerId.eq(passenger_id))
            .order_by_asc(entity::flight::Column::Id)
            .all(self.db)
            .await?;

        self.assemble(flights).await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Flight::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Replaces every editable field of a flight.
    ///
    /// Enrollment edges are untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Flight))` - The updated flight
    /// - `Ok(None)` - No flight with that ID
    pub async fn update(&self, id: i32, param: ValidFlightParam) -> Result<Option<Flight>, DbErr> {
        let Some(flight) = entity::prelude::Flight::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::flight::ActiveModel = flight.into();
        active.name = ActiveValue::Set(param.name);
        active.origin_id = ActiveValue::Set(param.origin_id);
        active.destination_id = ActiveValue::Set(param.destination_id);
        active.distance_km = ActiveValue::Set(param.distance_km);
        active.update(self.db).await?;

        self.get_by_id(id).await
    }

    /// Deletes a flight along with its enrollment edges.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Flight::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Resolves airports and passenger counts for a batch of flight rows.
    async fn assemble(&self, flights: Vec<entity::flight::Model>) -> Result<Vec<Flight>, DbErr> {
        if flights.is_empty() {
            return Ok(Vec::new());
        }

        let airport_ids: Vec<i32> = flights
            .iter()
            .flat_map(|f| [f.origin_id, f.destination_id])
            .collect();
        let flight_ids: Vec<i32> = flights.iter().map(|f| f.id).collect();

        let airports = AirportRepository::new(self.db)
            .get_by_ids(airport_ids)
            .await?;
        let counts = EnrollmentRepository::new(self.db)
            .count_by_flights(flight_ids)
            .await?;

        flights
            .into_iter()
            .map(|flight| {
                let origin = airports.get(&flight.origin_id).cloned().ok_or(
                    DbErr::RecordNotFound(format!(
                        "Origin airport {} for flight {} not found",
                        flight.origin_id, flight.id
                    )),
                )?;
                let destination = airports.get(&flight.destination_id).cloned().ok_or(
                    DbErr::RecordNotFound(format!(
                        "Destination airport {} for flight {} not found",
                        flight.destination_id, flight.id
                    )),
                )?;
                let count = counts.get(&flight.id).copied().unwrap_or(0);

                Ok(Flight::from_entity(flight, origin, destination, count))
            })
            .collect()
    }
}
