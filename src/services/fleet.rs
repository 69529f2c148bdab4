// src/services/fleet.rs

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{AgencyStore, CarStore},
    models::{
        agency::Agency,
        car::{Car, CarStatus, CreateCarPayload},
    },
};

/// Car inventory of the agencies.
#[derive(Clone)]
pub struct FleetService {
    cars: Arc<dyn CarStore>,
    agencies: Arc<dyn AgencyStore>,
}

impl FleetService {
    pub fn new(cars: Arc<dyn CarStore>, agencies: Arc<dyn AgencyStore>) -> Self {
        Self { cars, agencies }
    }

    // The caller has already been authorized for `payload.agency_id`.
    pub async fn create_car(&self, payload: CreateCarPayload) -> Result<Car, AppError> {
        if self.agencies.find_by_id(payload.agency_id).await?.is_none() {
            return Err(AppError::AgencyNotFound);
        }

        let car = Car {
            car_id: Uuid::new_v4(),
            title: payload.title,
            model: payload.model,
            brand: payload.brand,
            year: payload.year,
            plate_number: payload.plate_number,
            color: payload.color,
            price_per_day: payload.price_per_day,
            features: payload.features,
            agency_id: payload.agency_id,
            status: CarStatus::Available,
            created_at: Utc::now(),
        };

        self.cars.insert(&car).await?;
        tracing::info!("Car {} added to agency {}", car.car_id, car.agency_id);
        Ok(car)
    }

    pub async fn list_agency_cars(&self, agency_id: Uuid) -> Result<Vec<Car>, AppError> {
        self.cars.list_by_agency(agency_id, None).await
    }

    /// Available cars of an agency together with the agency record.
    ///
    /// These are two independent reads; an agency changed in between is
    /// tolerated.
    pub async fn public_catalogue(
        &self,
        agency_id: Uuid,
    ) -> Result<(Option<Agency>, Vec<Car>), AppError> {
        let cars = self
            .cars
            .list_by_agency(agency_id, Some(CarStatus::Available))
            .await?;
        let agency = self.agencies.find_by_id(agency_id).await?;
        Ok((agency, cars))
    }
}
