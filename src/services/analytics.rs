// src/services/analytics.rs

use crate::{
    common::error::AppError,
    db::Stores,
    models::{agency::AgencyStatus, analytics::PlatformAnalytics},
};

#[derive(Clone)]
pub struct AnalyticsService {
    stores: Stores,
}

impl AnalyticsService {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    pub async fn platform_summary(&self) -> Result<PlatformAnalytics, AppError> {
        Ok(PlatformAnalytics {
            total_agencies: self.stores.agencies.count(None).await?,
            active_agencies: self.stores.agencies.count(Some(AgencyStatus::Active)).await?,
            total_cars: self.stores.cars.count().await?,
            total_bookings: self.stores.bookings.count().await?,
        })
    }
}
