// src/services/agency.rs

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::AgencyStore,
    models::agency::{Agency, AgencyStatus, CreateAgencyPayload},
};

#[derive(Clone)]
pub struct AgencyService {
    agencies: Arc<dyn AgencyStore>,
}

impl AgencyService {
    pub fn new(agencies: Arc<dyn AgencyStore>) -> Self {
        Self { agencies }
    }

    pub async fn create_agency(&self, payload: CreateAgencyPayload) -> Result<Agency, AppError> {
        let agency = Agency {
            agency_id: Uuid::new_v4(),
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            address: payload.address,
            description: payload.description,
            status: AgencyStatus::Active,
            created_at: Utc::now(),
        };

        self.agencies.insert(&agency).await?;
        tracing::info!("Agency created: {} ({})", agency.name, agency.agency_id);
        Ok(agency)
    }

    pub async fn list_agencies(&self) -> Result<Vec<Agency>, AppError> {
        self.agencies.list_all().await
    }
}
