// src/models/analytics.rs

use serde::Serialize;
use utoipa::ToSchema;

/// Platform-wide counters shown on the super-admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PlatformAnalytics {
    pub total_agencies: i64,
    pub active_agencies: i64,
    pub total_cars: i64,
    pub total_bookings: i64,
}
