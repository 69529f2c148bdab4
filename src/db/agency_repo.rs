// src/db/agency_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::store::AgencyStore,
    models::agency::{Agency, AgencyStatus},
};

#[derive(Clone)]
pub struct AgencyRepository {
    pool: PgPool,
}

impl AgencyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AgencyStore for AgencyRepository {
    async fn find_by_id(&self, agency_id: Uuid) -> Result<Option<Agency>, AppError> {
        let agency = sqlx::query_as::<_, Agency>("SELECT * FROM agencies WHERE agency_id = $1")
            .bind(agency_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(agency)
    }

    async fn list_all(&self) -> Result<Vec<Agency>, AppError> {
        let agencies =
            sqlx::query_as::<_, Agency>("SELECT * FROM agencies ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(agencies)
    }

    async fn insert(&self, agency: &Agency) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO agencies
                (agency_id, name, email, phone, address, description, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(agency.agency_id)
        .bind(&agency.name)
        .bind(&agency.email)
        .bind(&agency.phone)
        .bind(&agency.address)
        .bind(&agency.description)
        .bind(agency.status)
        .bind(agency.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn count(&self, status: Option<AgencyStatus>) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM agencies WHERE ($1::agency_status IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }
}
