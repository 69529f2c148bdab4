// src/config.rs

use std::{env, str::FromStr, sync::Arc, time::Duration};

use anyhow::{anyhow, bail, Context};
use jsonwebtoken::Algorithm;
use sqlx::postgres::PgPoolOptions;

use crate::{
    db::Stores,
    services::{
        agency::AgencyService, analytics::AnalyticsService, auth::AuthService,
        booking::BookingService, fleet::FleetService, token::TokenService,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

/// Who may claim which role through `/auth/register`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationMode {
    /// Role and agency_id are stored exactly as supplied.
    Permissive,
    /// Only `client` accounts without an agency can self-register.
    Strict,
}

impl FromStr for RegistrationMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            other => bail!("unknown REGISTRATION_MODE '{}'", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_algorithm: Algorithm,
    pub jwt_expiration_hours: i64,
    pub bind_addr: String,
    pub registration_mode: RegistrationMode,
    pub bcrypt_cost: u32,
    pub bootstrap_admin_email: String,
    pub bootstrap_admin_password: String,
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| anyhow!("invalid {}='{}': {}", name, raw, e)),
        Err(_) => Ok(default),
    }
}

/// Only HMAC algorithms can be used with a shared secret.
pub fn parse_jwt_algorithm(raw: &str) -> anyhow::Result<Algorithm> {
    let algorithm = Algorithm::from_str(raw)
        .map_err(|e| anyhow!("invalid JWT_ALGORITHM '{}': {}", raw, e))?;
    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(algorithm),
        other => bail!("JWT_ALGORITHM {:?} is not an HMAC algorithm", other),
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let store_backend = var_or("STORE_BACKEND", "postgres").to_ascii_lowercase();
        let store_backend = match store_backend.as_str() {
            "postgres" => StoreBackend::Postgres,
            "memory" => StoreBackend::Memory,
            other => bail!("unknown STORE_BACKEND '{}'", other),
        };

        let database_url = env::var("DATABASE_URL").ok();
        if store_backend == StoreBackend::Postgres && database_url.is_none() {
            bail!("DATABASE_URL must be set when STORE_BACKEND=postgres");
        }

        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        if jwt_secret.is_empty() {
            bail!("JWT_SECRET must not be empty");
        }

        let jwt_expiration_hours = parse_var("JWT_EXPIRATION_HOURS", 24i64)?;
        if jwt_expiration_hours <= 0 {
            bail!("JWT_EXPIRATION_HOURS must be positive");
        }

        Ok(Self {
            store_backend,
            database_url,
            database_max_connections: parse_var("DATABASE_MAX_CONNECTIONS", 5u32)?,
            jwt_secret,
            jwt_algorithm: parse_jwt_algorithm(&var_or("JWT_ALGORITHM", "HS256"))?,
            jwt_expiration_hours,
            bind_addr: var_or("BIND_ADDR", "0.0.0.0:8001"),
            registration_mode: parse_var("REGISTRATION_MODE", RegistrationMode::Permissive)?,
            bcrypt_cost: parse_var("BCRYPT_COST", bcrypt::DEFAULT_COST)?,
            bootstrap_admin_email: var_or("BOOTSTRAP_ADMIN_EMAIL", "admin@carrentalsaas.com"),
            bootstrap_admin_password: var_or("BOOTSTRAP_ADMIN_PASSWORD", "admin123"),
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub auth_service: AuthService,
    pub agency_service: AgencyService,
    pub fleet_service: FleetService,
    pub booking_service: BookingService,
    pub analytics_service: AnalyticsService,
}

impl AppState {
    /// Connects to the configured store and runs the migrations.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let stores = match config.store_backend {
            StoreBackend::Postgres => {
                let database_url = config
                    .database_url
                    .as_deref()
                    .context("DATABASE_URL must be set")?;

                let db_pool = PgPoolOptions::new()
                    .max_connections(config.database_max_connections)
                    .acquire_timeout(Duration::from_secs(3))
                    .connect(database_url)
                    .await
                    .context("failed to connect to the database")?;
                tracing::info!("Database connection established");

                sqlx::migrate!()
                    .run(&db_pool)
                    .await
                    .context("failed to run database migrations")?;
                tracing::info!("Database migrations applied");

                Stores::postgres(db_pool)
            }
            StoreBackend::Memory => {
                tracing::warn!("Using the in-memory store; data is lost on shutdown");
                Stores::in_memory()
            }
        };

        Ok(Self::from_stores(config, stores))
    }

    // Wires every service over an already-built set of stores.
    pub fn from_stores(config: Config, stores: Stores) -> Self {
        let tokens = TokenService::new(
            &config.jwt_secret,
            config.jwt_algorithm,
            chrono::Duration::hours(config.jwt_expiration_hours),
        );

        let auth_service = AuthService::new(
            stores.users.clone(),
            tokens,
            config.bcrypt_cost,
            config.registration_mode,
        );
        let agency_service = AgencyService::new(stores.agencies.clone());
        let fleet_service = FleetService::new(stores.cars.clone(), stores.agencies.clone());
        let booking_service = BookingService::new(stores.bookings.clone(), stores.cars.clone());
        let analytics_service = AnalyticsService::new(stores);

        Self {
            config: Arc::new(config),
            auth_service,
            agency_service,
            fleet_service,
            booking_service,
            analytics_service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_hmac_algorithms_are_accepted() {
        assert_eq!(parse_jwt_algorithm("HS256").unwrap(), Algorithm::HS256);
        assert_eq!(parse_jwt_algorithm("HS512").unwrap(), Algorithm::HS512);
        assert!(parse_jwt_algorithm("RS256").is_err());
        assert!(parse_jwt_algorithm("none").is_err());
    }

    #[test]
    fn registration_mode_parses_case_insensitively() {
        assert_eq!(
            "STRICT".parse::<RegistrationMode>().unwrap(),
            RegistrationMode::Strict
        );
        assert_eq!(
            "permissive".parse::<RegistrationMode>().unwrap(),
            RegistrationMode::Permissive
        );
        assert!("open".parse::<RegistrationMode>().is_err());
    }
}
