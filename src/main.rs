//src/main.rs

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use car_rental_backend::config::{AppState, Config, RegistrationMode};
use car_rental_backend::routes::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    // Without a valid configuration the service must not start.
    let config = Config::from_env().context("invalid configuration")?;
    if config.registration_mode == RegistrationMode::Permissive {
        tracing::warn!(
            "REGISTRATION_MODE=permissive: self-registration accepts any role and agency_id"
        );
    }

    let bind_addr = config.bind_addr.clone();
    let bootstrap_email = config.bootstrap_admin_email.clone();
    let bootstrap_password = config.bootstrap_admin_password.clone();

    let app_state = AppState::new(config).await?;

    // One-time bootstrap: only creates the super-admin when none exists.
    let created = app_state
        .auth_service
        .ensure_super_admin(&bootstrap_email, &bootstrap_password)
        .await
        .context("failed to bootstrap the super admin")?;
    if !created {
        tracing::info!("Super admin already present, bootstrap skipped");
    }

    let app = build_router(app_state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
