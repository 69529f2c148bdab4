// src/services/password.rs

use crate::common::error::AppError;

// bcrypt is CPU bound, so both calls run on the blocking pool.

pub async fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    let password = password.to_owned();
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(&password, cost))
        .await
        .map_err(|e| anyhow::anyhow!("password hashing task failed: {}", e))??;
    Ok(hashed)
}

pub async fn verify_password(password: &str, password_hash: &str) -> Result<bool, AppError> {
    let password = password.to_owned();
    let password_hash = password_hash.to_owned();
    let is_valid = tokio::task::spawn_blocking(move || bcrypt::verify(&password, &password_hash))
        .await
        .map_err(|e| anyhow::anyhow!("password verification task failed: {}", e))??;
    Ok(is_valid)
}
