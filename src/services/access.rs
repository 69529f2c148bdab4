// src/services/access.rs

//! Role and tenant rules shared by every guarded route.
//!
//! Authorization is always the same two steps: the caller's role must be in
//! the route's role set, then (unless the caller is a super-admin) the
//! caller's agency must be the agency the request targets.

use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::auth::{Role, User},
};

pub fn ensure_role(user: &User, allowed: &[Role]) -> Result<(), AppError> {
    if allowed.contains(&user.role) {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "Insufficient permissions for role '{}'",
            user.role
        )))
    }
}

/// Super-admins cross every tenant boundary. Everyone else must belong to
/// `agency_id`; a user without an agency never matches.
pub fn ensure_tenant(user: &User, agency_id: Uuid) -> Result<(), AppError> {
    if user.role == Role::SuperAdmin || user.agency_id == Some(agency_id) {
        Ok(())
    } else {
        Err(AppError::Forbidden("Access denied for this agency".to_string()))
    }
}

pub fn authorize(user: &User, allowed: &[Role], tenant: Option<Uuid>) -> Result<(), AppError> {
    ensure_role(user, allowed)?;
    match tenant {
        Some(agency_id) => ensure_tenant(user, agency_id),
        None => Ok(()),
    }
}
