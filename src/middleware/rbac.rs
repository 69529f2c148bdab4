// src/middleware/rbac.rs

use axum::{extract::FromRequestParts, http::request::Parts};
use std::marker::PhantomData;

use crate::{
    common::error::AppError,
    models::auth::{Role, User},
    services::access,
};

/// A set of roles allowed on a group of routes.
pub trait RoleSet: Send + Sync + 'static {
    fn roles() -> &'static [Role];
}

/// Guard extractor: rejects with 403 unless the authenticated user's role is
/// in `T`. Tenant checks are left to the handler, which knows the target
/// agency.
pub struct RequireRole<T>(pub PhantomData<T>);

impl<T, S> FromRequestParts<S> for RequireRole<T>
where
    T: RoleSet,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<User>()
            .ok_or(AppError::MissingToken)?;

        access::authorize(user, T::roles(), None)?;

        Ok(RequireRole(PhantomData))
    }
}

// ---
// Role sets
// ---

pub struct SuperAdminOnly;
impl RoleSet for SuperAdminOnly {
    fn roles() -> &'static [Role] {
        &[Role::SuperAdmin]
    }
}

// Agency-scoped routes. Super-admins are included so they can act on any agency.
pub struct AgencyStaff;
impl RoleSet for AgencyStaff {
    fn roles() -> &'static [Role] {
        &[Role::AgencyAdmin, Role::Staff, Role::SuperAdmin]
    }
}
