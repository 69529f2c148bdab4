// src/services/auth.rs

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::RegistrationMode,
    db::UserStore,
    models::auth::{RegisterUserPayload, Role, User},
    services::{
        password::{hash_password, verify_password},
        token::TokenService,
    },
};

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: TokenService,
    bcrypt_cost: u32,
    registration_mode: RegistrationMode,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        tokens: TokenService,
        bcrypt_cost: u32,
        registration_mode: RegistrationMode,
    ) -> Self {
        Self {
            users,
            tokens,
            bcrypt_cost,
            registration_mode,
        }
    }

    /// Creates the account and returns a fresh token for it.
    ///
    /// In permissive mode the requested role and agency are stored unchecked,
    /// so anyone can register as staff of any agency or as a super-admin.
    pub async fn register_user(&self, payload: RegisterUserPayload) -> Result<(String, User), AppError> {
        if self.registration_mode == RegistrationMode::Strict
            && (payload.role != Role::Client || payload.agency_id.is_some())
        {
            return Err(AppError::RegistrationNotAllowed);
        }

        if self.users.find_by_email(&payload.email).await?.is_some() {
            return Err(AppError::EmailAlreadyExists);
        }

        let password_hash = hash_password(&payload.password, self.bcrypt_cost).await?;

        let user = User {
            user_id: Uuid::new_v4(),
            email: payload.email,
            password_hash,
            first_name: payload.first_name,
            last_name: payload.last_name,
            role: payload.role,
            agency_id: payload.agency_id,
            created_at: Utc::now(),
        };

        // A concurrent registration with the same email loses here.
        self.users.insert(&user).await?;

        let token = self.tokens.issue(user.user_id)?;
        Ok((token, user))
    }

    pub async fn login_user(&self, email: &str, password: &str) -> Result<(String, User), AppError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash).await? {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.user_id)?;
        Ok((token, user))
    }

    /// Resolves a bearer token to the user it was issued for.
    pub async fn validate_token(&self, token: &str) -> Result<User, AppError> {
        let claims = self.tokens.verify(token)?;

        self.users
            .find_by_id(claims.sub)
            .await?
            .ok_or(AppError::InvalidToken)
    }

    /// Creates the bootstrap super-admin unless one already exists.
    ///
    /// Returns `true` when an account was created. An existing super-admin is
    /// never touched, so its password is not rotated.
    pub async fn ensure_super_admin(&self, email: &str, password: &str) -> Result<bool, AppError> {
        if self.users.count_by_role(Role::SuperAdmin).await? > 0 {
            return Ok(false);
        }

        let password_hash = hash_password(password, self.bcrypt_cost).await?;
        let admin = User {
            user_id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash,
            first_name: "Super".to_string(),
            last_name: "Admin".to_string(),
            role: Role::SuperAdmin,
            agency_id: None,
            created_at: Utc::now(),
        };
        self.users.insert(&admin).await?;

        tracing::info!("Super admin created: {}", email);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use jsonwebtoken::Algorithm;

    fn service_with(users: Arc<MemoryStore>, mode: RegistrationMode) -> AuthService {
        let tokens = TokenService::new("test-secret", Algorithm::HS256, chrono::Duration::hours(24));
        AuthService::new(users, tokens, 4, mode)
    }

    fn service(mode: RegistrationMode) -> AuthService {
        service_with(Arc::new(MemoryStore::new()), mode)
    }

    fn payload(email: &str, role: Role, agency_id: Option<Uuid>) -> RegisterUserPayload {
        RegisterUserPayload {
            email: email.to_string(),
            password: "secret123".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            role,
            agency_id,
        }
    }

    #[tokio::test]
    async fn second_registration_with_same_email_conflicts() {
        let auth = service(RegistrationMode::Permissive);
        auth.register_user(payload("jane@example.com", Role::Client, None))
            .await
            .unwrap();

        let err = auth
            .register_user(payload("jane@example.com", Role::Client, None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EmailAlreadyExists));
    }

    #[tokio::test]
    async fn login_token_resolves_to_the_same_user() {
        let auth = service(RegistrationMode::Permissive);
        let (_, registered) = auth
            .register_user(payload("jane@example.com", Role::Client, None))
            .await
            .unwrap();

        let (token, logged_in) = auth.login_user("jane@example.com", "secret123").await.unwrap();
        assert_eq!(logged_in.user_id, registered.user_id);

        let resolved = auth.validate_token(&token).await.unwrap();
        assert_eq!(resolved.user_id, registered.user_id);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_look_the_same() {
        let auth = service(RegistrationMode::Permissive);
        auth.register_user(payload("jane@example.com", Role::Client, None))
            .await
            .unwrap();

        assert!(matches!(
            auth.login_user("jane@example.com", "wrong-password").await,
            Err(AppError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.login_user("nobody@example.com", "secret123").await,
            Err(AppError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn permissive_mode_keeps_claimed_role_and_agency() {
        let auth = service(RegistrationMode::Permissive);
        let agency = Uuid::new_v4();
        let (_, user) = auth
            .register_user(payload("boss@example.com", Role::AgencyAdmin, Some(agency)))
            .await
            .unwrap();

        assert_eq!(user.role, Role::AgencyAdmin);
        assert_eq!(user.agency_id, Some(agency));
    }

    #[tokio::test]
    async fn strict_mode_only_registers_clients() {
        let auth = service(RegistrationMode::Strict);

        assert!(matches!(
            auth.register_user(payload("boss@example.com", Role::SuperAdmin, None)).await,
            Err(AppError::RegistrationNotAllowed)
        ));
        assert!(matches!(
            auth.register_user(payload("c@example.com", Role::Client, Some(Uuid::new_v4())))
                .await,
            Err(AppError::RegistrationNotAllowed)
        ));
        assert!(auth
            .register_user(payload("c@example.com", Role::Client, None))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn token_for_a_missing_user_is_invalid() {
        let tokens = TokenService::new("test-secret", Algorithm::HS256, chrono::Duration::hours(24));
        let token = tokens.issue(Uuid::new_v4()).unwrap();

        let auth = service(RegistrationMode::Permissive);
        assert!(matches!(
            auth.validate_token(&token).await,
            Err(AppError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn bootstrap_runs_once() {
        let store = Arc::new(MemoryStore::new());
        let auth = service_with(store.clone(), RegistrationMode::Permissive);

        assert!(auth.ensure_super_admin("admin@carrentalsaas.com", "admin123").await.unwrap());
        assert!(!auth.ensure_super_admin("admin@carrentalsaas.com", "admin123").await.unwrap());

        // The first password still works: nothing was rotated.
        let (_, admin) = auth
            .login_user("admin@carrentalsaas.com", "admin123")
            .await
            .unwrap();
        assert_eq!(admin.role, Role::SuperAdmin);
        assert_eq!(store.count_by_role(Role::SuperAdmin).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn bootstrap_skips_when_any_super_admin_exists() {
        let auth = service(RegistrationMode::Permissive);
        auth.register_user(payload("other@example.com", Role::SuperAdmin, None))
            .await
            .unwrap();

        assert!(!auth.ensure_super_admin("admin@carrentalsaas.com", "admin123").await.unwrap());
        assert!(matches!(
            auth.login_user("admin@carrentalsaas.com", "admin123").await,
            Err(AppError::InvalidCredentials)
        ));
    }
}
