use actix_web::web;
use store::models::user::{NewUser, UserProfile};
use store::user::{hash_password, verify_password};
use store::{StoreError, UserRepository};

use crate::auth::{create_jwt, decode_jwt, SessionKeys};
use crate::error::ApiError;
use crate::settings::Settings;

pub const ADMIN_ROLE: &str = "admin";
const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug)]
pub struct Session {
    pub user: UserProfile,
    pub token: String,
}

#[derive(Debug, PartialEq)]
pub enum SeedOutcome {
    Created(UserProfile),
    AlreadyExists(UserProfile),
    /// The store could not be reached; nothing was written.
    Unavailable,
}

pub async fn login<R>(
    store: &R,
    keys: &SessionKeys,
    email: &str,
    password: &str,
) -> Result<Session, ApiError>
where
    R: UserRepository + ?Sized,
{
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let Some(user) = store.find_user_by_email(email).await? else {
        log::info!("Login failed: unknown user {}", email);
        return Err(ApiError::Authentication(INVALID_CREDENTIALS.to_string()));
    };

    let password = password.to_string();
    let password_hash = user.password_hash.clone();
    let valid = web::block(move || verify_password(&password, &password_hash)).await?;
    if !valid {
        log::info!("Login failed: wrong password for {}", email);
        return Err(ApiError::Authentication(INVALID_CREDENTIALS.to_string()));
    }

    let token = create_jwt(keys, user.id)?;

    log::info!("Login successful for {}", email);
    Ok(Session {
        user: UserProfile::from(&user),
        token,
    })
}

/// Resolves the session token to a user. Any failure, including a store
/// error, reads as "not signed in".
pub async fn current_user<R>(store: &R, keys: &SessionKeys, token: Option<&str>) -> Option<UserProfile>
where
    R: UserRepository + ?Sized,
{
    let claims = decode_jwt(keys, token?).ok()?;
    match store.find_user_by_id(claims.sub).await {
        Ok(user) => user.as_ref().map(UserProfile::from),
        Err(e) => {
            log::warn!("Session lookup failed: {}", e);
            None
        }
    }
}

/// Creates the configured admin account unless it already exists.
pub async fn ensure_admin<R>(store: &R, settings: &Settings) -> Result<SeedOutcome, ApiError>
where
    R: UserRepository + ?Sized,
{
    match store.find_user_by_email(&settings.admin_email).await {
        Ok(Some(existing)) => return Ok(SeedOutcome::AlreadyExists(UserProfile::from(&existing))),
        Ok(None) => {}
        Err(e) if e.is_unavailable() => {
            log::warn!("Admin seeding skipped, store unavailable: {}", e);
            return Ok(SeedOutcome::Unavailable);
        }
        Err(e) => return Err(e.into()),
    }

    let password = settings.admin_password.clone();
    let cost = settings.bcrypt_cost;
    let password_hash = web::block(move || hash_password(&password, cost)).await??;

    let new_user = NewUser {
        email: settings.admin_email.clone(),
        password_hash,
        role: ADMIN_ROLE.to_string(),
    };
    match store.insert_user(new_user).await {
        Ok(user) => {
            log::info!("Created admin user {}", user.email);
            Ok(SeedOutcome::Created(UserProfile::from(&user)))
        }
        // lost a race with a concurrent seed
        Err(StoreError::Duplicate(_)) => match store.find_user_by_email(&settings.admin_email).await? {
            Some(existing) => Ok(SeedOutcome::AlreadyExists(UserProfile::from(&existing))),
            None => Err(StoreError::Duplicate("email").into()),
        },
        Err(e) => Err(e.into()),
    }
}

/// Writes the configured admin credentials, creating the account or
/// resetting its password and role.
pub async fn upsert_admin<R>(store: &R, settings: &Settings) -> Result<UserProfile, ApiError>
where
    R: UserRepository + ?Sized,
{
    let password = settings.admin_password.clone();
    let cost = settings.bcrypt_cost;
    let password_hash = web::block(move || hash_password(&password, cost)).await??;

    let user = store
        .upsert_user(NewUser {
            email: settings.admin_email.clone(),
            password_hash,
            role: ADMIN_ROLE.to_string(),
        })
        .await?;
    Ok(UserProfile::from(&user))
}
