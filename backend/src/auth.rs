//! Signed session tokens carried in the `admin_auth` cookie.
//!
//! The cookie holds an HS256 JWT whose subject is the user id, so a leaked
//! user id alone no longer grants a session. Tokens expire after 24 hours,
//! matching the cookie's `Max-Age`.

use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "admin_auth";
pub const SESSION_TTL_HOURS: i64 = 24;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(user_id: Uuid, issued_at: DateTime<Utc>) -> Self {
        Self {
            sub: user_id,
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::hours(SESSION_TTL_HOURS)).timestamp(),
        }
    }
}

#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionKeys {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

pub fn create_jwt(keys: &SessionKeys, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
    encode_claims(keys, &Claims::new(user_id, Utc::now()))
}

pub fn encode_claims(keys: &SessionKeys, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
    encode(&Header::default(), claims, &keys.encoding)
}

pub fn decode_jwt(keys: &SessionKeys, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(token, &keys.decoding, &Validation::default())?;
    Ok(data.claims)
}

pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(CookieDuration::hours(SESSION_TTL_HOURS))
        .finish()
}

pub fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(CookieDuration::ZERO)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trips_user_id() {
        let keys = SessionKeys::new(b"test-secret");
        let user_id = Uuid::new_v4();

        let token = create_jwt(&keys, user_id).unwrap();
        let claims = decode_jwt(&keys, &token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.exp - claims.iat, SESSION_TTL_HOURS * 3600);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = create_jwt(&SessionKeys::new(b"one"), Uuid::new_v4()).unwrap();
        assert!(decode_jwt(&SessionKeys::new(b"two"), &token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let keys = SessionKeys::new(b"test-secret");
        let issued = Utc::now() - Duration::hours(SESSION_TTL_HOURS + 1);
        let token = encode_claims(&keys, &Claims::new(Uuid::new_v4(), issued)).unwrap();
        assert!(decode_jwt(&keys, &token).is_err());
    }

    #[test]
    fn raw_user_id_is_not_a_session() {
        let keys = SessionKeys::new(b"test-secret");
        assert!(decode_jwt(&keys, &Uuid::new_v4().to_string()).is_err());
    }

    #[test]
    fn session_cookie_keeps_contract() {
        let cookie = session_cookie("token".to_string(), false);
        assert_eq!(cookie.name(), "admin_auth");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(CookieDuration::hours(24)));
    }
}
