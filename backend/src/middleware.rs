use actix_web::{dev::Payload, error::ErrorUnauthorized, web, FromRequest, HttpRequest};
use std::future::Future;
use std::pin::Pin;
use store::models::user::UserProfile;

use crate::auth::SESSION_COOKIE;
use crate::services::accounts;
use crate::state::AppState;

/// The signed-in admin, resolved from the `admin_auth` session cookie.
#[derive(Debug)]
pub struct AuthenticatedUser(pub UserProfile);

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = req.cookie(SESSION_COOKIE).map(|c| c.value().to_string());

        Box::pin(async move {
            let Some(state) = state else {
                log::error!("AppState missing from app data");
                return Err(ErrorUnauthorized("Invalid session"));
            };
            accounts::current_user(&*state.store, &state.keys, token.as_deref())
                .await
                .map(AuthenticatedUser)
                .ok_or_else(|| ErrorUnauthorized("Invalid session"))
        })
    }
}
