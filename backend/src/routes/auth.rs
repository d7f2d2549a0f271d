use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::auth::{cleared_session_cookie, session_cookie};
use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::services::accounts;
use crate::state::AppState;

#[derive(Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[actix_web::post("/admin/login")]
pub async fn login(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let req: LoginRequest = serde_json::from_slice(&body).unwrap_or_default();
    let session = accounts::login(&*state.store, &state.keys, req.email.trim(), &req.password).await?;

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(session.token, state.settings.cookie_secure))
        .json(json!({
            "ok": true,
            "user": session.user,
            "message": "Login successful",
        })))
}

#[actix_web::post("/admin/logout")]
pub async fn logout(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .cookie(cleared_session_cookie(state.settings.cookie_secure))
        .json(json!({ "ok": true }))
}

#[actix_web::get("/me")]
pub async fn me(user: Option<AuthenticatedUser>) -> HttpResponse {
    match user {
        Some(AuthenticatedUser(user)) => HttpResponse::Ok().json(json!({ "ok": true, "user": user })),
        None => HttpResponse::Unauthorized().json(json!({ "ok": false })),
    }
}
