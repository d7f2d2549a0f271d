use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde_json::json;

use crate::error::ApiError;
use crate::services::accounts::{self, SeedOutcome};
use crate::services::setup as setup_service;
use crate::state::AppState;

#[actix_web::post("/admin/seed-user")]
pub async fn seed_user(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let body = match accounts::ensure_admin(&*state.store, &state.settings).await? {
        SeedOutcome::Created(user) => json!({
            "message": "Admin user created successfully",
            "user": user,
        }),
        SeedOutcome::AlreadyExists(user) => json!({
            "message": "Admin user already exists",
            "user": user,
        }),
        SeedOutcome::Unavailable => json!({
            "message": "Database not available - using fallback authentication",
            "fallback": true,
        }),
    };
    Ok(HttpResponse::Ok().json(body))
}

/// Always 200: a failed step shows up as a `null` in `data`.
#[actix_web::post("/setup")]
pub async fn setup(state: web::Data<AppState>) -> HttpResponse {
    let report = setup_service::run_setup(&*state.store, &state.settings).await;
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Database setup completed successfully",
        "data": report,
    }))
}

#[actix_web::post("/migrate-local-data")]
pub async fn migrate_local_data(state: web::Data<AppState>) -> HttpResponse {
    match setup_service::migrate(&*state.store, &state.settings).await {
        Ok(report) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Data migration completed successfully!",
            "counts": report.counts,
            "data": report,
            "timestamp": Utc::now(),
        })),
        Err(e) => {
            log::error!("Migration failed: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Migration failed",
                "error": e.to_string(),
            }))
        }
    }
}
