use actix_web::{web, HttpResponse};
use serde_json::json;
use store::models::project_config::ConfigFields;

use super::served_json;
use crate::services::config as config_service;
use crate::state::AppState;

#[actix_web::get("/config")]
pub async fn get_config(state: web::Data<AppState>) -> HttpResponse {
    served_json(config_service::get_config(&*state.store).await)
}

#[actix_web::post("/config")]
pub async fn update_config(state: web::Data<AppState>, body: web::Bytes) -> HttpResponse {
    let fields: ConfigFields = match serde_json::from_slice(&body) {
        Ok(fields) => fields,
        Err(e) => {
            return HttpResponse::BadRequest().json(json!({
                "success": false,
                "error": "Invalid configuration payload",
                "details": e.to_string(),
            }));
        }
    };

    match config_service::upsert_config(&*state.store, fields).await {
        Ok(config) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Configuration updated successfully",
            "config": config,
        })),
        Err(e) => {
            log::error!("Config update error: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Failed to update configuration",
            }))
        }
    }
}
