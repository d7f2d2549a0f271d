use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use super::DATA_SOURCE_HEADER;
use crate::fallback;
use crate::services::setup::record_counts;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct FallbackQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

fn presence(value: &Option<String>) -> &'static str {
    if value.is_some() { "SET" } else { "NOT_SET" }
}

#[actix_web::get("/debug")]
pub async fn debug(state: web::Data<AppState>) -> HttpResponse {
    let environment = json!({
        "databaseUrl": presence(&state.settings.database_url),
        "baseUrl": state.settings.public_base_url,
    });

    match record_counts(&*state.store).await {
        Ok(counts) => HttpResponse::Ok().json(json!({
            "status": "success",
            "message": "Database connection successful",
            "counts": counts,
            "environment": environment,
        })),
        Err(e) => {
            log::error!("Debug check failed: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "status": "error",
                "message": "Database connection failed",
                "error": e.to_string(),
                "environment": environment,
            }))
        }
    }
}

#[actix_web::get("/fallback-data")]
pub async fn fallback_data(req: HttpRequest, query: web::Query<FallbackQuery>) -> HttpResponse {
    let mut response = HttpResponse::Ok();
    response.insert_header((DATA_SOURCE_HEADER, "fallback"));

    match query.kind.as_deref() {
        Some("donations") => response.json(fallback::snapshot_donations()),
        Some("config") => response.json(fallback::snapshot_config()),
        _ => {
            let path = req.path();
            response.json(json!({
                "status": "success",
                "message": "Fallback data service",
                "available": {
                    "donations": format!("{path}?type=donations"),
                    "config": format!("{path}?type=config"),
                },
                "note": "This is fallback data while database connection is being restored",
            }))
        }
    }
}
