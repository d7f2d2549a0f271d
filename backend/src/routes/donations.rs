use actix_web::{web, HttpResponse};
use serde::Deserialize;

use super::{json_body, served_json};
use crate::error::ApiError;
use crate::services::ledger;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListQuery {
    pub limit: Option<String>,
}

#[actix_web::get("/donations")]
pub async fn list_donations(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> HttpResponse {
    let limit = ledger::parse_limit(query.limit.as_deref());
    served_json(ledger::list_donations(&*state.store, limit).await)
}

#[actix_web::post("/donations")]
pub async fn create_donation(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let donation = ledger::create_donation(&*state.store, &json_body(&body)).await?;
    Ok(HttpResponse::Created().json(donation))
}

#[actix_web::patch("/donations/{id}")]
pub async fn update_donation(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let donation = ledger::update_status(&*state.store, &id, &json_body(&body)).await?;
    Ok(HttpResponse::Ok().json(donation))
}
