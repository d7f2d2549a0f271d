pub mod admin;
pub mod auth;
pub mod config;
pub mod diagnostics;
pub mod donations;

pub use admin::*;
pub use auth::*;
pub use config::*;
pub use diagnostics::*;
pub use donations::*;

use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::Value;

use crate::services::Served;

pub const DATA_SOURCE_HEADER: &str = "X-Data-Source";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(get_config)
            .service(update_config)
            .service(list_donations)
            .service(create_donation)
            .service(update_donation)
            .service(login)
            .service(logout)
            .service(me)
            .service(seed_user)
            .service(setup)
            .service(migrate_local_data)
            .service(debug)
            .service(fallback_data),
    );
}

/// 200 with the payload, tagged with where it came from.
pub(crate) fn served_json<T: Serialize>(served: Served<T>) -> HttpResponse {
    let source = served.source();
    HttpResponse::Ok()
        .insert_header((DATA_SOURCE_HEADER, source))
        .json(served.into_inner())
}

/// Unparseable bodies become `null` and fail validation like any other bad shape.
pub(crate) fn json_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or(Value::Null)
}
