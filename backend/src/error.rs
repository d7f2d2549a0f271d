use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use store::StoreError;

/// Form- and field-level validation messages, shaped as
/// `{"formErrors": [...], "fieldErrors": {"field": [...]}}`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    pub form_errors: Vec<String>,
    pub field_errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn form(&mut self, message: impl Into<String>) {
        self.form_errors.push(message.into());
    }

    pub fn field(&mut self, field: &str, message: impl Into<String>) {
        self.field_errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.form_errors.is_empty() && self.field_errors.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.field_errors.contains_key(field)
    }

    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(FieldErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Authentication(String),

    #[error("{0}")]
    NotFound(String),

    #[error("store error: {0}")]
    Persistence(#[from] StoreError),

    #[error("blocking task failed")]
    Blocking(#[from] actix_web::error::BlockingError),

    #[error("session token error: {0}")]
    Session(#[from] jsonwebtoken::errors::Error),
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Persistence(StoreError::Duplicate(_)) => StatusCode::CONFLICT,
            ApiError::Persistence(_) | ApiError::Blocking(_) | ApiError::Session(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(errors) => json!({ "error": errors }),
            ApiError::Persistence(StoreError::Duplicate(field)) => {
                json!({ "error": format!("A record with this {field} already exists") })
            }
            ApiError::Persistence(_) | ApiError::Blocking(_) | ApiError::Session(_) => {
                log::error!("Request failed: {}", self);
                json!({ "error": "Internal server error" })
            }
            other => json!({ "error": other.to_string() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_serialize_in_flattened_shape() {
        let mut errors = FieldErrors::default();
        errors.field("amount", "Number must be greater than 0");
        errors.field("amount", "Expected number");

        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            value,
            json!({
                "formErrors": [],
                "fieldErrors": { "amount": ["Number must be greater than 0", "Expected number"] }
            })
        );
    }

    #[test]
    fn statuses_follow_taxonomy() {
        assert_eq!(
            ApiError::Validation(FieldErrors::default()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Authentication("Invalid credentials".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotFound("Donation not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Persistence(StoreError::Duplicate("tx_hash")).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Persistence(StoreError::Unavailable).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn session_signing_failure_is_a_server_error() {
        let error: ApiError =
            jsonwebtoken::errors::Error::from(jsonwebtoken::errors::ErrorKind::InvalidKeyFormat).into();
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = actix_web::body::to_bytes(error.error_response().into_body())
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }
}
