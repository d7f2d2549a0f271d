use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProjectConfig {
    pub id: Uuid,
    pub twitter_official: String,
    pub twitter_community: String,
    pub pump_fun_address: String,
    pub contract_address: String,
    pub dexscreener_pair: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The editable columns of a config row. Free-form, never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFields {
    pub twitter_official: String,
    pub twitter_community: String,
    pub pump_fun_address: String,
    pub contract_address: String,
    pub dexscreener_pair: String,
}
