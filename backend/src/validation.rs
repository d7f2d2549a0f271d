//! Request-body validation. Bodies are parsed as loose JSON first so every
//! field problem can be reported at once instead of failing on the first.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use store::models::donation::{DonationStatus, NewDonation};

use crate::error::FieldErrors;

pub const MIN_TX_HASH_LEN: usize = 10;

const REQUIRED: &str = "Required";
const EXPECTED_STRING: &str = "Expected string";
const EXPECTED_OBJECT: &str = "Expected object";

fn as_object<'a>(body: &'a Value, errors: &mut FieldErrors) -> Option<&'a Map<String, Value>> {
    let object = body.as_object();
    if object.is_none() {
        errors.form(EXPECTED_OBJECT);
    }
    object
}

fn optional_string(
    object: &Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match object.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.field(field, EXPECTED_STRING);
            None
        }
    }
}

pub fn parse_new_donation(body: &Value) -> Result<NewDonation, FieldErrors> {
    let mut errors = FieldErrors::default();
    let Some(object) = as_object(body, &mut errors) else {
        return Err(errors);
    };

    let tx_hash = match object.get("tx_hash") {
        Some(Value::String(s)) if s.chars().count() >= MIN_TX_HASH_LEN => s.clone(),
        Some(Value::String(_)) => {
            errors.field(
                "tx_hash",
                format!("String must contain at least {MIN_TX_HASH_LEN} character(s)"),
            );
            String::new()
        }
        None | Some(Value::Null) => {
            errors.field("tx_hash", REQUIRED);
            String::new()
        }
        Some(_) => {
            errors.field("tx_hash", EXPECTED_STRING);
            String::new()
        }
    };

    let amount = match object.get("amount") {
        Some(Value::Number(n)) => match n.as_f64() {
            Some(amount) if amount > 0.0 && amount.is_finite() => amount,
            _ => {
                errors.field("amount", "Number must be greater than 0");
                0.0
            }
        },
        None | Some(Value::Null) => {
            errors.field("amount", REQUIRED);
            0.0
        }
        Some(_) => {
            errors.field("amount", "Expected number");
            0.0
        }
    };

    let datetime = match object.get("datetime") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => match parse_utc_timestamp(s) {
            Some(parsed) => Some(parsed),
            None => {
                errors.field("datetime", "Invalid datetime");
                None
            }
        },
        Some(_) => {
            errors.field("datetime", EXPECTED_STRING);
            None
        }
    };

    let from_wallet = optional_string(object, "from_wallet", &mut errors);
    let to_wallet = optional_string(object, "to_wallet", &mut errors);
    let bank_reference = optional_string(object, "bank_reference", &mut errors);
    let recipient_org = optional_string(object, "recipient_org", &mut errors);

    errors.into_result(NewDonation {
        tx_hash,
        from_wallet,
        to_wallet,
        amount,
        datetime,
        bank_reference,
        recipient_org,
        status: DonationStatus::Pending,
    })
}

/// RFC 3339 in UTC only: `T` separator and a trailing `Z`, no numeric offset.
fn parse_utc_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if !s.ends_with('Z') || s.as_bytes().get(10) != Some(&b'T') {
        return None;
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

/// `Ok(None)` when the body carries no status.
pub fn parse_status_update(body: &Value) -> Result<Option<DonationStatus>, FieldErrors> {
    let mut errors = FieldErrors::default();
    let Some(object) = as_object(body, &mut errors) else {
        return Err(errors);
    };

    match object.get("status") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => match s.parse::<DonationStatus>() {
            Ok(status) => Ok(Some(status)),
            Err(_) => {
                errors.field(
                    "status",
                    format!(
                        "Invalid enum value. Expected 'Pending' | 'Withdrawn' | 'Sent', received '{s}'"
                    ),
                );
                Err(errors)
            }
        },
        Some(_) => {
            errors.field("status", EXPECTED_STRING);
            Err(errors)
        }
    }
}
