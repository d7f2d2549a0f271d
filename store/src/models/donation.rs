use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "donation_status")]
pub enum DonationStatus {
    #[default]
    Pending,
    Withdrawn,
    Sent,
}

impl DonationStatus {
    pub const ALL: [DonationStatus; 3] = [
        DonationStatus::Pending,
        DonationStatus::Withdrawn,
        DonationStatus::Sent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DonationStatus::Pending => "Pending",
            DonationStatus::Withdrawn => "Withdrawn",
            DonationStatus::Sent => "Sent",
        }
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown donation status: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for DonationStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DonationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Donation {
    pub id: Uuid,
    pub tx_hash: String,
    pub from_wallet: Option<String>,
    pub to_wallet: Option<String>,
    pub amount: f64,
    pub datetime: DateTime<Utc>,
    pub bank_reference: Option<String>,
    pub recipient_org: Option<String>,
    pub status: DonationStatus,
}

/// A validated donation ready to be written. `datetime` defaults to insertion time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDonation {
    pub tx_hash: String,
    pub from_wallet: Option<String>,
    pub to_wallet: Option<String>,
    pub amount: f64,
    pub datetime: Option<DateTime<Utc>>,
    pub bank_reference: Option<String>,
    pub recipient_org: Option<String>,
    pub status: DonationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_exact_names_only() {
        assert_eq!("Sent".parse::<DonationStatus>(), Ok(DonationStatus::Sent));
        assert_eq!(
            "Withdrawn".parse::<DonationStatus>(),
            Ok(DonationStatus::Withdrawn)
        );
        assert!("sent".parse::<DonationStatus>().is_err());
        assert!("Cancelled".parse::<DonationStatus>().is_err());
    }

    #[test]
    fn status_serializes_as_variant_name() {
        let json = serde_json::to_string(&DonationStatus::Pending).unwrap();
        assert_eq!(json, "\"Pending\"");
    }
}
