use serde_json::Value;
use store::models::donation::Donation;
use store::DonationRepository;
use uuid::Uuid;

use super::Served;
use crate::error::ApiError;
use crate::fallback;
use crate::validation::{parse_new_donation, parse_status_update};

pub const DEFAULT_LIMIT: i64 = 50;

/// Missing, non-numeric and negative limits all mean the default.
pub fn parse_limit(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|limit| *limit >= 0)
        .unwrap_or(DEFAULT_LIMIT)
}

/// Newest first, at most `limit`. A store error yields the fallback records.
pub async fn list_donations<R>(store: &R, limit: i64) -> Served<Vec<Donation>>
where
    R: DonationRepository + ?Sized,
{
    match store.list_donations(limit).await {
        Ok(donations) => {
            log::debug!("Fetched {} donations", donations.len());
            Served::Live(donations)
        }
        Err(e) => {
            log::warn!("Donation fetch error, serving fallback: {}", e);
            let mut donations = fallback::donations();
            donations.truncate(usize::try_from(limit).unwrap_or(0));
            Served::Fallback(donations)
        }
    }
}

/// Records a donation after shape validation. The hash is only length-checked;
/// whether it exists on chain is never verified here.
pub async fn create_donation<R>(store: &R, body: &Value) -> Result<Donation, ApiError>
where
    R: DonationRepository + ?Sized,
{
    let new_donation = parse_new_donation(body)?;
    let donation = store.insert_donation(new_donation).await?;
    log::info!("Recorded donation {} ({})", donation.id, donation.tx_hash);
    Ok(donation)
}

/// Any status may follow any other. A body without a status returns the
/// record unchanged.
pub async fn update_status<R>(store: &R, id: &str, body: &Value) -> Result<Donation, ApiError>
where
    R: DonationRepository + ?Sized,
{
    let status = parse_status_update(body)?;
    let not_found = || ApiError::NotFound("Donation not found".to_string());
    let id = Uuid::parse_str(id).map_err(|_| not_found())?;

    let donation = match status {
        Some(status) => store.update_donation_status(id, status).await?,
        None => store.find_donation(id).await?,
    };
    let donation = donation.ok_or_else(not_found)?;
    log::info!("Donation {} is now {}", donation.id, donation.status);
    Ok(donation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use store::models::donation::DonationStatus;
    use store::{MemoryStore, StoreError, UnavailableStore};

    #[test]
    fn limit_parsing_defaults() {
        assert_eq!(parse_limit(None), 50);
        assert_eq!(parse_limit(Some("abc")), 50);
        assert_eq!(parse_limit(Some("-3")), 50);
        assert_eq!(parse_limit(Some("200")), 200);
        assert_eq!(parse_limit(Some("0")), 0);
    }

    #[tokio::test]
    async fn create_echoes_fields_with_generated_id() {
        let store = MemoryStore::new();
        let body = json!({
            "tx_hash": "5KJp7VK8gX4aTcMRYGWY",
            "from_wallet": "wallet-a",
            "to_wallet": "wallet-b",
            "amount": 42.5,
            "datetime": "2025-09-30T10:00:00Z",
            "bank_reference": "REF7",
            "recipient_org": "Relief Fund"
        });

        let donation = create_donation(&store, &body).await.unwrap();

        assert_eq!(donation.tx_hash, "5KJp7VK8gX4aTcMRYGWY");
        assert_eq!(donation.from_wallet.as_deref(), Some("wallet-a"));
        assert_eq!(donation.to_wallet.as_deref(), Some("wallet-b"));
        assert_eq!(donation.amount, 42.5);
        assert_eq!(donation.datetime.to_rfc3339(), "2025-09-30T10:00:00+00:00");
        assert_eq!(donation.bank_reference.as_deref(), Some("REF7"));
        assert_eq!(donation.recipient_org.as_deref(), Some("Relief Fund"));
        assert_eq!(donation.status, DonationStatus::Pending);
        assert!(!donation.id.is_nil());
    }

    #[tokio::test]
    async fn duplicate_hash_fails() {
        let store = MemoryStore::new();
        let body = json!({ "tx_hash": "0123456789abc", "amount": 1 });

        create_donation(&store, &body).await.unwrap();
        let err = create_donation(&store, &body).await.unwrap_err();

        assert!(matches!(err, ApiError::Persistence(StoreError::Duplicate("tx_hash"))));
    }

    #[tokio::test]
    async fn invalid_amount_is_validation_error() {
        let err = create_donation(&MemoryStore::new(), &json!({ "tx_hash": "0123456789", "amount": -5 }))
            .await
            .unwrap_err();
        match err {
            ApiError::Validation(errors) => assert!(errors.has_field("amount")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn transitions_are_unrestricted() {
        let store = MemoryStore::new();
        let created = create_donation(&store, &json!({ "tx_hash": "0123456789", "amount": 5 }))
            .await
            .unwrap();
        let id = created.id.to_string();

        let sent = update_status(&store, &id, &json!({ "status": "Sent" })).await.unwrap();
        assert_eq!(sent.status, DonationStatus::Sent);

        let pending = update_status(&store, &id, &json!({ "status": "Pending" })).await.unwrap();
        assert_eq!(pending.status, DonationStatus::Pending);

        let again = update_status(&store, &id, &json!({ "status": "Pending" })).await.unwrap();
        assert_eq!(again.status, DonationStatus::Pending);

        let unchanged = update_status(&store, &id, &json!({})).await.unwrap();
        assert_eq!(unchanged, again);
    }

    #[tokio::test]
    async fn unknown_or_malformed_id_is_not_found() {
        let store = MemoryStore::new();
        let body = json!({ "status": "Sent" });

        let unknown = update_status(&store, &Uuid::new_v4().to_string(), &body).await;
        assert!(matches!(unknown, Err(ApiError::NotFound(_))));

        let malformed = update_status(&store, "not-a-uuid", &body).await;
        assert!(matches!(malformed, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn invalid_status_checked_before_lookup() {
        let err = update_status(&MemoryStore::new(), "not-a-uuid", &json!({ "status": "Lost" }))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn listing_is_sorted_and_limited() {
        let store = MemoryStore::new();
        for (hash, when) in [
            ("aaaaaaaaaa", "2025-01-01T00:00:00Z"),
            ("bbbbbbbbbb", "2025-03-01T00:00:00Z"),
            ("cccccccccc", "2025-02-01T00:00:00Z"),
        ] {
            create_donation(&store, &json!({ "tx_hash": hash, "amount": 1, "datetime": when }))
                .await
                .unwrap();
        }

        let served = list_donations(&store, 2).await;
        assert!(!served.is_fallback());
        let donations = served.into_inner();
        assert_eq!(donations.len(), 2);
        assert!(donations.windows(2).all(|w| w[0].datetime >= w[1].datetime));
        assert_eq!(donations[0].tx_hash, "bbbbbbbbbb");
    }

    #[tokio::test]
    async fn unavailable_store_lists_fallback() {
        let served = list_donations(&UnavailableStore, DEFAULT_LIMIT).await;
        assert!(served.is_fallback());
        assert_eq!(served.as_inner().len(), 2);

        let limited = list_donations(&UnavailableStore, 1).await;
        assert_eq!(limited.into_inner().len(), 1);
    }

    #[tokio::test]
    async fn writes_surface_store_errors() {
        let err = create_donation(&UnavailableStore, &json!({ "tx_hash": "0123456789", "amount": 1 }))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Persistence(StoreError::Unavailable)));
    }
}
