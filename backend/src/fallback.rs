//! Static payloads served when the store cannot be reached.

use chrono::{DateTime, Duration, Utc};
use store::models::donation::{Donation, DonationStatus, NewDonation};
use store::models::project_config::{ConfigFields, ProjectConfig};
use uuid::Uuid;

/// Values written to a fresh config row and served when the store is down.
pub fn default_config_fields() -> ConfigFields {
    ConfigFields {
        twitter_official: "https://twitter.com/bualoi_official".to_string(),
        twitter_community: "https://twitter.com/bualoi_community".to_string(),
        pump_fun_address: "https://pump.fun/coin/PLACEHOLDER".to_string(),
        contract_address: "0x1234...ABCD".to_string(),
        dexscreener_pair: "PLACEHOLDERPAIR".to_string(),
    }
}

pub fn config() -> ProjectConfig {
    let fields = default_config_fields();
    let now = Utc::now();
    ProjectConfig {
        id: Uuid::nil(),
        twitter_official: fields.twitter_official,
        twitter_community: fields.twitter_community,
        pump_fun_address: fields.pump_fun_address,
        contract_address: fields.contract_address,
        dexscreener_pair: fields.dexscreener_pair,
        created_at: now,
        updated_at: now,
    }
}

/// Two records, newest first.
pub fn donations() -> Vec<Donation> {
    let now = Utc::now();
    vec![
        Donation {
            id: Uuid::from_u128(1),
            tx_hash: "5KJp7VK8gX4aTcMRYGWYjJ3qZjKpKqKpKqKpKqKpKqKp".to_string(),
            from_wallet: Some("7xKXtg2CW3DnBcjPiVNqHkETGSsyBESdLkB4gHqRWpD1".to_string()),
            to_wallet: Some("9yGCA2kMLLtgO5zrqvQjwcwNwYmBHp8reJBQdcrNqBvG".to_string()),
            amount: 1000.0,
            datetime: now,
            bank_reference: Some("REF001".to_string()),
            recipient_org: Some("Vietnam Red Cross".to_string()),
            status: DonationStatus::Pending,
        },
        Donation {
            id: Uuid::from_u128(2),
            tx_hash: "8LMq9WL9hY6bTdNSYHXYkK4rZkLrLrLrLrLrLrLrLrLr".to_string(),
            from_wallet: Some("3xHXtg2CW3DnBcjPiVNqHkETGSsyBESdLkB4gHqRWpD2".to_string()),
            to_wallet: Some("5yGCA2kMLLtgO5zrqvQjwcwNwYmBHp8reJBQdcrNqBvH".to_string()),
            amount: 2500.0,
            datetime: now - Duration::days(1),
            bank_reference: Some("REF002".to_string()),
            recipient_org: Some("UNICEF Vietnam".to_string()),
            status: DonationStatus::Sent,
        },
    ]
}

const TOKEN_ADDRESS: &str = "7xKXtg2CW3DnBcjPiVNqHkETGSsyBESdLkB4gHqRWpD1";

/// Live token addresses. Served by the fallback data endpoint and written by
/// the bulk migration.
pub fn snapshot_config_fields() -> ConfigFields {
    ConfigFields {
        twitter_official: "https://twitter.com/bualoi_official".to_string(),
        twitter_community: "https://twitter.com/bualoi_community".to_string(),
        pump_fun_address: format!("https://pump.fun/coin/{TOKEN_ADDRESS}"),
        contract_address: TOKEN_ADDRESS.to_string(),
        dexscreener_pair: format!("SOL_{TOKEN_ADDRESS}"),
    }
}

pub fn snapshot_config() -> ProjectConfig {
    let fields = snapshot_config_fields();
    let now = Utc::now();
    ProjectConfig {
        id: Uuid::from_u128(0xfa11_bac4),
        twitter_official: fields.twitter_official,
        twitter_community: fields.twitter_community,
        pump_fun_address: fields.pump_fun_address,
        contract_address: fields.contract_address,
        dexscreener_pair: fields.dexscreener_pair,
        created_at: now,
        updated_at: now,
    }
}

/// Four records, newest first, without wallet details.
pub fn snapshot_donations() -> Vec<Donation> {
    let now = Utc::now();
    let rows = [
        ("5KJp7VK8gX4aTcMRYGWYjJ3qZjKpKqKpKqKpKqKpKqKp", 2500.0, 0, "REF001", "Vietnam Red Cross"),
        ("8LMq9WL9hY6bTdNSYHXYkK4rZkLrLrLrLrLrLrLrLrLr", 1800.0, 1, "REF002", "UNICEF Vietnam"),
        ("3GHi5TH5fU3aRbKQWFWXiH2pYhHrHrHrHrHrHrHrHrHr", 3200.0, 2, "REF003", "Local Relief Fund"),
        ("7NJk9PL2hX5cSdOTXGXZkJ4qZkMrMrMrMrMrMrMrMrMr", 950.0, 4, "REF004", "Emergency Response Team"),
    ];
    rows.into_iter()
        .zip(1u128..)
        .map(|((tx_hash, amount, hours_ago, reference, org), id)| Donation {
            id: Uuid::from_u128(id),
            tx_hash: tx_hash.to_string(),
            from_wallet: None,
            to_wallet: None,
            amount,
            datetime: now - Duration::hours(hours_ago),
            bank_reference: Some(reference.to_string()),
            recipient_org: Some(org.to_string()),
            status: DonationStatus::Pending,
        })
        .collect()
}

fn sent_to_treasury(
    tx_hash: &str,
    from_wallet: &str,
    amount: f64,
    datetime: DateTime<Utc>,
    reference: &str,
    org: &str,
) -> NewDonation {
    NewDonation {
        tx_hash: tx_hash.to_string(),
        from_wallet: Some(from_wallet.to_string()),
        to_wallet: Some(TOKEN_ADDRESS.to_string()),
        amount,
        datetime: Some(datetime),
        bank_reference: Some(reference.to_string()),
        recipient_org: Some(org.to_string()),
        status: DonationStatus::Sent,
    }
}

/// Sample rows inserted by setup into an empty ledger.
pub fn sample_donations() -> Vec<NewDonation> {
    let now = Utc::now();
    vec![
        sent_to_treasury(
            "5KJp7VK8gX4aTcMRYGWYjJ3qZjKpKqKpKqKpKqKpKqKp",
            "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM",
            1500.0,
            now,
            "REF001",
            "Vietnam Red Cross",
        ),
        sent_to_treasury(
            "8LMq9WL9hY6bTdNSYHXYkK4rZkLrLrLrLrLrLrLrLrLr",
            "4VfYkQwjwdQHx6xjwvQTHx6xjwvQTHx6xjwvQTHx6xjw",
            2500.0,
            now - Duration::days(1),
            "REF002",
            "UNICEF Vietnam",
        ),
    ]
}

/// Rows upserted by the bulk migration.
pub fn migration_donations() -> Vec<NewDonation> {
    let now = Utc::now();
    vec![
        sent_to_treasury(
            "5KJp7VK8gX4aTcMRYGWYjJ3qZjKpKqKpKqKpKqKpKqKp",
            "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM",
            2500.0,
            now,
            "REF001",
            "Vietnam Red Cross",
        ),
        sent_to_treasury(
            "8LMq9WL9hY6bTdNSYHXYkK4rZkLrLrLrLrLrLrLrLrLr",
            "4VfYkQwjwdQHx6xjwvQTHx6xjwvQTHx6xjwvQTHx6xjw",
            1800.0,
            now - Duration::hours(1),
            "REF002",
            "UNICEF Vietnam",
        ),
        sent_to_treasury(
            "3GHi5TH5fU3aRbKQWFWXiH2pYhHrHrHrHrHrHrHrHrHr",
            "2TcHgVwjGL9GqrqtuvK1f9HFrEe5faUUXGdxuFjKiGSj",
            3200.0,
            now - Duration::hours(2),
            "REF003",
            "Local Relief Fund",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_samples_are_sent_to_the_token_wallet() {
        let samples = sample_donations();
        let amounts: Vec<f64> = samples.iter().map(|d| d.amount).collect();
        assert_eq!(amounts, [1500.0, 2500.0]);
        for sample in &samples {
            assert_eq!(sample.status, DonationStatus::Sent);
            assert_eq!(sample.to_wallet.as_deref(), Some(TOKEN_ADDRESS));
        }
    }

    #[test]
    fn snapshot_differs_from_list_fallback() {
        let snapshot = snapshot_donations();
        assert_eq!(snapshot.len(), 4);
        assert!(snapshot.windows(2).all(|w| w[0].datetime >= w[1].datetime));
        assert_ne!(snapshot_config().contract_address, config().contract_address);
        assert_eq!(snapshot_config().dexscreener_pair, format!("SOL_{TOKEN_ADDRESS}"));
    }
}
