//! Process-local store with the same semantics as the Postgres one:
//! unique emails and tx hashes, newest-first donation listing and
//! most-recently-created config lookup. Nothing is persisted.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::donation::{Donation, DonationStatus, NewDonation};
use crate::models::project_config::{ConfigFields, ProjectConfig};
use crate::models::user::{NewUser, User};
use crate::repository::{ConfigRepository, DonationRepository, UserRepository};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    donations: Vec<Donation>,
    // insertion order doubles as creation order
    configs: Vec<ProjectConfig>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, user_id: Uuid) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate("email"));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            created_at: now,
            updated_at: now,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn upsert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        if let Some(existing) = tables.users.iter_mut().find(|u| u.email == user.email) {
            existing.password_hash = user.password_hash;
            existing.role = user.role;
            existing.updated_at = now;
            return Ok(existing.clone());
        }

        let user = User {
            id: Uuid::new_v4(),
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            created_at: now,
            updated_at: now,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn count_users(&self) -> Result<i64, StoreError> {
        Ok(self.tables.read().await.users.len() as i64)
    }
}

#[async_trait]
impl DonationRepository for MemoryStore {
    async fn list_donations(&self, limit: i64) -> Result<Vec<Donation>, StoreError> {
        let tables = self.tables.read().await;
        let mut donations = tables.donations.clone();
        donations.sort_by(|a, b| b.datetime.cmp(&a.datetime));
        donations.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(donations)
    }

    async fn find_donation(&self, id: Uuid) -> Result<Option<Donation>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.donations.iter().find(|d| d.id == id).cloned())
    }

    async fn insert_donation(&self, donation: NewDonation) -> Result<Donation, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.donations.iter().any(|d| d.tx_hash == donation.tx_hash) {
            return Err(StoreError::Duplicate("tx_hash"));
        }

        let donation = Donation {
            id: Uuid::new_v4(),
            tx_hash: donation.tx_hash,
            from_wallet: donation.from_wallet,
            to_wallet: donation.to_wallet,
            amount: donation.amount,
            datetime: donation.datetime.unwrap_or_else(Utc::now),
            bank_reference: donation.bank_reference,
            recipient_org: donation.recipient_org,
            status: donation.status,
        };
        tables.donations.push(donation.clone());
        Ok(donation)
    }

    async fn upsert_donation(&self, donation: NewDonation) -> Result<Donation, StoreError> {
        let mut tables = self.tables.write().await;
        let datetime = donation.datetime.unwrap_or_else(Utc::now);
        if let Some(existing) = tables
            .donations
            .iter_mut()
            .find(|d| d.tx_hash == donation.tx_hash)
        {
            existing.from_wallet = donation.from_wallet;
            existing.to_wallet = donation.to_wallet;
            existing.amount = donation.amount;
            existing.datetime = datetime;
            existing.bank_reference = donation.bank_reference;
            existing.recipient_org = donation.recipient_org;
            existing.status = donation.status;
            return Ok(existing.clone());
        }

        let donation = Donation {
            id: Uuid::new_v4(),
            tx_hash: donation.tx_hash,
            from_wallet: donation.from_wallet,
            to_wallet: donation.to_wallet,
            amount: donation.amount,
            datetime,
            bank_reference: donation.bank_reference,
            recipient_org: donation.recipient_org,
            status: donation.status,
        };
        tables.donations.push(donation.clone());
        Ok(donation)
    }

    async fn update_donation_status(
        &self,
        id: Uuid,
        status: DonationStatus,
    ) -> Result<Option<Donation>, StoreError> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .donations
            .iter_mut()
            .find(|d| d.id == id)
            .map(|donation| {
                donation.status = status;
                donation.clone()
            }))
    }

    async fn count_donations(&self) -> Result<i64, StoreError> {
        Ok(self.tables.read().await.donations.len() as i64)
    }
}

#[async_trait]
impl ConfigRepository for MemoryStore {
    async fn latest_config(&self) -> Result<Option<ProjectConfig>, StoreError> {
        Ok(self.tables.read().await.configs.last().cloned())
    }

    async fn insert_config(&self, fields: ConfigFields) -> Result<ProjectConfig, StoreError> {
        let now = Utc::now();
        let config = ProjectConfig {
            id: Uuid::new_v4(),
            twitter_official: fields.twitter_official,
            twitter_community: fields.twitter_community,
            pump_fun_address: fields.pump_fun_address,
            contract_address: fields.contract_address,
            dexscreener_pair: fields.dexscreener_pair,
            created_at: now,
            updated_at: now,
        };
        self.tables.write().await.configs.push(config.clone());
        Ok(config)
    }

    async fn update_config(
        &self,
        id: Uuid,
        fields: ConfigFields,
    ) -> Result<Option<ProjectConfig>, StoreError> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .configs
            .iter_mut()
            .find(|c| c.id == id)
            .map(|config| {
                config.twitter_official = fields.twitter_official;
                config.twitter_community = fields.twitter_community;
                config.pump_fun_address = fields.pump_fun_address;
                config.contract_address = fields.contract_address;
                config.dexscreener_pair = fields.dexscreener_pair;
                config.updated_at = Utc::now();
                config.clone()
            }))
    }

    async fn count_configs(&self) -> Result<i64, StoreError> {
        Ok(self.tables.read().await.configs.len() as i64)
    }
}
