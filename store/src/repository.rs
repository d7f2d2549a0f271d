use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::donation::{Donation, DonationStatus, NewDonation};
use crate::models::project_config::{ConfigFields, ProjectConfig};
use crate::models::user::{NewUser, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn find_user_by_id(&self, user_id: Uuid) -> Result<Option<User>, StoreError>;

    /// Fails with `StoreError::Duplicate("email")` if the email is taken.
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// Inserts, or overwrites the password hash and role of the user with this email.
    async fn upsert_user(&self, user: NewUser) -> Result<User, StoreError>;

    async fn count_users(&self) -> Result<i64, StoreError>;
}

#[async_trait]
pub trait DonationRepository: Send + Sync {
    /// Newest first by `datetime`, at most `limit` rows.
    async fn list_donations(&self, limit: i64) -> Result<Vec<Donation>, StoreError>;

    async fn find_donation(&self, id: Uuid) -> Result<Option<Donation>, StoreError>;

    /// Fails with `StoreError::Duplicate("tx_hash")` if the hash is already recorded.
    async fn insert_donation(&self, donation: NewDonation) -> Result<Donation, StoreError>;

    /// Inserts, or overwrites every column of the donation with this `tx_hash`.
    /// The existing row keeps its id.
    async fn upsert_donation(&self, donation: NewDonation) -> Result<Donation, StoreError>;

    /// Returns `None` when no donation has this id.
    async fn update_donation_status(
        &self,
        id: Uuid,
        status: DonationStatus,
    ) -> Result<Option<Donation>, StoreError>;

    async fn count_donations(&self) -> Result<i64, StoreError>;
}

#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// The most recently created config row, if any.
    async fn latest_config(&self) -> Result<Option<ProjectConfig>, StoreError>;

    async fn insert_config(&self, fields: ConfigFields) -> Result<ProjectConfig, StoreError>;

    /// Overwrites all editable columns and bumps `updated_at`. `None` if the row is gone.
    async fn update_config(
        &self,
        id: Uuid,
        fields: ConfigFields,
    ) -> Result<Option<ProjectConfig>, StoreError>;

    async fn count_configs(&self) -> Result<i64, StoreError>;
}

/// Everything the HTTP layer needs from a store.
pub trait Repository: UserRepository + DonationRepository + ConfigRepository {}

impl<T> Repository for T where T: UserRepository + DonationRepository + ConfigRepository {}
