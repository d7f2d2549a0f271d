use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::donation::{Donation, DonationStatus, NewDonation};
use crate::models::project_config::{ConfigFields, ProjectConfig};
use crate::models::user::{NewUser, User};
use crate::repository::{ConfigRepository, DonationRepository, UserRepository};

/// Stand-in used when no database is configured. Every call fails with
/// `StoreError::Unavailable`, so readers fall back to static data.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

#[async_trait]
impl UserRepository for UnavailableStore {
    async fn find_user_by_email(&self, _email: &str) -> Result<Option<User>, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn find_user_by_id(&self, _user_id: Uuid) -> Result<Option<User>, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn insert_user(&self, _user: NewUser) -> Result<User, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn upsert_user(&self, _user: NewUser) -> Result<User, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn count_users(&self) -> Result<i64, StoreError> {
        Err(StoreError::Unavailable)
    }
}

#[async_trait]
impl DonationRepository for UnavailableStore {
    async fn list_donations(&self, _limit: i64) -> Result<Vec<Donation>, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn find_donation(&self, _id: Uuid) -> Result<Option<Donation>, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn insert_donation(&self, _donation: NewDonation) -> Result<Donation, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn upsert_donation(&self, _donation: NewDonation) -> Result<Donation, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn update_donation_status(
        &self,
        _id: Uuid,
        _status: DonationStatus,
    ) -> Result<Option<Donation>, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn count_donations(&self) -> Result<i64, StoreError> {
        Err(StoreError::Unavailable)
    }
}

#[async_trait]
impl ConfigRepository for UnavailableStore {
    async fn latest_config(&self) -> Result<Option<ProjectConfig>, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn insert_config(&self, _fields: ConfigFields) -> Result<ProjectConfig, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn update_config(
        &self,
        _id: Uuid,
        _fields: ConfigFields,
    ) -> Result<Option<ProjectConfig>, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn count_configs(&self) -> Result<i64, StoreError> {
        Err(StoreError::Unavailable)
    }
}
