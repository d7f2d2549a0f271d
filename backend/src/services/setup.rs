use serde::Serialize;
use store::models::user::UserProfile;
use store::{ConfigRepository, Repository, StoreError};
use uuid::Uuid;

use super::accounts::{ensure_admin, upsert_admin, SeedOutcome};
use super::config::get_config;
use crate::fallback;
use crate::settings::Settings;

/// `None` marks a step that failed and was logged.
#[derive(Debug, Default, Serialize)]
pub struct SetupReport {
    pub admin_user: Option<UserProfile>,
    pub config: Option<Uuid>,
    pub sample_donations: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordCounts {
    pub users: i64,
    pub donations: i64,
    pub configs: i64,
}

#[derive(Debug, Serialize)]
pub struct MigrationReport {
    pub admin_user: Option<UserProfile>,
    pub config: Option<Uuid>,
    pub donations_written: usize,
    pub donations_failed: usize,
    pub counts: RecordCounts,
}

/// Seeds the admin account, a config row and, for an empty ledger, the
/// sample donations. A failing step is logged and the next one still runs.
pub async fn run_setup<R>(store: &R, settings: &Settings) -> SetupReport
where
    R: Repository + ?Sized,
{
    let mut report = SetupReport::default();

    match ensure_admin(store, settings).await {
        Ok(SeedOutcome::Created(user)) | Ok(SeedOutcome::AlreadyExists(user)) => {
            report.admin_user = Some(user)
        }
        Ok(SeedOutcome::Unavailable) => log::warn!("Setup: admin user skipped, store unavailable"),
        Err(e) => log::error!("Setup: admin user creation failed: {}", e),
    }

    let config = get_config(store).await;
    if config.is_fallback() {
        log::warn!("Setup: project config could not be created");
    } else {
        report.config = Some(config.into_inner().id);
    }

    match seed_sample_donations(store).await {
        Ok(count) => report.sample_donations = count,
        Err(e) => log::error!("Setup: sample donations failed: {}", e),
    }

    report
}

async fn seed_sample_donations<R>(store: &R) -> Result<usize, StoreError>
where
    R: Repository + ?Sized,
{
    if store.count_donations().await? > 0 {
        log::info!("Setup: donations already exist");
        return Ok(0);
    }

    let mut inserted = 0;
    for donation in fallback::sample_donations() {
        store.insert_donation(donation).await?;
        inserted += 1;
    }
    Ok(inserted)
}

pub async fn record_counts<R>(store: &R) -> Result<RecordCounts, StoreError>
where
    R: Repository + ?Sized,
{
    let (users, donations, configs) = tokio::try_join!(
        store.count_users(),
        store.count_donations(),
        store.count_configs(),
    )?;
    Ok(RecordCounts {
        users,
        donations,
        configs,
    })
}

/// Bulk migration: resets the admin credentials, writes the live token
/// addresses into the current config and upserts the known donations by
/// `tx_hash`. Every write is attempted; a failing one is logged and skipped.
/// Only the final count query can fail the migration.
pub async fn migrate<R>(store: &R, settings: &Settings) -> Result<MigrationReport, StoreError>
where
    R: Repository + ?Sized,
{
    log::info!("Migration: starting");

    let admin_user = match upsert_admin(store, settings).await {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("Migration: admin user failed: {}", e);
            None
        }
    };

    let config = match upsert_snapshot_config(store).await {
        Ok(id) => Some(id),
        Err(e) => {
            log::warn!("Migration: project config failed: {}", e);
            None
        }
    };

    let mut donations_written = 0;
    let mut donations_failed = 0;
    for donation in fallback::migration_donations() {
        let tx_hash = donation.tx_hash.clone();
        match store.upsert_donation(donation).await {
            Ok(_) => {
                log::info!("Migration: donation {} written", tx_hash);
                donations_written += 1;
            }
            Err(e) => {
                log::warn!("Migration: donation {} failed: {}", tx_hash, e);
                donations_failed += 1;
            }
        }
    }

    let counts = record_counts(store).await?;
    log::info!(
        "Migration: done, {} donations written, {} failed",
        donations_written,
        donations_failed
    );
    Ok(MigrationReport {
        admin_user,
        config,
        donations_written,
        donations_failed,
        counts,
    })
}

async fn upsert_snapshot_config<R>(store: &R) -> Result<Uuid, StoreError>
where
    R: ConfigRepository + ?Sized,
{
    let fields = fallback::snapshot_config_fields();
    if let Some(current) = store.latest_config().await? {
        if let Some(updated) = store.update_config(current.id, fields.clone()).await? {
            return Ok(updated.id);
        }
    }
    Ok(store.insert_config(fields).await?.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::models::donation::DonationStatus;
    use store::{DonationRepository, MemoryStore, UnavailableStore, UserRepository};

    fn settings() -> Settings {
        Settings {
            bcrypt_cost: 4,
            ..Settings::default()
        }
    }

    #[actix_web::test]
    async fn setup_seeds_empty_store_once() {
        let store = MemoryStore::new();

        let first = run_setup(&store, &settings()).await;
        assert!(first.admin_user.is_some());
        assert_eq!(first.sample_donations, 2);

        let second = run_setup(&store, &settings()).await;
        assert!(second.admin_user.is_some());
        assert_eq!(second.sample_donations, 0);
        assert_eq!(second.config, first.config);
        assert_eq!(store.count_donations().await.unwrap(), 2);
        assert_eq!(store.count_users().await.unwrap(), 1);

        let seeded = store.list_donations(10).await.unwrap();
        assert!(seeded.iter().all(|d| d.status == DonationStatus::Sent));
    }

    #[actix_web::test]
    async fn setup_against_unavailable_store_leaves_steps_empty() {
        let report = run_setup(&UnavailableStore, &settings()).await;
        assert!(report.admin_user.is_none());
        assert!(report.config.is_none());
        assert_eq!(report.sample_donations, 0);
    }

    #[actix_web::test]
    async fn migrate_upserts_colliding_hash_and_writes_the_rest() {
        let store = MemoryStore::new();
        let mut existing = fallback::migration_donations().remove(1);
        existing.amount = 1.0;
        existing.status = DonationStatus::Pending;
        let existing = store.insert_donation(existing).await.unwrap();

        let report = migrate(&store, &settings()).await.unwrap();
        assert_eq!(report.donations_written, 3);
        assert_eq!(report.donations_failed, 0);
        assert_eq!(
            report.counts,
            RecordCounts {
                users: 1,
                donations: 3,
                configs: 1
            }
        );

        let collided = store.find_donation(existing.id).await.unwrap().unwrap();
        assert_eq!(collided.amount, 1800.0);
        assert_eq!(collided.status, DonationStatus::Sent);

        let config = store.latest_config().await.unwrap().unwrap();
        assert_eq!(Some(config.id), report.config);
        assert_eq!(config.contract_address, "7xKXtg2CW3DnBcjPiVNqHkETGSsyBESdLkB4gHqRWpD1");
    }

    #[actix_web::test]
    async fn migrate_is_repeatable() {
        let store = MemoryStore::new();
        let first = migrate(&store, &settings()).await.unwrap();
        let second = migrate(&store, &settings()).await.unwrap();

        assert_eq!(first.counts, second.counts);
        assert_eq!(first.config, second.config);
        assert_eq!(
            first.admin_user.map(|u| u.id),
            second.admin_user.map(|u| u.id)
        );
    }

    #[actix_web::test]
    async fn migrate_against_unavailable_store_fails_on_counts() {
        let err = migrate(&UnavailableStore, &settings()).await.unwrap_err();
        assert!(err.is_unavailable());
    }
}
