use store::models::project_config::{ConfigFields, ProjectConfig};
use store::{ConfigRepository, StoreError};

use super::Served;
use crate::fallback;

/// The current config row, created with the built-in defaults on first read.
/// Never fails: a store error yields the (unpersisted) fallback config.
pub async fn get_config<R>(store: &R) -> Served<ProjectConfig>
where
    R: ConfigRepository + ?Sized,
{
    match load_or_create(store).await {
        Ok(config) => Served::Live(config),
        Err(e) => {
            log::error!("Config fetch error, serving fallback: {}", e);
            Served::Fallback(fallback::config())
        }
    }
}

async fn load_or_create<R>(store: &R) -> Result<ProjectConfig, StoreError>
where
    R: ConfigRepository + ?Sized,
{
    if let Some(config) = store.latest_config().await? {
        return Ok(config);
    }

    log::info!("No project config found, creating defaults");
    store.insert_config(fallback::default_config_fields()).await
}

/// Overwrites the current row in place, or creates one. Last write wins.
pub async fn upsert_config<R>(store: &R, fields: ConfigFields) -> Result<ProjectConfig, StoreError>
where
    R: ConfigRepository + ?Sized,
{
    match store.latest_config().await? {
        Some(existing) => match store.update_config(existing.id, fields.clone()).await? {
            Some(updated) => Ok(updated),
            // deleted between the read and the write
            None => store.insert_config(fields).await,
        },
        None => store.insert_config(fields).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{MemoryStore, UnavailableStore};

    fn fields(contract: &str) -> ConfigFields {
        ConfigFields {
            twitter_official: "https://x.com/official".to_string(),
            twitter_community: "https://x.com/community".to_string(),
            pump_fun_address: "not even a url".to_string(),
            contract_address: contract.to_string(),
            dexscreener_pair: "PAIR".to_string(),
        }
    }

    #[tokio::test]
    async fn lazy_creation_is_idempotent() {
        let store = MemoryStore::new();

        let first = get_config(&store).await;
        let second = get_config(&store).await;

        assert!(!first.is_fallback());
        assert_eq!(first.as_inner().id, second.as_inner().id);
        assert_eq!(store.count_configs().await.unwrap(), 1);
        assert_eq!(first.as_inner().dexscreener_pair, "PLACEHOLDERPAIR");
    }

    #[tokio::test]
    async fn unavailable_store_serves_fallback() {
        let served = get_config(&UnavailableStore).await;
        assert!(served.is_fallback());
        assert_eq!(served.into_inner().contract_address, "0x1234...ABCD");
    }

    #[tokio::test]
    async fn upsert_creates_then_updates_same_row() {
        let store = MemoryStore::new();

        let created = upsert_config(&store, fields("first")).await.unwrap();
        let updated = upsert_config(&store, fields("second")).await.unwrap();

        assert_eq!(created.id, updated.id);
        assert_eq!(updated.contract_address, "second");
        assert_eq!(updated.pump_fun_address, "not even a url");
        assert_eq!(store.count_configs().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn upsert_targets_most_recent_row() {
        let store = MemoryStore::new();
        store.insert_config(fields("old")).await.unwrap();
        let newest = store.insert_config(fields("new")).await.unwrap();

        let updated = upsert_config(&store, fields("edited")).await.unwrap();

        assert_eq!(updated.id, newest.id);
        assert_eq!(get_config(&store).await.into_inner().contract_address, "edited");
    }

    #[tokio::test]
    async fn upsert_surfaces_store_errors() {
        let err = upsert_config(&UnavailableStore, fields("x")).await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable));
    }
}
