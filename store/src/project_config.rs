use crate::error::StoreError;
use crate::models::project_config::{ConfigFields, ProjectConfig};
use crate::repository::ConfigRepository;
use crate::Store;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
impl ConfigRepository for Store {
    async fn latest_config(&self) -> Result<Option<ProjectConfig>, StoreError> {
        let config = sqlx::query_as::<_, ProjectConfig>(
            r#"
            SELECT id, twitter_official, twitter_community, pump_fun_address,
                   contract_address, dexscreener_pair, created_at, updated_at
            FROM project_configs
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(config)
    }

    async fn insert_config(&self, fields: ConfigFields) -> Result<ProjectConfig, StoreError> {
        let config = sqlx::query_as::<_, ProjectConfig>(
            r#"
            INSERT INTO project_configs
                (twitter_official, twitter_community, pump_fun_address, contract_address, dexscreener_pair)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, twitter_official, twitter_community, pump_fun_address,
                      contract_address, dexscreener_pair, created_at, updated_at
            "#,
        )
        .bind(&fields.twitter_official)
        .bind(&fields.twitter_community)
        .bind(&fields.pump_fun_address)
        .bind(&fields.contract_address)
        .bind(&fields.dexscreener_pair)
        .fetch_one(&self.pool)
        .await?;

        Ok(config)
    }

    async fn update_config(
        &self,
        id: Uuid,
        fields: ConfigFields,
    ) -> Result<Option<ProjectConfig>, StoreError> {
        let config = sqlx::query_as::<_, ProjectConfig>(
            r#"
            UPDATE project_configs
            SET twitter_official = $1, twitter_community = $2, pump_fun_address = $3,
                contract_address = $4, dexscreener_pair = $5, updated_at = NOW()
            WHERE id = $6
            RETURNING id, twitter_official, twitter_community, pump_fun_address,
                      contract_address, dexscreener_pair, created_at, updated_at
            "#,
        )
        .bind(&fields.twitter_official)
        .bind(&fields.twitter_community)
        .bind(&fields.pump_fun_address)
        .bind(&fields.contract_address)
        .bind(&fields.dexscreener_pair)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(config)
    }

    async fn count_configs(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM project_configs")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
