use crate::error::StoreError;
use crate::models::donation::{Donation, DonationStatus, NewDonation};
use crate::repository::DonationRepository;
use crate::Store;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
impl DonationRepository for Store {
    async fn list_donations(&self, limit: i64) -> Result<Vec<Donation>, StoreError> {
        let donations = sqlx::query_as::<_, Donation>(
            r#"
            SELECT id, tx_hash, from_wallet, to_wallet, amount, datetime,
                   bank_reference, recipient_org, status
            FROM donations
            ORDER BY datetime DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(donations)
    }

    async fn find_donation(&self, id: Uuid) -> Result<Option<Donation>, StoreError> {
        let donation = sqlx::query_as::<_, Donation>(
            r#"
            SELECT id, tx_hash, from_wallet, to_wallet, amount, datetime,
                   bank_reference, recipient_org, status
            FROM donations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(donation)
    }

    async fn insert_donation(&self, donation: NewDonation) -> Result<Donation, StoreError> {
        let donation = sqlx::query_as::<_, Donation>(
            r#"
            INSERT INTO donations
                (tx_hash, from_wallet, to_wallet, amount, datetime, bank_reference, recipient_org, status)
            VALUES ($1, $2, $3, $4, COALESCE($5, NOW()), $6, $7, $8)
            RETURNING id, tx_hash, from_wallet, to_wallet, amount, datetime,
                      bank_reference, recipient_org, status
            "#,
        )
        .bind(&donation.tx_hash)
        .bind(&donation.from_wallet)
        .bind(&donation.to_wallet)
        .bind(donation.amount)
        .bind(donation.datetime)
        .bind(&donation.bank_reference)
        .bind(&donation.recipient_org)
        .bind(donation.status)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::unique("tx_hash"))?;

        Ok(donation)
    }

    async fn upsert_donation(&self, donation: NewDonation) -> Result<Donation, StoreError> {
        let donation = sqlx::query_as::<_, Donation>(
            r#"
            INSERT INTO donations
                (tx_hash, from_wallet, to_wallet, amount, datetime, bank_reference, recipient_org, status)
            VALUES ($1, $2, $3, $4, COALESCE($5, NOW()), $6, $7, $8)
            ON CONFLICT (tx_hash) DO UPDATE
                SET from_wallet = EXCLUDED.from_wallet,
                    to_wallet = EXCLUDED.to_wallet,
                    amount = EXCLUDED.amount,
                    datetime = EXCLUDED.datetime,
                    bank_reference = EXCLUDED.bank_reference,
                    recipient_org = EXCLUDED.recipient_org,
                    status = EXCLUDED.status
            RETURNING id, tx_hash, from_wallet, to_wallet, amount, datetime,
                      bank_reference, recipient_org, status
            "#,
        )
        .bind(&donation.tx_hash)
        .bind(&donation.from_wallet)
        .bind(&donation.to_wallet)
        .bind(donation.amount)
        .bind(donation.datetime)
        .bind(&donation.bank_reference)
        .bind(&donation.recipient_org)
        .bind(donation.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(donation)
    }

    async fn update_donation_status(
        &self,
        id: Uuid,
        status: DonationStatus,
    ) -> Result<Option<Donation>, StoreError> {
        let donation = sqlx::query_as::<_, Donation>(
            r#"
            UPDATE donations
            SET status = $1
            WHERE id = $2
            RETURNING id, tx_hash, from_wallet, to_wallet, amount, datetime,
                      bank_reference, recipient_org, status
            "#,
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(donation)
    }

    async fn count_donations(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM donations")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
