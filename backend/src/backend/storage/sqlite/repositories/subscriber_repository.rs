use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row};

use crate::backend::storage::sqlite::db::DbConnection;
use crate::backend::storage::traits::{NewSubscriber, SubscriberStorage};
use shared::{Subscriber, SubscriberTier};

/// SQLite repository for subscriber records
#[derive(Clone)]
pub struct SubscriberRepository {
    db: DbConnection,
}

impl SubscriberRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Result<Subscriber> {
        let tier_str: String = row.get("tier");
        Ok(Subscriber {
            id: row.get("id"),
            email: row.get("email"),
            name: row.get("name"),
            baby_name: row.get("baby_name"),
            baby_birth_date: row.get("baby_birth_date"),
            baby_due_date: row.get("baby_due_date"),
            neighborhood: row.get("neighborhood"),
            tier: SubscriberTier::parse(&tier_str)
                .ok_or_else(|| anyhow!("unknown subscriber tier: {}", tier_str))?,
            is_active: row.get("is_active"),
            access_token: row.get("access_token"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}

#[async_trait]
impl SubscriberStorage for SubscriberRepository {
    async fn create_subscriber(&self, new: &NewSubscriber) -> Result<Subscriber> {
        let now = Utc::now().to_rfc3339();
        let result = sqlx::query(
            r#"
            INSERT INTO subscribers
                (email, name, baby_name, baby_birth_date, baby_due_date,
                 tier, is_active, access_token, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, 'free', 1, ?, ?, ?)
            "#,
        )
        .bind(&new.email)
        .bind(&new.name)
        .bind(&new.baby_name)
        .bind(&new.baby_birth_date)
        .bind(&new.baby_due_date)
        .bind(&new.access_token)
        .bind(&now)
        .bind(&now)
        .execute(self.db.pool())
        .await?;

        Ok(Subscriber {
            id: result.last_insert_rowid(),
            email: new.email.clone(),
            name: new.name.clone(),
            baby_name: new.baby_name.clone(),
            baby_birth_date: new.baby_birth_date.clone(),
            baby_due_date: new.baby_due_date.clone(),
            neighborhood: None,
            tier: SubscriberTier::Free,
            is_active: true,
            access_token: new.access_token.clone(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    async fn get_by_token(&self, token: &str) -> Result<Option<Subscriber>> {
        let row = sqlx::query(
            r#"
            SELECT id, email, name, baby_name, baby_birth_date, baby_due_date,
                   neighborhood, tier, is_active, access_token, created_at, updated_at
            FROM subscribers
            WHERE access_token = ?
            "#,
        )
        .bind(token)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Subscriber>> {
        let row = sqlx::query(
            r#"
            SELECT id, email, name, baby_name, baby_birth_date, baby_due_date,
                   neighborhood, tier, is_active, access_token, created_at, updated_at
            FROM subscribers
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    async fn set_active(&self, subscriber_id: i64, active: bool) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE subscribers SET is_active = ?, updated_at = ? WHERE id = ?
            "#,
        )
        .bind(active)
        .bind(Utc::now().to_rfc3339())
        .bind(subscriber_id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn set_neighborhood(&self, subscriber_id: i64, neighborhood: Option<&str>) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE subscribers SET neighborhood = ?, updated_at = ? WHERE id = ?
            "#,
        )
        .bind(neighborhood)
        .bind(Utc::now().to_rfc3339())
        .bind(subscriber_id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn list_subscribers(&self) -> Result<Vec<Subscriber>> {
        let rows = sqlx::query(
            r#"
            SELECT id, email, name, baby_name, baby_birth_date, baby_due_date,
                   neighborhood, tier, is_active, access_token, created_at, updated_at
            FROM subscribers
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::from_row).collect()
    }
}
