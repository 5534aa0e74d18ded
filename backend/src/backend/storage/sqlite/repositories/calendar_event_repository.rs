use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row};

use crate::backend::storage::sqlite::db::DbConnection;
use crate::backend::storage::traits::{CalendarEventStorage, NewCalendarEvent};
use shared::CalendarEvent;

/// SQLite repository for family calendar events
#[derive(Clone)]
pub struct CalendarEventRepository {
    db: DbConnection,
}

impl CalendarEventRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> CalendarEvent {
        CalendarEvent {
            id: row.get("id"),
            subscriber_id: row.get("subscriber_id"),
            title: row.get("title"),
            description: row.get("description"),
            event_date: row.get("event_date"),
            event_time: row.get("event_time"),
            category: row.get("category"),
        }
    }
}

#[async_trait]
impl CalendarEventStorage for CalendarEventRepository {
    async fn create_event(&self, new: &NewCalendarEvent) -> Result<CalendarEvent> {
        let now = Utc::now().to_rfc3339();
        let result = sqlx::query(
            r#"
            INSERT INTO calendar_events
                (subscriber_id, title, description, event_date, event_time,
                 category, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(new.subscriber_id)
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.event_date)
        .bind(&new.event_time)
        .bind(&new.category)
        .bind(&now)
        .bind(&now)
        .execute(self.db.pool())
        .await?;

        Ok(CalendarEvent {
            id: result.last_insert_rowid(),
            subscriber_id: new.subscriber_id,
            title: new.title.clone(),
            description: new.description.clone(),
            event_date: new.event_date.clone(),
            event_time: new.event_time.clone(),
            category: new.category.clone(),
        })
    }

    async fn get_event(&self, subscriber_id: i64, event_id: i64) -> Result<Option<CalendarEvent>> {
        let row = sqlx::query(
            r#"
            SELECT id, subscriber_id, title, description, event_date, event_time, category
            FROM calendar_events
            WHERE id = ? AND subscriber_id = ?
            "#,
        )
        .bind(event_id)
        .bind(subscriber_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.as_ref().map(Self::from_row))
    }

    async fn update_event(&self, event: &CalendarEvent) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE calendar_events
            SET title = ?, description = ?, event_date = ?, event_time = ?,
                category = ?, updated_at = ?
            WHERE id = ? AND subscriber_id = ?
            "#,
        )
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.event_date)
        .bind(&event.event_time)
        .bind(&event.category)
        .bind(Utc::now().to_rfc3339())
        .bind(event.id)
        .bind(event.subscriber_id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn delete_event(&self, subscriber_id: i64, event_id: i64) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM calendar_events WHERE id = ? AND subscriber_id = ?
            "#,
        )
        .bind(event_id)
        .bind(subscriber_id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn list_in_range(
        &self,
        subscriber_id: i64,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<CalendarEvent>> {
        let rows = sqlx::query(
            r#"
            SELECT id, subscriber_id, title, description, event_date, event_time, category
            FROM calendar_events
            WHERE subscriber_id = ? AND event_date >= ? AND event_date <= ?
            ORDER BY event_date, event_time
            "#,
        )
        .bind(subscriber_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.iter().map(Self::from_row).collect())
    }
}
