use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row};

use crate::backend::storage::sqlite::db::DbConnection;
use crate::backend::storage::traits::{NewTracking, TrackingStorage};
use shared::{MilestoneCategory, MilestoneTracking, TrackingHistoryRow, TrackingStatus};

/// SQLite repository for the per-subscriber tracking ledger
#[derive(Clone)]
pub struct TrackingRepository {
    db: DbConnection,
}

impl TrackingRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn status_from_column(value: Option<String>) -> Result<Option<TrackingStatus>> {
        match value {
            None => Ok(None),
            Some(s) => TrackingStatus::parse(&s)
                .map(Some)
                .ok_or_else(|| anyhow!("unknown tracking status: {}", s)),
        }
    }

    fn from_row(row: &SqliteRow) -> Result<MilestoneTracking> {
        Ok(MilestoneTracking {
            id: row.get("id"),
            subscriber_id: row.get("subscriber_id"),
            milestone_id: row.get("milestone_id"),
            status: Self::status_from_column(row.get("status"))?,
            notes: row.get("notes"),
            achieved_at: row.get("achieved_at"),
            ai_response: row.get("ai_response"),
        })
    }
}

#[async_trait]
impl TrackingStorage for TrackingRepository {
    async fn get_tracking(
        &self,
        subscriber_id: i64,
        milestone_id: i64,
    ) -> Result<Option<MilestoneTracking>> {
        let row = sqlx::query(
            r#"
            SELECT id, subscriber_id, milestone_id, status, notes, achieved_at, ai_response
            FROM milestone_tracking
            WHERE subscriber_id = ? AND milestone_id = ?
            "#,
        )
        .bind(subscriber_id)
        .bind(milestone_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    async fn insert_tracking(&self, new: &NewTracking) -> Result<MilestoneTracking> {
        let now = Utc::now().to_rfc3339();
        let result = sqlx::query(
            r#"
            INSERT INTO milestone_tracking
                (subscriber_id, milestone_id, status, notes, achieved_at,
                 created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(new.subscriber_id)
        .bind(new.milestone_id)
        .bind(new.status.map(|s| s.as_str()))
        .bind(&new.notes)
        .bind(&new.achieved_at)
        .bind(&now)
        .bind(&now)
        .execute(self.db.pool())
        .await?;

        Ok(MilestoneTracking {
            id: result.last_insert_rowid(),
            subscriber_id: new.subscriber_id,
            milestone_id: new.milestone_id,
            status: new.status,
            notes: new.notes.clone(),
            achieved_at: new.achieved_at.clone(),
            ai_response: None,
        })
    }

    async fn update_status(
        &self,
        tracking_id: i64,
        status: Option<TrackingStatus>,
        achieved_at: Option<&str>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE milestone_tracking
            SET status = ?, achieved_at = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(status.map(|s| s.as_str()))
        .bind(achieved_at)
        .bind(Utc::now().to_rfc3339())
        .bind(tracking_id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn update_notes(
        &self,
        tracking_id: i64,
        notes: Option<&str>,
        ai_response: Option<&str>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE milestone_tracking
            SET notes = ?, ai_response = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(notes)
        .bind(ai_response)
        .bind(Utc::now().to_rfc3339())
        .bind(tracking_id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn list_for_week(&self, subscriber_id: i64, week: u8) -> Result<Vec<MilestoneTracking>> {
        let rows = sqlx::query(
            r#"
            SELECT t.id, t.subscriber_id, t.milestone_id, t.status, t.notes,
                   t.achieved_at, t.ai_response
            FROM milestone_tracking t
            JOIN milestones m ON m.id = t.milestone_id
            WHERE t.subscriber_id = ? AND m.week_number = ?
            "#,
        )
        .bind(subscriber_id)
        .bind(week as i64)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::from_row).collect()
    }

    async fn list_history(&self, subscriber_id: i64) -> Result<Vec<TrackingHistoryRow>> {
        let rows = sqlx::query(
            r#"
            SELECT m.week_number, m.category, m.title, t.status, t.notes, t.achieved_at
            FROM milestone_tracking t
            JOIN milestones m ON m.id = t.milestone_id
            WHERE t.subscriber_id = ?
              AND (t.status IS NOT NULL OR (t.notes IS NOT NULL AND t.notes != ''))
            ORDER BY m.week_number, m.category
            "#,
        )
        .bind(subscriber_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter()
            .map(|row| {
                let category_str: String = row.get("category");
                Ok(TrackingHistoryRow {
                    week_number: row.get::<i64, _>("week_number") as u8,
                    category: MilestoneCategory::parse(&category_str)
                        .ok_or_else(|| anyhow!("unknown milestone category: {}", category_str))?,
                    title: row.get("title"),
                    status: Self::status_from_column(row.get("status"))?,
                    notes: row.get("notes"),
                    achieved_at: row.get("achieved_at"),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::sqlite::repositories::milestone_repository::MilestoneRepository;
    use crate::backend::storage::traits::MilestoneStorage;
    use shared::NewMilestone;

    async fn setup_test() -> (TrackingRepository, MilestoneRepository) {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");
        (
            TrackingRepository::new(db.clone()),
            MilestoneRepository::new(db),
        )
    }

    fn milestone(week: u8, category: MilestoneCategory, title: &str) -> NewMilestone {
        NewMilestone {
            week_number: week,
            category,
            title: title.to_string(),
            description: "desc".to_string(),
            source: None,
            parent_action: None,
            is_concern_flag: false,
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_tracking() {
        let (tracking, milestones) = setup_test().await;
        milestones
            .insert_milestones(&[milestone(1, MilestoneCategory::Motor, "m1")])
            .await
            .unwrap();

        let row = tracking
            .insert_tracking(&NewTracking {
                subscriber_id: 7,
                milestone_id: 1,
                status: Some(TrackingStatus::Achieved),
                notes: None,
                achieved_at: Some("2026-08-01T00:00:00+00:00".to_string()),
            })
            .await
            .expect("Failed to insert tracking");

        let fetched = tracking.get_tracking(7, 1).await.unwrap().unwrap();
        assert_eq!(fetched.id, row.id);
        assert_eq!(fetched.status, Some(TrackingStatus::Achieved));
        assert!(fetched.achieved_at.is_some());
    }

    #[tokio::test]
    async fn test_unique_pair_constraint() {
        let (tracking, milestones) = setup_test().await;
        milestones
            .insert_milestones(&[milestone(1, MilestoneCategory::Motor, "m1")])
            .await
            .unwrap();

        let new = NewTracking {
            subscriber_id: 7,
            milestone_id: 1,
            status: None,
            notes: Some("first".to_string()),
            achieved_at: None,
        };
        tracking.insert_tracking(&new).await.unwrap();
        assert!(
            tracking.insert_tracking(&new).await.is_err(),
            "second row for the same pair must be rejected"
        );
    }

    #[tokio::test]
    async fn test_update_status_clears_achieved_at() {
        let (tracking, milestones) = setup_test().await;
        milestones
            .insert_milestones(&[milestone(1, MilestoneCategory::Motor, "m1")])
            .await
            .unwrap();

        let row = tracking
            .insert_tracking(&NewTracking {
                subscriber_id: 7,
                milestone_id: 1,
                status: Some(TrackingStatus::Achieved),
                notes: None,
                achieved_at: Some("2026-08-01T00:00:00+00:00".to_string()),
            })
            .await
            .unwrap();

        tracking
            .update_status(row.id, Some(TrackingStatus::Concern), None)
            .await
            .unwrap();

        let fetched = tracking.get_tracking(7, 1).await.unwrap().unwrap();
        assert_eq!(fetched.status, Some(TrackingStatus::Concern));
        assert!(fetched.achieved_at.is_none());
    }

    #[tokio::test]
    async fn test_history_filters_and_orders() {
        let (tracking, milestones) = setup_test().await;
        milestones
            .insert_milestones(&[
                milestone(4, MilestoneCategory::Sleep, "w4 sleep"),
                milestone(1, MilestoneCategory::Motor, "w1 motor"),
                milestone(2, MilestoneCategory::Feeding, "w2 feeding"),
            ])
            .await
            .unwrap();

        // Status only
        tracking
            .insert_tracking(&NewTracking {
                subscriber_id: 7,
                milestone_id: 1,
                status: Some(TrackingStatus::Achieved),
                notes: None,
                achieved_at: Some("2026-08-01T00:00:00+00:00".to_string()),
            })
            .await
            .unwrap();
        // Note only
        tracking
            .insert_tracking(&NewTracking {
                subscriber_id: 7,
                milestone_id: 2,
                status: None,
                notes: Some("slept 5 hours".to_string()),
                achieved_at: None,
            })
            .await
            .unwrap();
        // Neither -> excluded from history
        tracking
            .insert_tracking(&NewTracking {
                subscriber_id: 7,
                milestone_id: 3,
                status: None,
                notes: None,
                achieved_at: None,
            })
            .await
            .unwrap();

        let history = tracking.list_history(7).await.unwrap();
        assert_eq!(history.len(), 2);
        // Ordered by week: milestone id 2 is week 1, id 1 is week 4
        assert_eq!(history[0].week_number, 1);
        assert_eq!(history[0].title, "w1 motor");
        assert_eq!(history[1].week_number, 4);
        assert_eq!(history[1].notes, None);
        assert_eq!(history[1].status, Some(TrackingStatus::Achieved));
    }

    #[tokio::test]
    async fn test_list_for_week_scopes_to_subscriber() {
        let (tracking, milestones) = setup_test().await;
        milestones
            .insert_milestones(&[milestone(3, MilestoneCategory::Motor, "w3 motor")])
            .await
            .unwrap();

        tracking
            .insert_tracking(&NewTracking {
                subscriber_id: 1,
                milestone_id: 1,
                status: Some(TrackingStatus::Concern),
                notes: None,
                achieved_at: None,
            })
            .await
            .unwrap();
        tracking
            .insert_tracking(&NewTracking {
                subscriber_id: 2,
                milestone_id: 1,
                status: Some(TrackingStatus::Achieved),
                notes: None,
                achieved_at: Some("2026-08-01T00:00:00+00:00".to_string()),
            })
            .await
            .unwrap();

        let rows = tracking.list_for_week(1, 3).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, Some(TrackingStatus::Concern));
    }
}
