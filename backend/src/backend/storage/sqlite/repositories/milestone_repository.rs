use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use crate::backend::storage::sqlite::db::DbConnection;
use crate::backend::storage::traits::MilestoneStorage;
use shared::{Milestone, MilestoneCategory, NewMilestone};

/// SQLite repository for the read-only milestone catalog
#[derive(Clone)]
pub struct MilestoneRepository {
    db: DbConnection,
}

impl MilestoneRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Result<Milestone> {
        let category_str: String = row.get("category");
        Ok(Milestone {
            id: row.get("id"),
            week_number: row.get::<i64, _>("week_number") as u8,
            category: MilestoneCategory::parse(&category_str)
                .ok_or_else(|| anyhow!("unknown milestone category: {}", category_str))?,
            title: row.get("title"),
            description: row.get("description"),
            source: row.get("source"),
            parent_action: row.get("parent_action"),
            is_concern_flag: row.get("is_concern_flag"),
        })
    }
}

#[async_trait]
impl MilestoneStorage for MilestoneRepository {
    async fn insert_milestones(&self, milestones: &[NewMilestone]) -> Result<()> {
        for m in milestones {
            sqlx::query(
                r#"
                INSERT INTO milestones
                    (week_number, category, title, description, source,
                     parent_action, is_concern_flag)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(m.week_number as i64)
            .bind(m.category.as_str())
            .bind(&m.title)
            .bind(&m.description)
            .bind(&m.source)
            .bind(&m.parent_action)
            .bind(m.is_concern_flag)
            .execute(self.db.pool())
            .await?;
        }
        Ok(())
    }

    async fn count_milestones(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM milestones")
            .fetch_one(self.db.pool())
            .await?;
        Ok(row.get("n"))
    }

    async fn get_milestone(&self, milestone_id: i64) -> Result<Option<Milestone>> {
        let row = sqlx::query(
            r#"
            SELECT id, week_number, category, title, description, source,
                   parent_action, is_concern_flag
            FROM milestones
            WHERE id = ?
            "#,
        )
        .bind(milestone_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    async fn list_for_week(&self, week: u8) -> Result<Vec<Milestone>> {
        let rows = sqlx::query(
            r#"
            SELECT id, week_number, category, title, description, source,
                   parent_action, is_concern_flag
            FROM milestones
            WHERE week_number = ?
            ORDER BY category, id
            "#,
        )
        .bind(week as i64)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::from_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test() -> MilestoneRepository {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");
        MilestoneRepository::new(db)
    }

    fn milestone(week: u8, category: MilestoneCategory, title: &str) -> NewMilestone {
        NewMilestone {
            week_number: week,
            category,
            title: title.to_string(),
            description: format!("{} description", title),
            source: Some("AAP".to_string()),
            parent_action: None,
            is_concern_flag: false,
        }
    }

    #[tokio::test]
    async fn test_insert_and_count() {
        let repo = setup_test().await;
        assert_eq!(repo.count_milestones().await.unwrap(), 0);

        repo.insert_milestones(&[
            milestone(0, MilestoneCategory::Motor, "Flexed posture"),
            milestone(0, MilestoneCategory::Sensory, "Tracks to midline"),
        ])
        .await
        .expect("Failed to insert milestones");

        assert_eq!(repo.count_milestones().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_list_for_week_ordering() {
        let repo = setup_test().await;

        // Inserted out of category order on purpose
        repo.insert_milestones(&[
            milestone(2, MilestoneCategory::Sleep, "Longer night stretch"),
            milestone(2, MilestoneCategory::Motor, "Head lift in tummy time"),
            milestone(2, MilestoneCategory::Motor, "Smoother arm movements"),
            milestone(3, MilestoneCategory::Motor, "Different week"),
        ])
        .await
        .unwrap();

        let week2 = repo.list_for_week(2).await.expect("Failed to list");
        assert_eq!(week2.len(), 3);
        // Ordered by category text, then id within a category
        assert_eq!(week2[0].title, "Head lift in tummy time");
        assert_eq!(week2[1].title, "Smoother arm movements");
        assert_eq!(week2[2].title, "Longer night stretch");
    }

    #[tokio::test]
    async fn test_get_unknown_milestone() {
        let repo = setup_test().await;
        let missing = repo.get_milestone(999).await.expect("Failed to query");
        assert!(missing.is_none());
    }
}
