use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row};

use crate::backend::storage::sqlite::db::DbConnection;
use crate::backend::storage::traits::{NewIssue, NewsletterStorage};
use shared::{IssueStatus, NewsletterIssue};

/// SQLite repository for newsletter issues
#[derive(Clone)]
pub struct NewsletterRepository {
    db: DbConnection,
}

impl NewsletterRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Result<NewsletterIssue> {
        let status_str: String = row.get("status");
        Ok(NewsletterIssue {
            id: row.get("id"),
            title: row.get("title"),
            subject_line: row.get("subject_line"),
            week_number: row.get::<i64, _>("week_number") as u8,
            status: IssueStatus::parse(&status_str)
                .ok_or_else(|| anyhow!("unknown issue status: {}", status_str))?,
            sent_at: row.get("sent_at"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}

#[async_trait]
impl NewsletterStorage for NewsletterRepository {
    async fn create_issue(&self, new: &NewIssue) -> Result<NewsletterIssue> {
        let now = Utc::now().to_rfc3339();
        let result = sqlx::query(
            r#"
            INSERT INTO newsletter_issues
                (title, subject_line, week_number, status, created_at, updated_at)
            VALUES (?, ?, ?, 'draft', ?, ?)
            "#,
        )
        .bind(&new.title)
        .bind(&new.subject_line)
        .bind(new.week_number as i64)
        .bind(&now)
        .bind(&now)
        .execute(self.db.pool())
        .await?;

        Ok(NewsletterIssue {
            id: result.last_insert_rowid(),
            title: new.title.clone(),
            subject_line: new.subject_line.clone(),
            week_number: new.week_number,
            status: IssueStatus::Draft,
            sent_at: None,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    async fn update_issue(&self, issue: &NewsletterIssue) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE newsletter_issues
            SET title = ?, subject_line = ?, status = ?, sent_at = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&issue.title)
        .bind(&issue.subject_line)
        .bind(issue.status.as_str())
        .bind(&issue.sent_at)
        .bind(Utc::now().to_rfc3339())
        .bind(issue.id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_issue(&self, issue_id: i64) -> Result<Option<NewsletterIssue>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, subject_line, week_number, status, sent_at,
                   created_at, updated_at
            FROM newsletter_issues
            WHERE id = ?
            "#,
        )
        .bind(issue_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    async fn delete_issue(&self, issue_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM newsletter_issues WHERE id = ?")
            .bind(issue_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn latest_for_week(&self, week: u8) -> Result<Option<NewsletterIssue>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, subject_line, week_number, status, sent_at,
                   created_at, updated_at
            FROM newsletter_issues
            WHERE week_number = ?
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(week as i64)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    async fn list_issues(&self) -> Result<Vec<NewsletterIssue>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, subject_line, week_number, status, sent_at,
                   created_at, updated_at
            FROM newsletter_issues
            ORDER BY week_number, id
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::from_row).collect()
    }
}
