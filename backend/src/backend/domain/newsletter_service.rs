//! # Newsletter Service
//!
//! Admin-facing issue management plus the test-send path that renders an
//! issue to HTML and hands it to the mailer.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::clock::MAX_CONTENT_WEEK;
use super::errors::{DomainError, DomainResult};
use crate::backend::email::Mailer;
use crate::backend::storage::{MilestoneStorage, NewIssue, NewsletterStorage};
use shared::{
    CreateIssueRequest, IssueStatus, Milestone, NewsletterIssue, TestSendRequest,
    TestSendResponse, UpdateIssueRequest,
};

#[derive(Clone)]
pub struct NewsletterService {
    newsletters: Arc<dyn NewsletterStorage>,
    milestones: Arc<dyn MilestoneStorage>,
    mailer: Arc<dyn Mailer>,
}

impl NewsletterService {
    pub fn new(
        newsletters: Arc<dyn NewsletterStorage>,
        milestones: Arc<dyn MilestoneStorage>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            newsletters,
            milestones,
            mailer,
        }
    }

    pub async fn create_issue(&self, request: CreateIssueRequest) -> DomainResult<NewsletterIssue> {
        let title = request.title.trim().to_string();
        if title.is_empty() {
            return Err(DomainError::Validation("issue title is required".to_string()));
        }
        if i64::from(request.week_number) > MAX_CONTENT_WEEK {
            return Err(DomainError::Validation(format!(
                "week {} is beyond the content range",
                request.week_number
            )));
        }

        let issue = self
            .newsletters
            .create_issue(&NewIssue {
                title,
                subject_line: request.subject_line.trim().to_string(),
                week_number: request.week_number,
            })
            .await?;
        info!("Created issue {} for week {}", issue.id, issue.week_number);
        Ok(issue)
    }

    /// Apply partial edits. Transitioning into `Sent` stamps `sent_at`;
    /// leaving it clears the stamp.
    pub async fn update_issue(
        &self,
        issue_id: i64,
        request: UpdateIssueRequest,
    ) -> DomainResult<NewsletterIssue> {
        let mut issue = self
            .newsletters
            .get_issue(issue_id)
            .await?
            .ok_or(DomainError::NotFound("issue"))?;

        if let Some(title) = request.title {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(DomainError::Validation("issue title is required".to_string()));
            }
            issue.title = title;
        }
        if let Some(subject_line) = request.subject_line {
            issue.subject_line = subject_line.trim().to_string();
        }
        if let Some(status) = request.status {
            if status == IssueStatus::Sent && issue.status != IssueStatus::Sent {
                issue.sent_at = Some(Utc::now().to_rfc3339());
            } else if status != IssueStatus::Sent {
                issue.sent_at = None;
            }
            issue.status = status;
        }

        self.newsletters.update_issue(&issue).await?;
        Ok(issue)
    }

    pub async fn get_issue(&self, issue_id: i64) -> DomainResult<NewsletterIssue> {
        self.newsletters
            .get_issue(issue_id)
            .await?
            .ok_or(DomainError::NotFound("issue"))
    }

    pub async fn list_issues(&self) -> DomainResult<Vec<NewsletterIssue>> {
        Ok(self.newsletters.list_issues().await?)
    }

    pub async fn delete_issue(&self, issue_id: i64) -> DomainResult<()> {
        if !self.newsletters.delete_issue(issue_id).await? {
            return Err(DomainError::NotFound("issue"));
        }
        info!("Deleted issue {}", issue_id);
        Ok(())
    }

    /// Render an issue and deliver it to a single test address.
    pub async fn test_send(
        &self,
        issue_id: i64,
        request: TestSendRequest,
    ) -> DomainResult<TestSendResponse> {
        let issue = self
            .newsletters
            .get_issue(issue_id)
            .await?
            .ok_or(DomainError::NotFound("issue"))?;
        let milestones = self.milestones.list_for_week(issue.week_number).await?;

        let html = render_issue_html(&issue, &milestones);
        let receipt = self
            .mailer
            .send(&request.to, &issue.subject_line, &html)
            .await?;
        info!("Test send of issue {} to {}", issue.id, request.to);

        Ok(TestSendResponse {
            delivery_id: receipt.delivery_id,
            status: receipt.status,
        })
    }
}

/// Minimal HTML rendering of an issue with its week's milestones.
fn render_issue_html(issue: &NewsletterIssue, milestones: &[Milestone]) -> String {
    let mut milestone_html = String::new();
    for m in milestones {
        milestone_html.push_str(&format!(
            "<li><strong>{}</strong> ({}): {}</li>\n",
            m.title,
            m.category.display_label(),
            m.description
        ));
    }

    format!(
        "<html>\n<body>\n<h1>{}</h1>\n<p>Week {} of your baby's first sixteen weeks.</p>\n<h2>What to look for this week</h2>\n<ul>\n{}</ul>\n</body>\n</html>\n",
        issue.title, issue.week_number, milestone_html
    )
}
