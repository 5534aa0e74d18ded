//! # Storage Traits
//!
//! Storage abstraction traits that let the domain layer work against any
//! backend. The SQLite implementations live in `storage::sqlite`; tests may
//! substitute mocks. Repositories own all timestamping: `created_at` and
//! `updated_at` are stamped at write time.

use anyhow::Result;
use async_trait::async_trait;
use shared::{
    CalendarEvent, Milestone, MilestoneTracking, NewMilestone, NewsletterIssue, Subscriber,
    TrackingHistoryRow, TrackingStatus,
};

/// Fields needed to create a subscriber row.
#[derive(Debug, Clone)]
pub struct NewSubscriber {
    pub email: String,
    pub name: Option<String>,
    pub baby_name: Option<String>,
    pub baby_birth_date: Option<String>,
    pub baby_due_date: Option<String>,
    pub access_token: String,
}

/// Fields needed to create a tracking row lazily on first interaction.
#[derive(Debug, Clone)]
pub struct NewTracking {
    pub subscriber_id: i64,
    pub milestone_id: i64,
    pub status: Option<TrackingStatus>,
    pub notes: Option<String>,
    pub achieved_at: Option<String>,
}

/// Fields needed to create a newsletter issue.
#[derive(Debug, Clone)]
pub struct NewIssue {
    pub title: String,
    pub subject_line: String,
    pub week_number: u8,
}

/// Fields needed to create a calendar event.
#[derive(Debug, Clone)]
pub struct NewCalendarEvent {
    pub subscriber_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub event_date: String,
    pub event_time: Option<String>,
    pub category: Option<String>,
}

/// Trait defining the interface for subscriber storage operations
#[async_trait]
pub trait SubscriberStorage: Send + Sync {
    /// Create a subscriber; the caller guarantees the email is unused
    async fn create_subscriber(&self, new: &NewSubscriber) -> Result<Subscriber>;

    /// Look up a subscriber by their access token
    async fn get_by_token(&self, token: &str) -> Result<Option<Subscriber>>;

    /// Look up a subscriber by email (the natural key)
    async fn get_by_email(&self, email: &str) -> Result<Option<Subscriber>>;

    /// Flip the active flag without touching any other field
    async fn set_active(&self, subscriber_id: i64, active: bool) -> Result<()>;

    /// Set or clear the neighborhood profile field
    async fn set_neighborhood(&self, subscriber_id: i64, neighborhood: Option<&str>) -> Result<()>;

    /// List all subscribers ordered by creation time, newest first
    async fn list_subscribers(&self) -> Result<Vec<Subscriber>>;
}

/// Trait defining the interface for the read-only milestone catalog
#[async_trait]
pub trait MilestoneStorage: Send + Sync {
    /// Bulk-insert reference milestones (seeding only)
    async fn insert_milestones(&self, milestones: &[NewMilestone]) -> Result<()>;

    /// Number of milestones in the catalog
    async fn count_milestones(&self) -> Result<i64>;

    /// Retrieve one milestone by id
    async fn get_milestone(&self, milestone_id: i64) -> Result<Option<Milestone>>;

    /// All milestones for a week, ordered by category then id (the stable
    /// display-grouping order)
    async fn list_for_week(&self, week: u8) -> Result<Vec<Milestone>>;
}

/// Trait defining the interface for the per-subscriber tracking ledger
#[async_trait]
pub trait TrackingStorage: Send + Sync {
    /// Fetch the tracking row for one (subscriber, milestone) pair
    async fn get_tracking(
        &self,
        subscriber_id: i64,
        milestone_id: i64,
    ) -> Result<Option<MilestoneTracking>>;

    /// Create a tracking row; at most one may exist per pair
    async fn insert_tracking(&self, new: &NewTracking) -> Result<MilestoneTracking>;

    /// Update status and achieved timestamp together in one statement
    async fn update_status(
        &self,
        tracking_id: i64,
        status: Option<TrackingStatus>,
        achieved_at: Option<&str>,
    ) -> Result<()>;

    /// Update the note and its derived AI reflection together
    async fn update_notes(
        &self,
        tracking_id: i64,
        notes: Option<&str>,
        ai_response: Option<&str>,
    ) -> Result<()>;

    /// All tracking rows a subscriber has for one week's milestones
    async fn list_for_week(&self, subscriber_id: i64, week: u8) -> Result<Vec<MilestoneTracking>>;

    /// Full longitudinal history across every week, joined with the
    /// milestone's week/category/title, filtered to rows that carry a status
    /// or a non-empty note, ordered by week then category
    async fn list_history(&self, subscriber_id: i64) -> Result<Vec<TrackingHistoryRow>>;
}

/// Trait defining the interface for newsletter issue storage
#[async_trait]
pub trait NewsletterStorage: Send + Sync {
    async fn create_issue(&self, new: &NewIssue) -> Result<NewsletterIssue>;

    /// Persist title/subject/status/sent_at changes for an existing issue
    async fn update_issue(&self, issue: &NewsletterIssue) -> Result<()>;

    async fn get_issue(&self, issue_id: i64) -> Result<Option<NewsletterIssue>>;

    /// Delete an issue, reporting whether a row existed
    async fn delete_issue(&self, issue_id: i64) -> Result<bool>;

    /// The most recently created issue for a week, if any
    async fn latest_for_week(&self, week: u8) -> Result<Option<NewsletterIssue>>;

    /// All issues ordered by week number (the updates page week picker)
    async fn list_issues(&self) -> Result<Vec<NewsletterIssue>>;
}

/// Trait defining the interface for family calendar storage
#[async_trait]
pub trait CalendarEventStorage: Send + Sync {
    async fn create_event(&self, new: &NewCalendarEvent) -> Result<CalendarEvent>;

    /// Fetch one event, scoped to its owning subscriber
    async fn get_event(&self, subscriber_id: i64, event_id: i64) -> Result<Option<CalendarEvent>>;

    async fn update_event(&self, event: &CalendarEvent) -> Result<()>;

    async fn delete_event(&self, subscriber_id: i64, event_id: i64) -> Result<()>;

    /// Events within an inclusive date range, ordered by date then time
    async fn list_in_range(
        &self,
        subscriber_id: i64,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<CalendarEvent>>;
}
