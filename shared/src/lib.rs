use serde::{Deserialize, Serialize};

/// A newsletter subscriber and their baby's profile.
///
/// Email is the natural key: subscribing twice with the same address reuses
/// the existing record. The access token is the bearer credential for every
/// personalized page and is immutable once issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscriber {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub baby_name: Option<String>,
    /// Baby's birth date (ISO `YYYY-MM-DD`); absent for due-date-only signups
    pub baby_birth_date: Option<String>,
    /// Baby's due date (ISO `YYYY-MM-DD`)
    pub baby_due_date: Option<String>,
    pub neighborhood: Option<String>,
    pub tier: SubscriberTier,
    pub is_active: bool,
    /// Opaque token granting access to the personalized pages (no password)
    pub access_token: String,
    /// RFC 3339 creation timestamp
    pub created_at: String,
    /// RFC 3339 last-update timestamp
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriberTier {
    Free,
    Paid,
}

impl SubscriberTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriberTier::Free => "free",
            SubscriberTier::Paid => "paid",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "free" => Some(SubscriberTier::Free),
            "paid" => Some(SubscriberTier::Paid),
            _ => None,
        }
    }
}

/// Closed set of developmental categories used to group milestones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneCategory {
    Motor,
    Sensory,
    Communication,
    Feeding,
    Sleep,
    SocialEmotional,
    Cognitive,
}

impl MilestoneCategory {
    pub const ALL: [MilestoneCategory; 7] = [
        MilestoneCategory::Motor,
        MilestoneCategory::Sensory,
        MilestoneCategory::Communication,
        MilestoneCategory::Feeding,
        MilestoneCategory::Sleep,
        MilestoneCategory::SocialEmotional,
        MilestoneCategory::Cognitive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneCategory::Motor => "motor",
            MilestoneCategory::Sensory => "sensory",
            MilestoneCategory::Communication => "communication",
            MilestoneCategory::Feeding => "feeding",
            MilestoneCategory::Sleep => "sleep",
            MilestoneCategory::SocialEmotional => "social_emotional",
            MilestoneCategory::Cognitive => "cognitive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "motor" => Some(MilestoneCategory::Motor),
            "sensory" => Some(MilestoneCategory::Sensory),
            "communication" => Some(MilestoneCategory::Communication),
            "feeding" => Some(MilestoneCategory::Feeding),
            "sleep" => Some(MilestoneCategory::Sleep),
            "social_emotional" => Some(MilestoneCategory::SocialEmotional),
            "cognitive" => Some(MilestoneCategory::Cognitive),
            _ => None,
        }
    }

    /// Human-readable label for display grouping
    pub fn display_label(&self) -> &'static str {
        match self {
            MilestoneCategory::Motor => "Motor",
            MilestoneCategory::Sensory => "Sensory",
            MilestoneCategory::Communication => "Communication",
            MilestoneCategory::Feeding => "Feeding",
            MilestoneCategory::Sleep => "Sleep",
            MilestoneCategory::SocialEmotional => "Social & Emotional",
            MilestoneCategory::Cognitive => "Cognitive",
        }
    }
}

/// Immutable reference milestone, seeded once and never mutated by
/// subscriber actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: i64,
    /// Developmental week since birth (0-16)
    pub week_number: u8,
    pub category: MilestoneCategory,
    pub title: String,
    pub description: String,
    /// Source citation, e.g. "AAP" or "CDC"
    pub source: Option<String>,
    /// Suggested activity for the parent to try
    pub parent_action: Option<String>,
    /// Marks a developmental red flag rather than a routine expectation
    pub is_concern_flag: bool,
}

/// Milestone definition used when seeding the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMilestone {
    pub week_number: u8,
    pub category: MilestoneCategory,
    pub title: String,
    pub description: String,
    pub source: Option<String>,
    pub parent_action: Option<String>,
    pub is_concern_flag: bool,
}

/// Tri-state tracking status; `None` on the tracking row means "untracked".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingStatus {
    Achieved,
    Concern,
}

impl TrackingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingStatus::Achieved => "achieved",
            TrackingStatus::Concern => "concern",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "achieved" => Some(TrackingStatus::Achieved),
            "concern" => Some(TrackingStatus::Concern),
            _ => None,
        }
    }
}

/// Per-subscriber, per-milestone tracking record.
///
/// At most one row exists per (subscriber, milestone) pair; it is created
/// lazily on the first toggle or note and mutated in place afterwards.
/// `achieved_at` is non-null exactly when `status == Achieved`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneTracking {
    pub id: i64,
    pub subscriber_id: i64,
    pub milestone_id: i64,
    pub status: Option<TrackingStatus>,
    pub notes: Option<String>,
    /// RFC 3339 timestamp of when the milestone was marked achieved
    pub achieved_at: Option<String>,
    /// AI-generated reflection on the most recent note
    pub ai_response: Option<String>,
}

/// Progress counters for one subscriber and one week.
///
/// Computed on demand and never persisted; `achieved + concern + untracked`
/// always equals `total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekProgress {
    pub week: u8,
    pub total: u32,
    pub achieved: u32,
    pub concern: u32,
    pub untracked: u32,
}

/// One row of the longitudinal tracking history used for chat
/// personalization: the tracking state joined with its milestone's
/// week/category/title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingHistoryRow {
    pub week_number: u8,
    pub category: MilestoneCategory,
    pub title: String,
    pub status: Option<TrackingStatus>,
    pub notes: Option<String>,
    pub achieved_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Draft,
    Scheduled,
    Sent,
}

impl IssueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Draft => "draft",
            IssueStatus::Scheduled => "scheduled",
            IssueStatus::Sent => "sent",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(IssueStatus::Draft),
            "scheduled" => Some(IssueStatus::Scheduled),
            "sent" => Some(IssueStatus::Sent),
            _ => None,
        }
    }
}

/// Week-indexed newsletter content managed through the admin surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsletterIssue {
    pub id: i64,
    pub title: String,
    pub subject_line: String,
    pub week_number: u8,
    pub status: IssueStatus,
    pub sent_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// A subscriber's family calendar entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: i64,
    pub subscriber_id: i64,
    pub title: String,
    pub description: Option<String>,
    /// ISO `YYYY-MM-DD`
    pub event_date: String,
    /// `HH:MM`, if the event has a time
    pub event_time: Option<String>,
    /// dr_appointment, family_visit, milestone, vaccination, other
    pub category: Option<String>,
}

/// Type of calendar day for explicit rendering logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum CalendarDayType {
    /// Empty padding day before the start of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
    /// Empty padding day after the end of the month for grid alignment
    PaddingAfter,
}

/// Represents a single day in the family calendar grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    pub day: u32,
    pub date: Option<String>,
    pub day_type: CalendarDayType,
    pub is_today: bool,
    pub events: Vec<CalendarEvent>,
}

/// A calendar month view with events and grid padding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: i32,
    pub month_name: String,
    pub days: Vec<CalendarDay>,
    /// 0 = Sunday, 1 = Monday, etc.
    pub first_day_of_week: u32,
    pub upcoming_events: Vec<CalendarEvent>,
}

// ── Requests / responses ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub baby_name: Option<String>,
    /// ISO `YYYY-MM-DD`
    #[serde(default)]
    pub baby_birth_date: Option<String>,
    /// ISO `YYYY-MM-DD`
    #[serde(default)]
    pub baby_due_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscribeResponse {
    pub token: String,
    /// Display week resolved from the baby's age
    pub week: u8,
    /// True when an inactive subscription with the same email was revived
    pub reactivated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriberLoginRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriberLoginResponse {
    pub token: String,
    pub week: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnsubscribeResponse {
    pub found: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveNeighborhoodRequest {
    #[serde(default)]
    pub neighborhood: String,
}

/// Milestones for one category, in stable display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneGroup {
    pub label: String,
    pub milestones: Vec<Milestone>,
}

/// Everything the personalized updates page needs for one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyUpdatesResponse {
    pub subscriber: Subscriber,
    pub baby_age_weeks: Option<i64>,
    pub week: u8,
    pub categories: Vec<MilestoneGroup>,
    pub tracking: Vec<MilestoneTracking>,
    pub progress: WeekProgress,
    pub newsletter: Option<NewsletterIssue>,
    pub available_issues: Vec<NewsletterIssue>,
}

/// Updated row state plus the refreshed week snapshot after a toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleMilestoneResponse {
    pub tracking: MilestoneTracking,
    pub progress: WeekProgress,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveNoteRequest {
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveNoteResponse {
    /// True when an empty note cleared the stored note and reflection
    pub cleared: bool,
    pub ai_response: Option<String>,
}

/// One turn of the chat conversation, provider wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    /// Week the subscriber is currently viewing, if any
    #[serde(default)]
    pub week: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    /// ISO `YYYY-MM-DD`
    pub event_date: String,
    /// `HH:MM`
    #[serde(default)]
    pub event_time: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateIssueRequest {
    pub title: String,
    pub subject_line: String,
    pub week_number: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateIssueRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subject_line: Option<String>,
    #[serde(default)]
    pub status: Option<IssueStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminLoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriberListResponse {
    pub subscribers: Vec<Subscriber>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSendRequest {
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSendResponse {
    pub delivery_id: String,
    pub status: String,
}
