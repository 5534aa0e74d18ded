//! # Milestone Service
//!
//! Catalog seeding and the personalized weekly updates view: which week to
//! show, the milestones for that week grouped by category, the subscriber's
//! tracking state, and the aggregated progress counters.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::catalog::default_catalog;
use super::clock::{age_in_weeks, resolve_display_week, stored_date};
use super::errors::DomainResult;
use super::subscriber_service::SubscriberService;
use crate::backend::storage::{MilestoneStorage, NewsletterStorage, TrackingStorage};
use shared::{
    Milestone, MilestoneGroup, MilestoneTracking, MyUpdatesResponse, TrackingStatus, WeekProgress,
};

#[derive(Clone)]
pub struct MilestoneService {
    subscriber_service: SubscriberService,
    milestones: Arc<dyn MilestoneStorage>,
    tracking: Arc<dyn TrackingStorage>,
    newsletters: Arc<dyn NewsletterStorage>,
}

impl MilestoneService {
    pub fn new(
        subscriber_service: SubscriberService,
        milestones: Arc<dyn MilestoneStorage>,
        tracking: Arc<dyn TrackingStorage>,
        newsletters: Arc<dyn NewsletterStorage>,
    ) -> Self {
        Self {
            subscriber_service,
            milestones,
            tracking,
            newsletters,
        }
    }

    /// Insert the built-in catalog if the table is empty. Safe to call on
    /// every startup.
    pub async fn seed_catalog(&self) -> DomainResult<()> {
        let existing = self.milestones.count_milestones().await?;
        if existing > 0 {
            info!("Milestone catalog already seeded ({} entries)", existing);
            return Ok(());
        }

        let catalog = default_catalog();
        self.milestones.insert_milestones(&catalog).await?;
        info!("Seeded {} milestones", catalog.len());
        Ok(())
    }

    /// Assemble the personalized updates page for one subscriber and week.
    pub async fn my_updates(
        &self,
        token: &str,
        requested_week: Option<i64>,
    ) -> DomainResult<MyUpdatesResponse> {
        let subscriber = self.subscriber_service.lookup(token).await?;

        let birth = stored_date(subscriber.baby_birth_date.as_deref());
        let baby_age_weeks = age_in_weeks(birth, Utc::now().date_naive());
        let week = resolve_display_week(requested_week, baby_age_weeks);

        let milestones = self.milestones.list_for_week(week).await?;
        let tracking = self.tracking.list_for_week(subscriber.id, week).await?;
        let progress = compute_progress(week, &milestones, &tracking);

        let newsletter = self.newsletters.latest_for_week(week).await?;
        let available_issues = self.newsletters.list_issues().await?;

        Ok(MyUpdatesResponse {
            subscriber,
            baby_age_weeks,
            week,
            categories: group_by_category(milestones),
            tracking,
            progress,
            newsletter,
            available_issues,
        })
    }

    /// Recompute the progress counters for one subscriber and week.
    pub async fn week_progress(&self, subscriber_id: i64, week: u8) -> DomainResult<WeekProgress> {
        let milestones = self.milestones.list_for_week(week).await?;
        let tracking = self.tracking.list_for_week(subscriber_id, week).await?;
        Ok(compute_progress(week, &milestones, &tracking))
    }
}

/// Pure aggregation over a week's milestones and tracking rows. Rows whose
/// status is `None` (note-only rows) count as untracked, and rows for
/// milestones outside the given list are ignored, so the counters always
/// partition the total.
pub fn compute_progress(
    week: u8,
    milestones: &[Milestone],
    tracking: &[MilestoneTracking],
) -> WeekProgress {
    let ids: std::collections::HashSet<i64> = milestones.iter().map(|m| m.id).collect();
    let total = milestones.len() as u32;
    let achieved = tracking
        .iter()
        .filter(|t| ids.contains(&t.milestone_id) && t.status == Some(TrackingStatus::Achieved))
        .count() as u32;
    let concern = tracking
        .iter()
        .filter(|t| ids.contains(&t.milestone_id) && t.status == Some(TrackingStatus::Concern))
        .count() as u32;

    WeekProgress {
        week,
        total,
        achieved,
        concern,
        untracked: total - achieved - concern,
    }
}

/// Collapse an already category-ordered milestone list into labeled groups,
/// preserving order and skipping empty categories.
fn group_by_category(milestones: Vec<Milestone>) -> Vec<MilestoneGroup> {
    let mut groups: Vec<MilestoneGroup> = Vec::new();
    let mut current: Option<shared::MilestoneCategory> = None;

    for milestone in milestones {
        if current != Some(milestone.category) {
            current = Some(milestone.category);
            groups.push(MilestoneGroup {
                label: milestone.category.display_label().to_string(),
                milestones: Vec::new(),
            });
        }
        groups
            .last_mut()
            .expect("group pushed above")
            .milestones
            .push(milestone);
    }
    groups
}
