//! # Tracking Service
//!
//! The per-subscriber milestone ledger: the three-state toggle, note saving,
//! and the short AI reflection generated for each saved note. Tracking rows
//! are created lazily on first interaction; the toggle and the note are
//! independent axes on the same row.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::clock::{age_in_weeks, stored_date};
use super::errors::{DomainError, DomainResult};
use super::milestone_service::compute_progress;
use super::subscriber_service::SubscriberService;
use crate::backend::chat::ChatProvider;
use crate::backend::storage::{MilestoneStorage, NewTracking, TrackingStorage};
use shared::{
    Milestone, MilestoneTracking, SaveNoteRequest, SaveNoteResponse, Subscriber,
    ToggleMilestoneResponse, TrackingStatus,
};

#[derive(Clone)]
pub struct TrackingService {
    subscriber_service: SubscriberService,
    milestones: Arc<dyn MilestoneStorage>,
    tracking: Arc<dyn TrackingStorage>,
    chat: Arc<dyn ChatProvider>,
}

/// One step of the toggle cycle: untracked → achieved → concern → untracked.
pub fn next_status(current: Option<TrackingStatus>) -> Option<TrackingStatus> {
    match current {
        None => Some(TrackingStatus::Achieved),
        Some(TrackingStatus::Achieved) => Some(TrackingStatus::Concern),
        Some(TrackingStatus::Concern) => None,
    }
}

impl TrackingService {
    pub fn new(
        subscriber_service: SubscriberService,
        milestones: Arc<dyn MilestoneStorage>,
        tracking: Arc<dyn TrackingStorage>,
        chat: Arc<dyn ChatProvider>,
    ) -> Self {
        Self {
            subscriber_service,
            milestones,
            tracking,
            chat,
        }
    }

    /// Advance a milestone's tracking status one step and return the updated
    /// row with refreshed progress counters for the milestone's week.
    pub async fn toggle_milestone(
        &self,
        token: &str,
        milestone_id: i64,
    ) -> DomainResult<ToggleMilestoneResponse> {
        let subscriber = self.subscriber_service.lookup(token).await?;
        let milestone = self
            .milestones
            .get_milestone(milestone_id)
            .await?
            .ok_or(DomainError::NotFound("milestone"))?;

        let existing = self.tracking.get_tracking(subscriber.id, milestone_id).await?;
        let status = next_status(existing.as_ref().and_then(|t| t.status));

        // achieved_at tracks the status exactly: set on achieved, cleared
        // otherwise
        let achieved_at = (status == Some(TrackingStatus::Achieved))
            .then(|| Utc::now().to_rfc3339());

        let tracking = match existing {
            Some(mut row) => {
                self.tracking
                    .update_status(row.id, status, achieved_at.as_deref())
                    .await?;
                row.status = status;
                row.achieved_at = achieved_at;
                row
            }
            None => {
                self.tracking
                    .insert_tracking(&NewTracking {
                        subscriber_id: subscriber.id,
                        milestone_id,
                        status,
                        notes: None,
                        achieved_at,
                    })
                    .await?
            }
        };

        let week_milestones = self.milestones.list_for_week(milestone.week_number).await?;
        let week_tracking = self
            .tracking
            .list_for_week(subscriber.id, milestone.week_number)
            .await?;
        let progress = compute_progress(milestone.week_number, &week_milestones, &week_tracking);

        Ok(ToggleMilestoneResponse { tracking, progress })
    }

    /// Save (or clear) the parent's note on a milestone. A non-empty note
    /// gets a short AI reflection; reflection failures degrade to a plain
    /// save rather than failing the request.
    pub async fn save_note(
        &self,
        token: &str,
        milestone_id: i64,
        request: SaveNoteRequest,
    ) -> DomainResult<SaveNoteResponse> {
        let subscriber = self.subscriber_service.lookup(token).await?;
        let milestone = self
            .milestones
            .get_milestone(milestone_id)
            .await?
            .ok_or(DomainError::NotFound("milestone"))?;

        let note = request.notes.trim().to_string();
        let existing = self.tracking.get_tracking(subscriber.id, milestone_id).await?;

        if note.is_empty() {
            // Clearing the note also clears the stale reflection
            if let Some(row) = existing {
                self.tracking.update_notes(row.id, None, None).await?;
            }
            return Ok(SaveNoteResponse {
                cleared: true,
                ai_response: None,
            });
        }

        let status = existing.as_ref().and_then(|t| t.status);
        let ai_response = match self.reflect_on_note(&subscriber, &milestone, &note, status).await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!("Note reflection failed: {}", e);
                None
            }
        };

        match existing {
            Some(row) => {
                self.tracking
                    .update_notes(row.id, Some(&note), ai_response.as_deref())
                    .await?;
            }
            None => {
                let row = self
                    .tracking
                    .insert_tracking(&NewTracking {
                        subscriber_id: subscriber.id,
                        milestone_id,
                        status: None,
                        notes: Some(note.clone()),
                        achieved_at: None,
                    })
                    .await?;
                if ai_response.is_some() {
                    self.tracking
                        .update_notes(row.id, Some(&note), ai_response.as_deref())
                        .await?;
                }
            }
        }
        info!(
            "Saved note on milestone {} for subscriber {}",
            milestone_id, subscriber.id
        );

        Ok(SaveNoteResponse {
            cleared: false,
            ai_response,
        })
    }

    async fn reflect_on_note(
        &self,
        subscriber: &Subscriber,
        milestone: &Milestone,
        note: &str,
        status: Option<TrackingStatus>,
    ) -> Result<String, crate::backend::chat::ChatProviderError> {
        let birth = stored_date(subscriber.baby_birth_date.as_deref());
        let age_weeks = age_in_weeks(birth, Utc::now().date_naive());
        let system = reflection_system_prompt(subscriber.baby_name.as_deref(), age_weeks);
        let user = reflection_user_message(milestone, note, status);
        self.chat.complete(&system, &user).await
    }
}

fn reflection_system_prompt(baby_name: Option<&str>, age_weeks: Option<i64>) -> String {
    let name = baby_name.unwrap_or("your baby");
    let age_context = match age_weeks {
        Some(age) => format!("{} is {} weeks old.", name, age),
        None => String::new(),
    };

    format!(
        "You are the Baby Navigator Assistant, providing brief, helpful responses to parents tracking their baby's milestones.

{age_context}

Respond in 1-2 short sentences. Be warm, supportive, and helpful. If they have a question, answer it concisely. If they express a concern, reassure them while suggesting they mention it to their pediatrician if worried. If they share a positive observation, celebrate with them briefly.

IMPORTANT:
- Keep response under 50 words
- Be conversational and warm
- Use the baby's name ({name}) naturally
- Never diagnose or give medical advice
- For health concerns, gently suggest consulting their pediatrician"
    )
}

fn reflection_user_message(
    milestone: &Milestone,
    note: &str,
    status: Option<TrackingStatus>,
) -> String {
    let status_context = match status {
        Some(s) => format!("The parent marked this as '{}'.", s.as_str()),
        None => String::new(),
    };

    format!(
        "Milestone: {}\nDescription: {}\n{}\n\nParent's note: \"{}\"\n\nRespond briefly to the parent's note:",
        milestone.title, milestone.description, status_context, note
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::chat::testing::{FailingChatProvider, FixedChatProvider};
    use crate::backend::domain::milestone_service::MilestoneService;
    use crate::backend::storage::sqlite::{
        DbConnection, MilestoneRepository, NewsletterRepository, SubscriberRepository,
        TrackingRepository,
    };
    use shared::SubscribeRequest;

    struct Harness {
        service: TrackingService,
        token: String,
        milestone_id: i64,
    }

    async fn harness(chat: Arc<dyn ChatProvider>) -> Harness {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");
        let subscribers = Arc::new(SubscriberRepository::new(db.clone()));
        let milestones = Arc::new(MilestoneRepository::new(db.clone()));
        let tracking = Arc::new(TrackingRepository::new(db.clone()));
        let newsletters = Arc::new(NewsletterRepository::new(db));

        let subscriber_service = SubscriberService::new(subscribers);
        MilestoneService::new(
            subscriber_service.clone(),
            milestones.clone(),
            tracking.clone(),
            newsletters,
        )
        .seed_catalog()
        .await
        .expect("Failed to seed");

        let token = subscriber_service
            .subscribe(SubscribeRequest {
                email: "parent@example.com".to_string(),
                name: None,
                baby_name: Some("Mia".to_string()),
                baby_birth_date: None,
                baby_due_date: None,
            })
            .await
            .unwrap()
            .token;

        let milestone_id = milestones.list_for_week(0).await.unwrap()[0].id;
        let service = TrackingService::new(subscriber_service, milestones, tracking, chat);
        Harness {
            service,
            token,
            milestone_id,
        }
    }

    #[test]
    fn toggle_cycles_through_all_three_states() {
        assert_eq!(next_status(None), Some(TrackingStatus::Achieved));
        assert_eq!(
            next_status(Some(TrackingStatus::Achieved)),
            Some(TrackingStatus::Concern)
        );
        assert_eq!(next_status(Some(TrackingStatus::Concern)), None);
    }

    #[tokio::test]
    async fn test_first_toggle_creates_achieved_row() {
        let h = harness(Arc::new(FixedChatProvider::new(vec![], "ok"))).await;
        let response = h
            .service
            .toggle_milestone(&h.token, h.milestone_id)
            .await
            .expect("Failed to toggle");

        assert_eq!(response.tracking.status, Some(TrackingStatus::Achieved));
        assert!(response.tracking.achieved_at.is_some());
        assert_eq!(response.progress.achieved, 1);
    }

    #[tokio::test]
    async fn test_full_toggle_cycle_returns_to_untracked() {
        let h = harness(Arc::new(FixedChatProvider::new(vec![], "ok"))).await;

        let second = h.service.toggle_milestone(&h.token, h.milestone_id).await.unwrap();
        assert_eq!(second.tracking.status, Some(TrackingStatus::Achieved));

        let third = h.service.toggle_milestone(&h.token, h.milestone_id).await.unwrap();
        assert_eq!(third.tracking.status, Some(TrackingStatus::Concern));
        assert_eq!(third.tracking.achieved_at, None);
        assert_eq!(third.progress.concern, 1);
        assert_eq!(third.progress.achieved, 0);

        let fourth = h.service.toggle_milestone(&h.token, h.milestone_id).await.unwrap();
        assert_eq!(fourth.tracking.status, None);
        assert_eq!(fourth.tracking.achieved_at, None);
        assert_eq!(fourth.progress.untracked, fourth.progress.total);
    }

    #[tokio::test]
    async fn test_toggle_unknown_milestone_is_not_found() {
        let h = harness(Arc::new(FixedChatProvider::new(vec![], "ok"))).await;
        assert!(matches!(
            h.service.toggle_milestone(&h.token, 999_999).await,
            Err(DomainError::NotFound("milestone"))
        ));
    }

    #[tokio::test]
    async fn test_save_note_attaches_reflection() {
        let provider = Arc::new(FixedChatProvider::new(vec![], "What a great moment for Mia!"));
        let h = harness(provider.clone()).await;

        let response = h
            .service
            .save_note(
                &h.token,
                h.milestone_id,
                SaveNoteRequest {
                    notes: "  She grabbed my finger today!  ".to_string(),
                },
            )
            .await
            .expect("Failed to save note");

        assert!(!response.cleared);
        assert_eq!(
            response.ai_response.as_deref(),
            Some("What a great moment for Mia!")
        );

        let prompts = provider.seen_system_prompts.lock().unwrap();
        assert!(prompts[0].contains("Mia"));
    }

    #[tokio::test]
    async fn test_save_note_survives_provider_failure() {
        let h = harness(Arc::new(FailingChatProvider)).await;

        let response = h
            .service
            .save_note(
                &h.token,
                h.milestone_id,
                SaveNoteRequest {
                    notes: "Slept four hours straight".to_string(),
                },
            )
            .await
            .expect("Note save should not fail with the provider down");

        assert!(!response.cleared);
        assert_eq!(response.ai_response, None);
    }

    #[tokio::test]
    async fn test_clearing_note_clears_reflection() {
        let h = harness(Arc::new(FixedChatProvider::new(vec![], "Lovely!"))).await;

        h.service
            .save_note(
                &h.token,
                h.milestone_id,
                SaveNoteRequest {
                    notes: "First smile".to_string(),
                },
            )
            .await
            .unwrap();

        let response = h
            .service
            .save_note(
                &h.token,
                h.milestone_id,
                SaveNoteRequest {
                    notes: "   ".to_string(),
                },
            )
            .await
            .unwrap();
        assert!(response.cleared);
        assert_eq!(response.ai_response, None);

        let row = h
            .service
            .tracking
            .get_tracking(
                h.service.subscriber_service.lookup(&h.token).await.unwrap().id,
                h.milestone_id,
            )
            .await
            .unwrap()
            .expect("Row should still exist");
        assert_eq!(row.notes, None);
        assert_eq!(row.ai_response, None);
    }

    #[tokio::test]
    async fn test_note_does_not_disturb_toggle_status() {
        let h = harness(Arc::new(FixedChatProvider::new(vec![], "Nice!"))).await;

        h.service.toggle_milestone(&h.token, h.milestone_id).await.unwrap();
        h.service
            .save_note(
                &h.token,
                h.milestone_id,
                SaveNoteRequest {
                    notes: "Tracking note".to_string(),
                },
            )
            .await
            .unwrap();

        let subscriber = h.service.subscriber_service.lookup(&h.token).await.unwrap();
        let row = h
            .service
            .tracking
            .get_tracking(subscriber.id, h.milestone_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.status, Some(TrackingStatus::Achieved));
        assert_eq!(row.notes.as_deref(), Some("Tracking note"));
    }
}
