//! # Chat Service
//!
//! Builds the personalized system prompt for the assistant chat and streams
//! the provider's reply. The prompt carries the baby's age, the viewed
//! week's milestones, and the parent's full tracking history so answers can
//! reference what the family has actually logged.

use std::sync::Arc;

use chrono::Utc;

use super::clock::{age_in_weeks, resolve_display_week, stored_date};
use super::errors::{DomainError, DomainResult};
use super::subscriber_service::SubscriberService;
use crate::backend::chat::{ChatProvider, ChatTextStream};
use crate::backend::storage::{MilestoneStorage, TrackingStorage};
use shared::{ChatRequest, Milestone, TrackingHistoryRow, TrackingStatus};

#[derive(Clone)]
pub struct ChatService {
    subscriber_service: SubscriberService,
    milestones: Arc<dyn MilestoneStorage>,
    tracking: Arc<dyn TrackingStorage>,
    chat: Arc<dyn ChatProvider>,
}

/// Everything the system prompt is rendered from.
pub struct ChatContext {
    pub baby_name: Option<String>,
    pub baby_age_weeks: Option<i64>,
    pub week: u8,
    pub milestones: Vec<Milestone>,
    pub history: Vec<TrackingHistoryRow>,
}

impl ChatService {
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

    /// Assemble the chat context for a subscriber viewing a given week.
    pub async fn build_context(
        &self,
        token: &str,
        requested_week: Option<i64>,
    ) -> DomainResult<ChatContext> {
        let subscriber = self.subscriber_service.lookup(token).await?;

        let birth = stored_date(subscriber.baby_birth_date.as_deref());
        let baby_age_weeks = age_in_weeks(birth, Utc::now().date_naive());
        let week = resolve_display_week(requested_week, baby_age_weeks);

        let milestones = self.milestones.list_for_week(week).await?;
        let history = self.tracking.list_history(subscriber.id).await?;

        Ok(ChatContext {
            baby_name: subscriber.baby_name,
            baby_age_weeks,
            week,
            milestones,
            history,
        })
    }

    /// Run one chat turn, returning the provider's text stream.
    pub async fn stream_chat(
        &self,
        token: &str,
        request: ChatRequest,
    ) -> DomainResult<ChatTextStream> {
        if request.messages.is_empty() {
            return Err(DomainError::Validation("no messages provided".to_string()));
        }

        let context = self.build_context(token, request.week).await?;
        let system_prompt = context.system_prompt();
        Ok(self.chat.stream_chat(&system_prompt, &request.messages).await?)
    }
}

impl ChatContext {
    /// Render the assistant's system prompt.
    pub fn system_prompt(&self) -> String {
        let name = self.baby_name.as_deref().unwrap_or("the baby");
        let age_line = match self.baby_age_weeks {
            Some(age) => format!("{} is currently {} weeks old.", name, age),
            None => "The baby's age is unknown.".to_string(),
        };

        let mut milestone_lines = String::new();
        if !self.milestones.is_empty() {
            milestone_lines.push_str("\n\nCurrent week's milestones:\n");
            for m in &self.milestones {
                let concern = if m.is_concern_flag {
                    " [CONCERN FLAG - suggest talking to pediatrician]"
                } else {
                    ""
                };
                milestone_lines.push_str(&format!(
                    "- [{}] {}: {}{}\n",
                    m.category.as_str(),
                    m.title,
                    m.description,
                    concern
                ));
                if let Some(action) = &m.parent_action {
                    milestone_lines.push_str(&format!("  Try this: {}\n", action));
                }
            }
        }

        let mut tracking_lines = String::new();
        if !self.history.is_empty() {
            tracking_lines.push_str("\n\nParent's tracking notes and progress:\n");
            for row in &self.history {
                let status_label = match row.status {
                    Some(TrackingStatus::Achieved) => "ACHIEVED",
                    Some(TrackingStatus::Concern) => "CONCERN FLAGGED",
                    None => "noted",
                };
                tracking_lines.push_str(&format!(
                    "- Week {} [{}] {} — {}",
                    row.week_number,
                    row.category.as_str(),
                    row.title,
                    status_label
                ));
                if let Some(notes) = &row.notes {
                    tracking_lines.push_str(&format!(" | Parent note: \"{}\"", notes));
                }
                tracking_lines.push('\n');
            }
            tracking_lines.push_str(
                "\nUse this tracking information to personalize your responses. Reference \
                 milestones the parent has tracked, acknowledge achievements, and be sensitive \
                 to any concerns they've flagged.\n",
            );
        }

        format!(
            "You are the Baby Navigator Assistant, a warm and supportive guide for new parents navigating their baby's first 16 weeks.

{age_line}
{milestone_lines}
{tracking_lines}

Guidelines:
- Be warm, encouraging, and concise. Keep responses to 2-3 short paragraphs unless more detail is asked for.
- Reference the baby by name (\"{name}\") and relate answers to age-appropriate milestones when relevant.
- When discussing milestones, reference the specific ones listed above for the current week.
- Use simple, reassuring language and avoid clinical jargon unless explaining a term.

Medical safety rules (NEVER violate these):
- NEVER diagnose any condition or illness.
- NEVER recommend specific medications or dosages.
- For any health concern, always recommend consulting their pediatrician.
- If someone describes a potential emergency (difficulty breathing, unresponsiveness, high fever in a newborn, etc.), tell them to call 911 or go to the emergency room immediately.
- Always include a brief disclaimer that you provide general information, not medical advice.

Identity rules:
- You are the \"Baby Navigator Assistant\". Never present yourself as anything else.
- If asked who made you, say you are part of the Newborn Navigator platform.
- Do not discuss your underlying technology or training."
        )
    }
}
