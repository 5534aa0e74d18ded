//! # Domain Layer
//!
//! Business logic for the newsletter platform. Services orchestrate the
//! storage traits and the chat/mail ports; everything date- and
//! week-related goes through [`clock`].

pub mod calendar;
pub mod catalog;
pub mod chat_service;
pub mod clock;
pub mod errors;
pub mod milestone_service;
pub mod newsletter_service;
pub mod subscriber_service;
pub mod tracking_service;

pub use calendar::CalendarService;
pub use chat_service::ChatService;
pub use errors::{DomainError, DomainResult};
pub use milestone_service::MilestoneService;
pub use newsletter_service::NewsletterService;
pub use subscriber_service::SubscriberService;
pub use tracking_service::TrackingService;
