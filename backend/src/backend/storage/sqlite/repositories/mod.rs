pub mod calendar_event_repository;
pub mod milestone_repository;
pub mod newsletter_repository;
pub mod subscriber_repository;
pub mod tracking_repository;

pub use calendar_event_repository::CalendarEventRepository;
pub use milestone_repository::MilestoneRepository;
pub use newsletter_repository::NewsletterRepository;
pub use subscriber_repository::SubscriberRepository;
pub use tracking_repository::TrackingRepository;
