//! # Storage Layer
//!
//! Persistence for the newsletter application. The domain layer only sees
//! the traits in [`traits`]; the SQLite implementations live in [`sqlite`].

pub mod sqlite;
pub mod traits;

pub use sqlite::DbConnection;
pub use traits::{
    CalendarEventStorage, MilestoneStorage, NewCalendarEvent, NewIssue, NewSubscriber,
    NewTracking, NewsletterStorage, SubscriberStorage, TrackingStorage,
};
