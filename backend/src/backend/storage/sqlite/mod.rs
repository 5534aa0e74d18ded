//! # SQLite Storage Module
//!
//! SQLite-backed implementations of the storage traits, sharing one
//! [`DbConnection`] pool.

pub mod db;
pub mod repositories;

pub use db::DbConnection;
pub use repositories::{
    CalendarEventRepository, MilestoneRepository, NewsletterRepository, SubscriberRepository,
    TrackingRepository,
};
