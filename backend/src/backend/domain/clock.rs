//! Domain clock: the age and week arithmetic every personalized surface
//! shares. `resolve_display_week` is the single source of truth for week
//! selection; both the updates view and the chat context builder go through
//! it so the two can never disagree about which week is "current".

use chrono::NaiveDate;

use super::errors::{DomainError, DomainResult};

/// Highest developmental week the content catalog covers.
pub const MAX_CONTENT_WEEK: i64 = 16;

/// Elapsed whole weeks since birth, never negative. `None` when no birth
/// date is recorded (due-date-only subscribers). No upper bound is applied
/// here; clamping to the content range happens at the call site.
pub fn age_in_weeks(birth_date: Option<NaiveDate>, today: NaiveDate) -> Option<i64> {
    let birth = birth_date?;
    let days = (today - birth).num_days();
    Some((days / 7).max(0))
}

/// Resolve which week to display: a caller-supplied week wins (clamped),
/// then the baby's age (clamped), then week 0.
pub fn resolve_display_week(requested: Option<i64>, age_weeks: Option<i64>) -> u8 {
    if let Some(week) = requested {
        week.clamp(0, MAX_CONTENT_WEEK) as u8
    } else if let Some(age) = age_weeks {
        age.clamp(0, MAX_CONTENT_WEEK) as u8
    } else {
        0
    }
}

/// Parse an ISO `YYYY-MM-DD` date string.
pub fn parse_iso_date(value: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| DomainError::Validation(format!("invalid date: {}", value)))
}

/// Parse an optional stored date, treating malformed values as absent.
pub fn stored_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok())
}
