//! Family calendar domain logic.
//!
//! This module contains all business logic related to calendar operations:
//! grid generation, date calculations, and organizing a subscriber's events
//! by day. Handlers only handle presentation concerns; all calendar
//! computations live here.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate, Utc};
use tracing::debug;

use super::clock::parse_iso_date;
use super::errors::{DomainError, DomainResult};
use super::subscriber_service::SubscriberService;
use crate::backend::storage::{CalendarEventStorage, NewCalendarEvent};
use shared::{CalendarDay, CalendarDayType, CalendarEvent, CalendarMonth, CreateEventRequest};

/// How far ahead the "upcoming events" sidebar looks, and how many entries
/// it shows.
const UPCOMING_WINDOW_DAYS: i64 = 30;
const UPCOMING_LIMIT: usize = 10;

#[derive(Clone)]
pub struct CalendarService {
    subscriber_service: SubscriberService,
    events: Arc<dyn CalendarEventStorage>,
}

impl CalendarService {
    pub fn new(subscriber_service: SubscriberService, events: Arc<dyn CalendarEventStorage>) -> Self {
        Self {
            subscriber_service,
            events,
        }
    }

    /// Generate the month view for a subscriber: the padded day grid with
    /// events placed on their days, plus the upcoming-events list.
    pub async fn month_view(
        &self,
        token: &str,
        year: Option<i32>,
        month: Option<u32>,
    ) -> DomainResult<CalendarMonth> {
        let subscriber = self.subscriber_service.lookup(token).await?;

        let today = Utc::now().date_naive();
        let year = year.unwrap_or_else(|| today.year());
        let month = month.unwrap_or_else(|| today.month());
        if !(1..=12).contains(&month) {
            return Err(DomainError::Validation(format!("invalid month: {}", month)));
        }

        let days = days_in_month(month, year);
        let first = format!("{:04}-{:02}-01", year, month);
        let last = format!("{:04}-{:02}-{:02}", year, month, days);
        let events = self
            .events
            .list_in_range(subscriber.id, &first, &last)
            .await?;
        debug!("Calendar {}/{}: {} events", month, year, events.len());

        let upcoming_end = today + Duration::days(UPCOMING_WINDOW_DAYS);
        let mut upcoming_events = self
            .events
            .list_in_range(
                subscriber.id,
                &today.format("%Y-%m-%d").to_string(),
                &upcoming_end.format("%Y-%m-%d").to_string(),
            )
            .await?;
        upcoming_events.truncate(UPCOMING_LIMIT);

        Ok(generate_calendar_month(month, year, today, events, upcoming_events))
    }

    pub async fn add_event(
        &self,
        token: &str,
        request: CreateEventRequest,
    ) -> DomainResult<CalendarEvent> {
        let subscriber = self.subscriber_service.lookup(token).await?;
        let (title, event_time) = validate_event_fields(&request)?;

        Ok(self
            .events
            .create_event(&NewCalendarEvent {
                subscriber_id: subscriber.id,
                title,
                description: clean(request.description),
                event_date: request.event_date,
                event_time,
                category: clean(request.category),
            })
            .await?)
    }

    pub async fn get_event(&self, token: &str, event_id: i64) -> DomainResult<CalendarEvent> {
        let subscriber = self.subscriber_service.lookup(token).await?;
        self.events
            .get_event(subscriber.id, event_id)
            .await?
            .ok_or(DomainError::NotFound("event"))
    }

    pub async fn update_event(
        &self,
        token: &str,
        event_id: i64,
        request: CreateEventRequest,
    ) -> DomainResult<CalendarEvent> {
        let subscriber = self.subscriber_service.lookup(token).await?;
        let (title, event_time) = validate_event_fields(&request)?;

        let mut event = self
            .events
            .get_event(subscriber.id, event_id)
            .await?
            .ok_or(DomainError::NotFound("event"))?;

        event.title = title;
        event.description = clean(request.description);
        event.event_date = request.event_date;
        event.event_time = event_time;
        event.category = clean(request.category);

        self.events.update_event(&event).await?;
        Ok(event)
    }

    /// Delete an event. Deleting an event that is already gone is a no-op,
    /// matching the idempotent delete the UI expects.
    pub async fn delete_event(&self, token: &str, event_id: i64) -> DomainResult<()> {
        let subscriber = self.subscriber_service.lookup(token).await?;
        self.events.delete_event(subscriber.id, event_id).await?;
        Ok(())
    }
}

/// Validate the shared create/edit fields, returning the cleaned title and
/// time.
fn validate_event_fields(
    request: &CreateEventRequest,
) -> DomainResult<(String, Option<String>)> {
    let title = request.title.trim().to_string();
    if title.is_empty() {
        return Err(DomainError::Validation("event title is required".to_string()));
    }
    parse_iso_date(&request.event_date)?;

    let event_time = match request.event_time.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => {
            chrono::NaiveTime::parse_from_str(raw, "%H:%M")
                .map_err(|_| DomainError::Validation(format!("invalid time: {}", raw)))?;
            Some(raw.to_string())
        }
    };
    Ok((title, event_time))
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Build a calendar month grid from a month's events. Padding days before
/// and after keep the grid a whole number of Sunday-first weeks.
fn generate_calendar_month(
    month: u32,
    year: i32,
    today: NaiveDate,
    events: Vec<CalendarEvent>,
    upcoming_events: Vec<CalendarEvent>,
) -> CalendarMonth {
    let days = days_in_month(month, year);
    let first_day = first_day_of_month(month, year);
    let events_by_day = group_events_by_day(month, year, events);

    let mut calendar_days = Vec::new();
    for _ in 0..first_day {
        calendar_days.push(CalendarDay {
            day: 0,
            date: None,
            day_type: CalendarDayType::PaddingBefore,
            is_today: false,
            events: Vec::new(),
        });
    }
    for day in 1..=days {
        let date = format!("{:04}-{:02}-{:02}", year, month, day);
        calendar_days.push(CalendarDay {
            day,
            is_today: today.year() == year && today.month() == month && today.day() == day,
            date: Some(date),
            day_type: CalendarDayType::MonthDay,
            events: events_by_day.get(&day).cloned().unwrap_or_default(),
        });
    }
    while calendar_days.len() % 7 != 0 {
        calendar_days.push(CalendarDay {
            day: 0,
            date: None,
            day_type: CalendarDayType::PaddingAfter,
            is_today: false,
            events: Vec::new(),
        });
    }

    CalendarMonth {
        month,
        year,
        month_name: month_name(month).to_string(),
        days: calendar_days,
        first_day_of_week: first_day,
        upcoming_events,
    }
}

/// Group events by day of month, dropping events whose dates fall outside
/// the month or fail to parse.
fn group_events_by_day(
    month: u32,
    year: i32,
    events: Vec<CalendarEvent>,
) -> HashMap<u32, Vec<CalendarEvent>> {
    let mut by_day: HashMap<u32, Vec<CalendarEvent>> = HashMap::new();
    for event in events {
        if let Ok(date) = NaiveDate::parse_from_str(&event.event_date, "%Y-%m-%d") {
            if date.year() == year && date.month() == month {
                by_day.entry(date.day()).or_default().push(event);
            }
        }
    }
    by_day
}

/// Get the number of days in a given month and year
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Get the first day of month (0 = Sunday, 1 = Monday, etc.)
pub fn first_day_of_month(month: u32, year: i32) -> u32 {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date.weekday().num_days_from_sunday(),
        None => 0,
    }
}

/// Get the human-readable name for a month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Invalid Month",
    }
}
