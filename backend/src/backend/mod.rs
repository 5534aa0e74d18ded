//! # Backend
//!
//! Wires the storage, chat, email, and auth components into the domain
//! services and exposes them behind the REST router. [`initialize_backend`]
//! builds the shared [`AppState`] once at startup; [`create_router`] mounts
//! every API under `/api`.

pub mod auth;
pub mod chat;
pub mod config;
pub mod domain;
pub mod email;
pub mod io;
pub mod storage;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;

use auth::{AuthService, ConfigAuthService};
use chat::{AnthropicChatProvider, ChatProvider, DisabledChatProvider};
use config::AppConfig;
use domain::{
    CalendarService, ChatService, MilestoneService, NewsletterService, SubscriberService,
    TrackingService,
};
use email::FileLogMailer;
use storage::sqlite::{
    CalendarEventRepository, DbConnection, MilestoneRepository, NewsletterRepository,
    SubscriberRepository, TrackingRepository,
};

/// Shared application state handed to every REST handler.
#[derive(Clone)]
pub struct AppState {
    pub subscriber_service: SubscriberService,
    pub milestone_service: MilestoneService,
    pub tracking_service: TrackingService,
    pub chat_service: ChatService,
    pub calendar_service: CalendarService,
    pub newsletter_service: NewsletterService,
    pub auth: Arc<dyn AuthService>,
}

/// Build the full service graph from configuration and make sure the
/// milestone catalog is seeded.
pub async fn initialize_backend(config: &AppConfig) -> anyhow::Result<AppState> {
    let db = DbConnection::new(&config.database_url).await?;

    let subscribers = Arc::new(SubscriberRepository::new(db.clone()));
    let milestones = Arc::new(MilestoneRepository::new(db.clone()));
    let tracking = Arc::new(TrackingRepository::new(db.clone()));
    let newsletters = Arc::new(NewsletterRepository::new(db.clone()));
    let events = Arc::new(CalendarEventRepository::new(db));

    let chat_provider: Arc<dyn ChatProvider> = if config.anthropic_api_key.is_empty() {
        info!("No chat API key configured; chat and note reflections are disabled");
        Arc::new(DisabledChatProvider)
    } else {
        Arc::new(AnthropicChatProvider::new(config.anthropic_api_key.clone()))
    };
    let mailer = Arc::new(FileLogMailer::new(
        config.from_email.clone(),
        config.email_log_dir.clone(),
    ));
    let auth: Arc<dyn AuthService> = Arc::new(ConfigAuthService::new(
        config.admin_username.clone(),
        config.admin_password.clone(),
    ));

    let subscriber_service = SubscriberService::new(subscribers);
    let milestone_service = MilestoneService::new(
        subscriber_service.clone(),
        milestones.clone(),
        tracking.clone(),
        newsletters.clone(),
    );
    milestone_service.seed_catalog().await?;

    let tracking_service = TrackingService::new(
        subscriber_service.clone(),
        milestones.clone(),
        tracking.clone(),
        chat_provider.clone(),
    );
    let chat_service = ChatService::new(
        subscriber_service.clone(),
        milestones.clone(),
        tracking,
        chat_provider,
    );
    let calendar_service = CalendarService::new(subscriber_service.clone(), events);
    let newsletter_service = NewsletterService::new(newsletters, milestones, mailer);

    Ok(AppState {
        subscriber_service,
        milestone_service,
        tracking_service,
        chat_service,
        calendar_service,
        newsletter_service,
        auth,
    })
}

/// Mount every API module under `/api` with a permissive CORS layer.
pub fn create_router(state: AppState) -> Router {
    let api = io::rest::subscriber_apis::router()
        .merge(io::rest::milestone_apis::router())
        .merge(io::rest::tracking_apis::router())
        .merge(io::rest::chat_apis::router())
        .merge(io::rest::calendar_apis::router())
        .merge(io::rest::admin_apis::router());

    Router::new()
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
pub mod testing {
    //! Shared fixture for the REST integration tests: the full service graph
    //! over an in-memory database and a scripted chat provider.

    use super::*;
    use crate::backend::chat::testing::FixedChatProvider;

    pub async fn test_state() -> (AppState, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");

        let subscribers = Arc::new(SubscriberRepository::new(db.clone()));
        let milestones = Arc::new(MilestoneRepository::new(db.clone()));
        let tracking = Arc::new(TrackingRepository::new(db.clone()));
        let newsletters = Arc::new(NewsletterRepository::new(db.clone()));
        let events = Arc::new(CalendarEventRepository::new(db));

        let chat_provider: Arc<dyn ChatProvider> = Arc::new(FixedChatProvider::new(
            vec!["Hel", "lo!"],
            "That sounds like wonderful progress.",
        ));
        let mailer = Arc::new(FileLogMailer::new(
            "hello@newborn-navigator.com".to_string(),
            dir.path().to_path_buf(),
        ));
        let auth: Arc<dyn AuthService> = Arc::new(ConfigAuthService::new(
            "admin".to_string(),
            "admin123".to_string(),
        ));

        let subscriber_service = SubscriberService::new(subscribers);
        let milestone_service = MilestoneService::new(
            subscriber_service.clone(),
            milestones.clone(),
            tracking.clone(),
            newsletters.clone(),
        );
        milestone_service
            .seed_catalog()
            .await
            .expect("Failed to seed catalog");

        let tracking_service = TrackingService::new(
            subscriber_service.clone(),
            milestones.clone(),
            tracking.clone(),
            chat_provider.clone(),
        );
        let chat_service = ChatService::new(
            subscriber_service.clone(),
            milestones.clone(),
            tracking,
            chat_provider,
        );
        let calendar_service = CalendarService::new(subscriber_service.clone(), events);
        let newsletter_service = NewsletterService::new(newsletters, milestones, mailer);

        let state = AppState {
            subscriber_service,
            milestone_service,
            tracking_service,
            chat_service,
            calendar_service,
            newsletter_service,
            auth,
        };
        (state, dir)
    }
}
