//! # Subscriber Service
//!
//! Signup, login, and profile operations. Email is the natural key: signing
//! up twice with the same address revives the existing row (and its access
//! token) instead of creating a duplicate.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::clock::{age_in_weeks, parse_iso_date, resolve_display_week, stored_date};
use super::errors::{DomainError, DomainResult};
use crate::backend::storage::{NewSubscriber, SubscriberStorage};
use shared::{
    SaveNeighborhoodRequest, SubscribeRequest, SubscribeResponse, Subscriber,
    SubscriberLoginRequest, SubscriberLoginResponse, UnsubscribeResponse,
};

#[derive(Clone)]
pub struct SubscriberService {
    subscribers: Arc<dyn SubscriberStorage>,
}

impl SubscriberService {
    pub fn new(subscribers: Arc<dyn SubscriberStorage>) -> Self {
        Self { subscribers }
    }

    /// Create a subscription, or revive an existing one for the same email.
    /// The access token never changes once issued.
    pub async fn subscribe(&self, request: SubscribeRequest) -> DomainResult<SubscribeResponse> {
        let email = request.email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::Validation(format!(
                "invalid email: {}",
                request.email
            )));
        }

        let baby_birth_date = normalize_date(request.baby_birth_date)?;
        let baby_due_date = normalize_date(request.baby_due_date)?;

        if let Some(existing) = self.subscribers.get_by_email(&email).await? {
            let reactivated = !existing.is_active;
            if reactivated {
                info!("Reactivating subscription for {}", email);
                self.subscribers.set_active(existing.id, true).await?;
            }
            return Ok(SubscribeResponse {
                token: existing.access_token.clone(),
                week: display_week(&existing),
                reactivated,
            });
        }

        let new = NewSubscriber {
            email: email.clone(),
            name: non_empty(request.name),
            baby_name: non_empty(request.baby_name),
            baby_birth_date,
            baby_due_date,
            access_token: Uuid::new_v4().simple().to_string(),
        };
        let subscriber = self.subscribers.create_subscriber(&new).await?;
        info!("New subscription for {}", email);

        Ok(SubscribeResponse {
            token: subscriber.access_token.clone(),
            week: display_week(&subscriber),
            reactivated: false,
        })
    }

    /// Passwordless login: an active subscriber's email resolves to their
    /// access token.
    pub async fn login(
        &self,
        request: SubscriberLoginRequest,
    ) -> DomainResult<SubscriberLoginResponse> {
        let email = request.email.trim().to_lowercase();
        let subscriber = self
            .subscribers
            .get_by_email(&email)
            .await?
            .filter(|s| s.is_active)
            .ok_or(DomainError::NotFound("subscriber"))?;

        Ok(SubscriberLoginResponse {
            week: display_week(&subscriber),
            token: subscriber.access_token,
        })
    }

    /// Resolve an access token to its active subscriber.
    pub async fn lookup(&self, token: &str) -> DomainResult<Subscriber> {
        self.subscribers
            .get_by_token(token)
            .await?
            .filter(|s| s.is_active)
            .ok_or(DomainError::NotFound("subscriber"))
    }

    /// Deactivate the subscription behind a token. Unknown tokens are
    /// reported as `found: false` rather than an error so the unsubscribe
    /// page renders for stale links.
    pub async fn unsubscribe(&self, token: &str) -> DomainResult<UnsubscribeResponse> {
        match self.subscribers.get_by_token(token).await? {
            Some(subscriber) => {
                self.subscribers.set_active(subscriber.id, false).await?;
                info!("Unsubscribed {}", subscriber.email);
                Ok(UnsubscribeResponse { found: true })
            }
            None => Ok(UnsubscribeResponse { found: false }),
        }
    }

    /// Save the subscriber's neighborhood; an empty value clears it.
    pub async fn save_neighborhood(
        &self,
        token: &str,
        request: SaveNeighborhoodRequest,
    ) -> DomainResult<()> {
        let subscriber = self.lookup(token).await?;
        let value = request.neighborhood.trim();
        self.subscribers
            .set_neighborhood(subscriber.id, (!value.is_empty()).then_some(value))
            .await?;
        Ok(())
    }

    pub async fn list_subscribers(&self) -> DomainResult<Vec<Subscriber>> {
        Ok(self.subscribers.list_subscribers().await?)
    }
}

/// The week this subscriber's baby is in right now, clamped to the content
/// range.
pub fn display_week(subscriber: &Subscriber) -> u8 {
    let birth = stored_date(subscriber.baby_birth_date.as_deref());
    resolve_display_week(None, age_in_weeks(birth, Utc::now().date_naive()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Validate an optional ISO date field, treating blank input as absent.
fn normalize_date(value: Option<String>) -> DomainResult<Option<String>> {
    match non_empty(value) {
        Some(raw) => {
            parse_iso_date(&raw)?;
            Ok(Some(raw))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::sqlite::{DbConnection, SubscriberRepository};

    async fn service() -> SubscriberService {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");
        SubscriberService::new(Arc::new(SubscriberRepository::new(db)))
    }

    fn request(email: &str) -> SubscribeRequest {
        SubscribeRequest {
            email: email.to_string(),
            name: Some("Jordan".to_string()),
            baby_name: Some("Mia".to_string()),
            baby_birth_date: None,
            baby_due_date: None,
        }
    }

    #[tokio::test]
    async fn test_subscribe_issues_token() {
        let service = service().await;
        let response = service
            .subscribe(request("parent@example.com"))
            .await
            .expect("Failed to subscribe");

        assert!(!response.token.is_empty());
        assert_eq!(response.week, 0);
        assert!(!response.reactivated);
    }

    #[tokio::test]
    async fn test_subscribe_rejects_bad_email() {
        let service = service().await;
        assert!(matches!(
            service.subscribe(request("")).await,
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            service.subscribe(request("no-at-sign")).await,
            Err(DomainError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_subscribe_rejects_malformed_dates() {
        let service = service().await;
        let mut req = request("parent@example.com");
        req.baby_birth_date = Some("06/15/2026".to_string());
        assert!(matches!(
            service.subscribe(req).await,
            Err(DomainError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_duplicate_email_reuses_token() {
        let service = service().await;
        let first = service.subscribe(request("parent@example.com")).await.unwrap();
        let second = service
            .subscribe(request("Parent@Example.com"))
            .await
            .expect("Duplicate subscribe should succeed");

        assert_eq!(first.token, second.token);
        assert!(!second.reactivated);
    }

    #[tokio::test]
    async fn test_resubscribe_reactivates_without_rotating_token() {
        let service = service().await;
        let first = service.subscribe(request("parent@example.com")).await.unwrap();

        let gone = service.unsubscribe(&first.token).await.unwrap();
        assert!(gone.found);
        assert!(matches!(
            service.lookup(&first.token).await,
            Err(DomainError::NotFound(_))
        ));

        let revived = service.subscribe(request("parent@example.com")).await.unwrap();
        assert_eq!(revived.token, first.token);
        assert!(revived.reactivated);
        assert!(service.lookup(&first.token).await.is_ok());
    }

    #[tokio::test]
    async fn test_unsubscribe_unknown_token_reports_not_found() {
        let service = service().await;
        let response = service.unsubscribe("stale-token").await.unwrap();
        assert!(!response.found);
    }

    #[tokio::test]
    async fn test_login_requires_active_subscription() {
        let service = service().await;
        let created = service.subscribe(request("parent@example.com")).await.unwrap();

        let login = service
            .login(SubscriberLoginRequest {
                email: "parent@example.com".to_string(),
            })
            .await
            .expect("Failed to log in");
        assert_eq!(login.token, created.token);

        service.unsubscribe(&created.token).await.unwrap();
        assert!(matches!(
            service
                .login(SubscriberLoginRequest {
                    email: "parent@example.com".to_string(),
                })
                .await,
            Err(DomainError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_save_neighborhood_trims_and_clears() {
        let service = service().await;
        let created = service.subscribe(request("parent@example.com")).await.unwrap();

        service
            .save_neighborhood(
                &created.token,
                SaveNeighborhoodRequest {
                    neighborhood: "  Park Slope  ".to_string(),
                },
            )
            .await
            .unwrap();
        let subscriber = service.lookup(&created.token).await.unwrap();
        assert_eq!(subscriber.neighborhood.as_deref(), Some("Park Slope"));

        service
            .save_neighborhood(
                &created.token,
                SaveNeighborhoodRequest {
                    neighborhood: "".to_string(),
                },
            )
            .await
            .unwrap();
        let subscriber = service.lookup(&created.token).await.unwrap();
        assert_eq!(subscriber.neighborhood, None);
    }

    #[tokio::test]
    async fn test_week_follows_birth_date() {
        let service = service().await;
        let mut req = request("parent@example.com");
        let birth = Utc::now().date_naive() - chrono::Duration::days(70);
        req.baby_birth_date = Some(birth.format("%Y-%m-%d").to_string());

        let response = service.subscribe(req).await.unwrap();
        assert_eq!(response.week, 10);
    }
}
