//! HTTP client for the external drawing service
//!
//! CRUD against `{base_url}/drawings` with a closed error taxonomy:
//! validation failures are caught before any network I/O, HTTP 404 maps to
//! `NotFound`, everything else that goes wrong on the wire is `Network`.
//! Callers are expected to surface errors and let the user retry; nothing
//! here retries automatically.
//!
//! Every mutating call that completes at the HTTP layer bumps a generation
//! counter on a watch channel. The list view subscribes to it to refetch,
//! which keeps cache invalidation an explicit contract instead of a
//! view-to-view side channel.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tokio::sync::watch;

use crate::domain::{CreateDrawingBody, Drawing, GeometryPayload};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum RepoError {
    /// Rejected client-side before any request was issued.
    #[error("{0}")]
    Validation(String),
    /// The backend reported no drawing with this id.
    #[error("drawing {id} was not found")]
    NotFound { id: String },
    /// Transport failure, timeout, or an unexpected backend status.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// DELETE response body. The backend answers HTTP 200 whether or not a
/// document matched, so the count is the actual success signal.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DeleteOutcome {
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}

impl DeleteOutcome {
    /// Only a positive count confirms something was deleted.
    pub fn succeeded(&self) -> bool {
        self.deleted_count > 0
    }
}

pub struct DrawingRepository {
    client: reqwest::Client,
    base_url: String,
    invalidations: watch::Sender<u64>,
}

impl DrawingRepository {
    pub fn new(base_url: &str) -> Result<Self, RepoError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let (invalidations, _) = watch::channel(0);
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            invalidations,
        })
    }

    /// Subscribe to mutation completions. The value is a generation counter;
    /// any observed change means cached lists may be stale.
    pub fn invalidations(&self) -> watch::Receiver<u64> {
        self.invalidations.subscribe()
    }

    fn publish_invalidation(&self) {
        self.invalidations.send_modify(|generation| *generation += 1);
    }

    fn collection_url(&self) -> String {
        format!("{}/drawings", self.base_url)
    }

    fn entity_url(&self, id: &str) -> String {
        format!("{}/drawings/{}", self.base_url, id)
    }

    /// Fetch all drawings. An empty backend yields an empty vec.
    pub async fn list(&self) -> Result<Vec<Drawing>, RepoError> {
        log::debug!("GET {}", self.collection_url());
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetch one drawing by id.
    pub async fn get(&self, id: &str) -> Result<Drawing, RepoError> {
        log::debug!("GET {}", self.entity_url(id));
        let response = self.client.get(self.entity_url(id)).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RepoError::NotFound { id: id.to_string() });
        }
        Ok(response.error_for_status()?.json().await?)
    }

    /// Create a drawing. The backend assigns the id.
    pub async fn create(
        &self,
        title: &str,
        geometry: &GeometryPayload,
    ) -> Result<Drawing, RepoError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(RepoError::Validation(
                "a drawing needs a non-empty title".to_string(),
            ));
        }

        log::debug!("POST {}", self.collection_url());
        let body = CreateDrawingBody {
            title,
            drawing_data: geometry,
        };
        let response = self
            .client
            .post(self.collection_url())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        let created = response.json().await?;
        self.publish_invalidation();
        Ok(created)
    }

    /// Full-document replace of the geometry collections.
    pub async fn update(
        &self,
        id: &str,
        geometry: &GeometryPayload,
    ) -> Result<Drawing, RepoError> {
        log::debug!("PATCH {}", self.entity_url(id));
        let response = self
            .client
            .patch(self.entity_url(id))
            .json(geometry)
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RepoError::NotFound { id: id.to_string() });
        }
        let updated = response.error_for_status()?.json().await?;
        self.publish_invalidation();
        Ok(updated)
    }

    /// Delete a drawing. Callers must check [`DeleteOutcome::succeeded`];
    /// the call itself succeeds even when nothing matched.
    pub async fn delete(&self, id: &str) -> Result<DeleteOutcome, RepoError> {
        log::debug!("DELETE {}", self.entity_url(id));
        let response = self.client.delete(self.entity_url(id)).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RepoError::NotFound { id: id.to_string() });
        }
        let outcome: DeleteOutcome = response.error_for_status()?.json().await?;
        // A zero count still means the backend state may differ from any
        // cached list, so the refresh fires either way.
        self.publish_invalidation();
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> DrawingRepository {
        // Unroutable address: any test that reaches the network fails fast.
        DrawingRepository::new("http://192.0.2.1:1/").unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let repo = repo();
        assert_eq!(repo.collection_url(), "http://192.0.2.1:1/drawings");
        assert_eq!(repo.entity_url("abc"), "http://192.0.2.1:1/drawings/abc");
    }

    #[tokio::test]
    async fn test_create_with_blank_title_fails_without_network() {
        let repo = repo();
        let err = repo
            .create("   ", &GeometryPayload::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[test]
    fn test_delete_outcome_zero_is_not_success() {
        assert!(!DeleteOutcome { deleted_count: 0 }.succeeded());
        assert!(DeleteOutcome { deleted_count: 2 }.succeeded());
    }

    #[test]
    fn test_delete_outcome_parses_backend_field_name() {
        let outcome: DeleteOutcome = serde_json::from_str(r#"{"deletedCount": 1}"#).unwrap();
        assert!(outcome.succeeded());
    }

    #[test]
    fn test_mutations_publish_invalidations() {
        let repo = repo();
        let rx = repo.invalidations();
        assert_eq!(*rx.borrow(), 0);
        repo.publish_invalidation();
        repo.publish_invalidation();
        assert_eq!(*rx.borrow(), 2);
    }
}
