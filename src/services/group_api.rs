//! Remote group service client
//!
//! HTTP client for the backend group endpoints: member addition, group
//! creation, promotion, and removal. As with the proposal client, only the
//! status code matters to the core; local directory state is reconciled by
//! the caller after a call resolves.

use std::time::Duration;
use reqwest::Client;
use serde_json::json;
use tracing::{debug, warn};
use url::Url;

use crate::config::settings::Settings;
use crate::utils::errors::{AccessDeskError, Result};

/// Client for the remote group endpoints
#[derive(Debug, Clone)]
pub struct GroupApi {
    client: Client,
    base_url: Url,
}

impl GroupApi {
    /// Create a new GroupApi instance
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.api.timeout_seconds))
            .user_agent(&settings.api.user_agent)
            .build()
            .map_err(AccessDeskError::Http)?;

        let base_url = Url::parse(&settings.api.base_url)?;

        Ok(Self { client, base_url })
    }

    /// Add a user to a group's member set
    pub async fn add_member(&self, group_id: i64, user_id: i64) -> Result<()> {
        self.post(
            &format!("groups/{}/members", group_id),
            json!({ "user_id": user_id }),
        )
        .await
    }

    /// Create a group on the backend
    pub async fn create_group(&self, name: &str) -> Result<()> {
        self.post("groups", json!({ "name": name })).await
    }

    /// Promote a group member to owner
    pub async fn promote(&self, user_id: i64, group_id: i64) -> Result<()> {
        self.post(
            &format!("groups/{}/owners", group_id),
            json!({ "user_id": user_id }),
        )
        .await
    }

    /// Remove a user from a group
    pub async fn remove(&self, user_id: i64, group_id: i64) -> Result<()> {
        let url = self.endpoint(&format!("groups/{}/members/{}", group_id, user_id))?;
        debug!(url = %url, "Dispatching group member removal");

        let response = self.client.delete(url.clone()).send().await?;
        if !response.status().is_success() {
            warn!(url = %url, status = %response.status(), "Group member removal rejected");
            return Err(AccessDeskError::RemoteRejected {
                endpoint: url.path().to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> Result<()> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "Dispatching group action");

        let response = self.client.post(url.clone()).json(&body).send().await?;
        if !response.status().is_success() {
            warn!(url = %url, status = %response.status(), "Group action rejected");
            return Err(AccessDeskError::RemoteRejected {
                endpoint: url.path().to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let mut base = self.base_url.clone();
        {
            let mut segments = base
                .path_segments_mut()
                .map_err(|_| AccessDeskError::Config("API base URL cannot be a base".to_string()))?;
            segments.pop_if_empty();
            for segment in path.split('/') {
                segments.push(segment);
            }
        }
        Ok(base)
    }
}
