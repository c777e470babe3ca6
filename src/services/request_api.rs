//! Remote proposal service client
//!
//! HTTP client for the backend proposal endpoints. The core only relies on
//! the status code of these calls; the backend owns the authoritative
//! request state.

use std::time::Duration;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::config::settings::Settings;
use crate::models::Proposal;
use crate::utils::errors::{AccessDeskError, Result};

/// Client for the remote proposal endpoints
#[derive(Debug, Clone)]
pub struct RequestApi {
    client: Client,
    base_url: Url,
}

impl RequestApi {
    /// Create a new RequestApi instance
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.api.timeout_seconds))
            .user_agent(&settings.api.user_agent)
            .build()
            .map_err(AccessDeskError::Http)?;

        let base_url = Url::parse(&settings.api.base_url)?;

        Ok(Self { client, base_url })
    }

    /// Approve a proposal on the backend
    pub async fn approve(&self, proposal_id: i64) -> Result<()> {
        self.post(&format!("proposals/{}/approve", proposal_id)).await
    }

    /// Deny a proposal on the backend
    pub async fn deny(&self, proposal_id: i64) -> Result<()> {
        self.post(&format!("proposals/{}/deny", proposal_id)).await
    }

    /// Fetch a single proposal
    pub async fn get(&self, proposal_id: i64) -> Result<Proposal> {
        let url = self.endpoint(&format!("proposals/{}", proposal_id))?;
        debug!(proposal_id = proposal_id, url = %url, "Fetching proposal");

        let response = self.client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            warn!(proposal_id = proposal_id, status = %response.status(), "Proposal fetch failed");
            return Err(AccessDeskError::RemoteRejected {
                endpoint: url.path().to_string(),
                status: response.status().as_u16(),
            });
        }

        let proposal = response.json::<Proposal>().await?;
        Ok(proposal)
    }

    async fn post(&self, path: &str) -> Result<()> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "Dispatching proposal action");

        let response = self.client.post(url.clone()).send().await?;
        if !response.status().is_success() {
            warn!(url = %url, status = %response.status(), "Proposal action rejected");
            return Err(AccessDeskError::RemoteRejected {
                endpoint: url.path().to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        // base URLs configured without a trailing slash still join correctly
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
