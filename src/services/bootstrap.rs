//! Session bootstrap
//!
//! Fetches the full user, group, and proposal lists once authentication
//! succeeds and builds the session directory. Any failure here aborts the
//! bootstrap; the caller routes back to the login surface.

use std::time::Duration;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};
use url::Url;

use crate::config::settings::Settings;
use crate::directory::SessionDirectory;
use crate::models::{Group, Proposal, User};
use crate::utils::errors::{AccessDeskError, Result};

/// Loads the session directory from the backend
#[derive(Debug, Clone)]
pub struct SessionBootstrap {
    client: Client,
    base_url: Url,
}

impl SessionBootstrap {
    /// Create a new SessionBootstrap instance
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.api.timeout_seconds))
            .user_agent(&settings.api.user_agent)
            .build()
            .map_err(AccessDeskError::Http)?;

        let base_url = Url::parse(&settings.api.base_url)?;

        Ok(Self { client, base_url })
    }

    /// Fetch users, groups, and proposals and build the directory.
    ///
    /// Errors abort the bootstrap; no partial directory is ever returned.
    pub async fn load(&self) -> Result<SessionDirectory> {
        info!("Bootstrapping session directory");

        let users: Vec<User> = self.fetch("users").await?;
        let groups: Vec<Group> = self.fetch("groups").await?;
        let proposals: Vec<Proposal> = self.fetch("proposals").await?;

        Ok(SessionDirectory::from_bootstrap(users, groups, proposals))
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| AccessDeskError::Config("API base URL cannot be a base".to_string()))?;
            segments.pop_if_empty();
            segments.push(path);
        }

        debug!(url = %url, "Fetching session data");
        let response = self.client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            error!(url = %url, status = %response.status(), "Session bootstrap fetch failed");
            return Err(AccessDeskError::RemoteRejected {
                endpoint: url.path().to_string(),
                status: response.status().as_u16(),
            });
        }

        let items = response.json::<Vec<T>>().await?;
        Ok(items)
    }
}
