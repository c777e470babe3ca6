//! Services module
//!
//! This module contains the remote service clients and the local
//! collaborator surfaces (notifications, loading indicator).

pub mod bootstrap;
pub mod group_api;
pub mod loading;
pub mod notification;
pub mod request_api;

// Re-export commonly used services
pub use bootstrap::SessionBootstrap;
pub use group_api::GroupApi;
pub use loading::LoadingIndicator;
pub use notification::{NotificationService, NotificationStats, Notice, NoticeKind};
pub use request_api::RequestApi;

use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub request_api: RequestApi,
    pub group_api: GroupApi,
    pub bootstrap: SessionBootstrap,
    pub notifications: NotificationService,
    pub loading: LoadingIndicator,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings) -> Result<Self> {
        let request_api = RequestApi::new(settings)?;
        let group_api = GroupApi::new(settings)?;
        let bootstrap = SessionBootstrap::new(settings)?;
        let notifications = NotificationService::new();
        let loading = LoadingIndicator::new();

        Ok(Self {
            request_api,
            group_api,
            bootstrap,
            notifications,
            loading,
        })
    }
}
