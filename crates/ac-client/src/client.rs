//! Role resource client
//!
//! All four CRUD operations target the same resource path and are told
//! apart by HTTP verb alone. The client performs no retries and checks
//! nothing beyond the status code; deciding what an outcome means is the
//! caller's job.

use async_trait::async_trait;

use crate::config::Config;
use crate::dto::{CreatedResponse, RoleDraft, RoleItem, RoleList, RoleQuery};
use crate::error::{Error, Result};

/// Resource path shared by all four operations
pub const ROLE_PATH: &str = "/api/sys/role";

/// Operations the console needs from the role resource
#[async_trait]
pub trait RoleApi: Send + Sync {
    /// Create a role. The service assigns the id.
    async fn create_role(&self, draft: &RoleDraft) -> Result<CreatedResponse>;

    /// Fetch one page of roles. Pure passthrough of `query`.
    async fn read_roles(&self, query: &RoleQuery) -> Result<RoleList>;

    /// Replace a role; the full entity is resent.
    async fn update_role(&self, item: &RoleItem) -> Result<RoleItem>;

    /// Remove the given roles. Confirmation is the caller's concern.
    async fn delete_roles(&self, items: &[RoleItem]) -> Result<()>;
}

/// HTTP implementation of [`RoleApi`]
#[derive(Debug, Clone)]
pub struct RoleClient {
    config: Config,
    http: reqwest::Client,
}

impl RoleClient {
    /// Create a new client with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { config, http })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self) -> String {
        format!("{}{}", self.config.base_url, ROLE_PATH)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(Error::from_status(status, body))
    }
}

#[async_trait]
impl RoleApi for RoleClient {
    async fn create_role(&self, draft: &RoleDraft) -> Result<CreatedResponse> {
        tracing::debug!(role_name = %draft.role_name, "creating role");

        let response = self.http.post(self.url()).json(draft).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn read_roles(&self, query: &RoleQuery) -> Result<RoleList> {
        let response = self
            .http
            .get(self.url())
            .query(&query.pairs())
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn update_role(&self, item: &RoleItem) -> Result<RoleItem> {
        tracing::debug!(id = %item.id, "updating role");

        let response = self.http.put(self.url()).json(item).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn delete_roles(&self, items: &[RoleItem]) -> Result<()> {
        tracing::debug!(count = items.len(), "deleting roles");

        let response = self.http.delete(self.url()).json(&items).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}
