//! Request and response envelopes for the role resource

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// A role as seen by the console.
///
/// Only `id` and `role_name` are meaningful to this layer. Anything else
/// the remote service returns is carried in `extra` so a full entity can
/// be resent on update without dropping fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleItem {
    pub id: String,

    pub role_name: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RoleItem {
    pub fn new(id: impl Into<String>, role_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role_name: role_name.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Update payloads resend the full entity; the name must still be set.
    pub fn validate(&self) -> Result<()> {
        validate_role_name(&self.role_name)
    }
}

/// Create-form payload. The remote service assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDraft {
    pub role_name: String,
}

impl RoleDraft {
    pub fn new(role_name: impl Into<String>) -> Self {
        Self {
            role_name: role_name.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_role_name(&self.role_name)
    }
}

fn validate_role_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation("roleName must not be empty".to_string()));
    }
    Ok(())
}

/// Listing envelope.
///
/// Paging, filter and sort fields the table understands, plus free-form
/// parameters forwarded to the backend untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleQuery {
    /// Page number, 1-based
    pub current: Option<u64>,

    /// Page size
    pub page_size: Option<u64>,

    /// Filter by role name
    pub role_name: Option<String>,

    /// Sort key, e.g. "roleName" or "-roleName"
    pub sort: Option<String>,

    /// Opaque parameters passed through as-is
    pub extra: BTreeMap<String, String>,
}

impl RoleQuery {
    /// Set paging fields
    pub fn with_page(mut self, current: u64, page_size: u64) -> Self {
        self.current = Some(current);
        self.page_size = Some(page_size);
        self
    }

    /// Filter by role name
    pub fn with_role_name(mut self, role_name: impl Into<String>) -> Self {
        self.role_name = Some(role_name.into());
        self
    }

    /// Set the sort key
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Add an opaque passthrough parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Render the envelope as query-string pairs.
    ///
    /// The shape depends only on the fields set here, so identical queries
    /// always produce identical requests.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(current) = self.current {
            pairs.push(("current".to_string(), current.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("pageSize".to_string(), page_size.to_string()));
        }
        if let Some(ref role_name) = self.role_name {
            pairs.push(("roleName".to_string(), role_name.clone()));
        }
        if let Some(ref sort) = self.sort {
            pairs.push(("sort".to_string(), sort.clone()));
        }
        for (key, value) in &self.extra {
            pairs.push((key.clone(), value.clone()));
        }
        pairs
    }
}

/// List response contract expected by the table component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleList {
    pub data: Vec<RoleItem>,
    pub total: u64,
}

/// Acknowledgement for the create path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}
