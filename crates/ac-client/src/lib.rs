//! # Role Client
//!
//! HTTP client for the role administration resource. Serializes a
//! parameter envelope and issues one of four CRUD calls against
//! `/api/sys/role`; every transport failure or non-2xx response surfaces
//! as an error for the caller to interpret.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ac_client::{Config, RoleClient, RoleApi, RoleQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RoleClient::new(Config::new("https://console.example.com"))?;
//!
//!     let page = client.read_roles(&RoleQuery::default().with_page(1, 20)).await?;
//!     println!("{} roles", page.total);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod dto;
pub mod error;

pub use client::{RoleApi, RoleClient, ROLE_PATH};
pub use config::Config;
pub use dto::{CreatedResponse, RoleDraft, RoleItem, RoleList, RoleQuery};
pub use error::{Error, Result};
