//! Client configuration

/// Configuration for the role client
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the console backend
    pub base_url: String,

    /// User agent string
    pub user_agent: String,
}

impl Config {
    /// Create a new configuration with the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: format!("ac-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set custom user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
