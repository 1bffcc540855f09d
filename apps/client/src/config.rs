use std::time::Duration;

use url::Url;

use crate::errors::{ResumeError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_USER_AGENT: &str = concat!("reactive-resume-client/", env!("CARGO_PKG_VERSION"));

/// Settings for a client that builds and owns its own HTTP session.
/// A caller-supplied session ignores everything here except `base_url`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Flat per-request ceiling; there is no per-call override.
    pub timeout: Duration,
    pub follow_redirects: bool,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            follow_redirects: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_follow_redirects(mut self, follow_redirects: bool) -> Self {
        self.follow_redirects = follow_redirects;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the base URL with trailing slashes stripped.
    /// Fails unless it is an absolute http(s) URL.
    pub fn normalized_base_url(&self) -> Result<String> {
        let trimmed = self.base_url.trim().trim_end_matches('/');

        let parsed = Url::parse(trimmed).map_err(|source| ResumeError::InvalidUrl {
            url: self.base_url.clone(),
            source,
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ResumeError::Config(format!(
                "base URL '{}' must use http or https",
                self.base_url
            )));
        }

        Ok(trimmed.to_string())
    }
}
