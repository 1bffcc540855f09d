use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::errors::{ResumeError, Result};

/// Who is responsible for tearing the HTTP session down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// Built by the client from a [`ClientConfig`]; released on close.
    Owned,
    /// Supplied by the caller; never released by the client.
    Shared,
}

/// The HTTP session a client issues its requests through.
#[derive(Debug)]
pub(crate) struct Session {
    http: Option<Client>,
    ownership: Ownership,
}

impl Session {
    pub(crate) fn owned(http: Client) -> Self {
        Self {
            http: Some(http),
            ownership: Ownership::Owned,
        }
    }

    pub(crate) fn shared(http: Client) -> Self {
        Self {
            http: Some(http),
            ownership: Ownership::Shared,
        }
    }

    pub(crate) fn get(&self) -> Result<&Client> {
        self.http.as_ref().ok_or(ResumeError::Closed)
    }

    pub(crate) fn ownership(&self) -> Ownership {
        self.ownership
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.http.is_none()
    }

    /// Releases an owned session. Safe to call any number of times.
    pub(crate) fn close(&mut self) {
        match self.ownership {
            Ownership::Owned => {
                if self.http.take().is_some() {
                    info!("Closed owned HTTP session");
                }
            }
            Ownership::Shared => debug!("Leaving caller-supplied HTTP session open"),
        }
    }
}

/// Creates the connection pool a client owns.
/// The cookie store keeps the auth cookie from login/signup for later resume calls.
pub(crate) fn build_session(config: &ClientConfig) -> Result<Client> {
    let redirect = if config.follow_redirects {
        Policy::default()
    } else {
        Policy::none()
    };

    let http = Client::builder()
        .timeout(config.timeout)
        .redirect(redirect)
        .cookie_store(true)
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| ResumeError::Config(format!("Failed to build HTTP client: {e}")))?;

    info!(
        "HTTP session established (timeout {}s, follow_redirects={})",
        config.timeout.as_secs_f64(),
        config.follow_redirects
    );
    Ok(http)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owned_session_closes_once() {
        let http = build_session(&ClientConfig::default()).unwrap();
        let mut session = Session::owned(http);

        assert!(session.get().is_ok());
        session.close();
        assert!(session.is_closed());
        assert!(matches!(session.get(), Err(ResumeError::Closed)));

        session.close();
        assert!(session.is_closed());
        assert_eq!(session.ownership(), Ownership::Owned);
    }

    #[test]
    fn test_shared_session_survives_close() {
        let mut session = Session::shared(Client::new());

        session.close();
        session.close();
        assert!(!session.is_closed());
        assert!(session.get().is_ok());
        assert_eq!(session.ownership(), Ownership::Shared);
    }

    #[test]
    fn test_build_session_without_redirects() {
        let config = ClientConfig::default().with_follow_redirects(false);
        assert!(build_session(&config).is_ok());
    }
}
