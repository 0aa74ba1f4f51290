//! HTTP GET of the source table.
//!
//! Uses the curl crate (libcurl). The whole body is buffered in memory and
//! returned as text; non-2xx statuses are errors.

use std::time::Duration;
use thiserror::Error;

use crate::config::HttpConfig;

/// Failure while retrieving the source text. Transport and status failures are
/// handled the same way by the scan; they are split here for diagnostics.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (bad URL, connection refused, DNS, timeout, ...).
    #[error("GET request failed: {0}")]
    Transport(#[from] curl::Error),
    /// Server answered with a non-2xx status.
    #[error("GET returned HTTP {0}")]
    Status(u32),
}

/// Source of the raw table text.
pub trait Fetcher {
    /// Performs exactly one GET against `url` and returns the body as text.
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}

/// libcurl-backed fetcher.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl CurlFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(http: &HttpConfig) -> Self {
        Self {
            connect_timeout: http.connect_timeout_secs.map(Duration::from_secs),
            user_agent: http.user_agent.clone(),
        }
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        if let Some(timeout) = self.connect_timeout {
            easy.connect_timeout(timeout)?;
        }
        if let Some(agent) = &self.user_agent {
            easy.useragent(agent)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Status(code));
        }

        tracing::debug!("fetched {} bytes from {}", body.len(), url);
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message() {
        assert_eq!(FetchError::Status(404).to_string(), "GET returned HTTP 404");
    }

    #[test]
    fn from_config_copies_http_settings() {
        let http = HttpConfig {
            connect_timeout_secs: Some(5),
            user_agent: Some("minspread-test".to_string()),
        };
        let fetcher = CurlFetcher::from_config(&http);
        assert_eq!(fetcher.connect_timeout, Some(Duration::from_secs(5)));
        assert_eq!(fetcher.user_agent.as_deref(), Some("minspread-test"));
    }

    #[test]
    fn unsupported_scheme_is_transport_error() {
        let err = CurlFetcher::new().fetch("notascheme://nowhere").unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
    }
}
