use std::time::Duration;

use reqwest::{RequestBuilder, Url};

use crate::constants::DEFAULT_TIMEOUT;

/// HTTP client used for callouts, bound to a fixed per-request timeout.
///
/// Cloning is cheap; the underlying `reqwest::Client` shares its connection
/// pool between clones.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Self {
        Self::from_client(reqwest::Client::new(), timeout)
    }

    /// Reuses an existing client (e.g. one with a proxy or custom TLS roots).
    pub fn from_client(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn get(&self, url: Url) -> RequestBuilder {
        self.client.get(url).timeout(self.timeout)
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}
