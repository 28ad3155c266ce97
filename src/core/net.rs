// src/core/net.rs

// Blocking HTTP GET with a transport timeout. No retries.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::{config::consts::USER_AGENT, error::FetchError};

/// One GET per call. The driver only depends on this, so tests can serve
/// pages from memory.
pub trait Fetch {
    fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self::from_client(client))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let transport = |source: reqwest::Error| FetchError::Transport { url: url.to_string(), source };

        let resp = self.client.get(url.clone()).send().map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16(), url: url.to_string() });
        }
        resp.text().map_err(transport)
    }
}
