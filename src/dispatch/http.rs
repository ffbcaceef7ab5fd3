//! Blocking reqwest transport.

use super::{DispatchRequest, RawResponse, Transport};
use crate::config::{GITHUB_API_BASE, USER_AGENT};
use crate::error::Result;
use reqwest::blocking::{Client, ClientBuilder};

/// Sends dispatch requests to the GitHub REST API.
///
/// Uses the client's default timeouts and never retries.
pub struct HttpTransport {
    client: Client,
    api_base: String,
}

impl HttpTransport {
    /// Transport for `https://api.github.com`.
    pub fn new() -> Result<Self> {
        Self::with_api_base(GITHUB_API_BASE)
    }

    /// Transport for another API base, such as a GitHub Enterprise host.
    pub fn with_api_base(api_base: impl Into<String>) -> Result<Self> {
        let client = client_builder().build()?;
        Ok(Self::from_client(client, api_base))
    }

    pub(crate) fn from_client(client: Client, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
        }
    }
}

fn client_builder() -> ClientBuilder {
    Client::builder().user_agent(USER_AGENT)
}

impl Transport for HttpTransport {
    fn send(&self, request: &DispatchRequest) -> Result<RawResponse> {
        let mut builder = self.client.post(request.url(&self.api_base));
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }

        let response = builder.json(&request.payload()).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        Ok(RawResponse { status, body })
    }
}
