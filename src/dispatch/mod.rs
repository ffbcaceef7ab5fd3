//! The workflow dispatch request and its outcome.
//!
//! A [`DispatchRequest`] is built once from the fixed [`DispatchTarget`] and
//! the bearer token. A [`Transport`] sends it and hands back the raw status
//! and body, which [`evaluate`] maps onto success or a [`DispatchError`].

mod http;

pub use http::HttpTransport;

use crate::config::{ACCEPT, API_VERSION, DispatchTarget};
use crate::error::{DispatchError, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

/// One `workflow_dispatch` call. Immutable once built.
#[derive(Debug)]
pub struct DispatchRequest {
    target: DispatchTarget,
    token: SecretString,
}

/// JSON body of the dispatch call.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DispatchPayload<'a> {
    #[serde(rename = "ref")]
    pub git_ref: &'a str,
    pub inputs: DispatchInputs<'a>,
}

/// Workflow inputs sent alongside the ref.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DispatchInputs<'a> {
    pub version: &'a str,
}

/// Status and body as received, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Sends a dispatch request and returns whatever came back.
///
/// Implementations must not retry.
pub trait Transport {
    fn send(&self, request: &DispatchRequest) -> Result<RawResponse>;
}

impl DispatchRequest {
    pub fn new(target: DispatchTarget, token: SecretString) -> Self {
        Self { target, token }
    }

    pub fn target(&self) -> &DispatchTarget {
        &self.target
    }

    /// Full endpoint URL under `api_base`.
    pub fn url(&self, api_base: &str) -> String {
        format!(
            "{}{}",
            api_base.trim_end_matches('/'),
            self.target.dispatch_path()
        )
    }

    /// Request headers, including the bearer credential.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Accept", ACCEPT.to_string()),
            (
                "Authorization",
                format!("Bearer {}", self.token.expose_secret()),
            ),
            ("X-GitHub-Api-Version", API_VERSION.to_string()),
        ]
    }

    pub fn payload(&self) -> DispatchPayload<'_> {
        DispatchPayload {
            git_ref: &self.target.branch,
            inputs: DispatchInputs {
                version: &self.target.version,
            },
        }
    }
}

/// Map a response onto the outcome table. Only 204 counts as accepted.
pub fn evaluate(response: RawResponse) -> Result<()> {
    match response.status {
        204 => Ok(()),
        401 => Err(DispatchError::AuthenticationRejected),
        404 => Err(DispatchError::WorkflowNotFound),
        status => Err(DispatchError::UnexpectedResponse {
            status,
            body: response.body,
        }),
    }
}

/// Send `request` once over `transport` and evaluate the response.
pub fn dispatch(request: &DispatchRequest, transport: &impl Transport) -> Result<()> {
    let response = transport.send(request)?;
    evaluate(response)
}
