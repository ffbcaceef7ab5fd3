//! Error types for the trigger-workflow CLI.
//!
//! Uses thiserror for derive macros. The `Display` text of each variant is the
//! line shown to the user; `help()` carries any follow-up lines.

use crate::config::{TOKEN_ENV, TOKEN_SETTINGS_URL};
use crate::exit_codes;
use thiserror::Error;

/// Everything that can end a dispatch attempt without a 204.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// `GITHUB_TOKEN` is unset, empty, or not valid Unicode.
    #[error("GITHUB_TOKEN environment variable not set")]
    MissingCredential,

    /// HTTP 401.
    #[error("Authentication failed. Invalid or expired token.")]
    AuthenticationRejected,

    /// HTTP 404.
    #[error("Workflow not found. Make sure the workflow file exists.")]
    WorkflowNotFound,

    /// Any other status that is not 204.
    #[error("Error: {status}")]
    UnexpectedResponse { status: u16, body: String },

    /// The request never produced a response.
    #[error("request to GitHub failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl DispatchError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchError::MissingCredential
            | DispatchError::AuthenticationRejected
            | DispatchError::WorkflowNotFound
            | DispatchError::UnexpectedResponse { .. }
            | DispatchError::Transport(_) => exit_codes::FAILURE,
        }
    }

    /// Lines printed after the error message, if any.
    pub fn help(&self) -> Option<String> {
        match self {
            DispatchError::MissingCredential => Some(format!(
                "📝 Instructions:\n\
                 1. Create a Personal Access Token at: {}\n\
                 2. Grant 'actions' scope\n\
                 3. Run: export {}='your_token_here'\n\
                 4. Then run this script again",
                TOKEN_SETTINGS_URL, TOKEN_ENV
            )),
            DispatchError::UnexpectedResponse { body, .. } => Some(body.clone()),
            _ => None,
        }
    }

    /// Transport faults go to stderr; every other failure is a reported outcome.
    pub fn is_transport(&self) -> bool {
        matches!(self, DispatchError::Transport(_))
    }
}

/// Result type alias for dispatch operations.
pub type Result<T> = std::result::Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_reported_failure_exits_with_failure() {
        let errors = [
            DispatchError::MissingCredential,
            DispatchError::AuthenticationRejected,
            DispatchError::WorkflowNotFound,
            DispatchError::UnexpectedResponse {
                status: 500,
                body: "internal error".to_string(),
            },
        ];
        for err in errors {
            assert_eq!(err.exit_code(), exit_codes::FAILURE, "{err}");
        }
    }

    #[test]
    fn missing_credential_explains_how_to_create_a_token() {
        let err = DispatchError::MissingCredential;
        assert_eq!(err.to_string(), "GITHUB_TOKEN environment variable not set");

        let help = err.help().unwrap();
        assert!(help.contains("https://github.com/settings/tokens"));
        assert!(help.contains("'actions' scope"));
        assert!(help.contains("export GITHUB_TOKEN="));
    }

    #[test]
    fn status_errors_describe_the_failure() {
        assert!(
            DispatchError::AuthenticationRejected
                .to_string()
                .contains("Authentication failed")
        );
        assert!(
            DispatchError::WorkflowNotFound
                .to_string()
                .contains("Workflow not found")
        );
        assert!(DispatchError::WorkflowNotFound.help().is_none());
    }

    #[test]
    fn unexpected_response_carries_code_and_raw_body() {
        let err = DispatchError::UnexpectedResponse {
            status: 500,
            body: "internal error".to_string(),
        };
        assert_eq!(err.to_string(), "Error: 500");
        assert_eq!(err.help().as_deref(), Some("internal error"));
        assert!(!err.is_transport());
    }
}
