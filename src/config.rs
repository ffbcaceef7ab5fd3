//! Fixed dispatch target and GitHub API constants.
//!
//! Nothing here is read from a file, the environment, or the command line.
//! The program always dispatches the same workflow on the same branch.

/// Repository owner.
pub const OWNER: &str = "cedyson8-creator";

/// Repository name.
pub const REPO: &str = "traffic-booster-app";

/// Workflow file under `.github/workflows/`.
pub const WORKFLOW_FILE: &str = "build-release.yml";

/// Git ref the workflow runs on.
pub const BRANCH: &str = "main";

/// Value passed as the workflow's `version` input.
pub const VERSION: &str = "1.0.0";

/// Base URL of the GitHub REST API.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Base URL of the GitHub web UI, used for the Actions link.
pub const GITHUB_WEB_BASE: &str = "https://github.com";

/// Media type requested from the API.
pub const ACCEPT: &str = "application/vnd.github+json";

/// REST API version pinned via `X-GitHub-Api-Version`.
pub const API_VERSION: &str = "2022-11-28";

/// Environment variable holding the bearer token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Where users create a personal access token.
pub const TOKEN_SETTINGS_URL: &str = "https://github.com/settings/tokens";

/// User agent sent with every request. GitHub refuses requests without one.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The non-secret half of a dispatch: which workflow, where, and with what input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchTarget {
    pub owner: String,
    pub repo: String,
    pub workflow_file: String,
    pub branch: String,
    pub version: String,
}

impl Default for DispatchTarget {
    fn default() -> Self {
        Self {
            owner: OWNER.to_string(),
            repo: REPO.to_string(),
            workflow_file: WORKFLOW_FILE.to_string(),
            branch: BRANCH.to_string(),
            version: VERSION.to_string(),
        }
    }
}

impl DispatchTarget {
    /// `owner/repo`, as shown to the user.
    pub fn repository(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Path of the `workflow_dispatch` endpoint, relative to the API base.
    pub fn dispatch_path(&self) -> String {
        format!(
            "/repos/{}/{}/actions/workflows/{}/dispatches",
            self.owner, self.repo, self.workflow_file
        )
    }

    /// Link to the repository's Actions tab.
    pub fn actions_url(&self) -> String {
        format!("{}/{}/actions", GITHUB_WEB_BASE, self.repository())
    }
}
