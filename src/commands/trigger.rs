//! Implementation of the workflow trigger.
//!
//! Reads the token, announces the target, sends the dispatch once and prints
//! the result. Failures are returned to `main`, which reports them.

use crate::config::DispatchTarget;
use crate::credentials::read_token;
use crate::dispatch::{DispatchRequest, HttpTransport, Transport, dispatch};
use crate::error::Result;
use secrecy::SecretString;

/// Execute the trigger.
///
/// No network call is made when `GITHUB_TOKEN` is missing.
pub fn cmd_trigger() -> Result<()> {
    let token = read_token()?;
    let transport = HttpTransport::new()?;
    trigger(DispatchTarget::default(), token, &transport)
}

fn trigger(target: DispatchTarget, token: SecretString, transport: &impl Transport) -> Result<()> {
    let request = DispatchRequest::new(target, token);

    println!("{}", banner(request.target()));
    dispatch(&request, transport)?;
    println!("{}", success(request.target()));

    Ok(())
}

/// Status lines printed before the request goes out.
fn banner(target: &DispatchTarget) -> String {
    format!(
        "🔄 Triggering workflow: {}\n📍 Repository: {}\n🌿 Branch: {}",
        target.workflow_file,
        target.repository(),
        target.branch
    )
}

fn success(target: &DispatchTarget) -> String {
    format!(
        "✅ Workflow triggered successfully!\n📊 Check progress at: {}",
        target.actions_url()
    )
}
