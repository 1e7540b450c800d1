//! `gh` CLI adapter for the pull-request resource.
//!
//! The [`PrGateway`] trait decouples reconciliation from the real `gh`
//! binary. Tests use scripted gateways that store bodies in memory without
//! spawning processes.
//!
//! The pull request itself lives on the remote and may be touched by other
//! actors at any time; callers must treat every read as possibly stale.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::io::process::{CommandError, run_command};

/// Parameters for creating a pull request.
#[derive(Debug, Clone)]
pub struct PrParams {
    pub title: String,
    pub base: String,
    pub head: String,
}

/// Named operations on the pull request owned by the current branch context.
///
/// Implementations must not retry: retry policy belongs to the reconciler,
/// which bounds repair to a single attempt.
pub trait PrGateway {
    /// Create the pull request with a file-backed body.
    fn create(&mut self, params: &PrParams, body_path: &Path) -> Result<(), CommandError>;
    /// Number of the pull request for the current branch.
    fn current_number(&mut self) -> Result<String, CommandError>;
    /// Stored body, exactly as the remote returns it (pre-normalization).
    fn current_body(&mut self) -> Result<String, CommandError>;
    /// Stable web URL of the pull request.
    fn current_url(&mut self) -> Result<String, CommandError>;
    /// Overwrite the stored body from a file. Always a full overwrite, never
    /// a merge.
    fn edit_body(&mut self, number: &str, body_path: &Path) -> Result<(), CommandError>;
}

#[derive(Debug, Deserialize)]
struct NumberField {
    number: u64,
}

#[derive(Debug, Deserialize)]
struct BodyField {
    body: String,
}

#[derive(Debug, Deserialize)]
struct UrlField {
    url: String,
}

/// Gateway backed by the `gh` binary.
#[derive(Debug, Clone)]
pub struct GhClient {
    workdir: PathBuf,
}

impl GhClient {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    fn gh(&self) -> Command {
        let mut cmd = Command::new("gh");
        cmd.current_dir(&self.workdir);
        // gh must never block on a pager while we capture its output.
        cmd.env("GH_PAGER", "");
        cmd
    }

    fn view_field(&self, field: &str) -> Result<String, CommandError> {
        let mut cmd = self.gh();
        cmd.args(["pr", "view", "--json", field]);
        Ok(run_command(cmd)?.stdout)
    }
}

/// Parse one `gh ... --json` payload, mapping malformed output to a
/// [`CommandError`] that names the originating invocation.
fn parse_response<T: DeserializeOwned>(argv: &str, payload: &str) -> Result<T, CommandError> {
    serde_json::from_str(payload).map_err(|err| CommandError {
        code: None,
        argv: argv.to_string(),
        stderr: format!("unexpected gh response: {err}"),
    })
}

impl PrGateway for GhClient {
    #[instrument(skip_all, fields(base = %params.base, head = %params.head))]
    fn create(&mut self, params: &PrParams, body_path: &Path) -> Result<(), CommandError> {
        let mut cmd = self.gh();
        cmd.args(["pr", "create", "--title", &params.title])
            .args(["--base", &params.base, "--head", &params.head])
            .arg("--body-file")
            .arg(body_path);
        run_command(cmd)?;
        debug!("pull request created");
        Ok(())
    }

    fn current_number(&mut self) -> Result<String, CommandError> {
        let payload = self.view_field("number")?;
        let parsed: NumberField = parse_response("gh pr view --json number", &payload)?;
        Ok(parsed.number.to_string())
    }

    fn current_body(&mut self) -> Result<String, CommandError> {
        let payload = self.view_field("body")?;
        let parsed: BodyField = parse_response("gh pr view --json body", &payload)?;
        Ok(parsed.body)
    }

    fn current_url(&mut self) -> Result<String, CommandError> {
        let payload = self.view_field("url")?;
        let parsed: UrlField = parse_response("gh pr view --json url", &payload)?;
        Ok(parsed.url)
    }

    #[instrument(skip_all, fields(number))]
    fn edit_body(&mut self, number: &str, body_path: &Path) -> Result<(), CommandError> {
        let mut cmd = self.gh();
        cmd.args(["pr", "edit", number, "--body-file"]).arg(body_path);
        run_command(cmd)?;
        debug!("pull request body overwritten");
        Ok(())
    }
}
