//! Git adapter for resolving the local branch context.
//!
//! The head branch defaults to whatever is checked out, so we keep a small,
//! explicit wrapper around `git` subprocess calls.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, instrument, warn};

use crate::error::Error;
use crate::io::process::run_command;

/// Wrapper for executing git queries in a working directory.
#[derive(Debug, Clone)]
pub struct Git {
    workdir: PathBuf,
}

impl Git {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Return the current branch name (errors on detached HEAD).
    #[instrument(skip_all)]
    pub fn current_branch(&self) -> Result<String, Error> {
        let mut cmd = Command::new("git");
        cmd.args(["branch", "--show-current"])
            .current_dir(&self.workdir);
        let output = run_command(cmd)?;
        let name = output.stdout.trim().to_string();
        if name.is_empty() {
            warn!("detached HEAD detected");
            return Err(Error::config(
                "cannot resolve head branch: detached HEAD (pass --head explicitly)",
            ));
        }
        debug!(branch = %name, "current branch");
        Ok(name)
    }
}
