//! Preflight checks for required external tools.
//!
//! Runs before any remote side effect: a missing binary should fail the run
//! as a config error, not surface as a confusing spawn failure mid-pipeline.

use std::env;
use std::path::PathBuf;

use tracing::debug;

use crate::error::Error;

/// Tools the create pipeline shells out to.
pub const REQUIRED_TOOLS: [&str; 2] = ["git", "gh"];

/// Ensure every required tool is reachable on PATH.
pub fn require_tools() -> Result<(), Error> {
    for tool in REQUIRED_TOOLS {
        let Some(path) = find_on_path(tool) else {
            return Err(Error::config(format!(
                "{tool} is required but was not found in PATH"
            )));
        };
        debug!(tool, path = %path.display(), "found required tool");
    }
    Ok(())
}

fn find_on_path(name: &str) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    env::split_paths(&path_var)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}
