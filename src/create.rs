//! Orchestration for `prsafe create`.
//!
//! Checks required tools, resolves the head branch and body source, then
//! runs the reconciliation protocol against the real `gh` gateway. The body
//! source handle owns temp-file cleanup, so every return path out of here
//! releases it.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use crate::error::Error;
use crate::io::body::BodySource;
use crate::io::gh::{GhClient, PrParams};
use crate::io::git::Git;
use crate::io::guards::require_tools;
use crate::reconcile::{Reconciled, reconcile};

/// Arguments for the create command after CLI parsing.
#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub title: String,
    pub base: String,
    /// Empty means "resolve from the current branch".
    pub head: String,
    /// `None` means "read the body from stdin".
    pub body_file: Option<PathBuf>,
}

/// Create the pull request and reconcile its body.
pub fn run_create(root: &Path, request: &CreateRequest, stdin: &mut dyn Read) -> Result<Reconciled> {
    require_tools()?;

    let head = resolve_head(root, &request.head)?;
    debug!(head = %head, base = %request.base, "resolved branches");

    let body = BodySource::resolve(request.body_file.as_deref(), stdin)?;

    let params = PrParams {
        title: request.title.clone(),
        base: request.base.clone(),
        head,
    };
    let mut gateway = GhClient::new(root);
    let outcome = reconcile(&mut gateway, &params, &body)?;
    Ok(outcome)
}

fn resolve_head(root: &Path, explicit: &str) -> Result<String, Error> {
    if !explicit.is_empty() {
        return Ok(explicit.to_string());
    }
    Git::new(root).current_branch()
}
