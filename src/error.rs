//! Error taxonomy for the create/verify/repair pipeline.
//!
//! Every variant is terminal for the run: nothing here is retried beyond the
//! single repair attempt built into [`crate::reconcile`]. The CLI boundary in
//! `main` prints the error as one line on stderr and maps it to exit code 1.

use thiserror::Error;

use crate::io::process::CommandError;

/// Terminal failures for a `prsafe` run.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad or missing local input: body source, required tool, branch context.
    #[error("{0}")]
    Config(String),

    /// An external `gh` or `git` invocation failed.
    #[error(transparent)]
    Remote(#[from] CommandError),

    /// The stored body still mismatched after the single repair attempt.
    #[error("failed to reconcile pull request body for #{number}")]
    Reconciliation { number: String },
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }
}
