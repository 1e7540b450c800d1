//! Orchestration for `prsafe lint`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::frontmatter::{Finding, Severity, lint_document};

/// Outcome of linting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintOutcome {
    pub findings: Vec<Finding>,
}

impl LintOutcome {
    pub fn has_errors(&self) -> bool {
        self.findings
            .iter()
            .any(|finding| finding.severity == Severity::Error)
    }
}

/// Lint the frontmatter of a markdown document on disk.
pub fn lint_file(path: &Path) -> Result<LintOutcome> {
    let content = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Ok(LintOutcome {
        findings: lint_document(&content),
    })
}
