//! Test-only scripted gateway and repository helpers.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, anyhow};

use crate::io::body::BodySource;
use crate::io::gh::{PrGateway, PrParams};
use crate::io::process::CommandError;

/// How the scripted remote mangles bodies on a given operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBehavior {
    /// Store the body exactly as written.
    Faithful,
    /// Replace LF with CRLF, as a transport might.
    CrlfMangled,
    /// Drop everything after the first line.
    Truncated,
}

impl StoreBehavior {
    fn apply(self, body: &str) -> String {
        match self {
            StoreBehavior::Faithful => body.to_string(),
            StoreBehavior::CrlfMangled => body.replace('\n', "\r\n"),
            StoreBehavior::Truncated => {
                let mut first = body.lines().next().unwrap_or_default().to_string();
                first.push('\n');
                first
            }
        }
    }
}

/// In-memory pull-request remote with configurable corruption and call
/// counters for asserting the repair bound.
#[derive(Debug)]
pub struct ScriptedGateway {
    create_behavior: StoreBehavior,
    edit_behavior: StoreBehavior,
    pub stored_body: Option<String>,
    pub create_calls: usize,
    pub edit_calls: usize,
    pub body_reads: usize,
}

pub const SCRIPTED_NUMBER: &str = "41";
pub const SCRIPTED_URL: &str = "https://github.com/acme/widgets/pull/41";

impl ScriptedGateway {
    pub fn new(create_behavior: StoreBehavior, edit_behavior: StoreBehavior) -> Self {
        Self {
            create_behavior,
            edit_behavior,
            stored_body: None,
            create_calls: 0,
            edit_calls: 0,
            body_reads: 0,
        }
    }

    fn read_body_file(path: &Path) -> Result<String, CommandError> {
        std::fs::read_to_string(path).map_err(|err| CommandError {
            code: None,
            argv: format!("read {}", path.display()),
            stderr: err.to_string(),
        })
    }
}

impl PrGateway for ScriptedGateway {
    fn create(&mut self, _params: &PrParams, body_path: &Path) -> Result<(), CommandError> {
        self.create_calls += 1;
        let body = Self::read_body_file(body_path)?;
        self.stored_body = Some(self.create_behavior.apply(&body));
        Ok(())
    }

    fn current_number(&mut self) -> Result<String, CommandError> {
        Ok(SCRIPTED_NUMBER.to_string())
    }

    fn current_body(&mut self) -> Result<String, CommandError> {
        self.body_reads += 1;
        self.stored_body.clone().ok_or_else(|| CommandError {
            code: Some(1),
            argv: "gh pr view --json body".to_string(),
            stderr: "no pull requests found".to_string(),
        })
    }

    fn current_url(&mut self) -> Result<String, CommandError> {
        Ok(SCRIPTED_URL.to_string())
    }

    fn edit_body(&mut self, _number: &str, body_path: &Path) -> Result<(), CommandError> {
        self.edit_calls += 1;
        let body = Self::read_body_file(body_path)?;
        self.stored_body = Some(self.edit_behavior.apply(&body));
        Ok(())
    }
}

/// Build a captured-stream body source from literal text.
pub fn stream_body(content: &str) -> BodySource {
    let mut reader = content.as_bytes();
    BodySource::resolve(None, &mut reader).expect("non-empty body")
}

/// Temporary git repository checked out on a known branch.
pub struct TestRepo {
    dir: tempfile::TempDir,
}

impl TestRepo {
    pub fn new(branch: &str) -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp repo dir")?;
        let output = Command::new("git")
            .args(["init", "-b", branch, "."])
            .current_dir(dir.path())
            .output()
            .context("run git init")?;
        if !output.status.success() {
            return Err(anyhow!(
                "git init failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
