//! Body content resolution: explicit file or captured stdin.
//!
//! `gh pr create --body-file` needs the body at rest on disk. An explicit
//! `--body-file` is used in place; a body piped through stdin is drained into
//! a process-owned temp file that is removed when the handle drops, on
//! success and failure paths alike.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::Error;

/// Where the body content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyOrigin {
    /// Caller-supplied markdown file, left untouched on disk.
    ExplicitFile,
    /// Stdin drained into a process-owned temp file.
    CapturedStream,
}

/// Immutable handle to the body content at rest.
///
/// Built once per run and never mutated. Content is guaranteed non-empty
/// after trimming at construction time.
#[derive(Debug)]
pub struct BodySource {
    path: PathBuf,
    origin: BodyOrigin,
    temp: Option<NamedTempFile>,
}

impl BodySource {
    /// Resolve the body source from an optional explicit path, falling back
    /// to draining `reader` (stdin in production).
    pub fn resolve(path: Option<&Path>, reader: &mut dyn Read) -> Result<Self, Error> {
        if let Some(path) = path {
            return Self::from_explicit_file(path);
        }
        Self::from_stream(reader)
    }

    fn from_explicit_file(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Err(Error::config(format!(
                "body file does not exist: {}",
                path.display()
            )));
        }
        let content = fs::read_to_string(path).map_err(|err| {
            Error::config(format!("failed to read body file {}: {err}", path.display()))
        })?;
        if content.trim().is_empty() {
            return Err(Error::config(format!(
                "body file is empty: {}",
                path.display()
            )));
        }
        debug!(path = %path.display(), "using explicit body file");
        Ok(Self {
            path: path.to_path_buf(),
            origin: BodyOrigin::ExplicitFile,
            temp: None,
        })
    }

    fn from_stream(reader: &mut dyn Read) -> Result<Self, Error> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|err| Error::config(format!("failed to read body from stdin: {err}")))?;
        if content.trim().is_empty() {
            return Err(Error::config(
                "no --body-file provided and stdin is empty; pipe markdown via stdin or pass --body-file",
            ));
        }

        let mut temp = tempfile::Builder::new()
            .prefix("prsafe-body-")
            .suffix(".md")
            .tempfile()
            .map_err(|err| Error::config(format!("failed to create temp body file: {err}")))?;
        temp.write_all(content.as_bytes())
            .and_then(|()| temp.as_file_mut().sync_all())
            .map_err(|err| Error::config(format!("failed to write temp body file: {err}")))?;

        debug!(path = %temp.path().display(), bytes = content.len(), "captured stdin body");
        Ok(Self {
            path: temp.path().to_path_buf(),
            origin: BodyOrigin::CapturedStream,
            temp: Some(temp),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn origin(&self) -> BodyOrigin {
        self.origin
    }

    /// True when the backing file is owned by this handle and removed on drop.
    pub fn is_ephemeral(&self) -> bool {
        self.temp.is_some()
    }

    /// Read the body content as currently stored on disk.
    pub fn read(&self) -> Result<String, Error> {
        fs::read_to_string(&self.path).map_err(|err| {
            Error::config(format!(
                "failed to read body file {}: {err}",
                self.path.display()
            ))
        })
    }
}

impl Drop for BodySource {
    fn drop(&mut self) {
        // Cleanup failure must never mask the run's real outcome.
        if let Some(temp) = self.temp.take()
            && let Err(err) = temp.close()
        {
            warn!(err = %err, "failed to remove temp body file");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_file_is_used_in_place() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("body.md");
        fs::write(&path, "Adds an LRU cache.\n").expect("write");

        let source = BodySource::resolve(Some(&path), &mut std::io::empty()).expect("resolve");
        assert_eq!(source.origin(), BodyOrigin::ExplicitFile);
        assert!(!source.is_ephemeral());
        assert_eq!(source.read().expect("read"), "Adds an LRU cache.\n");

        drop(source);
        assert!(path.exists(), "explicit file must survive the run");
    }

    #[test]
    fn missing_explicit_file_is_a_config_error() {
        let err = BodySource::resolve(Some(Path::new("/no/such/body.md")), &mut std::io::empty())
            .expect_err("must fail");
        assert!(matches!(err, Error::Config(_)), "got {err:?}");
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn whitespace_only_explicit_file_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("body.md");
        fs::write(&path, "  \n\n").expect("write");

        let err = BodySource::resolve(Some(&path), &mut std::io::empty()).expect_err("must fail");
        assert!(err.to_string().contains("is empty"));
    }

    #[test]
    fn stream_body_is_materialized_and_cleaned_up() {
        let mut reader = "Adds an LRU cache.\r\n\r\nFixes #42.\r\n".as_bytes();
        let source = BodySource::resolve(None, &mut reader).expect("resolve");
        assert_eq!(source.origin(), BodyOrigin::CapturedStream);
        assert!(source.is_ephemeral());

        let path = source.path().to_path_buf();
        assert!(path.exists());
        assert_eq!(
            source.read().expect("read"),
            "Adds an LRU cache.\r\n\r\nFixes #42.\r\n"
        );

        drop(source);
        assert!(!path.exists(), "temp body file must not survive the run");
    }

    #[test]
    fn empty_stream_is_a_config_error() {
        let err = BodySource::resolve(None, &mut std::io::empty()).expect_err("must fail");
        assert!(matches!(err, Error::Config(_)), "got {err:?}");
    }

    #[test]
    fn whitespace_only_stream_is_rejected() {
        let mut reader = " \r\n \n".as_bytes();
        let err = BodySource::resolve(None, &mut reader).expect_err("must fail");
        assert!(matches!(err, Error::Config(_)), "got {err:?}");
    }
}
