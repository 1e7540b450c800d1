//! Stable exit codes for prsafe CLI commands.

/// Command succeeded; the PR URL (or a lint pass) was reported.
pub const OK: i32 = 0;
/// Config, remote, reconciliation, or lint failure.
pub const FAILURE: i32 = 1;
