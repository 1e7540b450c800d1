//! Verified pull-request publishing through the `gh` CLI.
//!
//! `gh pr create` passes body text through shell and argument plumbing that
//! can mangle certain byte sequences, so the create pipeline treats the
//! remote as untrusted: write the body from a file, read the stored body
//! back, and repair divergence once before failing loudly. The architecture
//! enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (canonicalization, lint rules).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (filesystem, git, gh, process
//!   execution). Isolated behind traits to enable scripted tests.
//!
//! Orchestration modules ([`create`], [`lint`], [`reconcile`]) coordinate
//! core logic with I/O to implement CLI commands.

pub mod core;
pub mod create;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod lint;
pub mod logging;
pub mod reconcile;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
