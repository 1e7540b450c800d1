//! Deterministic, pure logic shared by the prsafe commands.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! text and return deterministic outputs suitable for tests.

pub mod canonical;
pub mod frontmatter;
