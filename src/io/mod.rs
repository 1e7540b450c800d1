//! I/O adapters for prsafe commands.

pub mod body;
pub mod gh;
pub mod git;
pub mod guards;
pub mod process;
