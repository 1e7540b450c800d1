//! Publish pull requests whose body survives the `gh` transport intact.
//!
//! `prsafe create` writes the body through a file-backed `gh pr create`,
//! reads the stored body back, and repairs divergence once via `gh pr edit`
//! before failing loudly. `prsafe lint` checks skill-document frontmatter
//! conventions.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use prsafe::core::frontmatter::Severity;
use prsafe::create::{CreateRequest, run_create};
use prsafe::exit_codes;
use prsafe::lint::lint_file;
use prsafe::logging;

#[derive(Parser)]
#[command(
    name = "prsafe",
    version,
    about = "Create pull requests with a verified, auto-repaired body"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a PR with a file-backed body, verify it, and repair mismatches.
    Create {
        /// Pull request title.
        #[arg(long)]
        title: String,
        /// Target base branch.
        #[arg(long, default_value = "main")]
        base: String,
        /// Head branch (default: current branch).
        #[arg(long, default_value = "")]
        head: String,
        /// Path to the markdown body file. If omitted, read body from stdin.
        #[arg(long)]
        body_file: Option<PathBuf>,
    },
    /// Check a skill document's frontmatter naming and voice conventions.
    Lint {
        /// Markdown file to lint.
        path: PathBuf,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(exit_codes::FAILURE);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Create {
            title,
            base,
            head,
            body_file,
        } => cmd_create(CreateRequest {
            title,
            base,
            head,
            body_file,
        }),
        Command::Lint { path } => cmd_lint(&path),
    }
}

fn cmd_create(request: CreateRequest) -> Result<()> {
    let cwd = std::env::current_dir().context("resolve current directory")?;
    let outcome = run_create(&cwd, &request, &mut io::stdin().lock())?;
    // The URL is the only stdout output, so callers can capture it directly.
    println!("{}", outcome.url);
    Ok(())
}

fn cmd_lint(path: &Path) -> Result<()> {
    let outcome = lint_file(path)?;
    for finding in &outcome.findings {
        match finding.severity {
            Severity::Error => println!("error: {}", finding.message),
            Severity::Warning => println!("warning: {}", finding.message),
        }
    }
    if outcome.has_errors() {
        bail!("frontmatter validation failed: {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_create_with_defaults() {
        let cli = Cli::parse_from(["prsafe", "create", "--title", "Add caching layer"]);
        match cli.command {
            Command::Create {
                title,
                base,
                head,
                body_file,
            } => {
                assert_eq!(title, "Add caching layer");
                assert_eq!(base, "main");
                assert_eq!(head, "");
                assert_eq!(body_file, None);
            }
            Command::Lint { .. } => panic!("expected create"),
        }
    }

    #[test]
    fn parse_create_with_explicit_branches_and_body() {
        let cli = Cli::parse_from([
            "prsafe",
            "create",
            "--title",
            "Add caching layer",
            "--base",
            "develop",
            "--head",
            "feature/cache",
            "--body-file",
            "body.md",
        ]);
        match cli.command {
            Command::Create {
                base,
                head,
                body_file,
                ..
            } => {
                assert_eq!(base, "develop");
                assert_eq!(head, "feature/cache");
                assert_eq!(body_file, Some(PathBuf::from("body.md")));
            }
            Command::Lint { .. } => panic!("expected create"),
        }
    }

    #[test]
    fn parse_lint() {
        let cli = Cli::parse_from(["prsafe", "lint", "SKILL.md"]);
        assert!(matches!(cli.command, Command::Lint { .. }));
    }
}
