//! Library API for boundlint.
//!
//! Unlike the CLI commands, which print and return exit codes, these
//! functions return `Result`s for calling code to handle.
//!
//! # Example
//!
//! ```no_run
//! use boundlint::{check, CheckOptions};
//! use std::path::Path;
//!
//! let result = check(Path::new("."), CheckOptions::default())?;
//! for report in &result.reports {
//!     for violation in &report.violations {
//!         println!("{}:{} {}", report.path.display(), violation.line, violation.verdict.message());
//!     }
//! }
//! # Ok::<(), boundlint::BoundlintError>(())
//! ```

use crate::config::{Config, ConfigError};
use crate::fs::default_fs;
use crate::lint;
use crate::model::{LintResult, Violation};
use crate::parser::{ParseError, ParserRegistry};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during boundlint operations.
#[derive(Debug, Error)]
pub enum BoundlintError {
    /// The specified path could not be found or resolved.
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Options for [`check`].
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Only check path spelling, not allow/deny rules.
    pub skip_policy: bool,

    /// Suppress `unknownBoundaryImport` reports.
    pub allow_unknown_boundaries: bool,
}

/// Check every source file of the project at `path` against its
/// `.boundlint.toml`.
pub fn check(path: &Path, options: CheckOptions) -> Result<LintResult, BoundlintError> {
    let resolved_path = path
        .canonicalize()
        .map_err(|_| BoundlintError::PathNotFound(path.to_path_buf()))?;

    let mut config = Config::load(&resolved_path)?;
    if options.skip_policy {
        config.enforce_boundaries = false;
    }
    if options.allow_unknown_boundaries {
        config.allow_unknown_boundaries = true;
    }

    let registry = ParserRegistry::new();
    Ok(lint::lint_project(
        &resolved_path,
        &config,
        &registry,
        default_fs(),
    ))
}

/// Check a single in-memory source file. `file` must be absolute.
///
/// ```
/// use boundlint::{check_source, Boundary, Config};
/// use std::path::Path;
///
/// let mut config = Config::new("/repo", "src");
/// let root = config.root_path();
/// config.boundaries.push(Boundary::new("app", &root).with_alias("@app"));
/// config.boundaries.push(Boundary::new("core", &root).with_alias("@core"));
///
/// let violations = check_source(
///     &config,
///     Path::new("/repo/src/app/main.ts"),
///     "import { run } from '@core/runner';",
/// )?;
/// assert_eq!(violations[0].fix.as_ref().unwrap().replacement, "@core");
/// # Ok::<(), boundlint::BoundlintError>(())
/// ```
pub fn check_source(
    config: &Config,
    file: &Path,
    source: &str,
) -> Result<Vec<Violation>, BoundlintError> {
    let registry = ParserRegistry::new();
    Ok(lint::lint_source(config, &registry, file, source)?)
}
