mod json;
mod markdown;

pub use json::JsonOutput;
pub use markdown::MarkdownOutput;

use crate::config::posix_string;
use crate::model::LintResult;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Renders a whole lint run.
pub trait OutputFormatter {
    fn format<W: Write>(&self, result: &LintResult, writer: &mut W) -> std::io::Result<()>;
}

/// `path` relative to `project_root`, `/`-separated so reports read the same
/// on every platform.
pub fn relative_path(path: &Path, project_root: Option<&PathBuf>) -> String {
    let shown = project_root
        .and_then(|root| path.strip_prefix(root).ok())
        .unwrap_or(path);
    posix_string(shown)
}
