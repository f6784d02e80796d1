use crate::config::{Config, posix_string};
use crate::fs::FileSystem;
use crate::model::{FileReport, LintResult, Violation};
use crate::parser::{ParseError, ParserRegistry};
use crate::rules::{FileContext, check_file};
use ignore::WalkBuilder;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Check every source file under the configured `root_dir` of the project at
/// `project_path`. Tooling files beside `root_dir` are never looked at.
///
/// Files are checked in parallel; each gets its own [`FileContext`]. Files
/// that cannot be read or parsed are logged and skipped.
pub fn lint_project(
    project_path: &Path,
    config: &Config,
    registry: &ParserRegistry,
    fs: &dyn FileSystem,
) -> LintResult {
    let project_name = project_path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("project")
        .to_string();

    let source_root = PathBuf::from(config.root_path());
    if !source_root.is_dir() {
        tracing::warn!("root_dir {} does not exist", source_root.display());
    }
    let files = discover_files(&source_root, config, registry);
    tracing::debug!(count = files.len(), root = %source_root.display(), "discovered source files");

    let mut reports: Vec<FileReport> = files
        .par_iter()
        .filter_map(|path| match lint_file(config, registry, path, fs) {
            Ok(violations) if violations.is_empty() => None,
            Ok(violations) => Some(FileReport {
                path: path.clone(),
                violations,
            }),
            Err(e) => {
                tracing::warn!("skipping {}: {}", path.display(), e);
                None
            }
        })
        .collect();
    reports.sort_by(|a, b| a.path.cmp(&b.path));

    LintResult {
        project_name,
        files_checked: files.len(),
        reports,
    }
}

pub fn lint_file(
    config: &Config,
    registry: &ParserRegistry,
    path: &Path,
    fs: &dyn FileSystem,
) -> Result<Vec<Violation>, ParseError> {
    let source = fs.read_to_string(path)?;
    lint_source(config, registry, path, &source)
}

/// Check one in-memory file. `path` must be absolute.
pub fn lint_source(
    config: &Config,
    registry: &ParserRegistry,
    path: &Path,
    source: &str,
) -> Result<Vec<Violation>, ParseError> {
    let statements = registry.parse(path, source)?;
    let ctx = FileContext::new(config, &posix_string(path));
    Ok(check_file(&ctx, &statements))
}

/// Source files under `root` with a configured extension, sorted.
///
/// `.gitignore` files apply whether or not the project is a git checkout.
pub fn discover_files(root: &Path, config: &Config, registry: &ParserRegistry) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .require_git(false)
        .build();

    let mut files: Vec<PathBuf> = walker
        .flatten()
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file())
        .filter(|path| {
            let name = path.to_string_lossy();
            config
                .file_extensions
                .iter()
                .any(|ext| name.ends_with(ext.as_str()))
        })
        .filter(|path| registry.find_parser(path).is_some())
        .collect();
    files.sort();
    files
}
