use crate::model::{Severity, Violation};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::PathBuf;

/// One import or re-export found in a source file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportStatement {
    /// Specifier text without quotes.
    pub specifier: String,
    /// Byte range of the specifier text inside the source, quotes excluded.
    pub span: Range<usize>,
    pub line: usize,
    pub column: usize,
    pub is_type_only: bool,
}

impl ImportStatement {
    pub fn new(specifier: impl Into<String>) -> Self {
        let specifier = specifier.into();
        let span = 0..specifier.len();
        Self {
            specifier,
            span,
            line: 1,
            column: 1,
            is_type_only: false,
        }
    }

    pub fn type_only(mut self) -> Self {
        self.is_type_only = true;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub violations: Vec<Violation>,
}

impl FileReport {
    pub fn fixable_count(&self) -> usize {
        self.violations.iter().filter(|v| v.fix.is_some()).count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintResult {
    pub project_name: String,
    pub files_checked: usize,
    /// Only files with at least one violation, sorted by path.
    pub reports: Vec<FileReport>,
}

impl LintResult {
    pub fn violation_count(&self) -> usize {
        self.reports.iter().map(|r| r.violations.len()).sum()
    }

    pub fn has_errors(&self) -> bool {
        self.reports
            .iter()
            .flat_map(|r| &r.violations)
            .any(|v| v.effective_severity() == Severity::Error)
    }
}
