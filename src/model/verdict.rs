use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Outcome of checking one import statement that is not allowed as written.
///
/// An allowed import has no verdict at all; callers see `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Verdict {
    /// The import is permitted but spelled wrong. Always auto-fixable.
    IncorrectPath { expected: String, actual: String },
    /// The import reaches the importer's own boundary root barrel.
    AncestorBarrel { boundary_identifier: String },
    /// The target lies outside every configured boundary.
    UnknownBoundary { path: String },
    /// The boundary policy forbids the import.
    BoundaryViolation {
        from: String,
        to: String,
        reason: String,
    },
}

impl Verdict {
    /// Stable rule id used in reports and JSON output.
    pub fn message_id(&self) -> &'static str {
        match self {
            Verdict::IncorrectPath { .. } => "incorrectImportPath",
            Verdict::AncestorBarrel { .. } => "ancestorBarrelImport",
            Verdict::UnknownBoundary { .. } => "unknownBoundaryImport",
            Verdict::BoundaryViolation { .. } => "boundaryViolation",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Verdict::IncorrectPath { expected, actual } => {
                format!("Expected '{}' but got '{}'.", expected, actual)
            }
            Verdict::AncestorBarrel {
                boundary_identifier,
            } => format!(
                "Cannot import from ancestor barrel '{}'. This creates a circular dependency; \
                import the specific file or subdirectory instead.",
                boundary_identifier
            ),
            Verdict::UnknownBoundary { path } => format!(
                "Cannot import from '{}' - path is outside all configured boundaries. \
                Add a boundary that covers it or enable allow_unknown_boundaries.",
                path
            ),
            Verdict::BoundaryViolation { from, to, reason } => {
                format!("Cannot import from '{}' to '{}': {}", to, from, reason)
            }
        }
    }

    pub fn is_fixable(&self) -> bool {
        matches!(self, Verdict::IncorrectPath { .. })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[serde(alias = "warning")]
    Warn,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warn => write!(f, "warn"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// Replace the specifier text at `span` with `replacement`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fix {
    pub span: Range<usize>,
    pub replacement: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Violation {
    pub verdict: Verdict,
    /// `None` when neither the boundary nor the caller set one.
    pub severity: Option<Severity>,
    pub fix: Option<Fix>,
    pub specifier: String,
    pub line: usize,
    pub column: usize,
}

impl Violation {
    /// Severity used for exit codes and filtering; unset counts as an error.
    pub fn effective_severity(&self) -> Severity {
        self.severity.unwrap_or(Severity::Error)
    }
}
