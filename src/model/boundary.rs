use crate::model::Severity;
use serde::{Deserialize, Serialize};

/// How cross-boundary imports are spelled.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// `@domain`
    #[default]
    Alias,
    /// `src/domain`
    Absolute,
}

/// A named region of the source tree with its own import policy.
///
/// Boundaries are built once from configuration and never change while
/// imports are being checked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Boundary {
    /// Directory relative to the project root, posix-style, no trailing slash.
    pub dir: String,
    pub alias: Option<String>,
    /// Explicit identifier for allow/deny lists. See [`Boundary::identifier`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_identifier: Option<String>,
    /// `dir` resolved against the project root.
    pub absolute_dir: String,
    pub allow_imports_from: Option<Vec<String>>,
    pub deny_imports_from: Option<Vec<String>>,
    pub allow_type_imports_from: Option<Vec<String>>,
    pub severity: Option<Severity>,
}

impl Boundary {
    /// Create a boundary for `dir` under the absolute project root `root_path`.
    pub fn new(dir: &str, root_path: &str) -> Self {
        let dir = dir
            .trim_start_matches("./")
            .trim_end_matches('/')
            .to_string();
        let absolute_dir = crate::resolve::path::join(root_path, &dir);

        Self {
            dir,
            alias: None,
            explicit_identifier: None,
            absolute_dir,
            allow_imports_from: None,
            deny_imports_from: None,
            allow_type_imports_from: None,
            severity: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.explicit_identifier = Some(identifier.into());
        self
    }

    pub fn allow_imports_from<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_imports_from = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn deny_imports_from<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deny_imports_from = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn allow_type_imports_from<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_type_imports_from = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Name used in allow/deny lists: explicit identifier, else alias, else `dir`.
    pub fn identifier(&self) -> &str {
        self.explicit_identifier
            .as_deref()
            .or(self.alias.as_deref())
            .unwrap_or(&self.dir)
    }

    /// A boundary carries policy when any list is present, even an empty one.
    pub fn is_policy_specified(&self) -> bool {
        self.allow_imports_from.is_some()
            || self.deny_imports_from.is_some()
            || self.allow_type_imports_from.is_some()
    }

    /// Root-relative spelling of this boundary, e.g. `src/domain`.
    pub fn root_relative(&self, root_dir: &str) -> String {
        if root_dir.is_empty() || root_dir == "." {
            self.dir.clone()
        } else {
            format!("{}/{}", root_dir.trim_end_matches('/'), self.dir)
        }
    }

    /// The canonical way to refer to this boundary's root from elsewhere.
    /// Alias style falls back to the root-relative form when no alias is set.
    pub fn root_spelling(&self, style: PathStyle, root_dir: &str) -> String {
        match (style, &self.alias) {
            (PathStyle::Alias, Some(alias)) => alias.clone(),
            _ => self.root_relative(root_dir),
        }
    }

    /// Two boundaries denote the same region when they share a directory.
    pub fn same_region(&self, other: &Boundary) -> bool {
        self.absolute_dir == other.absolute_dir
    }
}
