use crate::glob::SkipPatterns;
use crate::model::{Boundary, PathStyle, Severity};
use crate::resolve::path::{join, normalize};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = ".boundlint.toml";

pub const DEFAULT_EXTENSIONS: [&str; 6] = [".ts", ".tsx", ".js", ".jsx", ".mjs", ".cjs"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Boundary '{dir}' has no alias, but style = \"alias\" requires one on every boundary")]
    MissingAlias { dir: String },
    #[error("Boundary dir '{dir}' must stay inside root_dir")]
    BoundaryOutsideRoot { dir: String },
    #[error("file_extensions must list at least one extension")]
    NoExtensions,
    #[error("Invalid pattern in skip_boundary_rules_for: {0}")]
    InvalidGlob(#[from] globset::Error),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute working directory; root-relative specifiers resolve against it.
    pub cwd: String,
    /// Project root relative to `cwd`, also the prefix of root-relative imports.
    pub root_dir: String,
    pub style: PathStyle,
    pub barrel_file_name: String,
    /// Ordered; the first entry names synthesized barrel files.
    pub file_extensions: Vec<String>,
    pub boundaries: Vec<Boundary>,
    pub default_severity: Option<Severity>,
    pub allow_unknown_boundaries: bool,
    /// When false only path spelling is checked.
    pub enforce_boundaries: bool,
    /// Globs (relative to `cwd`) of files that skip the allow/deny check.
    pub skip_boundary_rules_for: SkipPatterns,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    root_dir: Option<String>,
    style: Option<PathStyle>,
    barrel_file_name: Option<String>,
    file_extensions: Option<Vec<String>>,
    default_severity: Option<Severity>,
    allow_unknown_boundaries: Option<bool>,
    enforce_boundaries: Option<bool>,
    skip_boundary_rules_for: Option<Vec<String>>,
    #[serde(default)]
    boundaries: Vec<RawBoundary>,
}

#[derive(Debug, Deserialize)]
struct RawBoundary {
    dir: String,
    alias: Option<String>,
    identifier: Option<String>,
    allow_imports_from: Option<Vec<String>>,
    deny_imports_from: Option<Vec<String>>,
    allow_type_imports_from: Option<Vec<String>>,
    severity: Option<Severity>,
}

impl Config {
    /// Defaults for a project whose working directory is `cwd`.
    pub fn new(cwd: &str, root_dir: &str) -> Self {
        Self {
            cwd: normalize(cwd),
            root_dir: root_dir.trim_end_matches('/').to_string(),
            style: PathStyle::Alias,
            barrel_file_name: "index".to_string(),
            file_extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            boundaries: Vec::new(),
            default_severity: None,
            allow_unknown_boundaries: false,
            enforce_boundaries: true,
            skip_boundary_rules_for: SkipPatterns::default(),
        }
    }

    /// Absolute project root.
    pub fn root_path(&self) -> String {
        join(&self.cwd, &self.root_dir)
    }

    /// Load `.boundlint.toml` from `project_path`, or defaults when absent.
    pub fn load(project_path: &Path) -> Result<Self, ConfigError> {
        let cwd = posix_string(project_path);
        let config_path = project_path.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            return Ok(Self::new(&cwd, "src"));
        }

        let content = std::fs::read_to_string(&config_path)?;
        Self::from_toml(&cwd, &content)
    }

    /// Parse and validate configuration text for the project at `cwd`.
    pub fn from_toml(cwd: &str, content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;

        let mut config = Self::new(cwd, raw.root_dir.as_deref().unwrap_or("src"));
        if let Some(style) = raw.style {
            config.style = style;
        }
        if let Some(name) = raw.barrel_file_name {
            config.barrel_file_name = name;
        }
        if let Some(exts) = raw.file_extensions {
            config.file_extensions = exts
                .into_iter()
                .map(|e| if e.starts_with('.') { e } else { format!(".{}", e) })
                .collect();
        }
        config.default_severity = raw.default_severity;
        config.allow_unknown_boundaries = raw.allow_unknown_boundaries.unwrap_or(false);
        config.enforce_boundaries = raw.enforce_boundaries.unwrap_or(true);
        config.skip_boundary_rules_for =
            SkipPatterns::new(raw.skip_boundary_rules_for.unwrap_or_default())?;

        let root = config.root_path();
        config.boundaries = raw
            .boundaries
            .into_iter()
            .map(|raw_b| Boundary {
                alias: raw_b.alias,
                explicit_identifier: raw_b.identifier,
                allow_imports_from: raw_b.allow_imports_from,
                deny_imports_from: raw_b.deny_imports_from,
                allow_type_imports_from: raw_b.allow_type_imports_from,
                severity: raw_b.severity,
                ..Boundary::new(&raw_b.dir, &root)
            })
            .collect();

        config.validate()?;
        Ok(config)
    }

    /// Checks made once per run rather than per import.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file_extensions.is_empty() {
            return Err(ConfigError::NoExtensions);
        }

        let root = self.root_path();
        for boundary in &self.boundaries {
            if boundary.dir.is_empty()
                || !crate::resolve::path::is_within(&root, &boundary.absolute_dir)
            {
                return Err(ConfigError::BoundaryOutsideRoot {
                    dir: boundary.dir.clone(),
                });
            }
            if self.style == PathStyle::Alias && boundary.alias.is_none() {
                return Err(ConfigError::MissingAlias {
                    dir: boundary.dir.clone(),
                });
            }
        }
        Ok(())
    }

    /// Whether the allow/deny step is skipped for `file_path`.
    pub fn skips_boundary_rules(&self, file_path: &str) -> bool {
        if !self.enforce_boundaries {
            return true;
        }
        let relative = crate::resolve::path::relative_segments(&self.cwd, file_path)
            .map(|segments| segments.join("/"))
            .unwrap_or_else(|| file_path.to_string());
        self.skip_boundary_rules_for.is_match(&relative)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(".", "src")
    }
}

/// Path as a `/`-separated string.
pub fn posix_string(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

pub fn generate_config_template() -> String {
    r#"# boundlint configuration
# Boundaries are directories under root_dir with their own import policy.

root_dir = "src"

# "alias": cross-boundary imports use the boundary alias (@domain)
# "absolute": cross-boundary imports use the root-relative path (src/domain)
style = "alias"

barrel_file_name = "index"
file_extensions = [".ts", ".tsx", ".js", ".jsx", ".mjs", ".cjs"]

# default_severity = "error"
allow_unknown_boundaries = false

# Files matching these globs only get path-spelling checks
skip_boundary_rules_for = ["**/*.test.ts", "**/*.spec.ts"]

[[boundaries]]
dir = "domain"
alias = "@domain"
# An empty allow list forbids every other boundary
allow_imports_from = []

[[boundaries]]
dir = "application"
alias = "@application"
allow_imports_from = ["@domain"]
# Type-only imports that would otherwise be denied
# allow_type_imports_from = ["@infrastructure"]

[[boundaries]]
dir = "infrastructure"
alias = "@infrastructure"
deny_imports_from = ["@application"]
severity = "warn"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_and_validates() {
        let config = Config::from_toml("/p", &generate_config_template()).unwrap();
        assert_eq!(config.boundaries.len(), 3);
        assert_eq!(config.boundaries[0].absolute_dir, "/p/src/domain");
        assert_eq!(config.boundaries[0].allow_imports_from, Some(vec![]));
        assert_eq!(config.boundaries[2].severity, Some(Severity::Warn));
        assert!(config.skips_boundary_rules("/p/src/domain/army.test.ts"));
        assert!(!config.skips_boundary_rules("/p/src/domain/army.ts"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_toml("/p", "").unwrap();
        assert_eq!(config.root_dir, "src");
        assert_eq!(config.style, PathStyle::Alias);
        assert_eq!(config.barrel_file_name, "index");
        assert_eq!(config.file_extensions[0], ".ts");
        assert!(config.enforce_boundaries);
        assert!(config.boundaries.is_empty());
    }

    #[test]
    fn test_alias_style_requires_alias() {
        let toml = r#"
            [[boundaries]]
            dir = "domain"
        "#;
        let err = Config::from_toml("/p", toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingAlias { ref dir } if dir == "domain"));

        let absolute = format!("style = \"absolute\"\n{}", toml);
        let config = Config::from_toml("/p", &absolute).unwrap();
        assert_eq!(config.boundaries[0].identifier(), "domain");
    }

    #[test]
    fn test_boundary_cannot_escape_root() {
        let toml = r#"
            style = "absolute"
            [[boundaries]]
            dir = "../elsewhere"
        "#;
        let err = Config::from_toml("/p", toml).unwrap_err();
        assert!(matches!(err, ConfigError::BoundaryOutsideRoot { .. }));
    }

    #[test]
    fn test_extensions_get_leading_dot() {
        let config = Config::from_toml("/p", "file_extensions = [\"ts\", \".vue\"]").unwrap();
        assert_eq!(config.file_extensions, vec![".ts", ".vue"]);

        let err = Config::from_toml("/p", "file_extensions = []").unwrap_err();
        assert!(matches!(err, ConfigError::NoExtensions));
    }

    #[test]
    fn test_bad_skip_pattern_is_a_config_error() {
        let err = Config::from_toml("/p", "skip_boundary_rules_for = [\"src/[oops\"]").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidGlob(_)));
    }

    #[test]
    fn test_disabled_enforcement_skips_everything() {
        let config = Config::from_toml("/p", "enforce_boundaries = false").unwrap();
        assert!(config.skips_boundary_rules("/p/src/domain/army.ts"));
    }
}
