//! Per-import decision: external short-circuit, alias-subpath shortcut,
//! boundary policy, then canonical spelling.

pub mod canonical;
pub mod policy;

use crate::config::Config;
use crate::model::{Boundary, Fix, ImportStatement, PathStyle, Severity, Verdict, Violation};
use crate::resolve::path::{dirname, normalize};
use crate::resolve::{
    Resolution, alias_subpath_owner, physical_boundary_of, policy_boundary_of, resolve_specifier,
};

/// What is known about the importing file, computed once per file.
///
/// Build one for each file and drop it before moving on to the next.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    pub config: &'a Config,
    pub file_path: String,
    pub file_dir: String,
    pub physical: Option<&'a Boundary>,
    pub policy: Option<&'a Boundary>,
    pub check_policy: bool,
    pub severity: Option<Severity>,
}

impl<'a> FileContext<'a> {
    /// `file_path` is absolute and posix-style.
    pub fn new(config: &'a Config, file_path: &str) -> Self {
        let file_path = normalize(file_path);
        let physical = physical_boundary_of(&file_path, &config.boundaries);
        let policy = policy_boundary_of(&file_path, &config.boundaries);

        Self {
            config,
            file_dir: dirname(&file_path),
            check_policy: !config.skips_boundary_rules(&file_path),
            severity: physical.and_then(|b| b.severity).or(config.default_severity),
            physical,
            policy,
            file_path,
        }
    }

    /// Skip the allow/deny step for this file while keeping path checks.
    pub fn skip_policy(mut self) -> Self {
        self.check_policy = false;
        self
    }

    fn violation(&self, verdict: Verdict, statement: &ImportStatement) -> Violation {
        let fix = match &verdict {
            Verdict::IncorrectPath { expected, .. } => Some(Fix {
                span: statement.span.clone(),
                replacement: expected.clone(),
            }),
            _ => None,
        };
        Violation {
            verdict,
            severity: self.severity,
            fix,
            specifier: statement.specifier.clone(),
            line: statement.line,
            column: statement.column,
        }
    }
}

/// Check one import statement. `None` means nothing to report.
pub fn check_import(ctx: &FileContext<'_>, statement: &ImportStatement) -> Option<Violation> {
    let config = ctx.config;
    let specifier = statement.specifier.as_str();

    let target = match resolve_specifier(specifier, &ctx.file_dir, config) {
        Resolution::External => {
            tracing::trace!(specifier, "external package");
            return None;
        }
        Resolution::Target(target) => target,
    };

    if config.style == PathStyle::Alias {
        if let Some(owner) = alias_subpath_owner(specifier, &config.boundaries) {
            let same = ctx.physical.is_some_and(|b| b.same_region(owner));
            if let (false, Some(alias)) = (same, owner.alias.as_ref()) {
                tracing::debug!(specifier, "alias with subpath across boundaries");
                let verdict = Verdict::IncorrectPath {
                    expected: alias.clone(),
                    actual: specifier.to_string(),
                };
                return Some(ctx.violation(verdict, statement));
            }
        }
    }

    let target_boundary = physical_boundary_of(&target.absolute_path, &config.boundaries);

    if ctx.check_policy {
        // A target without policy of its own is still identified by its boundary.
        let target_policy =
            policy_boundary_of(&target.absolute_path, &config.boundaries).or(target_boundary);
        if let (Some(from), Some(to)) = (ctx.policy, target_policy) {
            if let Some(verdict) = policy::evaluate(from, to, statement.is_type_only) {
                tracing::debug!(
                    specifier,
                    from = from.identifier(),
                    to = to.identifier(),
                    "boundary policy denied import"
                );
                return Some(ctx.violation(verdict, statement));
            }
        }
    }

    let verdict = canonical::check_path(
        specifier,
        &ctx.file_dir,
        &target,
        ctx.physical,
        target_boundary,
        config,
    )?;

    if config.allow_unknown_boundaries && matches!(verdict, Verdict::UnknownBoundary { .. }) {
        return None;
    }

    tracing::debug!(specifier, rule = verdict.message_id(), "import flagged");
    Some(ctx.violation(verdict, statement))
}

/// Check every statement of one file.
pub fn check_file(ctx: &FileContext<'_>, statements: &[ImportStatement]) -> Vec<Violation> {
    statements
        .iter()
        .filter_map(|statement| check_import(ctx, statement))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glob::SkipPatterns;

    fn config() -> Config {
        let mut config = Config::new("/p", "src");
        let root = config.root_path();
        config.boundaries = vec![
            Boundary::new("application", &root)
                .with_alias("@application")
                .allow_imports_from(["@domain"]),
            Boundary::new("domain", &root).with_alias("@domain"),
            Boundary::new("infrastructure", &root).with_alias("@infrastructure"),
        ];
        config
    }

    fn run(config: &Config, file: &str, specifier: &str) -> Option<Verdict> {
        let ctx = FileContext::new(config, file);
        check_import(&ctx, &ImportStatement::new(specifier)).map(|v| v.verdict)
    }

    #[test]
    fn test_cross_boundary_bare_alias_is_allowed() {
        assert_eq!(run(&config(), "/p/src/application/x.ts", "@domain"), None);
    }

    #[test]
    fn test_alias_subpath_flagged_with_fix() {
        let config = config();
        let ctx = FileContext::new(&config, "/p/src/application/x.ts");
        let violation = check_import(&ctx, &ImportStatement::new("@domain/entities")).unwrap();
        assert_eq!(
            violation.verdict,
            Verdict::IncorrectPath {
                expected: "@domain".to_string(),
                actual: "@domain/entities".to_string(),
            }
        );
        let fix = violation.fix.unwrap();
        assert_eq!(fix.replacement, "@domain");
        assert_eq!(fix.span, 0.."@domain/entities".len());
    }

    #[test]
    fn test_alias_subpath_wins_over_policy() {
        // infrastructure is not allowed, but the spelling is reported first
        assert_eq!(
            run(&config(), "/p/src/application/x.ts", "@infrastructure/db"),
            Some(Verdict::IncorrectPath {
                expected: "@infrastructure".to_string(),
                actual: "@infrastructure/db".to_string(),
            })
        );
    }

    #[test]
    fn test_policy_violation() {
        assert_eq!(
            run(&config(), "/p/src/application/x.ts", "@infrastructure"),
            Some(Verdict::BoundaryViolation {
                from: "@application".to_string(),
                to: "@infrastructure".to_string(),
                reason: "'@infrastructure' is not in the allow list".to_string(),
            })
        );
    }

    #[test]
    fn test_skip_policy_still_checks_spelling() {
        let config = config();
        let ctx = FileContext::new(&config, "/p/src/application/x.ts").skip_policy();
        assert!(check_import(&ctx, &ImportStatement::new("@infrastructure")).is_none());
        assert!(check_import(&ctx, &ImportStatement::new("../infrastructure")).is_some());
    }

    #[test]
    fn test_skip_patterns_from_config() {
        let mut config = config();
        config.skip_boundary_rules_for = SkipPatterns::new(["**/*.test.ts"]).unwrap();
        assert_eq!(run(&config, "/p/src/application/x.test.ts", "@infrastructure"), None);
    }

    #[test]
    fn test_type_only_override() {
        let mut config = config();
        config.boundaries[0] = config.boundaries[0]
            .clone()
            .allow_type_imports_from(["@infrastructure"]);
        let ctx = FileContext::new(&config, "/p/src/application/x.ts");
        let statement = ImportStatement::new("@infrastructure").type_only();
        assert!(check_import(&ctx, &statement).is_none());
    }

    #[test]
    fn test_external_packages_skip_everything() {
        assert_eq!(run(&config(), "/p/src/application/x.ts", "react"), None);
        assert_eq!(run(&config(), "/p/src/application/x.ts", "@tanstack/query"), None);
    }

    #[test]
    fn test_unknown_boundary_can_be_suppressed() {
        let mut config = config();
        assert!(matches!(
            run(&config, "/p/src/application/x.ts", "../shared"),
            Some(Verdict::UnknownBoundary { .. })
        ));
        config.allow_unknown_boundaries = true;
        assert_eq!(run(&config, "/p/src/application/x.ts", "../shared"), None);
    }

    #[test]
    fn test_severity_fallback_chain() {
        let mut config = config();
        let ctx = FileContext::new(&config, "/p/src/domain/x.ts");
        assert_eq!(ctx.severity, None);

        config.default_severity = Some(Severity::Error);
        let ctx = FileContext::new(&config, "/p/src/domain/x.ts");
        assert_eq!(ctx.severity, Some(Severity::Error));

        config.boundaries[1].severity = Some(Severity::Warn);
        let ctx = FileContext::new(&config, "/p/src/domain/x.ts");
        let violation = check_import(&ctx, &ImportStatement::new("../application")).unwrap();
        assert_eq!(violation.severity, Some(Severity::Warn));
    }

    #[test]
    fn test_unspecified_child_inherits_parent_policy() {
        let mut config = Config::new("/p", "src");
        let root = config.root_path();
        config.boundaries = vec![
            Boundary::new("domain", &root)
                .with_alias("@domain")
                .allow_imports_from(Vec::<String>::new()),
            Boundary::new("domain/entities", &root).with_alias("@entities"),
            Boundary::new("application", &root).with_alias("@application"),
        ];

        // policy comes from @domain ...
        assert!(matches!(
            run(&config, "/p/src/domain/entities/army.ts", "@application"),
            Some(Verdict::BoundaryViolation { ref from, .. }) if from == "@domain"
        ));
        // ... while spelling treats @entities as its own boundary
        assert_eq!(run(&config, "/p/src/domain/entities/army.ts", "@domain"), None);
        assert_eq!(
            run(&config, "/p/src/domain/rules.ts", "./entities"),
            Some(Verdict::IncorrectPath {
                expected: "@entities".to_string(),
                actual: "./entities".to_string(),
            })
        );
    }

    #[test]
    fn test_file_outside_boundaries() {
        let config = config();
        assert_eq!(run(&config, "/p/src/main.ts", "@domain"), None);
        assert_eq!(
            run(&config, "/p/src/main.ts", "./domain"),
            Some(Verdict::IncorrectPath {
                expected: "@domain".to_string(),
                actual: "./domain".to_string(),
            })
        );
    }
}
