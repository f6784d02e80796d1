//! Integration tests for the boundlint library API.

use boundlint::{BoundlintError, CheckOptions, ConfigError, Verdict, check};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CONFIG: &str = r#"
root_dir = "src"
style = "alias"

[[boundaries]]
dir = "application"
alias = "@application"
allow_imports_from = ["@domain"]

[[boundaries]]
dir = "domain"
alias = "@domain"
allow_imports_from = []

[[boundaries]]
dir = "infrastructure"
alias = "@infrastructure"
"#;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn project(config: &str) -> TempDir {
    let tmp = TempDir::new().expect("create temp dir");
    write(tmp.path(), ".boundlint.toml", config);
    tmp
}

fn rules(result: &boundlint::LintResult) -> Vec<(String, &'static str)> {
    result
        .reports
        .iter()
        .flat_map(|r| {
            let name = r.path.file_name().unwrap().to_string_lossy().to_string();
            r.violations
                .iter()
                .map(move |v| (name.clone(), v.verdict.message_id()))
        })
        .collect()
}

#[test]
fn test_clean_project_has_no_reports() {
    let tmp = project(CONFIG);
    write(tmp.path(), "src/domain/index.ts", "export * from './order';\n");
    write(tmp.path(), "src/domain/order/index.ts", "export class Order {}\n");
    write(
        tmp.path(),
        "src/application/place-order.ts",
        "import { Order } from '@domain';\nimport { z } from 'zod';\n",
    );

    let result = check(tmp.path(), CheckOptions::default()).unwrap();
    assert_eq!(result.files_checked, 3);
    assert!(result.reports.is_empty(), "{:?}", result.reports);
    assert!(!result.has_errors());
}

#[test]
fn test_reports_every_rule() {
    let tmp = project(CONFIG);
    write(
        tmp.path(),
        "src/application/use-cases/subdir/create.ts",
        "import { a } from '@domain/entities';\n\
         import { b } from '../../topLevel';\n\
         import { c } from '@application';\n\
         import { d } from '@infrastructure';\n\
         import { e } from '../../../shared/util';\n",
    );

    let result = check(tmp.path(), CheckOptions::default()).unwrap();
    let violations = &result.reports[0].violations;
    let ids: Vec<_> = violations.iter().map(|v| v.verdict.message_id()).collect();
    assert_eq!(
        ids,
        vec![
            "incorrectImportPath",
            "incorrectImportPath",
            "ancestorBarrelImport",
            "boundaryViolation",
            "unknownBoundaryImport",
        ]
    );
    assert_eq!(
        violations[1].verdict,
        Verdict::IncorrectPath {
            expected: "@application/topLevel".to_string(),
            actual: "../../topLevel".to_string(),
        }
    );
    assert!(result.has_errors());
}

#[test]
fn test_options_relax_checks() {
    let tmp = project(CONFIG);
    write(
        tmp.path(),
        "src/application/x.ts",
        "import { d } from '@infrastructure';\nimport { e } from '../shared';\n",
    );

    let strict = check(tmp.path(), CheckOptions::default()).unwrap();
    assert_eq!(strict.violation_count(), 2);

    let relaxed = check(
        tmp.path(),
        CheckOptions {
            skip_policy: true,
            allow_unknown_boundaries: true,
        },
    )
    .unwrap();
    assert_eq!(relaxed.violation_count(), 0);
}

#[test]
fn test_skip_patterns_only_drop_policy() {
    let config = format!("skip_boundary_rules_for = [\"**/*.test.ts\"]\n{}", CONFIG);
    let tmp = project(&config);
    write(
        tmp.path(),
        "src/application/x.test.ts",
        "import { d } from '@infrastructure';\nimport { e } from '@infrastructure/db';\n",
    );
    write(tmp.path(), "src/application/notes.md", "import x from '@infrastructure';\n");

    let result = check(tmp.path(), CheckOptions::default()).unwrap();
    assert_eq!(result.files_checked, 1);
    assert_eq!(
        rules(&result),
        vec![("x.test.ts".to_string(), "incorrectImportPath")]
    );
}

#[test]
fn test_gitignore_applies_without_a_git_checkout() {
    let tmp = project(CONFIG);
    write(tmp.path(), ".gitignore", "node_modules\ngenerated/\n");
    write(tmp.path(), "src/generated/api.ts", "import x from '../../lib';\n");
    write(tmp.path(), "src/node_modules/pkg/index.js", "import x from './lib';\n");
    write(tmp.path(), "src/domain/order.ts", "export class Order {}\n");
    assert!(!tmp.path().join(".git").exists());

    let result = check(tmp.path(), CheckOptions::default()).unwrap();
    assert_eq!(result.files_checked, 1);
    assert!(result.reports.is_empty(), "{:?}", result.reports);
    assert!(!result.has_errors());
}

#[test]
fn test_files_outside_root_dir_are_not_checked() {
    let tmp = project(CONFIG);
    fs::create_dir_all(tmp.path().join(".git")).unwrap();
    write(
        tmp.path(),
        "vite.config.ts",
        "import { plugin } from './build/plugin';\n",
    );
    write(tmp.path(), "scripts/seed.ts", "import { Order } from '../src/domain';\n");
    write(tmp.path(), "node_modules/pkg/index.js", "import x from './lib';\n");
    write(tmp.path(), "src/domain/a.ts", "export const a = 1;\n");

    let result = check(tmp.path(), CheckOptions::default()).unwrap();
    assert_eq!(result.files_checked, 1);
    assert!(result.reports.is_empty(), "{:?}", result.reports);
    assert!(!result.has_errors());
}

#[test]
fn test_invalid_config_is_an_error() {
    let tmp = project("[[boundaries]]\ndir = \"domain\"\n");
    let err = check(tmp.path(), CheckOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        BoundlintError::Config(ConfigError::MissingAlias { .. })
    ));
}

#[test]
fn test_missing_path() {
    let err = check(Path::new("/definitely/not/here"), CheckOptions::default()).unwrap_err();
    assert!(matches!(err, BoundlintError::PathNotFound(_)));
}
