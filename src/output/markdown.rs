use crate::model::{LintResult, Severity, Violation};
use crate::output::{OutputFormatter, relative_path};
use std::io::Write;
use std::path::PathBuf;

pub struct MarkdownOutput {
    pub min_severity: Severity,
    pub project_root: Option<PathBuf>,
}

impl MarkdownOutput {
    pub fn new(min_severity: Severity, project_root: Option<PathBuf>) -> Self {
        Self {
            min_severity,
            project_root,
        }
    }

    fn visible<'a>(&self, violations: &'a [Violation]) -> Vec<&'a Violation> {
        violations
            .iter()
            .filter(|v| v.effective_severity() >= self.min_severity)
            .collect()
    }
}

impl OutputFormatter for MarkdownOutput {
    fn format<W: Write>(&self, result: &LintResult, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "# Import Boundaries: {}\n", result.project_name)?;
        writeln!(writer, "Checked {} files.\n", result.files_checked)?;

        let files: Vec<_> = result
            .reports
            .iter()
            .map(|r| (r, self.visible(&r.violations)))
            .filter(|(_, shown)| !shown.is_empty())
            .collect();

        if files.is_empty() {
            writeln!(writer, "## No Issues Found\n")?;
            writeln!(writer, "Every import respects its boundary rules.")?;
            return Ok(());
        }

        let total: usize = files.iter().map(|(_, shown)| shown.len()).sum();
        let fixable: usize = files
            .iter()
            .flat_map(|(_, shown)| shown.iter())
            .filter(|v| v.fix.is_some())
            .count();
        writeln!(
            writer,
            "## {} Issues Found ({} auto-fixable)\n",
            total, fixable
        )?;

        for (report, shown) in files {
            writeln!(
                writer,
                "### `{}`\n",
                relative_path(&report.path, self.project_root.as_ref())
            )?;
            for violation in shown {
                let marker = match violation.effective_severity() {
                    Severity::Error => "🔴",
                    Severity::Warn => "🟡",
                };
                writeln!(
                    writer,
                    "- {} `{}:{}` {} *({})*",
                    marker,
                    violation.line,
                    violation.column,
                    violation.verdict.message(),
                    violation.verdict.message_id()
                )?;
                if let Some(ref fix) = violation.fix {
                    writeln!(writer, "  → fix: `{}`", fix.replacement)?;
                }
            }
            writeln!(writer)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FileReport, Fix, Verdict};

    fn result() -> LintResult {
        LintResult {
            project_name: "shop".to_string(),
            files_checked: 3,
            reports: vec![FileReport {
                path: PathBuf::from("/p/src/application/x.ts"),
                violations: vec![
                    Violation {
                        verdict: Verdict::IncorrectPath {
                            expected: "@domain".to_string(),
                            actual: "@domain/a".to_string(),
                        },
                        severity: Some(Severity::Warn),
                        fix: Some(Fix {
                            span: 15..24,
                            replacement: "@domain".to_string(),
                        }),
                        specifier: "@domain/a".to_string(),
                        line: 2,
                        column: 16,
                    },
                    Violation {
                        verdict: Verdict::AncestorBarrel {
                            boundary_identifier: "@application".to_string(),
                        },
                        severity: None,
                        fix: None,
                        specifier: "@application".to_string(),
                        line: 3,
                        column: 16,
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_lists_violations_per_file() {
        let mut out = Vec::new();
        MarkdownOutput::new(Severity::Warn, Some(PathBuf::from("/p")))
            .format(&result(), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("## 2 Issues Found (1 auto-fixable)"));
        assert!(text.contains("### `src/application/x.ts`"));
        assert!(text.contains("`2:16` Expected '@domain' but got '@domain/a'."));
        assert!(text.contains("→ fix: `@domain`"));
        assert!(text.contains("*(ancestorBarrelImport)*"));
    }

    #[test]
    fn test_min_severity_filters() {
        let mut out = Vec::new();
        MarkdownOutput::new(Severity::Error, None)
            .format(&result(), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("## 1 Issues Found (0 auto-fixable)"));
        assert!(!text.contains("incorrectImportPath"));
    }
}
