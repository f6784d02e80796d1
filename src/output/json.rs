use crate::model::{LintResult, Severity, Verdict};
use crate::output::{OutputFormatter, relative_path};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

pub struct JsonOutput {
    pub min_severity: Severity,
    pub project_root: Option<PathBuf>,
}

impl JsonOutput {
    pub fn new(min_severity: Severity, project_root: Option<PathBuf>) -> Self {
        Self {
            min_severity,
            project_root,
        }
    }
}

#[derive(Serialize)]
struct JsonResult<'a> {
    project_name: &'a str,
    files_checked: usize,
    violation_count: usize,
    violations: Vec<JsonViolation<'a>>,
}

#[derive(Serialize)]
struct JsonViolation<'a> {
    path: String,
    line: usize,
    column: usize,
    rule: &'static str,
    severity: String,
    message: String,
    specifier: &'a str,
    verdict: &'a Verdict,
    fix: Option<&'a str>,
}

impl OutputFormatter for JsonOutput {
    fn format<W: Write>(&self, result: &LintResult, writer: &mut W) -> std::io::Result<()> {
        let min_severity = self.min_severity;
        let violations = result
            .reports
            .iter()
            .flat_map(|report| {
                let path = relative_path(&report.path, self.project_root.as_ref());
                report
                    .violations
                    .iter()
                    .filter(move |v| v.effective_severity() >= min_severity)
                    .map(move |v| JsonViolation {
                        path: path.clone(),
                        line: v.line,
                        column: v.column,
                        rule: v.verdict.message_id(),
                        severity: v.effective_severity().to_string(),
                        message: v.verdict.message(),
                        specifier: &v.specifier,
                        verdict: &v.verdict,
                        fix: v.fix.as_ref().map(|f| f.replacement.as_str()),
                    })
            })
            .collect::<Vec<_>>();

        let json_result = JsonResult {
            project_name: &result.project_name,
            files_checked: result.files_checked,
            violation_count: violations.len(),
            violations,
        };

        let json = serde_json::to_string_pretty(&json_result).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)
    }
}
