use crate::cli::{CheckArgs, OutputFormat};
use crate::config::Config;
use crate::fix::apply_fixes;
use crate::fs::{FileSystem, default_fs};
use crate::lint::lint_project;
use crate::model::LintResult;
use crate::output::{JsonOutput, MarkdownOutput, OutputFormatter};
use crate::parser::ParserRegistry;
use crate::style;
use std::io::{self, Write};
use std::path::Path;

use super::CommandContext;

pub fn cmd_check(args: CheckArgs) -> i32 {
    let ctx = match CommandContext::new(&args.path) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    run_check(&ctx.path, &ctx.config, &ctx.registry, &args, default_fs())
}

fn run_check(
    path: &Path,
    config: &Config,
    registry: &ParserRegistry,
    args: &CheckArgs,
    fs: &dyn FileSystem,
) -> i32 {
    // CLI flags can only loosen the configuration
    let mut effective_config = config.clone();
    if args.skip_policy {
        effective_config.enforce_boundaries = false;
    }
    if args.allow_unknown_boundaries {
        effective_config.allow_unknown_boundaries = true;
    }

    let mut result = lint_project(path, &effective_config, registry, fs);

    if args.fix {
        let fixed = fix_in_place(&mut result, fs);
        if fixed > 0 {
            style::success(&format!("Fixed {} import(s)", fixed));
        }
    }

    let mut output: Box<dyn Write> = match &args.output {
        Some(output_path) => match std::fs::File::create(output_path) {
            Ok(file) => Box::new(file),
            Err(e) => {
                style::error(&format!("Could not create output file: {}", e));
                return 1;
            }
        },
        None => Box::new(io::stdout()),
    };

    let mut buffer = Vec::new();
    let format_result = match args.format {
        OutputFormat::Markdown => {
            MarkdownOutput::new(args.min_severity, Some(path.to_path_buf())).format(&result, &mut buffer)
        }
        OutputFormat::Json => {
            JsonOutput::new(args.min_severity, Some(path.to_path_buf())).format(&result, &mut buffer)
        }
    };

    if let Err(e) = format_result {
        style::error(&format!("Failed to format output: {}", e));
        return 1;
    }

    let output_str = String::from_utf8_lossy(&buffer);
    let write_result = if args.output.is_none() && args.format == OutputFormat::Markdown {
        style::render_markdown(&output_str, &mut output)
    } else {
        write!(output, "{}", output_str)
    };

    if let Err(e) = write_result {
        style::error(&format!("Failed to write output: {}", e));
        return 1;
    }

    exit_code(&result)
}

/// Rewrite fixable imports on disk and drop them from `result`.
fn fix_in_place(result: &mut LintResult, fs: &dyn FileSystem) -> usize {
    let mut total = 0;

    for report in &mut result.reports {
        if report.fixable_count() == 0 {
            continue;
        }
        let source = match fs.read_to_string(&report.path) {
            Ok(source) => source,
            Err(e) => {
                style::warning(&format!("Could not read {}: {}", style::path(&report.path), e));
                continue;
            }
        };

        let (fixed, applied) = apply_fixes(&source, &report.violations);
        if applied == 0 {
            continue;
        }
        if let Err(e) = fs.write(&report.path, &fixed) {
            style::warning(&format!("Could not write {}: {}", style::path(&report.path), e));
            continue;
        }

        tracing::debug!(path = %report.path.display(), applied, "fixed imports");
        report.violations.retain(|v| v.fix.is_none());
        total += applied;
    }

    result.reports.retain(|r| !r.violations.is_empty());
    total
}

/// 1 when any remaining violation is an error, otherwise 0.
fn exit_code(result: &LintResult) -> i32 {
    if result.has_errors() { 1 } else { 0 }
}
