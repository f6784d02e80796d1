use crate::model::{Fix, Violation};

/// Apply every fix carried by `violations` to `source`.
///
/// Spans are applied from the end of the file backwards so earlier offsets
/// stay valid. A fix overlapping one already applied, or pointing outside the
/// source, is skipped. Returns the new text and the number of fixes applied.
pub fn apply_fixes(source: &str, violations: &[Violation]) -> (String, usize) {
    let mut fixes: Vec<&Fix> = violations.iter().filter_map(|v| v.fix.as_ref()).collect();
    fixes.sort_by(|a, b| b.span.start.cmp(&a.span.start));

    let mut output = source.to_string();
    let mut applied = 0;
    let mut floor = source.len();

    for fix in fixes {
        let span = &fix.span;
        if span.start > span.end || span.end > floor || output.get(span.clone()).is_none() {
            tracing::debug!(?span, "skipping overlapping or invalid fix");
            continue;
        }
        output.replace_range(span.clone(), &fix.replacement);
        floor = span.start;
        applied += 1;
    }

    (output, applied)
}
