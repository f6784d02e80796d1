mod boundary;
mod import;
mod verdict;

pub use boundary::{Boundary, PathStyle};
pub use import::{FileReport, ImportStatement, LintResult};
pub use verdict::{Fix, Severity, Verdict, Violation};
