pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod fix;
pub mod fs;
pub mod glob;
pub mod lint;
pub mod model;
pub mod output;
pub mod parser;
pub mod resolve;
pub mod rules;
pub mod style;

pub use api::{BoundlintError, CheckOptions, check, check_source};
pub use cli::Cli;
pub use commands::{cmd_check, cmd_init};
pub use config::{Config, ConfigError};
pub use model::{Boundary, LintResult, PathStyle, Severity, Verdict, Violation};
pub use rules::{FileContext, check_import};
