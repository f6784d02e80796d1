mod check;
mod init;

pub use check::cmd_check;
pub use init::cmd_init;

use crate::config::{CONFIG_FILE_NAME, Config};
use crate::parser::ParserRegistry;
use crate::style;
use std::path::{Path, PathBuf};

/// Exit code for a configuration that cannot be used at all.
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Shared context for command execution, reducing boilerplate across commands.
pub struct CommandContext {
    pub path: PathBuf,
    pub config: Config,
    pub registry: ParserRegistry,
}

impl CommandContext {
    /// Resolve the project path and load its configuration.
    /// Returns Err(exit_code) if setup fails.
    pub fn new(path: &Path) -> Result<Self, i32> {
        let resolved_path = match path.canonicalize() {
            Ok(p) => p,
            Err(_) => {
                style::error(&format!("Could not resolve path: {}", style::path(path)));
                return Err(1);
            }
        };

        // Configuration problems are fatal once, not per file.
        let config = match Config::load(&resolved_path) {
            Ok(config) => config,
            Err(e) => {
                style::error(&format!("Invalid {}: {}", CONFIG_FILE_NAME, e));
                return Err(EXIT_CONFIG_ERROR);
            }
        };

        if config.boundaries.is_empty() {
            style::warning("No boundaries configured; only external imports can be told apart.");
            style::hint("Run `boundlint init` to create a starter configuration.");
        }

        Ok(Self {
            path: resolved_path,
            config,
            registry: ParserRegistry::new(),
        })
    }
}
