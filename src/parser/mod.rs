mod common;
mod typescript;

use crate::model::ImportStatement;
use std::path::Path;
use thiserror::Error;

pub use common::{has_type_keyword, string_contents};
pub use typescript::TypeScriptParser;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse: {0}")]
    Parse(String),
    #[error("Unsupported language for file: {0}")]
    UnsupportedLanguage(String),
}

/// Extracts import statements from one source file.
pub trait ImportParser: Send + Sync {
    fn extensions(&self) -> &[&str];
    fn parse_imports(&self, path: &Path, source: &str) -> Result<Vec<ImportStatement>, ParseError>;
}

pub struct ParserRegistry {
    parsers: Vec<Box<dyn ImportParser>>,
}

impl ParserRegistry {
    pub fn new() -> Self {
        Self {
            parsers: vec![Box::new(TypeScriptParser::new())],
        }
    }

    pub fn find_parser(&self, path: &Path) -> Option<&dyn ImportParser> {
        let ext = path.extension()?.to_str()?;
        self.parsers
            .iter()
            .find(|p| p.extensions().contains(&ext))
            .map(|p| p.as_ref())
    }

    pub fn parse(&self, path: &Path, source: &str) -> Result<Vec<ImportStatement>, ParseError> {
        let parser = self
            .find_parser(path)
            .ok_or_else(|| ParseError::UnsupportedLanguage(path.display().to_string()))?;
        parser.parse_imports(path, source)
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_picks_by_extension() {
        let registry = ParserRegistry::new();
        assert!(registry.find_parser(Path::new("a/b.ts")).is_some());
        assert!(registry.find_parser(Path::new("a/b.mjs")).is_some());
        assert!(registry.find_parser(Path::new("a/b.rs")).is_none());
        assert!(registry.find_parser(Path::new("Makefile")).is_none());

        let err = registry.parse(Path::new("a.py"), "import os").unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedLanguage(_)));
    }
}
