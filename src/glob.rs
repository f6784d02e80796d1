//! Compiled `skip_boundary_rules_for` patterns.
//!
//! `**` spans any number of whole segments (including none), `*` and `?`
//! stay inside one segment. A pattern without a slash matches the file name
//! anywhere, like a `.gitignore` entry.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

#[derive(Debug, Clone)]
pub struct SkipPatterns {
    patterns: Vec<String>,
    set: GlobSet,
}

impl SkipPatterns {
    pub fn new<I, S>(patterns: I) -> Result<Self, globset::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        let mut builder = GlobSetBuilder::new();
        for pattern in &patterns {
            let pattern = pattern.replace('\\', "/");
            let anchored = if pattern.contains('/') {
                pattern
            } else {
                format!("**/{}", pattern)
            };
            builder.add(GlobBuilder::new(&anchored).literal_separator(true).build()?);
        }
        Ok(Self {
            patterns,
            set: builder.build()?,
        })
    }

    /// Patterns as written in the configuration.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// `path` is `/`-separated and relative to the project directory.
    pub fn is_match(&self, path: &str) -> bool {
        self.set.is_match(path)
    }
}

impl Default for SkipPatterns {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            set: GlobSet::empty(),
        }
    }
}
