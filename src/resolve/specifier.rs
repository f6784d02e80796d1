use crate::config::Config;
use crate::model::Boundary;
use crate::resolve::boundary::alias_owner;
use crate::resolve::path::{dirname, has_extension, join, last_segment, normalize};
use serde::Serialize;

/// How a specifier was recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpecifierKind {
    /// `@domain`, `@domain/entities`
    Alias,
    /// `./helper`, `../shared`
    Relative,
    /// `src/domain/entities`
    RootRelative,
    /// `domain/entities` or a trailing slice such as `entities/army`
    Bare,
}

/// Absolute file an import points at, and the directory holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTarget {
    pub kind: SpecifierKind,
    pub absolute_path: String,
    pub directory: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A package from outside the project; nothing else is checked.
    External,
    Target(ResolvedTarget),
}

impl Resolution {
    pub fn target(&self) -> Option<&ResolvedTarget> {
        match self {
            Resolution::External => None,
            Resolution::Target(t) => Some(t),
        }
    }
}

/// Classify `specifier` as written in a file living in `file_dir` and work out
/// which file it denotes. Nothing touches the disk: an extensionless subpath
/// is always read as a directory and mapped to its barrel file.
pub fn resolve_specifier(specifier: &str, file_dir: &str, config: &Config) -> Resolution {
    let Some((kind, base, subpath)) = classify(specifier, file_dir, config) else {
        return Resolution::External;
    };
    Resolution::Target(target_for(kind, &base, subpath, config))
}

fn classify<'s>(
    specifier: &'s str,
    file_dir: &str,
    config: &Config,
) -> Option<(SpecifierKind, String, &'s str)> {
    if specifier.starts_with('@') {
        if let Some((boundary, subpath)) = alias_owner(specifier, &config.boundaries) {
            return Some((SpecifierKind::Alias, boundary.absolute_dir.clone(), subpath));
        }
    }

    if specifier.starts_with('.') {
        return Some((SpecifierKind::Relative, file_dir.to_string(), specifier));
    }

    if is_root_relative(specifier, &config.root_dir) {
        return Some((SpecifierKind::RootRelative, config.cwd.clone(), specifier));
    }

    let (boundary, subpath) = match_bare(specifier, &config.boundaries)?;
    Some((SpecifierKind::Bare, boundary.absolute_dir.clone(), subpath))
}

fn is_root_relative(specifier: &str, root_dir: &str) -> bool {
    let root = root_dir.trim_end_matches('/');
    if root.is_empty() || root == "." {
        return false;
    }
    match specifier.strip_prefix(root) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Match a bare specifier against boundary directories.
///
/// Exact and prefix matches on the full `dir` are tried first; only when none
/// hits are trailing slices of `dir` tried (`entities/army` against
/// `domain/entities`). Within each pass the longest matched text wins.
fn match_bare<'a, 's>(specifier: &'s str, boundaries: &'a [Boundary]) -> Option<(&'a Boundary, &'s str)> {
    let full = boundaries
        .iter()
        .filter_map(|b| strip_dir(specifier, &b.dir).map(|sub| (b, sub, b.dir.len())));
    if let Some(found) = longest(full) {
        return Some(found);
    }

    let sliced = boundaries.iter().flat_map(|b| {
        let segments: Vec<&str> = b.dir.split('/').filter(|s| !s.is_empty()).collect();
        (1..segments.len())
            .filter_map(|start| {
                let slice = segments[start..].join("/");
                strip_dir(specifier, &slice).map(|sub| (b, sub, slice.len()))
            })
            .collect::<Vec<_>>()
    });
    longest(sliced)
}

fn strip_dir<'s>(specifier: &'s str, dir: &str) -> Option<&'s str> {
    if dir.is_empty() {
        return None;
    }
    let rest = specifier.strip_prefix(dir)?;
    if rest.is_empty() {
        Some("")
    } else {
        rest.strip_prefix('/')
    }
}

fn longest<'a, 's>(
    matches: impl Iterator<Item = (&'a Boundary, &'s str, usize)>,
) -> Option<(&'a Boundary, &'s str)> {
    let mut best: Option<(&Boundary, &str, usize)> = None;
    for candidate in matches {
        if best.is_none_or(|(_, _, len)| candidate.2 > len) {
            best = Some(candidate);
        }
    }
    best.map(|(b, sub, _)| (b, sub))
}

fn target_for(kind: SpecifierKind, base: &str, subpath: &str, config: &Config) -> ResolvedTarget {
    let first_ext = config
        .file_extensions
        .first()
        .map(String::as_str)
        .unwrap_or_default();
    let last = last_segment(subpath);
    let names_directory = subpath.is_empty() || subpath.ends_with('/');

    if !names_directory && has_extension(last, &config.file_extensions) {
        let absolute_path = join(base, subpath);
        let directory = dirname(&absolute_path);
        return ResolvedTarget {
            kind,
            absolute_path,
            directory,
        };
    }

    // `./index` means the barrel file itself, not a directory named `index`.
    if !names_directory && last == config.barrel_file_name {
        let absolute_path = format!("{}{}", join(base, subpath), first_ext);
        let directory = dirname(&absolute_path);
        return ResolvedTarget {
            kind,
            absolute_path,
            directory,
        };
    }

    let directory = if subpath.is_empty() {
        normalize(base)
    } else {
        join(base, subpath)
    };
    let absolute_path = format!(
        "{}/{}{}",
        directory.trim_end_matches('/'),
        config.barrel_file_name,
        first_ext
    );
    ResolvedTarget {
        kind,
        absolute_path,
        directory,
    }
}
