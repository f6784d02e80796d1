//! The one correct spelling of an import.
//!
//! Cross-boundary imports go through the target boundary's root. Inside a
//! boundary an import names the first directory where the target's path
//! leaves the importer's: `./x` below the importer, `../x` one level up,
//! and the boundary root form (`@app/x`) for anything at the top level or
//! further away.

use crate::config::Config;
use crate::model::{Boundary, Verdict};
use crate::resolve::ResolvedTarget;
use crate::resolve::path::{file_stem, relative_segments};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Spelling {
    Path(String),
    AncestorBarrel,
}

/// Check `specifier` against its canonical spelling.
///
/// `file_boundary` and `target_boundary` are physical boundaries. Returns
/// `None` when the import is already spelled correctly.
pub fn check_path(
    specifier: &str,
    file_dir: &str,
    target: &ResolvedTarget,
    file_boundary: Option<&Boundary>,
    target_boundary: Option<&Boundary>,
    config: &Config,
) -> Option<Verdict> {
    let boundary = match (file_boundary, target_boundary) {
        (Some(f), Some(t)) if f.same_region(t) => f,
        (_, None) => {
            return Some(Verdict::UnknownBoundary {
                path: specifier.to_string(),
            });
        }
        (_, Some(t)) => {
            let expected = t.root_spelling(config.style, &config.root_dir);
            return compare(specifier, expected);
        }
    };

    let root = boundary.root_spelling(config.style, &config.root_dir);
    if specifier == root || specifier.strip_suffix('/') == Some(root.as_str()) {
        return Some(ancestor_barrel(boundary));
    }

    let target_parts =
        relative_segments(&boundary.absolute_dir, &target.directory).unwrap_or_default();
    let file_parts = relative_segments(&boundary.absolute_dir, file_dir).unwrap_or_default();
    let base = file_stem(&target.absolute_path, &config.file_extensions);
    let is_barrel = base == config.barrel_file_name;

    match same_boundary_spelling(&target_parts, &file_parts, base, is_barrel, &root) {
        Spelling::Path(expected) => compare(specifier, expected),
        Spelling::AncestorBarrel => Some(ancestor_barrel(boundary)),
    }
}

fn same_boundary_spelling(
    target_parts: &[&str],
    file_parts: &[&str],
    base: &str,
    is_barrel: bool,
    root: &str,
) -> Spelling {
    // Target sits directly in the boundary root while the importer is nested.
    // An importer at the root falls through to `./x`; `@app/x` names the same
    // file, but only `./x` stays a fixed point for a root-level importer.
    if target_parts.is_empty() && !file_parts.is_empty() {
        return if is_barrel {
            Spelling::AncestorBarrel
        } else {
            Spelling::Path(format!("{}/{}", root, base))
        };
    }

    let k = target_parts
        .iter()
        .zip(file_parts)
        .take_while(|(t, f)| t == f)
        .count();

    if k == target_parts.len() && k == file_parts.len() {
        // TODO: confirm whether `./index` from a non-root directory should be
        // allowed; it is reported as an ancestor barrel for now.
        return if is_barrel {
            Spelling::AncestorBarrel
        } else {
            Spelling::Path(format!("./{}", base))
        };
    }

    if k == target_parts.len() {
        // Target file lives in a directory above the importer.
        if is_barrel {
            return Spelling::AncestorBarrel;
        }
        return if k + 1 == file_parts.len() {
            Spelling::Path(format!("../{}", base))
        } else {
            Spelling::Path(format!("{}/{}/{}", root, target_parts.join("/"), base))
        };
    }

    let seg = target_parts[k];
    if k == file_parts.len() {
        Spelling::Path(format!("./{}", seg))
    } else if target_parts.len() == 1 && !file_parts.is_empty() {
        Spelling::Path(format!("{}/{}", root, seg))
    } else if k + 1 == file_parts.len() {
        Spelling::Path(format!("../{}", seg))
    } else {
        Spelling::Path(format!("{}/{}", root, target_parts[..=k].join("/")))
    }
}

fn compare(specifier: &str, expected: String) -> Option<Verdict> {
    if specifier == expected {
        None
    } else {
        Some(Verdict::IncorrectPath {
            expected,
            actual: specifier.to_string(),
        })
    }
}

fn ancestor_barrel(boundary: &Boundary) -> Verdict {
    Verdict::AncestorBarrel {
        boundary_identifier: boundary.identifier().to_string(),
    }
}
