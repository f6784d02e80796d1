use crate::model::Boundary;
use crate::resolve::path::is_within;

/// Nearest boundary containing `path`, whether or not it declares policy.
///
/// Decides "same boundary or not" for path spelling.
pub fn physical_boundary_of<'a>(path: &str, boundaries: &'a [Boundary]) -> Option<&'a Boundary> {
    nearest_containing(path, boundaries.iter())
}

/// Nearest boundary containing `path` that declares policy, climbing past
/// unspecified boundaries nested inside it.
pub fn policy_boundary_of<'a>(path: &str, boundaries: &'a [Boundary]) -> Option<&'a Boundary> {
    nearest_containing(
        path,
        boundaries.iter().filter(|b| b.is_policy_specified()),
    )
}

/// Longest `absolute_dir` wins; the earlier boundary wins a tie.
fn nearest_containing<'a>(
    path: &str,
    candidates: impl Iterator<Item = &'a Boundary>,
) -> Option<&'a Boundary> {
    let mut best: Option<&Boundary> = None;
    for boundary in candidates {
        if !is_within(&boundary.absolute_dir, path) {
            continue;
        }
        if best.is_none_or(|b| boundary.absolute_dir.len() > b.absolute_dir.len()) {
            best = Some(boundary);
        }
    }
    best
}

/// Boundary whose alias starts `specifier`, plus the remaining subpath.
///
/// Matches the bare alias (`@domain`, empty subpath) and alias-with-subpath
/// (`@domain/entities`). The longest alias wins.
pub fn alias_owner<'a, 's>(
    specifier: &'s str,
    boundaries: &'a [Boundary],
) -> Option<(&'a Boundary, &'s str)> {
    let mut best: Option<(&Boundary, &str, usize)> = None;
    for boundary in boundaries {
        let Some(alias) = boundary.alias.as_deref() else {
            continue;
        };
        let Some(rest) = specifier.strip_prefix(alias) else {
            continue;
        };
        let subpath = if rest.is_empty() {
            ""
        } else if let Some(sub) = rest.strip_prefix('/') {
            sub
        } else {
            continue;
        };
        if best.is_none_or(|(_, _, len)| alias.len() > len) {
            best = Some((boundary, subpath, alias.len()));
        }
    }
    best.map(|(b, sub, _)| (b, sub))
}

/// Boundary owning `specifier` when it is an alias followed by `/`.
pub fn alias_subpath_owner<'a>(specifier: &str, boundaries: &'a [Boundary]) -> Option<&'a Boundary> {
    let (boundary, _) = alias_owner(specifier, boundaries)?;
    let alias = boundary.alias.as_deref()?;
    specifier[alias.len()..]
        .starts_with('/')
        .then_some(boundary)
}
