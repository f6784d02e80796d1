//! Posix-style path arithmetic on plain strings.
//!
//! Import specifiers and boundary directories are compared segment by
//! segment, so everything here works on `/`-separated strings rather than
//! `std::path`, which would change behaviour per platform.

/// Collapse `.`, `..` and repeated slashes. `..` never climbs above `/`.
pub fn normalize(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !absolute {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    if absolute {
        format!("/{}", joined)
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Join `rel` onto `base` and normalize. An absolute `rel` replaces `base`.
pub fn join(base: &str, rel: &str) -> String {
    if rel.starts_with('/') || base.is_empty() {
        normalize(rel)
    } else {
        normalize(&format!("{}/{}", base, rel))
    }
}

pub fn dirname(path: &str) -> String {
    match path.rfind('/') {
        Some(0) => "/".to_string(),
        Some(pos) => path[..pos].to_string(),
        None => ".".to_string(),
    }
}

pub fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Last non-empty segment, ignoring a trailing slash.
pub fn last_segment(path: &str) -> &str {
    basename(path.trim_end_matches('/'))
}

/// True when `path` is `dir` itself or lies below it.
pub fn is_within(dir: &str, path: &str) -> bool {
    if dir == "/" {
        return path.starts_with('/');
    }
    match path.strip_prefix(dir) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Segments of `path` below `base`, or `None` when `path` is not within `base`.
pub fn relative_segments<'a>(base: &str, path: &'a str) -> Option<Vec<&'a str>> {
    if !is_within(base, path) {
        return None;
    }
    let rest = if base == "/" { path } else { &path[base.len()..] };
    Some(
        rest.split('/')
            .filter(|s| !s.is_empty() && *s != ".")
            .collect(),
    )
}

/// Does `name` end in one of `extensions` (each given with its leading dot)?
pub fn has_extension(name: &str, extensions: &[String]) -> bool {
    extensions
        .iter()
        .any(|ext| name.len() > ext.len() && name.ends_with(ext.as_str()))
}

/// File name with the first matching extension removed.
pub fn file_stem<'a>(path: &'a str, extensions: &[String]) -> &'a str {
    let name = basename(path);
    extensions
        .iter()
        .filter(|ext| name.len() > ext.len())
        .find_map(|ext| name.strip_suffix(ext.as_str()))
        .unwrap_or(name)
}
