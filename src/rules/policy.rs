use crate::model::{Boundary, Verdict};

/// Decide whether `file_boundary` may import from `target_boundary`.
///
/// Both arguments are policy boundaries (see
/// [`policy_boundary_of`](crate::resolve::policy_boundary_of)). Lists are
/// matched by exact identifier; `None` means allowed.
pub fn evaluate(
    file_boundary: &Boundary,
    target_boundary: &Boundary,
    is_type_only: bool,
) -> Option<Verdict> {
    if file_boundary.same_region(target_boundary) {
        return None;
    }

    let target = target_boundary.identifier();
    let allow = file_boundary.allow_imports_from.as_deref();
    let deny = file_boundary.deny_imports_from.as_deref();
    let listed = |list: Option<&[String]>| list.is_some_and(|l| l.iter().any(|id| id == target));

    if is_type_only && listed(file_boundary.allow_type_imports_from.as_deref()) {
        return None;
    }

    let denied_because = if listed(deny) {
        if listed(allow) {
            format!(
                "'{}' is in both the allow and deny lists; deny takes precedence",
                target
            )
        } else {
            format!("'{}' is explicitly denied", target)
        }
    } else if listed(allow) {
        return None;
    } else {
        match (allow, deny) {
            (Some(_), None) => format!("'{}' is not in the allow list", target),
            (None, Some(_)) => return None,
            _ => format!("'{}' is not explicitly allowed", target),
        }
    };

    Some(Verdict::BoundaryViolation {
        from: file_boundary.identifier().to_string(),
        to: target.to_string(),
        reason: denied_because,
    })
}
