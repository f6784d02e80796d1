mod boundary;
pub mod path;
mod specifier;

pub use boundary::{alias_owner, alias_subpath_owner, physical_boundary_of, policy_boundary_of};
pub use specifier::{Resolution, ResolvedTarget, SpecifierKind, resolve_specifier};
