//! Input discovery

pub mod path_resolver;

pub use path_resolver::{expand_pattern, resolve_pattern, ResolveError};
