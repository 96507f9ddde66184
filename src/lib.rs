//! Image Lint Library
//!
//! Checks JPEG and PNG files matched by glob patterns against width and
//! height bounds, reading only image headers.

pub mod core;
pub mod scanner;
pub mod reporting;

pub use crate::core::validator;
pub use crate::scanner::path_resolver;
pub use crate::reporting::formatter;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::dimensions::{extract_dimensions, ExtractError, ImageDimensions};
    pub use crate::core::driver::{Linter, RunOutcome};
    pub use crate::core::rules::{BoundConfig, Rule, RuleSet};
    pub use crate::core::validator::{validate_image, FileResult, Violation};
    pub use crate::scanner::path_resolver::{expand_pattern, resolve_pattern, ResolveError};
    pub use crate::reporting::formatter::OutputStyle;
}
