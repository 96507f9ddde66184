//! Dimension extraction, bound rules, per-file validation and the run driver

pub mod dimensions;
pub mod driver;
pub mod rules;
pub mod validator;

pub use dimensions::{extract_dimensions, ExtractError, ImageDimensions};
pub use driver::{Linter, RunOutcome};
pub use rules::{BoundConfig, Rule, RuleSet};
pub use validator::{validate_image, FileResult, Violation};
