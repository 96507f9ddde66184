//! Per-file validation: dimension extraction followed by bound rules

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use super::dimensions::{extract_dimensions, ExtractError};
use super::rules::RuleSet;

/// One reported problem with a file
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "rule")]
pub enum Violation {
    #[error("min-width: expected({expected}<) actual({actual})")]
    #[serde(rename = "min-width")]
    MinWidth { expected: u32, actual: u32 },

    #[error("max-width: expected(<{expected}) actual({actual})")]
    #[serde(rename = "max-width")]
    MaxWidth { expected: u32, actual: u32 },

    #[error("min-height: expected({expected}<) actual({actual})")]
    #[serde(rename = "min-height")]
    MinHeight { expected: u32, actual: u32 },

    #[error("max-height: expected(<{expected}) actual({actual})")]
    #[serde(rename = "max-height")]
    MaxHeight { expected: u32, actual: u32 },

    /// The file could not be opened or read
    #[error("{message}")]
    #[serde(rename = "unreadable")]
    Unreadable { message: String },

    /// The file is not a supported image, or its header is corrupt
    #[error("{message}")]
    #[serde(rename = "undecodable")]
    Undecodable { message: String },
}

impl Violation {
    /// Short label of the check that produced this violation
    pub fn rule(&self) -> &'static str {
        match self {
            Violation::MinWidth { .. } => "min-width",
            Violation::MaxWidth { .. } => "max-width",
            Violation::MinHeight { .. } => "min-height",
            Violation::MaxHeight { .. } => "max-height",
            Violation::Unreadable { .. } => "unreadable",
            Violation::Undecodable { .. } => "undecodable",
        }
    }

    /// True for violations raised before any rule could run
    pub fn is_extraction(&self) -> bool {
        matches!(
            self,
            Violation::Unreadable { .. } | Violation::Undecodable { .. }
        )
    }
}

impl From<ExtractError> for Violation {
    fn from(err: ExtractError) -> Self {
        let message = err.to_string();
        if err.is_io() {
            Violation::Unreadable { message }
        } else {
            Violation::Undecodable { message }
        }
    }
}

/// Outcome of validating a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileResult {
    pub path: PathBuf,
    pub violations: Vec<Violation>,
}

impl FileResult {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Validate one image file against a rule set
///
/// Extraction failures end validation with that single violation; otherwise
/// every rule runs and each failing one is recorded.
///
/// # Arguments
/// * `path` - Path to the image file
/// * `rules` - Bound rules to apply
///
/// # Returns
/// The file's result; an empty violation list means the file passed
pub fn validate_image(path: &Path, rules: &RuleSet) -> FileResult {
    let violations = match extract_dimensions(path) {
        Ok(dims) => {
            debug!(
                path = %path.display(),
                width = dims.width,
                height = dims.height,
                format = %dims.format,
                "read image header"
            );
            rules.evaluate(&dims)
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "could not read dimensions");
            vec![Violation::from(e)]
        }
    };

    FileResult {
        path: path.to_path_buf(),
        violations,
    }
}
