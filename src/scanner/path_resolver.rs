//! Glob pattern expansion into image file paths

use glob::{MatchOptions, Pattern, PatternError};
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// `*` and `?` stay within one path component; `**` spans directories
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Why a pattern produced no files
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("invalid pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: PatternError,
    },

    #[error("no files match {0:?}")]
    NoMatch(String),
}

/// Expand a pattern to the files it matches, treating any failure as no match
///
/// This is what the driver uses: a bad or empty pattern never fails a run.
pub fn resolve_pattern(pattern: &str) -> Vec<PathBuf> {
    match expand_pattern(pattern) {
        Ok(files) => {
            debug!(pattern, count = files.len(), "resolved pattern");
            files
        }
        Err(e) => {
            debug!(pattern, error = %e, "skipping pattern");
            Vec::new()
        }
    }
}

/// Expand a pattern to the files it matches
///
/// # Arguments
/// * `pattern` - Path pattern; may use `*`, `?`, `[...]` and `**` segments
///
/// # Returns
/// Matching paths in walk order (file-name order at each directory level)
pub fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>, ResolveError> {
    if !has_wildcard(pattern) {
        let path = PathBuf::from(pattern);
        return if path.exists() {
            Ok(vec![path])
        } else {
            Err(ResolveError::NoMatch(pattern.to_string()))
        };
    }

    let matcher = Pattern::new(pattern).map_err(|source| ResolveError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let (root, rest) = split_literal_root(pattern);
    let mut walker = WalkDir::new(root.as_deref().unwrap_or(Path::new(".")))
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    if !rest.iter().any(|segment| segment == "**") {
        walker = walker.max_depth(rest.len());
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(pattern, error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        // Patterns without a literal root are matched relative to the working directory
        let candidate = match root {
            Some(_) => entry.path(),
            None => entry.path().strip_prefix(".").unwrap_or(entry.path()),
        };
        if matcher.matches_path_with(candidate, MATCH_OPTIONS) {
            files.push(candidate.to_path_buf());
        }
    }

    if files.is_empty() {
        Err(ResolveError::NoMatch(pattern.to_string()))
    } else {
        Ok(files)
    }
}

fn has_wildcard(segment: &str) -> bool {
    segment.contains(['*', '?', '['])
}

/// Split a pattern into its leading wildcard-free directories and the remaining segments
fn split_literal_root(pattern: &str) -> (Option<PathBuf>, Vec<String>) {
    let mut root = PathBuf::new();
    let mut rest = Vec::new();

    for component in Path::new(pattern).components() {
        let segment = component.as_os_str().to_string_lossy();
        let literal = matches!(
            component,
            Component::Prefix(_) | Component::RootDir | Component::CurDir | Component::ParentDir
        ) || !has_wildcard(&segment);

        if rest.is_empty() && literal {
            root.push(component);
        } else {
            rest.push(segment.into_owned());
        }
    }

    let root = if root.as_os_str().is_empty() {
        None
    } else {
        Some(root)
    };
    (root, rest)
}
