//! Rendering of failing file results

use std::fmt::Write as _;

use crate::core::validator::FileResult;

/// Output style for failing files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// `filename: <path>` followed by one space-indented line per violation
    Text,
    /// Nested Markdown list: the path as an item, violations as sub-items
    #[default]
    Markdown,
    /// One JSON object per failing file, one per line
    Json,
}

impl OutputStyle {
    /// Style selected by the `--markdown` and `--json` flags; JSON wins
    pub fn from_flags(markdown: bool, json: bool) -> Self {
        match (json, markdown) {
            (true, _) => OutputStyle::Json,
            (false, true) => OutputStyle::Markdown,
            (false, false) => OutputStyle::Text,
        }
    }

    /// Render a result, or `None` when the file passed
    ///
    /// Every returned block ends with a newline.
    pub fn render(self, result: &FileResult) -> Option<String> {
        if result.passed() {
            return None;
        }

        let path = result.path.display();
        let mut out = String::new();
        match self {
            OutputStyle::Text => {
                let _ = writeln!(out, "filename: {}", path);
                for violation in &result.violations {
                    let _ = writeln!(out, " {}", violation);
                }
            }
            OutputStyle::Markdown => {
                let _ = writeln!(out, "* {}", path);
                for violation in &result.violations {
                    let _ = writeln!(out, "  * {}", violation);
                }
            }
            OutputStyle::Json => {
                // Lossy path text so non-UTF-8 names still render
                let line = serde_json::json!({
                    "path": path.to_string(),
                    "violations": result.violations,
                });
                let _ = writeln!(out, "{}", line);
            }
        }
        Some(out)
    }
}
