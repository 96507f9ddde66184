//! Sequential run over glob patterns: resolve, validate, report

use std::io::{self, Write};
use tracing::debug;

use super::rules::{BoundConfig, RuleSet};
use super::validator::validate_image;
use crate::reporting::formatter::OutputStyle;
use crate::scanner::path_resolver::resolve_pattern;

/// Aggregate result of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOutcome {
    pub checked: usize,
    pub failed: usize,
}

impl RunOutcome {
    /// True iff at least one checked file had a violation
    pub fn any_failed(&self) -> bool {
        self.failed > 0
    }

    /// Process exit status: 0 when every file passed, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        u8::from(self.any_failed())
    }
}

/// Checks files against a fixed rule set and writes failing files in one style
#[derive(Debug, Clone)]
pub struct Linter {
    rules: RuleSet,
    style: OutputStyle,
}

impl Linter {
    pub fn new(config: &BoundConfig, style: OutputStyle) -> Self {
        Self {
            rules: RuleSet::from_config(config),
            style,
        }
    }

    pub fn with_rules(rules: RuleSet, style: OutputStyle) -> Self {
        Self { rules, style }
    }

    /// Process every pattern in order and report failing files to `out`
    ///
    /// Files are handled one at a time in resolution order. A failing file
    /// never stops the run; only writing to `out` can return an error.
    ///
    /// # Arguments
    /// * `patterns` - Glob patterns, in command-line order
    /// * `out` - Destination for the rendered blocks
    ///
    /// # Returns
    /// Counts of checked and failed files
    pub fn run<S, W>(&self, patterns: &[S], out: &mut W) -> io::Result<RunOutcome>
    where
        S: AsRef<str>,
        W: Write,
    {
        let mut outcome = RunOutcome::default();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            for path in resolve_pattern(pattern) {
                let result = validate_image(&path, &self.rules);
                outcome.checked += 1;

                if let Some(block) = self.style.render(&result) {
                    outcome.failed += 1;
                    out.write_all(block.as_bytes())?;
                } else {
                    debug!(path = %path.display(), "passed");
                }
            }
        }

        out.flush()?;
        debug!(
            checked = outcome.checked,
            failed = outcome.failed,
            "run complete"
        );
        Ok(outcome)
    }
}
