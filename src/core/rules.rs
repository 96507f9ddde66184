//! Dimension bound rules

use tracing::warn;

use super::dimensions::ImageDimensions;
use super::validator::Violation;

/// Width and height limits for one run, built once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundConfig {
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
}

impl Default for BoundConfig {
    fn default() -> Self {
        Self {
            min_width: 1,
            max_width: 1920,
            min_height: 1,
            max_height: 1080,
        }
    }
}

impl BoundConfig {
    /// Bounds that accept every image: a minimum of 0 and a maximum of `u32::MAX`
    /// can never be violated, which is how a bound is left unset
    pub fn unbounded() -> Self {
        Self {
            min_width: 0,
            max_width: u32::MAX,
            min_height: 0,
            max_height: u32::MAX,
        }
    }

    /// Log bounds that no image can satisfy
    pub fn warn_if_unsatisfiable(&self) {
        if self.min_width > self.max_width {
            warn!(
                min_width = self.min_width,
                max_width = self.max_width,
                "min-width exceeds max-width, every image will fail"
            );
        }
        if self.min_height > self.max_height {
            warn!(
                min_height = self.min_height,
                max_height = self.max_height,
                "min-height exceeds max-height, every image will fail"
            );
        }
    }
}

/// A single bound check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    MinWidth(u32),
    MaxWidth(u32),
    MinHeight(u32),
    MaxHeight(u32),
}

impl Rule {
    /// Check `dims` against this bound, returning the violation if it fails
    pub fn evaluate(&self, dims: &ImageDimensions) -> Option<Violation> {
        match *self {
            Rule::MinWidth(expected) if dims.width < expected => Some(Violation::MinWidth {
                expected,
                actual: dims.width,
            }),
            Rule::MaxWidth(expected) if expected < dims.width => Some(Violation::MaxWidth {
                expected,
                actual: dims.width,
            }),
            Rule::MinHeight(expected) if dims.height < expected => Some(Violation::MinHeight {
                expected,
                actual: dims.height,
            }),
            Rule::MaxHeight(expected) if expected < dims.height => Some(Violation::MaxHeight {
                expected,
                actual: dims.height,
            }),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rule::MinWidth(_) => "min-width",
            Rule::MaxWidth(_) => "max-width",
            Rule::MinHeight(_) => "min-height",
            Rule::MaxHeight(_) => "max-height",
        }
    }
}

/// Ordered list of rules, evaluated independently of each other
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The four bound rules: width before height, min before max
    pub fn from_config(config: &BoundConfig) -> Self {
        Self::new(vec![
            Rule::MinWidth(config.min_width),
            Rule::MaxWidth(config.max_width),
            Rule::MinHeight(config.min_height),
            Rule::MaxHeight(config.max_height),
        ])
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Every triggered violation, in rule order
    pub fn evaluate(&self, dims: &ImageDimensions) -> Vec<Violation> {
        self.rules.iter().filter_map(|rule| rule.evaluate(dims)).collect()
    }
}
