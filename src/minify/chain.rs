//! Ordered substitution chains.
//!
//! Every reducer and expander is a fixed list of steps applied in order,
//! each step's output feeding the next. Nothing here parses the input.

use std::borrow::Cow;

use regex::Regex;
use tracing::trace;

/// A single rewrite step.
#[derive(Debug)]
pub enum Step {
    /// Replace every match of `pattern` (supports `${n}` group references).
    Regex {
        name: &'static str,
        pattern: Regex,
        replacement: &'static str,
    },
    /// Replace every occurrence of a literal string.
    Literal {
        name: &'static str,
        from: &'static str,
        to: &'static str,
    },
    /// Trim leading and trailing whitespace.
    Trim,
}

impl Step {
    /// Build a regex step.
    ///
    /// Patterns are compile-time constants; an invalid one is a programming
    /// error caught by the module tests.
    pub fn regex(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid pattern for step '{}': {}", name, e));
        Step::Regex {
            name,
            pattern,
            replacement,
        }
    }

    /// Build a literal step.
    pub fn literal(name: &'static str, from: &'static str, to: &'static str) -> Self {
        Step::Literal { name, from, to }
    }

    /// Step name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Step::Regex { name, .. } | Step::Literal { name, .. } => *name,
            Step::Trim => "trim",
        }
    }

    /// Apply this step to `input`.
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match self {
            Step::Regex {
                pattern,
                replacement,
                ..
            } => pattern.replace_all(input, *replacement),
            Step::Literal { from, to, .. } => {
                if input.contains(from) {
                    Cow::Owned(input.replace(from, to))
                } else {
                    Cow::Borrowed(input)
                }
            }
            Step::Trim => Cow::Borrowed(input.trim()),
        }
    }
}

/// An ordered list of steps.
#[derive(Debug)]
pub struct Chain {
    name: &'static str,
    steps: Vec<Step>,
}

impl Chain {
    pub fn new(name: &'static str, steps: Vec<Step>) -> Self {
        Self { name, steps }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Run every step in order.
    pub fn apply(&self, input: &str) -> String {
        let mut text = input.to_string();
        for step in &self.steps {
            let before = text.len();
            let next = step.apply(&text).into_owned();
            trace!(
                chain = self.name,
                step = step.name(),
                before,
                after = next.len(),
                "applied step"
            );
            text = next;
        }
        text
    }
}
