//! HTML/CSS/JS minification and beautification
//!
//! Both directions are ordered substitution chains rather than parsers:
//! each domain module owns a static [`chain::Chain`] whose steps run in
//! sequence, the output of one step feeding the next.
//!
//! # Architecture
//!
//! - [`chain`] - step/chain engine shared by every domain
//! - [`markup`] - HTML rules
//! - [`stylesheet`] - CSS rules
//! - [`script`] - JavaScript rules
//!
//! Minify output is a fixed point for well-formed input:
//! `minify(d, &minify(d, s)) == minify(d, s)`. Minify and beautify are not
//! inverses of each other.
//!
//! Beautify output is not the raw line-breaking substitutions alone: every
//! expander ends with [`tidy_steps`] (trailing spaces, blank lines and outer
//! whitespace removed), and the script expander also collapses the double
//! space between `)` and `{`, so `if(x){` reads `if (x) {`.
//!
//! # Example
//! ```
//! use devmin::{minify, Domain};
//! assert_eq!(minify::minify(Domain::Stylesheet, "a { color: red; }"), "a{color:red}");
//! ```

pub mod chain;
pub mod markup;
pub mod script;
pub mod stylesheet;

use serde::Serialize;
use tracing::debug;

use crate::domain::Domain;
use crate::stats::SizeStats;
use chain::Step;

/// Result of a minify call: the compact text and its size comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinifyOutcome {
    pub output: String,
    pub stats: SizeStats,
}

/// Minify `text` with the rules for `domain`.
///
/// Empty or whitespace-only input yields an empty string.
pub fn minify(domain: Domain, text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let output = match domain {
        Domain::Markup => markup::minify(text),
        Domain::Stylesheet => stylesheet::minify(text),
        Domain::Script => script::minify(text),
    };

    debug!(
        domain = domain.name(),
        original = text.len(),
        compact = output.len(),
        "minified"
    );
    output
}

/// Minify and compute the size comparison in one call.
pub fn minify_with_stats(domain: Domain, text: &str) -> MinifyOutcome {
    let output = minify(domain, text);
    let stats = SizeStats::compute(text, &output);
    MinifyOutcome { output, stats }
}

/// Reformat `text` for reading. Best effort: any input yields some output.
pub fn beautify(domain: Domain, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let output = match domain {
        Domain::Markup => markup::beautify(text),
        Domain::Stylesheet => stylesheet::beautify(text),
        Domain::Script => script::beautify(text),
    };

    debug!(
        domain = domain.name(),
        input = text.len(),
        output = output.len(),
        "beautified"
    );
    output
}

/// Cleanup shared by every beautify chain.
pub(crate) fn tidy_steps() -> Vec<Step> {
    vec![
        Step::regex("strip-trailing-spaces", r"[ \t]+\n", "\n"),
        Step::regex("drop-blank-lines", r"\n\s*\n", "\n"),
        Step::Trim,
    ]
}

/// Whether `chain` finishes with the shared tidy steps.
#[cfg(test)]
pub(crate) fn ends_with_tidy(chain: &chain::Chain) -> bool {
    let tidy: Vec<&str> = tidy_steps().iter().map(Step::name).collect();
    let steps = chain.steps();
    steps.len() >= tidy.len()
        && steps[steps.len() - tidy.len()..]
            .iter()
            .map(Step::name)
            .eq(tidy)
}
