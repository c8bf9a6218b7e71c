//! CSS reducer and expander.

use std::sync::LazyLock;

use super::chain::{Chain, Step};
use super::tidy_steps;

static MINIFY: LazyLock<Chain> = LazyLock::new(|| {
    Chain::new(
        "css-minify",
        vec![
            Step::regex("strip-comments", r"(?s)/\*.*?\*/", ""),
            Step::regex("tighten-punctuation", r"\s*([{}:;,])\s*", "${1}"),
            Step::literal("drop-trailing-semicolon", ";}", "}"),
            Step::regex("strip-line-breaks", r"[\r\n\t]", ""),
            Step::regex("collapse-spaces", r" {2,}", " "),
            Step::Trim,
        ],
    )
});

static BEAUTIFY: LazyLock<Chain> = LazyLock::new(|| {
    let mut steps = vec![
        Step::literal("open-block", "{", " {\n  "),
        Step::literal("break-declarations", ";", ";\n  "),
        Step::literal("close-block", "}", "\n}\n"),
    ];
    steps.extend(tidy_steps());
    Chain::new("css-beautify", steps)
});

/// Minify a stylesheet.
pub fn minify(text: &str) -> String {
    MINIFY.apply(text)
}

/// One declaration per line, one rule per block.
pub fn beautify(text: &str) -> String {
    BEAUTIFY.apply(text)
}
