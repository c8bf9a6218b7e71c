//! HTML reducer and expander.

use std::sync::LazyLock;

use super::chain::{Chain, Step};
use super::tidy_steps;

static MINIFY: LazyLock<Chain> = LazyLock::new(|| {
    Chain::new(
        "html-minify",
        vec![
            // Comments go first so their content can't create tag adjacency
            Step::regex("strip-comments", r"(?s)<!--.*?-->", ""),
            Step::regex("join-tags", r">\s+<", "><"),
            Step::Trim,
            Step::regex("collapse-whitespace", r"\s{2,}", " "),
        ],
    )
});

static BEAUTIFY: LazyLock<Chain> = LazyLock::new(|| {
    let mut steps = vec![
        Step::literal("break-adjacent-tags", "><", ">\n<"),
        Step::regex("break-after-open-tag", r"(<[A-Za-z][^>]*>)", "${1}\n"),
        Step::regex("break-before-close-tag", r"(</[^>]*>)", "\n${1}"),
    ];
    steps.extend(tidy_steps());
    Chain::new("html-beautify", steps)
});

/// Minify HTML markup.
pub fn minify(text: &str) -> String {
    MINIFY.apply(text)
}

/// Put tags on their own lines.
pub fn beautify(text: &str) -> String {
    BEAUTIFY.apply(text)
}
