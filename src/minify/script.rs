//! JavaScript reducer and expander.
//!
//! Both directions are plain text rewrites. `//` and `/* */` inside string
//! or regex literals are treated as comments, and operator characters inside
//! literals lose their surrounding whitespace. This matches the behavior
//! users already rely on; a tokenizing minifier would be a behavior change.

use std::sync::LazyLock;

use super::chain::{Chain, Step};
use super::tidy_steps;

/// Characters whose neighbouring whitespace is removed.
pub const OPERATOR_CHARS: &str = "=:+-*/&|!?{}[]();,<>";

static MINIFY: LazyLock<Chain> = LazyLock::new(|| {
    Chain::new(
        "js-minify",
        vec![
            Step::regex("strip-line-comments", r"(?m)//.*$", ""),
            Step::regex("strip-block-comments", r"(?s)/\*.*?\*/", ""),
            Step::Trim,
            Step::regex(
                "tighten-operators",
                r"\s*([=:+\-*/&|!?{}\[\]();,<>])\s*",
                "${1}",
            ),
            Step::regex("collapse-whitespace", r"\s{2,}", " "),
        ],
    )
});

static BEAUTIFY: LazyLock<Chain> = LazyLock::new(|| {
    let mut steps = vec![
        Step::literal("open-block", "{", " {\n  "),
        Step::literal("close-block", "}", "\n}\n"),
        Step::literal("break-statements", ";", ";\n  "),
        Step::literal("space-before-paren", "(", " ("),
        Step::literal("space-after-paren", ")", ") "),
        // ") " followed by " {" would otherwise leave two spaces
        Step::regex("collapse-paren-spacing", r"\) {2,}", ") "),
    ];
    steps.extend(tidy_steps());
    Chain::new("js-beautify", steps)
});

/// Minify a script.
pub fn minify(text: &str) -> String {
    MINIFY.apply(text)
}

/// Break blocks and statements onto separate lines.
pub fn beautify(text: &str) -> String {
    BEAUTIFY.apply(text)
}
