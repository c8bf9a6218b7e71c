//! Tests for the minify and beautify chains

use devmin::minify::{markup, script, stylesheet};
use devmin::{beautify, minify, minify_with_stats, Domain, SizeStats};

use crate::helpers::{load_fixture, SAMPLE_CSS_MIN, SAMPLE_HTML_MIN, SAMPLE_JS_MIN};

// ============================================================================
// Markup
// ============================================================================

#[test]
fn markup_strips_comments() {
    assert_eq!(markup::minify("<p><!-- x -->hi</p>"), "<p>hi</p>");
}

#[test]
fn markup_removes_whitespace_between_tags() {
    assert_eq!(
        markup::minify("<div>\n  <span>a</span>\n</div>"),
        "<div><span>a</span></div>"
    );
}

#[test]
fn markup_strips_multiline_comments_non_greedily() {
    let input = "<a>1</a><!--\nfirst\n--><b>2</b><!-- second --><c>3</c>";
    assert_eq!(markup::minify(input), "<a>1</a><b>2</b><c>3</c>");
}

#[test]
fn markup_collapses_text_whitespace() {
    assert_eq!(markup::minify("<p>a    b\n\n c</p>"), "<p>a b c</p>");
}

#[test]
fn markup_fixture() {
    assert_eq!(
        minify(Domain::Markup, &load_fixture("sample.html")),
        SAMPLE_HTML_MIN
    );
}

// ============================================================================
// Stylesheet
// ============================================================================

#[test]
fn stylesheet_basic_rule() {
    assert_eq!(stylesheet::minify("a { color: red; }"), "a{color:red}");
}

#[test]
fn stylesheet_comment_and_selector_list() {
    assert_eq!(
        stylesheet::minify("/* c */ a , b { margin : 0 ; }"),
        "a,b{margin:0}"
    );
}

#[test]
fn stylesheet_keeps_value_spaces() {
    assert_eq!(
        stylesheet::minify("p {\n\tmargin:  0   auto;\n}"),
        "p{margin:0 auto}"
    );
}

#[test]
fn stylesheet_fixture() {
    assert_eq!(
        minify(Domain::Stylesheet, &load_fixture("sample.css")),
        SAMPLE_CSS_MIN
    );
}

// ============================================================================
// Script
// ============================================================================

#[test]
fn script_line_comment_and_assignment() {
    assert_eq!(script::minify("// hi\nlet x = 1;"), "let x=1;");
}

#[test]
fn script_function_body() {
    assert_eq!(
        script::minify("function add(a, b) {\n  return a + b;\n}"),
        "function add(a,b){return a+b;}"
    );
}

#[test]
fn script_keeps_keyword_spacing() {
    assert_eq!(script::minify("return   value"), "return value");
}

#[test]
fn script_string_literal_blind_spot_is_kept() {
    // Text after `//` inside a string is treated as a comment
    assert_eq!(
        script::minify("const url = 'http://example.com';"),
        "const url='http:"
    );
}

#[test]
fn script_fixture() {
    assert_eq!(
        minify(Domain::Script, &load_fixture("sample.js")),
        SAMPLE_JS_MIN
    );
}

// ============================================================================
// Shared properties
// ============================================================================

#[test]
fn empty_and_blank_input_minify_to_empty() {
    for domain in Domain::ALL {
        assert_eq!(minify(domain, ""), "");
        assert_eq!(minify(domain, "\n\t  \r\n"), "");
    }
}

#[test]
fn minify_is_idempotent_on_fixtures() {
    let cases = [
        (Domain::Markup, "sample.html"),
        (Domain::Stylesheet, "sample.css"),
        (Domain::Script, "sample.js"),
    ];
    for (domain, fixture) in cases {
        let once = minify(domain, &load_fixture(fixture));
        assert_eq!(minify(domain, &once), once, "{} not a fixed point", fixture);
    }
}

#[test]
fn minify_with_stats_matches_compute() {
    let source = load_fixture("sample.css");
    let outcome = minify_with_stats(Domain::Stylesheet, &source);
    assert_eq!(outcome.stats, SizeStats::compute(&source, &outcome.output));
    assert!(outcome.stats.savings_percent > 0);
}

#[test]
fn beautify_never_panics_on_odd_input() {
    let inputs = [
        "}}}{{{",
        "<<<>>>",
        "</>",
        "((;;))",
        "\u{1F600}<p>\u{00E9}</p>",
        "a{b:c;d:e}}",
        "\n\n\n",
    ];
    for domain in Domain::ALL {
        for input in inputs {
            let _ = beautify(domain, input);
        }
    }
}

#[test]
fn beautify_then_minify_returns_to_compact_css() {
    let compact = SAMPLE_CSS_MIN;
    let pretty = beautify(Domain::Stylesheet, compact);
    assert_ne!(pretty, compact);
    assert_eq!(minify(Domain::Stylesheet, &pretty), compact);
}
