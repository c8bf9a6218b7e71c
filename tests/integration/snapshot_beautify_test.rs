//! Snapshot tests for beautified output

use devmin::{beautify, minify, Domain};

use crate::helpers::{load_fixture, SAMPLE_CSS_MIN, SAMPLE_HTML_MIN, SAMPLE_JS_MIN};

#[test]
fn snapshot_beautify_markup_fixture() {
    assert_eq!(minify(Domain::Markup, &load_fixture("sample.html")), SAMPLE_HTML_MIN);
    insta::assert_snapshot!(beautify(Domain::Markup, SAMPLE_HTML_MIN), @r"
    <!DOCTYPE html>
    <html>
    <head>
    <title>
    Demo
    </title>
    </head>
    <body>
    <p>
    Hello world
    </p>
    </body>
    </html>
    ");
}

#[test]
fn snapshot_beautify_stylesheet_fixture() {
    insta::assert_snapshot!(beautify(Domain::Stylesheet, SAMPLE_CSS_MIN), @r"
    body {
      margin:0;
      font-family:sans-serif
    }
    .nav a,.nav button {
      color:#333;
      padding:4px 8px
    }
    ");
}

#[test]
fn snapshot_beautify_script_fixture() {
    insta::assert_snapshot!(beautify(Domain::Script, SAMPLE_JS_MIN), @r"
    function add (a,b) {
      return a+b;
    }
    const total=add (1,2) ;
    ");
}
