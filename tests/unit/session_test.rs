//! Tests for the interactive session state

use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use devmin::clipboard::copy::Copy;
use devmin::clipboard::tool::{CopyTool, CopyToolError};
use devmin::clipboard::{ClipboardError, CopyMethod};
use devmin::session::{Action, Session, SessionError, StaleOutputPolicy};
use devmin::Domain;
use tempfile::TempDir;

use crate::helpers::{load_fixture, SAMPLE_CSS_MIN, SAMPLE_HTML_MIN};

/// Clipboard tool that counts copies.
struct CountingTool {
    copies: Arc<AtomicUsize>,
}

impl CopyTool for CountingTool {
    fn method(&self) -> CopyMethod {
        CopyMethod::Xsel
    }

    fn is_available(&self) -> bool {
        true
    }

    fn try_copy_text(&self, _text: &str) -> Result<(), CopyToolError> {
        self.copies.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn counting_clipboard() -> (Copy, Arc<AtomicUsize>) {
    let copies = Arc::new(AtomicUsize::new(0));
    let tool = CountingTool {
        copies: Arc::clone(&copies),
    };
    (Copy::with_tools(vec![Box::new(tool)]), copies)
}

#[test]
fn new_session_starts_on_markup() {
    let session = Session::default();
    assert_eq!(session.active(), Domain::Markup);
    assert_eq!(session.policy(), StaleOutputPolicy::Invalidate);
    for domain in Domain::ALL {
        assert_eq!(session.source(domain), "");
        assert!(session.output(domain).is_none());
        assert!(session.stats(domain).is_none());
    }
}

#[test]
fn minify_fixture_stores_output_and_stats() {
    let mut session = Session::default();
    let source = load_fixture("sample.html");
    session.set_source(Domain::Markup, source.clone());

    let state = session.minify(Domain::Markup).unwrap();
    assert_eq!(state.output.as_deref(), Some(SAMPLE_HTML_MIN));

    let stats = session.stats(Domain::Markup).unwrap();
    assert_eq!(stats.original_bytes, source.len());
    assert_eq!(stats.compact_bytes, SAMPLE_HTML_MIN.len());
}

#[test]
fn every_action_without_output_is_empty_input() {
    let temp = TempDir::new().unwrap();
    let (clipboard, copies) = counting_clipboard();
    let mut session = Session::default();

    assert!(matches!(
        session.beautify(Domain::Script),
        Err(SessionError::EmptyInput {
            action: Action::Beautify,
            ..
        })
    ));
    assert!(matches!(
        session.copy_output(Domain::Script, &clipboard),
        Err(SessionError::EmptyInput {
            action: Action::Copy,
            ..
        })
    ));
    assert!(matches!(
        session.save_output(Domain::Script, temp.path(), None),
        Err(SessionError::EmptyInput {
            action: Action::Save,
            ..
        })
    ));

    assert_eq!(copies.load(Ordering::SeqCst), 0);
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn failed_minify_leaves_previous_state_alone() {
    let mut session = Session::new(StaleOutputPolicy::Keep);
    session.set_source(Domain::Stylesheet, "a { b: c; }");
    session.minify(Domain::Stylesheet).unwrap();

    session.set_source(Domain::Stylesheet, "   ");
    assert!(session.minify(Domain::Stylesheet).is_err());
    assert_eq!(session.output(Domain::Stylesheet), Some("a{b:c}"));
}

#[test]
fn copy_hands_output_to_clipboard() {
    let (clipboard, copies) = counting_clipboard();
    let mut session = Session::default();
    session.set_source(Domain::Stylesheet, load_fixture("sample.css"));
    session.minify(Domain::Stylesheet).unwrap();

    let result = session.copy_output(Domain::Stylesheet, &clipboard).unwrap();
    assert_eq!(result.tool, CopyMethod::Xsel);
    assert_eq!(result.size_bytes, SAMPLE_CSS_MIN.len());
    assert_eq!(copies.load(Ordering::SeqCst), 1);
}

#[test]
fn copy_without_tools_surfaces_clipboard_error() {
    let mut session = Session::default();
    session.set_source(Domain::Script, "a = 1");
    session.minify(Domain::Script).unwrap();

    let err = session
        .copy_output(Domain::Script, &Copy::with_tools(vec![]))
        .unwrap_err();
    assert!(matches!(
        err,
        SessionError::Clipboard(ClipboardError::NoToolAvailable)
    ));
    assert!(!err.is_advisory());
}

#[test]
fn save_writes_default_download_name() {
    let temp = TempDir::new().unwrap();
    let mut session = Session::default();
    session.set_source(Domain::Stylesheet, load_fixture("sample.css"));
    session.minify(Domain::Stylesheet).unwrap();

    let saved = session
        .save_output(Domain::Stylesheet, temp.path(), None)
        .unwrap();

    assert_eq!(saved.path, temp.path().join("minified.css"));
    assert_eq!(saved.media_type, "text/css");
    assert_eq!(saved.bytes, SAMPLE_CSS_MIN.len());
    assert_eq!(fs::read_to_string(&saved.path).unwrap(), SAMPLE_CSS_MIN);
}

#[test]
fn save_rejects_path_like_names() {
    let temp = TempDir::new().unwrap();
    let mut session = Session::default();
    session.set_source(Domain::Markup, "<p>x</p>");
    session.minify(Domain::Markup).unwrap();

    let err = session
        .save_output(Domain::Markup, temp.path(), Some("../escape.html"))
        .unwrap_err();
    assert!(matches!(err, SessionError::Io(_)));
}

#[test]
fn beautify_after_minify_expands_output() {
    let mut session = Session::default();
    session.set_source(Domain::Script, "function f(a) { return a; }");
    session.minify(Domain::Script).unwrap();
    assert_eq!(session.output(Domain::Script), Some("function f(a){return a;}"));

    let pretty = session.beautify(Domain::Script).unwrap();
    assert_eq!(pretty, "function f (a) {\n  return a;\n}");
    assert!(session.stats(Domain::Script).is_none());
}

#[test]
fn clearing_one_domain_keeps_others() {
    let mut session = Session::default();
    session.set_source(Domain::Markup, "<p>a</p>");
    session.set_source(Domain::Script, "b = 2");
    session.clear(Domain::Markup);

    assert_eq!(session.source(Domain::Markup), "");
    assert_eq!(session.source(Domain::Script), "b = 2");
}
