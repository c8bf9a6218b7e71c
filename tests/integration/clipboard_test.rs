//! Integration tests for the clipboard module.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use devmin::clipboard::copy::Copy;
use devmin::clipboard::tool::{CopyTool, CopyToolError};
use devmin::clipboard::{ClipboardError, CopyMethod, CopyResult, MAX_CONTENT_SIZE};

/// Scriptable tool recording every call.
struct MockTool {
    method: CopyMethod,
    available: bool,
    outcome: Result<(), CopyToolError>,
    calls: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<String>>>,
}

impl MockTool {
    fn new(method: CopyMethod, available: bool, outcome: Result<(), CopyToolError>) -> Self {
        Self {
            method,
            available,
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl CopyTool for MockTool {
    fn method(&self) -> CopyMethod {
        self.method
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().unwrap().push(text.to_string());
        self.outcome.clone()
    }
}

mod result_tests {
    use super::*;

    #[test]
    fn copy_method_name_returns_executable_names() {
        assert_eq!(CopyMethod::Pbcopy.name(), "pbcopy");
        assert_eq!(CopyMethod::WlCopy.name(), "wl-copy");
        assert_eq!(CopyMethod::Xclip.name(), "xclip");
        assert_eq!(CopyMethod::Xsel.name(), "xsel");
    }

    #[test]
    fn message_includes_size_and_tool() {
        let result = CopyResult::new(CopyMethod::Xclip, 2048);
        assert_eq!(
            result.message("minified CSS"),
            "Copied minified CSS to clipboard (2 KiB via xclip)"
        );
    }
}

mod copy_tests {
    use super::*;

    #[test]
    fn first_working_tool_wins() {
        let first = MockTool::new(CopyMethod::WlCopy, true, Ok(()));
        let second = MockTool::new(CopyMethod::Xclip, true, Ok(()));
        let second_calls = Arc::clone(&second.calls);
        let received = Arc::clone(&first.received);

        let copy = Copy::with_tools(vec![Box::new(first), Box::new(second)]);
        let result = copy.text("a{b:c}").unwrap();

        assert_eq!(result, CopyResult::new(CopyMethod::WlCopy, 6));
        assert_eq!(second_calls.load(Ordering::SeqCst), 0);
        assert_eq!(received.lock().unwrap().as_slice(), ["a{b:c}"]);
    }

    #[test]
    fn unavailable_tools_are_skipped() {
        let missing = MockTool::new(CopyMethod::Pbcopy, false, Ok(()));
        let missing_calls = Arc::clone(&missing.calls);
        let present = MockTool::new(CopyMethod::Xsel, true, Ok(()));

        let copy = Copy::with_tools(vec![Box::new(missing), Box::new(present)]);
        let result = copy.text("x").unwrap();

        assert_eq!(result.tool, CopyMethod::Xsel);
        assert_eq!(missing_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn failures_fall_through_to_next_tool() {
        let failing = MockTool::new(
            CopyMethod::Xclip,
            true,
            Err(CopyToolError::Failed("no display".into())),
        );
        let not_found = MockTool::new(CopyMethod::WlCopy, true, Err(CopyToolError::NotFound));
        let working = MockTool::new(CopyMethod::Xsel, true, Ok(()));

        let copy = Copy::with_tools(vec![
            Box::new(failing),
            Box::new(not_found),
            Box::new(working),
        ]);
        assert_eq!(copy.text("x").unwrap().tool, CopyMethod::Xsel);
    }

    #[test]
    fn all_failing_is_no_tool_available() {
        let copy = Copy::with_tools(vec![
            Box::new(MockTool::new(CopyMethod::Xclip, true, Err(CopyToolError::NotSupported))),
            Box::new(MockTool::new(CopyMethod::Xsel, false, Ok(()))),
        ]);
        assert!(matches!(
            copy.text("x"),
            Err(ClipboardError::NoToolAvailable)
        ));
    }

    #[test]
    fn empty_text_is_refused_before_any_tool_runs() {
        let tool = MockTool::new(CopyMethod::Xclip, true, Ok(()));
        let calls = Arc::clone(&tool.calls);
        let copy = Copy::with_tools(vec![Box::new(tool)]);

        assert!(matches!(copy.text(""), Err(ClipboardError::EmptyContent)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn oversized_text_is_refused() {
        let copy = Copy::with_tools(vec![Box::new(MockTool::new(
            CopyMethod::Xclip,
            true,
            Ok(()),
        ))])
        .max_bytes(4);

        match copy.text("12345") {
            Err(ClipboardError::TooLarge { max_mb, .. }) => assert_eq!(max_mb, 0),
            other => panic!("expected TooLarge, got {:?}", other),
        }
    }

    #[test]
    fn default_limit_is_ten_megabytes() {
        assert_eq!(MAX_CONTENT_SIZE, 10 * 1024 * 1024);
    }

    #[test]
    fn platform_tools_are_in_priority_order() {
        let copy = Copy::new();
        let names: Vec<_> = copy.tools().iter().map(|t| t.name()).collect();
        assert_eq!(names, ["pbcopy", "wl-copy", "xclip", "xsel"]);
    }
}
