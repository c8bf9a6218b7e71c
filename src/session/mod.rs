//! Interactive minifier session.
//!
//! Holds the source text, last output and last size readout for each of the
//! three domains, plus which domain is active. State lives exactly as long as
//! the [`Session`] value; nothing is global or persisted.
//!
//! Every operation either succeeds or returns a [`SessionError`] without
//! touching state. Empty input and beautify failures are advisory
//! ([`SessionError::is_advisory`]): callers report them and carry on.

mod error;
mod state;

pub use error::{Action, SessionError};
pub use state::{DomainState, DomainStates};

use std::any::Any;
use std::cell::Cell;
use std::panic::{self, UnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::Once;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clipboard::copy::Copy;
use crate::clipboard::CopyResult;
use crate::domain::Domain;
use crate::files::write_output;
use crate::minify;
use crate::stats::SizeStats;

/// What happens to computed output when the source text changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaleOutputPolicy {
    /// Editing the source clears output and stats.
    #[default]
    Invalidate,
    /// Output and stats stay visible until the next minify.
    Keep,
}

/// A file written by [`Session::save_output`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedOutput {
    pub path: PathBuf,
    pub media_type: &'static str,
    pub bytes: usize,
}

/// Per-domain minifier state for one interactive session.
#[derive(Debug, Clone)]
pub struct Session {
    states: DomainStates,
    active: Domain,
    policy: StaleOutputPolicy,
}

impl Session {
    /// New empty session, starting on the HTML domain.
    pub fn new(policy: StaleOutputPolicy) -> Self {
        Self {
            states: DomainStates::default(),
            active: Domain::Markup,
            policy,
        }
    }

    /// Start on a specific domain.
    pub fn with_active(mut self, domain: Domain) -> Self {
        self.active = domain;
        self
    }

    pub fn active(&self) -> Domain {
        self.active
    }

    pub fn select(&mut self, domain: Domain) {
        self.active = domain;
    }

    pub fn policy(&self) -> StaleOutputPolicy {
        self.policy
    }

    pub fn state(&self, domain: Domain) -> &DomainState {
        self.states.get(domain)
    }

    pub fn source(&self, domain: Domain) -> &str {
        &self.states.get(domain).source
    }

    pub fn output(&self, domain: Domain) -> Option<&str> {
        self.states.get(domain).output.as_deref()
    }

    pub fn stats(&self, domain: Domain) -> Option<SizeStats> {
        self.states.get(domain).stats
    }

    /// Replace the source text.
    pub fn set_source(&mut self, domain: Domain, text: impl Into<String>) {
        let text = text.into();
        let policy = self.policy;
        let state = self.states.get_mut(domain);
        if state.source != text {
            state.source = text;
            if policy == StaleOutputPolicy::Invalidate {
                state.invalidate();
            }
        }
    }

    /// Append one line to the source text.
    pub fn append_line(&mut self, domain: Domain, line: &str) {
        let mut text = self.source(domain).to_string();
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(line);
        self.set_source(domain, text);
    }

    /// Reset a domain: source, output and stats.
    pub fn clear(&mut self, domain: Domain) {
        *self.states.get_mut(domain) = DomainState::default();
    }

    /// Minify the domain's source, storing output and stats.
    ///
    /// Stats are only recorded when the original has a non-zero size.
    pub fn minify(&mut self, domain: Domain) -> Result<&DomainState, SessionError> {
        let state = self.states.get_mut(domain);
        if !state.has_source() {
            return Err(SessionError::EmptyInput {
                domain,
                action: Action::Minify,
            });
        }

        let outcome = minify::minify_with_stats(domain, &state.source);
        debug!(
            domain = domain.name(),
            savings = outcome.stats.savings_percent,
            "session minify"
        );
        state.stats = outcome.stats.is_displayable().then_some(outcome.stats);
        state.output = Some(outcome.output);
        Ok(state)
    }

    /// Beautify the domain's current output in place.
    ///
    /// The expander runs behind a panic boundary: any failure becomes
    /// [`SessionError::TransformFailure`] and the previous output is kept.
    /// On success the stats are cleared since they describe minified text.
    pub fn beautify(&mut self, domain: Domain) -> Result<&str, SessionError> {
        self.beautify_using(domain, minify::beautify)
    }

    fn beautify_using<F>(&mut self, domain: Domain, expand: F) -> Result<&str, SessionError>
    where
        F: FnOnce(Domain, &str) -> String + UnwindSafe,
    {
        let input = self.require_output(domain, Action::Beautify)?;
        let beautified = beautify_with(domain, input, expand)?;

        let state = self.states.get_mut(domain);
        state.stats = None;
        Ok(state.output.insert(beautified).as_str())
    }

    /// Copy the domain's output to the clipboard.
    pub fn copy_output(
        &self,
        domain: Domain,
        clipboard: &Copy,
    ) -> Result<CopyResult, SessionError> {
        let text = self.require_output(domain, Action::Copy)?;
        Ok(clipboard.text(text)?)
    }

    /// Write the domain's output to `dir`.
    ///
    /// `file_name` defaults to `minified.<ext>` for the domain.
    pub fn save_output(
        &self,
        domain: Domain,
        dir: &Path,
        file_name: Option<&str>,
    ) -> Result<SavedOutput, SessionError> {
        let text = self.require_output(domain, Action::Save)?;
        let file_name = file_name
            .map(str::to_string)
            .unwrap_or_else(|| domain.default_file_name());

        let path = write_output(dir, &file_name, text)?;
        debug!(domain = domain.name(), path = %path.display(), "saved output");

        Ok(SavedOutput {
            path,
            media_type: domain.media_type(),
            bytes: text.len(),
        })
    }

    fn require_output(&self, domain: Domain, action: Action) -> Result<&str, SessionError> {
        self.states
            .get(domain)
            .output_text()
            .ok_or(SessionError::EmptyInput { domain, action })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(StaleOutputPolicy::default())
    }
}

/// Beautify `text` behind a panic boundary.
///
/// Blank input is [`SessionError::EmptyInput`]; a panic inside the expander
/// becomes [`SessionError::TransformFailure`] and is not printed by the
/// panic hook.
pub fn beautify_text(domain: Domain, text: &str) -> Result<String, SessionError> {
    beautify_with(domain, text, minify::beautify)
}

fn beautify_with<F>(domain: Domain, text: &str, expand: F) -> Result<String, SessionError>
where
    F: FnOnce(Domain, &str) -> String + UnwindSafe,
{
    if text.trim().is_empty() {
        return Err(SessionError::EmptyInput {
            domain,
            action: Action::Beautify,
        });
    }

    install_quiet_hook();
    QUIET_PANICS.with(|quiet| quiet.set(true));
    let result = panic::catch_unwind(|| expand(domain, text));
    QUIET_PANICS.with(|quiet| quiet.set(false));

    result.map_err(|payload| {
        let reason = panic_message(payload.as_ref());
        debug!(domain = domain.name(), %reason, "expander panicked");
        SessionError::TransformFailure { domain, reason }
    })
}

thread_local! {
    /// Set while an expander runs on this thread.
    static QUIET_PANICS: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Wrap the panic hook once so expander panics on a quiet thread print
/// nothing. Panics anywhere else reach the previous hook.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !QUIET_PANICS.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

/// Best-effort text from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unexpected internal error".to_string()
    }
}
