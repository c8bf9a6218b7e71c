//! Per-domain session state.

use crate::domain::Domain;
use crate::stats::SizeStats;

/// Source, last output and last stats for one domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainState {
    pub source: String,
    pub output: Option<String>,
    pub stats: Option<SizeStats>,
}

impl DomainState {
    /// True when the source holds something other than whitespace.
    pub fn has_source(&self) -> bool {
        !self.source.trim().is_empty()
    }

    /// Output text, if any non-empty output exists.
    pub fn output_text(&self) -> Option<&str> {
        self.output.as_deref().filter(|o| !o.is_empty())
    }

    /// Drop computed output and stats.
    pub fn invalidate(&mut self) {
        self.output = None;
        self.stats = None;
    }
}

/// One [`DomainState`] per domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainStates {
    pub markup: DomainState,
    pub stylesheet: DomainState,
    pub script: DomainState,
}

impl DomainStates {
    pub fn get(&self, domain: Domain) -> &DomainState {
        match domain {
            Domain::Markup => &self.markup,
            Domain::Stylesheet => &self.stylesheet,
            Domain::Script => &self.script,
        }
    }

    pub fn get_mut(&mut self, domain: Domain) -> &mut DomainState {
        match domain {
            Domain::Markup => &mut self.markup,
            Domain::Stylesheet => &mut self.stylesheet,
            Domain::Script => &mut self.script,
        }
    }
}
