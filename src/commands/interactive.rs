//! Interactive session handler
//!
//! A line-based loop over one [`Session`]. Plain lines are appended to the
//! active buffer; lines starting with `:` are commands. Errors are reported
//! and the loop carries on.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use devmin::clipboard::copy::Copy;
use devmin::files::read_file;
use devmin::theme::{current_theme, Theme};
use devmin::{Config, Domain, Session};
use tracing::debug;

use super::clipboard_for;

const HELP: &str = "\
Commands:
  :html :css :js     Switch the active buffer
  :load FILE         Replace the buffer with a file's contents
  :clear             Empty the buffer and its output
  :minify            Minify the buffer
  :beautify          Re-expand the last output
  :show              Print the last output
  :source            Print the buffer
  :stats             Print the last size readout
  :copy              Copy the last output to the clipboard
  :save [NAME]       Write the last output (default minified.<ext>)
  :help              Show this list
  :quit              Leave the session
Other lines are appended to the buffer. Start a line with '::' to append
a line that begins with ':' (e.g. '::root {').";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Append(String),
    Select(Domain),
    Load(PathBuf),
    Clear,
    Minify,
    Beautify,
    Show,
    Source,
    Stats,
    Copy,
    Save(Option<String>),
    Help,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        if let Some(rest) = line.strip_prefix("::") {
            return ReplCommand::Append(format!(":{}", rest));
        }
        let Some(command) = line.strip_prefix(':') else {
            return ReplCommand::Append(line.to_string());
        };

        let command = command.trim();
        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (command, None),
        };

        match (name, arg) {
            ("html", None) => ReplCommand::Select(Domain::Markup),
            ("css", None) => ReplCommand::Select(Domain::Stylesheet),
            ("js", None) => ReplCommand::Select(Domain::Script),
            ("load", Some(path)) => ReplCommand::Load(PathBuf::from(path)),
            ("clear", None) => ReplCommand::Clear,
            ("minify", None) => ReplCommand::Minify,
            ("beautify", None) => ReplCommand::Beautify,
            ("show", None) => ReplCommand::Show,
            ("source", None) => ReplCommand::Source,
            ("stats", None) => ReplCommand::Stats,
            ("copy", None) => ReplCommand::Copy,
            ("save", name) => ReplCommand::Save(name.map(str::to_string)),
            ("help" | "h" | "?", None) => ReplCommand::Help,
            ("quit" | "q" | "exit", None) => ReplCommand::Quit,
            _ => ReplCommand::Unknown(line.trim().to_string()),
        }
    }
}

/// Whether the loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive loop state.
pub struct Repl {
    session: Session,
    config: Config,
    clipboard: Copy,
    theme: Theme,
}

impl Repl {
    pub fn new(config: Config, clipboard: Copy, theme: Theme, start: Domain) -> Self {
        Self {
            session: Session::new(config.session.stale_output).with_active(start),
            config,
            clipboard,
            theme,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Text shown before each input line.
    pub fn prompt(&self) -> String {
        self.theme
            .accent_text(&format!("devmin[{}]> ", self.session.active().name()))
    }

    /// Run one input line, writing any response to `out`.
    pub fn execute(&mut self, line: &str, out: &mut dyn Write) -> io::Result<Flow> {
        let domain = self.session.active();
        let command = ReplCommand::parse(line);
        debug!(?command, domain = domain.name(), "repl command");

        match command {
            ReplCommand::Append(text) => self.session.append_line(domain, &text),
            ReplCommand::Select(next) => {
                self.session.select(next);
                let note = format!("Switched to {}", next.label());
                writeln!(out, "{}", self.theme.secondary_text(&note))?;
            }
            ReplCommand::Load(path) => match read_file(&path) {
                Ok(text) => {
                    let bytes = text.len();
                    self.session.set_source(domain, text);
                    let note = format!("Loaded {} ({} bytes)", path.display(), bytes);
                    writeln!(out, "{}", self.theme.secondary_text(&note))?;
                }
                Err(e) => self.report(out, &e.to_string())?,
            },
            ReplCommand::Clear => {
                self.session.clear(domain);
                let note = format!("Cleared {}", domain.label());
                writeln!(out, "{}", self.theme.secondary_text(&note))?;
            }
            ReplCommand::Minify => match self
                .session
                .minify(domain)
                .map(|state| (state.output.clone().unwrap_or_default(), state.stats))
            {
                Ok((output, stats)) => {
                    writeln!(out, "{}", output)?;
                    if self.config.stats.show {
                        if let Some(stats) = stats {
                            writeln!(out, "{}", self.theme.secondary_text(&stats.summary()))?;
                        }
                    }
                }
                Err(e) => self.report(out, &e.to_string())?,
            },
            ReplCommand::Beautify => match self.session.beautify(domain).map(str::to_string) {
                Ok(text) => writeln!(out, "{}", text)?,
                Err(e) => self.report(out, &e.to_string())?,
            },
            ReplCommand::Show => match self.session.output(domain) {
                Some(text) => writeln!(out, "{}", text)?,
                None => self.report(out, &format!("No {} output yet", domain.label()))?,
            },
            ReplCommand::Source => writeln!(out, "{}", self.session.source(domain))?,
            ReplCommand::Stats => match self.session.stats(domain) {
                Some(stats) => writeln!(out, "{}", self.theme.primary_text(&stats.summary()))?,
                None => self.report(out, &format!("No {} stats yet", domain.label()))?,
            },
            ReplCommand::Copy => match self.session.copy_output(domain, &self.clipboard) {
                Ok(result) => {
                    let note = result.message(&format!("{} output", domain.label()));
                    writeln!(out, "{}", self.theme.success_text(&note))?;
                }
                Err(e) => self.report(out, &e.to_string())?,
            },
            ReplCommand::Save(name) => {
                let default_name = domain.file_name(&self.config.output.file_stem);
                let file_name = name.unwrap_or(default_name);
                let dir = self.config.output_directory();
                match self.session.save_output(domain, &dir, Some(&file_name)) {
                    Ok(saved) => {
                        let note = format!(
                            "Saved {} ({}, {} bytes)",
                            saved.path.display(),
                            saved.media_type,
                            saved.bytes
                        );
                        writeln!(out, "{}", self.theme.success_text(&note))?;
                    }
                    Err(e) => self.report(out, &e.to_string())?,
                }
            }
            ReplCommand::Help => writeln!(out, "{}", HELP)?,
            ReplCommand::Quit => return Ok(Flow::Quit),
            ReplCommand::Unknown(text) => self.report(
                out,
                &format!("Unknown command '{}' (type :help, or '::' to append)", text),
            )?,
        }

        Ok(Flow::Continue)
    }

    fn report(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        writeln!(out, "{}", self.theme.error_text(message))
    }
}

/// Run the interactive loop on stdin/stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle(domain: Option<Domain>) -> Result<()> {
    let config = Config::load()?;
    let clipboard = clipboard_for(&config);
    let theme = current_theme();
    let mut repl = Repl::new(config, clipboard, theme, domain.unwrap_or(Domain::Markup));

    let interactive = atty::is(atty::Stream::Stdin);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if interactive {
        writeln!(stdout, "devmin interactive - type :help for commands")?;
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            write!(stdout, "{}", repl.prompt())?;
            stdout.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        if repl.execute(&line?, &mut stdout)? == Flow::Quit {
            break;
        }
    }

    Ok(())
}
