//! Minify command handler

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use devmin::files::{read_input, write_output_path};
use devmin::theme::stderr_theme;
use devmin::{Config, Domain, Session, SizeStats};

use super::{clipboard_for, resolve_domain};

/// Flags for `devmin minify`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinifyOptions {
    pub save: bool,
    pub copy: bool,
    pub no_stats: bool,
    pub json: bool,
}

/// JSON shape printed by `--json`.
#[derive(Debug, Serialize)]
struct MinifyReport<'a> {
    domain: Domain,
    output: &'a str,
    stats: Option<SizeStats>,
}

/// Minify a file or stdin.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    file: Option<&Path>,
    domain: Option<Domain>,
    output: Option<&Path>,
    options: MinifyOptions,
) -> Result<()> {
    let config = Config::load()?;
    let domain = resolve_domain(domain, file)?;
    let source = read_input(file)?;
    run(&config, domain, source, output, options)
}

/// Minify `source` and route the result per `options`.
pub(crate) fn run(
    config: &Config,
    domain: Domain,
    source: String,
    output: Option<&Path>,
    options: MinifyOptions,
) -> Result<()> {
    let theme = stderr_theme();
    let mut session = Session::new(config.session.stale_output).with_active(domain);
    session.set_source(domain, source);
    session.minify(domain)?;

    let text = session.output(domain).unwrap_or_default();
    let stats = session.stats(domain);

    if options.json {
        let report = MinifyReport {
            domain,
            output: text,
            stats,
        };
        let json = serde_json::to_string_pretty(&report).context("Failed to encode JSON")?;
        println!("{}", json);
    } else if let Some(path) = output {
        let written = write_output_path(path, text)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!(
            "{}",
            theme.success_text(&format!("Wrote {}", written.display()))
        );
    } else if !options.save && !options.copy {
        println!("{}", text);
    }

    if options.save {
        let file_name = domain.file_name(&config.output.file_stem);
        let saved = session.save_output(domain, &config.output_directory(), Some(&file_name))?;
        eprintln!(
            "{}",
            theme.success_text(&format!(
                "Saved {} ({}, {} bytes)",
                saved.path.display(),
                saved.media_type,
                saved.bytes
            ))
        );
    }

    if options.copy {
        let result = session.copy_output(domain, &clipboard_for(config))?;
        eprintln!(
            "{}",
            theme.success_text(&result.message(&format!("minified {}", domain.label())))
        );
    }

    if !options.json && !options.no_stats && config.stats.show {
        if let Some(stats) = stats {
            eprintln!("{}", theme.secondary_text(&stats.summary()));
        }
    }

    Ok(())
}
