//! Beautify command handler

use anyhow::{Context, Result};
use std::path::Path;

use devmin::files::{read_input, write_output_path};
use devmin::theme::stderr_theme;
use devmin::{beautify_text, Config, Domain};

use super::{clipboard_for, resolve_domain};

/// Beautify a file or stdin.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    file: Option<&Path>,
    domain: Option<Domain>,
    output: Option<&Path>,
    copy: bool,
) -> Result<()> {
    let config = Config::load()?;
    let domain = resolve_domain(domain, file)?;
    let source = read_input(file)?;
    run(&config, domain, &source, output, copy)
}

pub(crate) fn run(
    config: &Config,
    domain: Domain,
    source: &str,
    output: Option<&Path>,
    copy: bool,
) -> Result<()> {
    let theme = stderr_theme();
    let text = beautify_text(domain, source)?;

    match output {
        Some(path) => {
            let written = write_output_path(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{}",
                theme.success_text(&format!("Wrote {}", written.display()))
            );
        }
        None if !copy => println!("{}", text),
        None => {}
    }

    if copy {
        let result = clipboard_for(config).text(&text)?;
        eprintln!(
            "{}",
            theme.success_text(&result.message(&format!("beautified {}", domain.label())))
        );
    }

    Ok(())
}
