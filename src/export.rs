use crate::config::ExportConfig;
use crate::converter;
use crate::locator::SnippetLocator;
use crate::presenter;
use eyre::{Result, eyre};
use std::io::Write;
use tracing::debug;

/// Run one invocation: list the snippets directory, or convert one snippet
/// file and hand the document to the requested sinks.
///
/// The document is fully rendered before any sink runs, so a failed
/// conversion writes nothing.
pub fn execute<W: Write>(config: &ExportConfig, out: &mut W, styled: bool) -> Result<()> {
    let locator = SnippetLocator::new(&config.snippets_dir);
    debug!(dir = %locator.dir().display(), "using snippets directory");

    if config.list {
        let names = locator.list_files()?;
        presenter::print_listing(out, locator.dir(), &names, styled)?;
        return Ok(());
    }

    let snippet = config
        .snippet
        .as_deref()
        .ok_or_else(|| eyre!("No snippet selected.\nUse --snippet <NAME>, or --list to see what is available."))?;

    let path = locator.resolve(snippet)?;
    let markdown = converter::convert(&path, config.language.as_deref())?;

    if config.print {
        presenter::print_markdown(out, snippet, &markdown, styled)?;
    }

    if let Some(output) = &config.output {
        presenter::write_markdown(output, &markdown)?;
    }

    if !config.print && config.output.is_none() {
        presenter::print_markdown(out, snippet, &markdown, false)?;
    }

    Ok(())
}
