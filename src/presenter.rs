//! Output sinks: the Markdown file, the styled terminal view and the listing.
use crate::error::{Result, SnippetError};
use crossterm::style::Stylize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

const RULE_WIDTH: usize = 48;

/// Write `markdown` to `path`, following symlinks and keeping the mode of an
/// existing file.
pub fn write_markdown(path: &Path, markdown: &str) -> Result<()> {
    fs::write(path, markdown).map_err(|source| SnippetError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), bytes = markdown.len(), "wrote markdown");
    Ok(())
}

/// Display a rendered document.
///
/// With `styled` the document is framed in a panel with coloured headers and
/// boxed code fences; otherwise it is written verbatim.
pub fn print_markdown<W: Write>(
    out: &mut W,
    title: &str,
    markdown: &str,
    styled: bool,
) -> io::Result<()> {
    if !styled {
        write!(out, "{markdown}")?;
        if !markdown.ends_with('\n') {
            writeln!(out)?;
        }
        return Ok(());
    }

    let border = "│".dark_grey();
    writeln!(
        out,
        "{} {} {}",
        "╭─".dark_grey(),
        title.bold(),
        "─".repeat(RULE_WIDTH.saturating_sub(title.chars().count())).dark_grey()
    )?;

    let mut in_code_block = false;
    for line in markdown.lines() {
        // Only a bare fence closes a block; body lines may carry their own fences.
        if in_code_block && line == "```" {
            writeln!(out, "{border} {}", format!("└{}", "─".repeat(RULE_WIDTH - 4)).dark_grey())?;
            in_code_block = false;
            continue;
        }
        if !in_code_block && let Some(lang) = line.strip_prefix("```") {
            let label = if lang.is_empty() {
                format!("┌{}", "─".repeat(RULE_WIDTH - 4))
            } else {
                format!("┌─ {lang} {}", "─".repeat(RULE_WIDTH.saturating_sub(lang.len() + 8)))
            };
            writeln!(out, "{border} {}", label.dark_grey())?;
            in_code_block = true;
            continue;
        }

        if in_code_block {
            writeln!(out, "{border} {} {}", "│".dark_grey(), line.green())?;
            continue;
        }

        if let Some(rest) = line.strip_prefix("#### ") {
            writeln!(out, "{border} {}", rest.bold())?;
        } else if let Some(rest) = line.strip_prefix("### ") {
            writeln!(out, "{border} {}", rest.bold().cyan())?;
        } else if let Some(rest) = line.strip_prefix("# ") {
            writeln!(out, "{border} {}", rest.bold().magenta().underlined())?;
        } else if let Some(rest) = line.trim_start().strip_prefix("**Prefix**:") {
            writeln!(out, "{border} {}{}", "Prefix:".bold().yellow(), rest)?;
        } else if line == "---" {
            writeln!(out, "{border} {}", "─".repeat(RULE_WIDTH - 2).dark_grey())?;
        } else if let Some(rest) = line.strip_prefix('_').and_then(|l| l.strip_suffix('_')) {
            writeln!(out, "{border} {}", rest.italic())?;
        } else {
            writeln!(out, "{border} {line}")?;
        }
    }

    writeln!(out, "{}", format!("╰{}", "─".repeat(RULE_WIDTH + 2)).dark_grey())?;
    Ok(())
}

/// Display the snippet files found in `dir`.
pub fn print_listing<W: Write>(
    out: &mut W,
    dir: &Path,
    names: &[String],
    styled: bool,
) -> io::Result<()> {
    if names.is_empty() {
        let msg = format!("No snippet files found in {}", dir.display());
        if styled {
            writeln!(out, "{}", msg.yellow())?;
        } else {
            writeln!(out, "{msg}")?;
        }
        return Ok(());
    }

    let heading = format!("Available snippets in {}:", dir.display());
    if styled {
        writeln!(out, "{}", heading.green())?;
    } else {
        writeln!(out, "{heading}")?;
    }
    for name in names {
        if styled {
            writeln!(out, "- {}", name.as_str().blue())?;
        } else {
            writeln!(out, "- {name}")?;
        }
    }
    Ok(())
}
