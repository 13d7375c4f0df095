use clap::Parser;
use eyre::{Result, eyre};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vscode_snippet_export::config::{ExportConfig, load_file_config};
use vscode_snippet_export::export;
use vscode_snippet_export::locator::{BaseDirs, Platform, snippets_dir};

/// Convert VSCode snippet files to Markdown.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Snippet file to convert, without `.json` (e.g. "python").
    #[arg(short, long, value_name = "NAME", required_unless_present = "list")]
    snippet: Option<String>,

    /// List available snippet files instead of converting.
    #[arg(long, visible_alias = "ls")]
    list: bool,

    /// Language for the Markdown code fences.
    /// Defaults to the snippet name (e.g. use "bash" for shellscript).
    #[arg(short, long, value_name = "TAG")]
    language: Option<String>,

    /// Write the Markdown to this file.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Show the Markdown in the terminal.
    #[arg(short, long)]
    print: bool,

    /// Snippets directory.
    /// Defaults to VSCode's user snippets directory for this OS.
    #[arg(long, value_name = "PATH")]
    snippets_dir: Option<PathBuf>,

    /// Path to a specific configuration file.
    /// Defaults to $XDG_CONFIG_HOME/vscode-snippet-export/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log resolved paths and snippet counts.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    // 1. Load config file (CLI path > default path)
    let file_cfg = load_file_config(cli.config.as_deref())?;

    // 2. Resolve snippets_dir (CLI > Config > Platform default)
    let snippets_dir = cli
        .snippets_dir
        .or_else(|| file_cfg.snippets_dir.clone())
        .or_else(|| BaseDirs::detect().map(|base| snippets_dir(Platform::current(), &base)))
        .ok_or_else(|| {
            eyre!("Could not determine the snippets directory.\nUse --snippets-dir to specify it manually, or set snippets_dir in config.toml.")
        })?;

    // 3. Resolve language (CLI > Config > snippet name)
    let language = cli.language.or_else(|| {
        cli.snippet
            .as_deref()
            .and_then(|s| file_cfg.language_for(s))
            .map(str::to_string)
    });

    // 4. Build the Export Config
    let config = ExportConfig {
        snippets_dir,
        list: cli.list,
        snippet: cli.snippet,
        language,
        output: cli.output,
        print: cli.print,
    };

    // 5. Run the Business Logic
    let stdout = io::stdout();
    let styled = stdout.is_terminal();
    export::execute(&config, &mut stdout.lock(), styled)
}
