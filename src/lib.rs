//! # vscode-snippet-export
//!
//! A CLI tool that turns [VSCode](https://code.visualstudio.com) user snippet files into
//! Markdown documentation.
//!
//! ## What it does
//!
//! VSCode stores user-defined snippets as one JSON file per language (`python.json`,
//! `rust.json`, ...) in a per-user `snippets` directory. This tool finds that directory,
//! reads one snippet file, and renders every snippet as a Markdown section with its
//! prefixes, description and template body in a fenced code block.
//!
//! Snippet files are only ever read. The only write is the optional output file, which is
//! created after the whole document has been rendered.
//!
//! ## Usage
//!
//! ```sh
//! # See which snippet files exist
//! vscode-snippet-export --list
//!
//! # Render python.json to a file
//! vscode-snippet-export --snippet python --output python-snippets.md
//!
//! # Show shellscript.json in the terminal with bash highlighting
//! vscode-snippet-export --snippet shellscript --language bash --print
//! ```
//!
//! The snippets directory and per-file languages can be persisted in
//! `~/.config/vscode-snippet-export/config.toml`.
pub mod config;
pub mod converter;
pub mod error;
pub mod export;
pub mod locator;
pub mod presenter;
pub mod renderer;
pub mod snippet;

pub use error::{Result, SnippetError};
