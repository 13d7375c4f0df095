//! Types for the VSCode user snippet file format.
//!
//! A snippet file is a JSON object mapping a snippet name to its definition:
//!
//! ```json
//! {
//!   "Print to console": {
//!     "prefix": ["log", "cl"],
//!     "body": ["console.log('$1');", "$2"],
//!     "description": "Log output to console"
//!   }
//! }
//! ```
//!
//! `prefix`, `description` and `body` may each be a single string or an array
//! of strings. Editor-only keys such as `scope` or `isFileTemplate` are ignored.
use indexmap::IndexMap;
use serde::Deserialize;

/// A field that VSCode accepts either as a plain string or as a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for Vec<String> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        }
    }
}

/// Snippet definition exactly as it appears on disk.
#[derive(Debug, Deserialize)]
struct RawSnippet {
    #[serde(default)]
    prefix: Option<OneOrMany>,
    #[serde(default)]
    description: Option<OneOrMany>,
    body: OneOrMany,
}

/// One named snippet with its string-or-list fields normalized to lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetEntry {
    pub name: String,
    pub prefix: Vec<String>,
    pub description: Vec<String>,
    pub body: Vec<String>,
}

impl SnippetEntry {
    fn from_raw(name: String, raw: RawSnippet) -> Self {
        Self {
            name,
            prefix: raw.prefix.map(Vec::from).unwrap_or_default(),
            description: raw.description.map(Vec::from).unwrap_or_default(),
            body: raw.body.into(),
        }
    }
}

/// All snippets from one file, in the order their keys appear in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetFile {
    entries: Vec<SnippetEntry>,
}

impl SnippetFile {
    /// Parse the contents of a snippet file.
    ///
    /// Fails when the document is not valid JSON, the top level is not an
    /// object, or an entry lacks a `body`.
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        let raw: IndexMap<String, RawSnippet> = serde_json::from_str(content)?;
        let entries = raw
            .into_iter()
            .map(|(name, snippet)| SnippetEntry::from_raw(name, snippet))
            .collect();
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[SnippetEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
