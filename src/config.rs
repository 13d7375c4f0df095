use eyre::{Context, Result, eyre};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR_NAME: &str = "vscode-snippet-export";

/// Configuration required to run one export.
/// This decouples the logic from how the arguments were parsed (CLI/Config file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub snippets_dir: PathBuf,
    pub list: bool,
    pub snippet: Option<String>,
    pub language: Option<String>,
    pub output: Option<PathBuf>,
    pub print: bool,
}

/// Optional `config.toml` contents.
///
/// ```toml
/// snippets_dir = "/home/me/.config/Code - OSS/User/snippets"
///
/// [languages]
/// shellscript = "bash"
/// ```
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub snippets_dir: Option<PathBuf>,
    /// Snippet file name → code fence language.
    #[serde(default)]
    pub languages: HashMap<String, String>,
}

impl FileConfig {
    pub fn language_for(&self, snippet: &str) -> Option<&str> {
        self.languages
            .get(snippet)
            .or_else(|| self.languages.get(&snippet.to_lowercase()))
            .map(String::as_str)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join("config.toml"))
}

/// Load the config file.
///
/// `--config` paths must exist. Without one, only
/// `$XDG_CONFIG_HOME/vscode-snippet-export/config.toml` (or the OS equivalent)
/// is tried, and a missing file means defaults.
pub fn load_file_config(explicit_path: Option<&Path>) -> Result<FileConfig> {
    let path = if let Some(p) = explicit_path {
        if !p.exists() {
            return Err(eyre!("Config file not found: {}", p.display()));
        }
        Some(p.to_path_buf())
    } else {
        default_config_path().filter(|p| p.exists())
    };

    match path {
        None => Ok(FileConfig::default()),
        Some(p) => {
            let content = fs::read_to_string(&p)
                .wrap_err_with(|| format!("Failed to read config: {}", p.display()))?;
            toml::from_str(&content)
                .wrap_err_with(|| format!("Failed to parse config: {}", p.display()))
        }
    }
}
