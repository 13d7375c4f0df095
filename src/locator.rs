use crate::error::{Result, SnippetError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Host operating system, as far as snippet storage is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value to a platform.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            "macos" => Self::MacOs,
            "linux" => Self::Linux,
            _ => Self::Other,
        }
    }
}

/// User directories the snippets path is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDirs {
    pub home: PathBuf,
    /// `%APPDATA%` on Windows. Unused elsewhere.
    pub app_data: Option<PathBuf>,
}

impl BaseDirs {
    pub fn detect() -> Option<Self> {
        let home = dirs::home_dir()?;
        let app_data = if cfg!(windows) {
            dirs::config_dir()
        } else {
            None
        };
        Some(Self { home, app_data })
    }
}

/// Where VSCode keeps user snippets on `platform`.
pub fn snippets_dir(platform: Platform, base: &BaseDirs) -> PathBuf {
    match platform {
        Platform::Windows => base
            .app_data
            .clone()
            .unwrap_or_else(|| base.home.join("AppData").join("Roaming"))
            .join("Code/User/snippets"),
        Platform::MacOs => base
            .home
            .join("Library/Application Support/Code/User/snippets"),
        Platform::Linux | Platform::Other => base.home.join(".config/Code/User/snippets"),
    }
}

/// Finds snippet files inside one snippets directory.
#[derive(Debug, Clone)]
pub struct SnippetLocator {
    dir: PathBuf,
}

impl SnippetLocator {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Base names of the `*.json` files directly inside the directory, sorted.
    pub fn list_files(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SnippetError::DirectoryNotFound {
                path: self.dir.clone(),
            },
            _ => SnippetError::Read {
                path: self.dir.clone(),
                source: e,
            },
        })?;

        let mut names: Vec<String> = entries
            .flatten()
            .map(|e| e.path())
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        names.sort();

        debug!(dir = %self.dir.display(), count = names.len(), "listed snippet files");
        Ok(names)
    }

    /// Full path of `<dir>/<name>.json`.
    ///
    /// The exact name is tried first, then its lowercase form, since VSCode
    /// names language snippet files after lowercase language ids.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let exact = self.dir.join(format!("{name}.json"));
        if exact.is_file() {
            return Ok(exact);
        }

        let lower = self.dir.join(format!("{}.json", name.to_lowercase()));
        if lower.is_file() {
            debug!(requested = name, path = %lower.display(), "resolved snippet by lowercase name");
            return Ok(lower);
        }

        Err(SnippetError::FileNotFound { path: exact })
    }
}
