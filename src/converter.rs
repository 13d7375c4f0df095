use crate::error::{Result, SnippetError};
use crate::renderer::render_markdown;
use crate::snippet::SnippetFile;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read and parse one snippet file.
pub fn load_snippet_file(path: &Path) -> Result<SnippetFile> {
    let content = fs::read_to_string(path).map_err(|source| SnippetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    SnippetFile::parse(&content).map_err(|source| SnippetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Code fence tag used when none is given: the file's base name.
pub fn default_language(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Convert the snippet file at `path` to a Markdown document.
pub fn convert(path: &Path, language: Option<&str>) -> Result<String> {
    let file = load_snippet_file(path)?;
    let language = language
        .map(str::to_string)
        .unwrap_or_else(|| default_language(path));
    debug!(path = %path.display(), snippets = file.len(), %language, "rendering snippets");
    Ok(render_markdown(&file, &language))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn language_defaults_to_file_stem() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "python.json", r#"{"Print": {"prefix": "pr", "body": ["print($1)"]}}"#);

        let doc = convert(&path, None).unwrap();
        assert!(doc.contains("```python\nprint($1)\n```"));
    }

    #[test]
    fn explicit_language_overrides_stem() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "shellscript.json", r#"{"Echo": {"body": "echo $1"}}"#);

        let doc = convert(&path, Some("bash")).unwrap();
        assert!(doc.contains("```bash\necho $1\n```"));
        assert!(!doc.contains("```shellscript"));
    }

    #[test]
    fn invalid_json_is_parse_error_with_position() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "broken.json", "{\n  \"A\": {\"body\": \n}");

        let err = convert(&path, None).unwrap_err();
        assert!(matches!(err, SnippetError::Parse { .. }));
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = convert(&dir.path().join("nope.json"), None).unwrap_err();
        assert!(matches!(err, SnippetError::Read { .. }));
    }
}
