use crate::snippet::{SnippetEntry, SnippetFile};

const NOT_AVAILABLE: &str = "n/a";

/// Render every snippet in `file` as one Markdown document.
///
/// Entries keep document order. Bodies are copied verbatim into a code fence
/// tagged with `language`, so placeholders like `${1:name}` pass through as
/// plain text.
pub fn render_markdown(file: &SnippetFile, language: &str) -> String {
    if file.is_empty() {
        return format!("# {language} snippets\n\n_No snippets defined._\n");
    }

    file.entries()
        .iter()
        .map(|entry| render_entry(entry, language))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_entry(entry: &SnippetEntry, language: &str) -> String {
    let prefix = join_or_na(&entry.prefix, ", ");
    let description = join_or_na(&entry.description, "\n");
    let body = entry.body.join("\n");

    format!(
        "### {name}\n **Prefix**: {prefix}\n{description}\n\n#### Template\n\n```{language}\n{body}\n```\n\n---\n",
        name = entry.name,
    )
}

fn join_or_na(parts: &[String], sep: &str) -> String {
    if parts.iter().all(|p| p.is_empty()) {
        NOT_AVAILABLE.to_string()
    } else {
        parts.join(sep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(json: &str) -> SnippetFile {
        SnippetFile::parse(json).unwrap()
    }

    /// Text between the opening fence for `language` and the next closing fence.
    fn fenced_bodies<'a>(doc: &'a str, language: &str) -> Vec<&'a str> {
        let open = format!("```{language}\n");
        doc.match_indices(&open)
            .map(|(start, _)| {
                let rest = &doc[start + open.len()..];
                let end = rest.find("\n```\n").unwrap();
                &rest[..end]
            })
            .collect()
    }

    #[test]
    fn renders_minimal_entry() {
        let doc = render_markdown(
            &parse(r#"{"Print": {"prefix": "pr", "body": ["print($1)"]}}"#),
            "python",
        );
        assert_eq!(
            doc,
            "### Print\n **Prefix**: pr\nn/a\n\n#### Template\n\n```python\nprint($1)\n```\n\n---\n"
        );
    }

    #[test]
    fn joins_prefixes_and_description_lines() {
        let doc = render_markdown(
            &parse(
                r#"{"Log": {
                    "prefix": ["log", "cl"],
                    "description": ["Log output", "to the console"],
                    "body": "console.log($1);"
                }}"#,
            ),
            "javascript",
        );
        assert!(doc.contains(" **Prefix**: log, cl\nLog output\nto the console\n\n#### Template"));
    }

    #[test]
    fn missing_prefix_and_description_render_na() {
        let doc = render_markdown(&parse(r#"{"Bare": {"body": "x"}}"#), "rust");
        assert!(doc.starts_with("### Bare\n **Prefix**: n/a\nn/a\n"));
    }

    #[test]
    fn empty_prefix_renders_na() {
        let doc = render_markdown(
            &parse(r#"{"Blank": {"prefix": [], "description": "", "body": "x"}}"#),
            "rust",
        );
        assert!(doc.starts_with("### Blank\n **Prefix**: n/a\nn/a\n"));
    }

    #[test]
    fn one_section_per_entry_in_order() {
        let doc = render_markdown(
            &parse(
                r#"{
                    "second": {"body": "2"},
                    "first": {"body": "1"},
                    "third": {"body": "3"}
                }"#,
            ),
            "txt",
        );
        let headers: Vec<&str> = doc.lines().filter(|l| l.starts_with("### ")).collect();
        assert_eq!(headers, vec!["### second", "### first", "### third"]);
        assert_eq!(doc.matches("\n---\n").count(), 3);
        assert!(doc.contains("---\n\n### first"));
    }

    #[test]
    fn body_is_preserved_verbatim() {
        let file = parse(
            r#"{
                "Fn": {"body": ["fn ${1:name}() {", "\t$0", "}"]},
                "Lit": {"body": ["let s = \"$TM_FILENAME\";", "", "    ${2|a,b|}"]}
            }"#,
        );
        let doc = render_markdown(&file, "rust");
        let bodies = fenced_bodies(&doc, "rust");
        let expected: Vec<String> = file.entries().iter().map(|e| e.body.join("\n")).collect();
        assert_eq!(bodies, expected);
    }

    #[test]
    fn empty_file_renders_notice() {
        let doc = render_markdown(&SnippetFile::default(), "go");
        assert_eq!(doc, "# go snippets\n\n_No snippets defined._\n");
    }
}
