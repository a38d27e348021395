//! Catalog document parsing.
//!
//! The catalog is a free-form text document (typically `AGENTS.md`) that
//! embeds one block per skill:
//!
//! ```text
//! <skill>
//! <name>canvas-design</name>
//! <description>"Create posters and static visual art"</description>
//! <location>project</location>
//! </skill>
//! ```
//!
//! Parsing happens in two steps. The document is first cut into blocks, each
//! running from a `<skill>` tag up to its `</skill>` or the next `<skill>`,
//! whichever comes first. The name and description are then matched inside
//! a single block, so a malformed block can never borrow fields from its
//! neighbour.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use super::error::SkillError;
use super::store::{MissingPolicy, read_with_policy};

const OPEN_TAG: &str = "<skill>";
const CLOSE_TAG: &str = "</skill>";

static FIELDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A\s*<name>(.*?)</name>\s*<description>(.*?)</description>")
        .expect("catalog field pattern is valid")
});

/// One skill entry of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillRecord {
    pub name: String,
    pub description: String,
}

/// Parse every well-formed skill block of `document`, in document order.
///
/// Blocks missing a field are skipped. Every other block yields one record,
/// repeated names included.
pub fn parse(document: &str) -> Vec<SkillRecord> {
    let mut records = Vec::new();

    for block in blocks(document) {
        let Some(caps) = FIELDS.captures(block) else {
            debug!("Skipping malformed skill block");
            continue;
        };

        let name = caps[1].trim().to_string();
        let description = strip_quotes(caps[2].trim()).to_string();

        records.push(SkillRecord { name, description });
    }

    records
}

/// Read and parse the catalog document at `path`.
///
/// The catalog is a bundled asset, so a missing file is an error here.
pub fn load(path: &Path) -> Result<Vec<SkillRecord>, SkillError> {
    let document = read_with_policy(path, MissingPolicy::Propagate)?;
    Ok(parse(&document))
}

/// Split the document into the bodies of its `<skill>` blocks.
fn blocks(document: &str) -> impl Iterator<Item = &str> {
    let starts: Vec<usize> = document
        .match_indices(OPEN_TAG)
        .map(|(pos, _)| pos + OPEN_TAG.len())
        .collect();

    (0..starts.len()).map(move |i| {
        let start = starts[i];
        let next_open = starts
            .get(i + 1)
            .map_or(document.len(), |next| next - OPEN_TAG.len());
        let body = &document[start..next_open];
        match body.find(CLOSE_TAG) {
            Some(close) => &body[..close],
            None => body,
        }
    })
}

/// Remove one layer of enclosing double quotes.
fn strip_quotes(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CATALOG: &str = r#"# Agents

Some preamble with <name>noise</name> outside any block.

<available_skills>
<skill>
<name>
  algorithmic-art
</name>
<description>"Create generative art with p5.js.
Supports flow fields and particles."</description>
<location>project</location>
</skill>

Text between blocks.

<skill>
<name>canvas-design</name>
<description>"Create posters"</description>
</skill>
<skill><name>docx</name><description>Word documents</description></skill>
</available_skills>
"#;

    #[test]
    fn test_parse_in_document_order() {
        let records = parse(CATALOG);
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["algorithmic-art", "canvas-design", "docx"]);
    }

    #[test]
    fn test_parse_trims_and_strips_quotes() {
        let records = parse(CATALOG);
        assert_eq!(records[0].name, "algorithmic-art");
        assert_eq!(
            records[0].description,
            "Create generative art with p5.js.\nSupports flow fields and particles."
        );
        assert_eq!(records[1].description, "Create posters");
        assert_eq!(records[2].description, "Word documents");
    }

    #[test]
    fn test_block_without_description_is_skipped() {
        let doc = r#"
<skill><name>broken</name><location>x</location></skill>
<skill><name>good</name><description>"fine"</description></skill>
"#;
        let records = parse(doc);
        assert_eq!(
            records,
            vec![SkillRecord {
                name: "good".to_string(),
                description: "fine".to_string(),
            }]
        );
    }

    #[test]
    fn test_unclosed_block_does_not_swallow_next() {
        let doc = "<skill><name>open</name>\n<skill><name>next</name><description>d</description>";
        let records = parse(doc);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "next");
    }

    #[test]
    fn test_empty_document() {
        assert!(parse("").is_empty());
        assert!(parse("no skills here").is_empty());
    }

    #[test]
    fn test_repeated_names_are_all_kept() {
        let doc = "<skill><name>a</name><description>one</description></skill>\
                   <skill><name>a</name><description>two</description></skill>";
        let records = parse(doc);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].description, "one");
        assert_eq!(records[1].description, "two");
    }

    #[test]
    fn test_load_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("AGENTS.md");
        fs::write(&path, CATALOG).unwrap();

        let records = load(&path).unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_load_missing_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let err = load(&temp_dir.path().join("AGENTS.md")).unwrap_err();
        assert!(err.is_not_found());
    }
}
