//! File resource template.
//!
//! `file:///{path}` reads `path` exactly as given: no normalization, no
//! sandboxing. A missing or unreadable file yields an error text, never a
//! failed read.

use std::path::Path;

use rmcp::model::ResourceContents;
use tracing::{debug, instrument};

use super::ResourceTemplateDefinition;
use crate::domains::resources::error::ResourceError;
use crate::domains::skills::MissingPolicy;
use crate::domains::skills::store::read_with_policy;

const PREFIX: &str = "file:///";

/// Files addressed by path.
pub struct FileResource;

impl ResourceTemplateDefinition for FileResource {
    const URI_TEMPLATE: &'static str = "file:///{path}";
    const NAME: &'static str = "Files";
    const DESCRIPTION: &'static str = "Read a text file by path, e.g. file:///readme.txt";
    const MIME_TYPE: &'static str = "text/plain";

    fn matches(uri: &str) -> Option<&str> {
        uri.strip_prefix(PREFIX)
    }

    #[instrument(skip(uri))]
    fn resolve(uri: &str, param: &str) -> Result<ResourceContents, ResourceError> {
        debug!("Reading file resource");
        let text = read_with_policy(Path::new(param), MissingPolicy::ReturnErrorText)?;
        Ok(ResourceContents::text(text, uri))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn text_of(contents: ResourceContents) -> String {
        match contents {
            ResourceContents::TextResourceContents { text, .. } => text,
            _ => panic!("Expected text contents"),
        }
    }

    #[test]
    fn test_matches() {
        assert_eq!(FileResource::matches("file:///a/b.txt"), Some("a/b.txt"));
        assert_eq!(FileResource::matches("config://app-settings"), None);
    }

    #[test]
    fn test_existing_file_is_returned_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("existing.txt");
        let body = "line one\n  indented \u{00e9}\n\nlast";
        fs::write(&path, body).unwrap();

        let param = path.to_str().unwrap();
        let uri = format!("file:///{}", param);
        let text = text_of(FileResource::resolve(&uri, param).unwrap());
        assert_eq!(text, body);
    }

    #[test]
    fn test_missing_file_is_error_text() {
        let uri = "file:///does-not-exist.txt";
        let param = FileResource::matches(uri).unwrap();
        let text = text_of(FileResource::resolve(uri, param).unwrap());

        assert!(text.starts_with("Error: "));
        assert!(text.contains("not found"));
        assert!(text.contains("does-not-exist.txt"));
    }
}
