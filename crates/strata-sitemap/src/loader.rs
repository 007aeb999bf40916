//! Sitemap file loading.

use std::fs;
use std::path::Path;

use crate::node::{RawNode, SitemapNode};

/// Errors that can occur when loading a sitemap file.
#[derive(Debug, thiserror::Error)]
pub enum SitemapError {
    #[error("Failed to read sitemap {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse sitemap {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Load a sitemap from a JSON file and resolve it into the tagged tree.
///
/// The file holds a single root node, recursively nested through `children`
/// arrays. Sibling order in the file is preserved exactly.
pub fn load_sitemap(path: &Path) -> Result<SitemapNode, SitemapError> {
    let content = fs::read_to_string(path).map_err(|source| SitemapError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let raw: RawNode = serde_json::from_str(&content).map_err(|source| SitemapError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    Ok(raw.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_sitemap_from_disk() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("sitemap.json");
        fs::write(
            &path,
            r#"{"route": "", "title": "Home", "children": [{"route": "about", "title": "About"}]}"#,
        )
        .unwrap();

        let root = load_sitemap(&path).unwrap();

        assert_eq!(root.title(), "Home");
        let SitemapNode::Section(section) = root else {
            panic!("expected a section");
        };
        assert_eq!(section.children[0].title(), "About");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_sitemap(Path::new("no/such/sitemap.json")).unwrap_err();
        assert!(matches!(err, SitemapError::Read { .. }));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("sitemap.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_sitemap(&path).unwrap_err();
        assert!(matches!(err, SitemapError::Parse { .. }));
    }

    #[test]
    fn missing_required_field_is_a_parse_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("sitemap.json");
        fs::write(&path, r#"{"route": "about"}"#).unwrap();

        let err = load_sitemap(&path).unwrap_err();
        assert!(matches!(err, SitemapError::Parse { .. }));
    }
}
