//! The link payload handed to templates: a document id plus display title.

use serde::{Deserialize, Serialize};

/// A document reference carrying enough information to render a hyperlink
/// without further lookup.
///
/// `id` is the forward-slash path identifying the document, possibly with
/// its file extension. `title` is a display label with no uniqueness
/// constraint. Snapshot files are JSON arrays of these objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub id: String,
    pub title: String,
}

impl PageLink {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_deserialize() {
        let link = PageLink::new("guides/setup.md", "Setup Guide");
        let json = serde_json::to_string(&link).unwrap();
        assert_eq!(json, r#"{"id":"guides/setup.md","title":"Setup Guide"}"#);

        let parsed: PageLink = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, link);
    }

    #[test]
    fn test_snapshot_array() {
        let json = r#"[{"id": "a", "title": "A"}, {"id": "b/c", "title": "C"}]"#;
        let links: Vec<PageLink> = serde_json::from_str(json).unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[1].id, "b/c");
    }
}
