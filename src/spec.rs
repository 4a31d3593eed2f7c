//! Input content specification.
//!
//! A [`DocumentSpec`] is the declarative description of a document: an
//! ordered outline of section identifiers plus per-section body text,
//! lists, tables, and base64-encoded diagrams. Every field is optional;
//! missing fields take documented defaults rather than failing.

use serde::Deserialize;
use std::collections::HashMap;

use crate::error::Result;

/// Placeholder title used when the specification omits one.
pub const DEFAULT_TITLE: &str = "Document Title";

/// Placeholder author used when the specification omits one.
pub const DEFAULT_AUTHOR: &str = "Author";

/// Declarative content specification for one document.
///
/// Immutable once parsed; owned by a single assembly invocation.
/// Unknown top-level fields in the JSON input are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocumentSpec {
    /// Document title (cover page and running header).
    pub title: String,

    /// Document author (cover page).
    pub author: String,

    /// Ordered section identifiers controlling document structure.
    pub outline: OutlineSpec,

    /// Body text per section, paragraphs separated by blank lines.
    pub content: HashMap<String, String>,

    /// Bulleted list items per section.
    pub bullets: HashMap<String, Vec<String>>,

    /// Numbered list items per section.
    pub numbered: HashMap<String, Vec<String>>,

    /// Tabular data per section.
    pub tables: HashMap<String, TableSpec>,

    /// Base64-encoded diagram images per section.
    pub diagrams: HashMap<String, String>,
}

impl DocumentSpec {
    /// Parse a specification from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of sections in the outline.
    pub fn section_count(&self) -> usize {
        self.outline.sections.len()
    }

    /// Check whether the outline is empty.
    pub fn is_empty(&self) -> bool {
        self.outline.sections.is_empty()
    }
}

impl Default for DocumentSpec {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            outline: OutlineSpec::default(),
            content: HashMap::new(),
            bullets: HashMap::new(),
            numbered: HashMap::new(),
            tables: HashMap::new(),
            diagrams: HashMap::new(),
        }
    }
}

/// Ordered list of section identifiers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutlineSpec {
    /// Section identifiers in document order.
    pub sections: Vec<String>,
}

/// Tabular data for one section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TableSpec {
    /// Header cell text, one entry per column.
    pub headers: Vec<String>,

    /// Data rows; cell values are arbitrary JSON scalars coerced to text.
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl TableSpec {
    /// Number of columns, taken from the header row.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Coerce a cell value to its text representation.
    ///
    /// Strings pass through verbatim; other scalars use their JSON
    /// rendering (`42`, `true`, `null`).
    pub fn cell_text(value: &serde_json::Value) -> String {
        match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_fields() {
        let spec = DocumentSpec::from_json("{}").unwrap();
        assert_eq!(spec.title, DEFAULT_TITLE);
        assert_eq!(spec.author, DEFAULT_AUTHOR);
        assert!(spec.is_empty());
        assert!(spec.content.is_empty());
        assert!(spec.tables.is_empty());
    }

    #[test]
    fn test_parse_full_spec() {
        let json = r#"{
            "title": "Q3 Report",
            "author": "Finance",
            "outline": {"sections": ["intro", "results"]},
            "content": {"intro": "Hello.\n\nWorld."},
            "bullets": {"intro": ["a", "b"]},
            "tables": {"results": {"headers": ["X", "Y"], "rows": [["1", 2]]}}
        }"#;
        let spec = DocumentSpec::from_json(json).unwrap();
        assert_eq!(spec.title, "Q3 Report");
        assert_eq!(spec.section_count(), 2);
        assert_eq!(spec.bullets["intro"], vec!["a", "b"]);
        assert_eq!(spec.tables["results"].column_count(), 2);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let spec = DocumentSpec::from_json(r#"{"title": "T", "extra": 1}"#).unwrap();
        assert_eq!(spec.title, "T");
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(DocumentSpec::from_json("not json").is_err());
    }

    #[test]
    fn test_cell_text_coercion() {
        use serde_json::json;
        assert_eq!(TableSpec::cell_text(&json!("plain")), "plain");
        assert_eq!(TableSpec::cell_text(&json!(42)), "42");
        assert_eq!(TableSpec::cell_text(&json!(1.5)), "1.5");
        assert_eq!(TableSpec::cell_text(&json!(true)), "true");
        assert_eq!(TableSpec::cell_text(&json!(null)), "null");
    }
}
