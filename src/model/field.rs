//! Deferred field instructions.
//!
//! A field code is an opaque instruction embedded in the document and
//! resolved by the viewing application at display or print time. The
//! assembler emits the instruction verbatim; no page number or TOC entry
//! is ever computed at generation time.

use serde::Serialize;

/// A deferred instruction resolved by the document viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldCode {
    /// Current page number.
    PageNumber,

    /// Table of contents built from a range of heading levels, with
    /// hyperlinks and page numbers enabled.
    TableOfContents {
        /// First heading level included (1-based).
        from_level: u8,
        /// Last heading level included.
        to_level: u8,
    },
}

impl FieldCode {
    /// The raw field instruction text embedded in the document.
    pub fn instruction(&self) -> String {
        match self {
            FieldCode::PageNumber => "PAGE".to_string(),
            FieldCode::TableOfContents {
                from_level,
                to_level,
            } => {
                format!("TOC \\o \"{from_level}-{to_level}\" \\h \\z \\u")
            }
        }
    }
}
