//! # docforge
//!
//! Structured DOCX document assembly from JSON content specifications.
//!
//! docforge maps a declarative content model — an outline of sections
//! plus per-section body text, lists, tables, and base64-encoded
//! diagrams — into an ordered document with a cover page, running
//! header/footer, a table-of-contents field, and consistent run styling,
//! then packs it as a DOCX artifact.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> docforge::Result<()> {
//!     let json = r#"{
//!         "title": "Q3 Report",
//!         "author": "Finance Team",
//!         "outline": {"sections": ["Summary"]},
//!         "content": {"Summary": "Revenue grew.\n\nCosts fell."}
//!     }"#;
//!
//!     let bytes = docforge::generate(json)?;
//!     std::fs::write("report.docx", bytes)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//!
//! - **Single pass**: one assembly invocation is one linear, synchronous
//!   transformation with no shared state between invocations.
//! - **Explicit styling**: every text run carries an explicit
//!   [`RunStyle`]; nothing is left to library defaults.
//! - **Deferred fields**: page numbers and the TOC are emitted as
//!   [`FieldCode`] instructions resolved by the viewer, never computed
//!   at generation time.
//! - **Local diagram recovery**: a diagram that fails to decode becomes
//!   an inline error paragraph; any other builder failure aborts the
//!   whole document.

pub mod assemble;
pub mod error;
pub mod model;
pub mod render;
pub mod spec;

// Re-export commonly used types
pub use assemble::{assemble, assemble_with_options, AssembleOptions, CREDIT_LINE};
pub use error::{Error, Result};
pub use model::{
    Alignment, AssembledDocument, Block, FieldCode, InlineContent, NamedStyle, Paragraph, RunStyle,
    Table, TableCell, TableRow, TextRun,
};
pub use render::{to_docx, write_docx};
pub use spec::{DocumentSpec, OutlineSpec, TableSpec};

use std::path::Path;

/// Assemble a document from a JSON content specification.
pub fn assemble_json(json: &str) -> Result<AssembledDocument> {
    let spec = DocumentSpec::from_json(json)?;
    assemble(&spec)
}

/// Generate DOCX bytes from a JSON content specification.
///
/// # Example
///
/// ```no_run
/// let bytes = docforge::generate(r#"{"title": "Hello"}"#).unwrap();
/// std::fs::write("hello.docx", bytes).unwrap();
/// ```
pub fn generate(json: &str) -> Result<Vec<u8>> {
    let doc = assemble_json(json)?;
    render::to_docx(&doc)
}

/// Generate a DOCX file from a JSON content specification.
pub fn generate_to_file<P: AsRef<Path>>(json: &str, path: P) -> Result<()> {
    let doc = assemble_json(json)?;
    let file = std::fs::File::create(path)?;
    render::write_docx(&doc, file)
}

/// Builder for assembling and packaging documents.
///
/// # Example
///
/// ```no_run
/// use docforge::Docforge;
///
/// let result = Docforge::new()
///     .with_base_font("Georgia")
///     .with_logo("logo.png")
///     .assemble_json(r#"{"title": "Styled"}"#)?;
/// result.save("styled.docx")?;
/// # Ok::<(), docforge::Error>(())
/// ```
pub struct Docforge {
    options: AssembleOptions,
}

impl Docforge {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: AssembleOptions::default(),
        }
    }

    /// Set the base font family.
    pub fn with_base_font(mut self, font: impl Into<String>) -> Self {
        self.options = self.options.with_base_font(font);
        self
    }

    /// Set the cover-page logo path.
    pub fn with_logo(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.options = self.options.with_logo(path);
        self
    }

    /// Pin the cover-page date.
    pub fn with_date(mut self, date: chrono::NaiveDate) -> Self {
        self.options = self.options.with_date(date);
        self
    }

    /// Assemble from a parsed specification.
    pub fn assemble(self, spec: &DocumentSpec) -> Result<DocforgeResult> {
        let document = assemble_with_options(spec, &self.options)?;
        Ok(DocforgeResult { document })
    }

    /// Assemble from a JSON content specification.
    pub fn assemble_json(self, json: &str) -> Result<DocforgeResult> {
        let spec = DocumentSpec::from_json(json)?;
        self.assemble(&spec)
    }
}

impl Default for Docforge {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of assembling a document.
pub struct DocforgeResult {
    /// The assembled document
    pub document: AssembledDocument,
}

impl DocforgeResult {
    /// Pack into DOCX bytes.
    pub fn to_docx(&self) -> Result<Vec<u8>> {
        render::to_docx(&self.document)
    }

    /// Pack into a DOCX file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        render::write_docx(&self.document, file)
    }

    /// Get the assembled document.
    pub fn document(&self) -> &AssembledDocument {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_json_defaults() {
        let doc = assemble_json("{}").unwrap();
        assert!(doc.header.is_some());
        assert!(doc.footer.is_some());
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_assemble_json_invalid() {
        assert!(assemble_json("{").is_err());
    }

    #[test]
    fn test_builder_chained() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let forge = Docforge::new().with_base_font("Georgia").with_date(date);
        assert_eq!(forge.options.base_font, "Georgia");
        assert_eq!(forge.options.generated_on, Some(date));
    }

    #[test]
    fn test_builder_result_document() {
        let result = Docforge::new()
            .assemble_json(r#"{"title": "T", "outline": {"sections": ["a"]}}"#)
            .unwrap();
        let headings: Vec<_> = result
            .document()
            .body
            .iter()
            .filter_map(|b| b.as_paragraph())
            .filter(|p| p.is_heading())
            .map(|p| p.plain_text())
            .collect();
        assert_eq!(headings, vec!["a", "Appendix"]);
    }

    #[test]
    fn test_generate_produces_zip() {
        let bytes = generate("{}").unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
