//! Document assembly: one linear pass from a [`DocumentSpec`] to an
//! [`AssembledDocument`].
//!
//! Each builder is an independent transformation step appending to the
//! in-progress document; the orchestration in [`assemble_with_options`]
//! fixes the element order. Only the diagram embedder recovers locally
//! from failure — any other builder error aborts the whole assembly.

pub mod chrome;
pub mod cover;
pub mod diagram;
pub mod lists;
pub mod notes;
pub mod options;
pub mod section;
pub mod table;
pub mod toc;

pub use options::AssembleOptions;

use crate::error::Result;
use crate::model::AssembledDocument;
use crate::spec::DocumentSpec;

/// Fixed credit line appended to every document.
pub const CREDIT_LINE: &str = "Generated with Document Builder (demo).";

/// Assemble a document with default options.
pub fn assemble(spec: &DocumentSpec) -> Result<AssembledDocument> {
    assemble_with_options(spec, &AssembleOptions::default())
}

/// Assemble a document from a content specification.
///
/// Body order is fixed: cover page, TOC field, page break, then each
/// outline section (heading, body paragraphs, then bullets / numbered
/// list / table / diagram when present for that section id), then a
/// trailing page break, an `Appendix` heading, and the credit blockquote.
pub fn assemble_with_options(
    spec: &DocumentSpec,
    options: &AssembleOptions,
) -> Result<AssembledDocument> {
    log::debug!(
        "Assembling '{}' with {} sections",
        spec.title,
        spec.section_count()
    );

    let mut doc = AssembledDocument::new();

    cover::add_cover_page(&mut doc, options, &spec.title, &spec.author)?;
    chrome::add_header_footer(&mut doc, options, &spec.title);
    toc::add_table_of_contents(&mut doc, options);
    doc.push_page_break();

    for sec in &spec.outline.sections {
        let text = spec.content.get(sec).map(String::as_str).unwrap_or("");
        section::add_section(&mut doc, options, sec, text, 1);

        if let Some(items) = spec.bullets.get(sec) {
            lists::add_bullets(&mut doc, options, items);
        }
        if let Some(items) = spec.numbered.get(sec) {
            lists::add_numbered_list(&mut doc, options, items);
        }
        if let Some(table_spec) = spec.tables.get(sec) {
            table::add_table(&mut doc, options, table_spec);
        }
        if let Some(encoded) = spec.diagrams.get(sec) {
            section::add_heading(&mut doc, options, "Diagram", 2);
            diagram::add_diagram(&mut doc, options, encoded);
        }
    }

    doc.push_page_break();
    section::add_heading(&mut doc, options, "Appendix", 1);
    notes::add_blockquote(&mut doc, options, CREDIT_LINE);

    log::debug!("Assembled {} body blocks", doc.block_count());
    Ok(doc)
}
