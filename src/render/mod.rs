//! Rendering module: maps an assembled document onto the DOCX
//! document-object library and packs the OOXML artifact.

mod docx;
mod styles;

pub use docx::{to_docx, write_docx};
