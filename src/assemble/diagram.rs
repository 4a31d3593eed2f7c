//! Diagram embedder with local error recovery.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::model::{
    Alignment, AssembledDocument, Block, Paragraph, RunStyle, TextRun, EMU_PER_INCH,
};

use super::cover::scale_height;
use super::options::AssembleOptions;

/// Diagram display width.
const DIAGRAM_WIDTH_EMU: u32 = 4 * EMU_PER_INCH;

/// Decode a base64 diagram and embed it at a fixed 4-inch display width,
/// aspect ratio preserved.
///
/// A decode failure never aborts the document: the image is replaced by
/// an inline `Could not render diagram: ...` paragraph and assembly
/// continues.
pub fn add_diagram(doc: &mut AssembledDocument, options: &AssembleOptions, encoded: &str) {
    match decode_diagram(encoded) {
        Ok((data, width, height)) => {
            doc.push_block(Block::Image {
                data,
                width_emu: DIAGRAM_WIDTH_EMU,
                height_emu: scale_height(DIAGRAM_WIDTH_EMU, width, height),
                alignment: Alignment::Left,
            });
        }
        Err(message) => {
            log::warn!("Diagram embed failed: {message}");
            doc.push_paragraph(Paragraph::with_run(TextRun::new(
                format!("Could not render diagram: {message}"),
                RunStyle::base(&options.base_font),
            )));
        }
    }
}

/// Decode base64 payload and validate it as an image, returning the raw
/// bytes and pixel dimensions.
fn decode_diagram(encoded: &str) -> Result<(Vec<u8>, u32, u32), String> {
    let bytes = STANDARD.decode(encoded.trim()).map_err(|e| e.to_string())?;
    let img = image::load_from_memory(&bytes).map_err(|e| e.to_string())?;
    Ok((bytes, img.width(), img.height()))
}
