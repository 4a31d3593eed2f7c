//! Cover page builder.

use crate::error::{Error, Result};
use crate::model::{
    Alignment, AssembledDocument, Block, Paragraph, RunStyle, TextRun, EMU_PER_INCH,
};

use super::options::AssembleOptions;

/// Cover logo display width.
const LOGO_WIDTH_EMU: u32 = 2 * EMU_PER_INCH;

/// Add the cover page: optional logo, centered title, author and date
/// lines, then a hard page break.
pub fn add_cover_page(
    doc: &mut AssembledDocument,
    options: &AssembleOptions,
    title: &str,
    author: &str,
) -> Result<()> {
    if let Some(path) = &options.logo_path {
        match std::fs::read(path) {
            Ok(bytes) => {
                let img = image::load_from_memory(&bytes)
                    .map_err(|e| Error::InvalidImage(e.to_string()))?;
                let height = scale_height(LOGO_WIDTH_EMU, img.width(), img.height());
                doc.push_block(Block::Image {
                    data: bytes,
                    width_emu: LOGO_WIDTH_EMU,
                    height_emu: height,
                    alignment: Alignment::Center,
                });
            }
            Err(e) => {
                // Missing logo is not an error.
                log::debug!("Skipping cover logo {}: {}", path.display(), e);
            }
        }
    }

    let base = RunStyle::base(&options.base_font);

    doc.push_paragraph(
        Paragraph::with_run(TextRun::new(title, base.clone().sized(28.0).bold()))
            .align(Alignment::Center),
    );
    doc.push_paragraph(Paragraph::new());
    doc.push_paragraph(
        Paragraph::with_run(TextRun::new(
            format!("Author: {author}"),
            base.clone().sized(14.0).italic(),
        ))
        .align(Alignment::Center),
    );
    let date = options.cover_date().format("%B %d, %Y");
    doc.push_paragraph(
        Paragraph::with_run(TextRun::new(format!("Date: {date}"), base.sized(12.0)))
            .align(Alignment::Center),
    );
    doc.push_page_break();
    Ok(())
}

/// Scale a pixel aspect ratio to a fixed EMU display width.
pub(crate) fn scale_height(width_emu: u32, px_width: u32, px_height: u32) -> u32 {
    if px_width == 0 {
        return width_emu;
    }
    ((width_emu as u64 * px_height as u64) / px_width as u64) as u32
}
