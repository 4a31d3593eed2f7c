//! One-time registration of reserved named styles and list numbering.
//!
//! The document library starts from a bare package with no built-in
//! style template, so every reserved style the assembler references is
//! defined programmatically here, once per rendered document.

use docx_rs::{
    AbstractNumbering, Docx, Level, LevelJc, LevelText, NumberFormat, Numbering, Start, Style,
    StyleType,
};

use crate::model::NamedStyle;

/// Numbering definition id for bulleted lists.
pub const BULLET_NUMBERING: usize = 1;

/// Numbering definition id for numbered lists.
pub const DECIMAL_NUMBERING: usize = 2;

/// Named table style applied to every emitted table.
pub const TABLE_STYLE_ID: &str = "LightGridAccent1";

const PARAGRAPH_STYLES: [NamedStyle; 6] = [
    NamedStyle::Header,
    NamedStyle::Footer,
    NamedStyle::ListBullet,
    NamedStyle::ListNumber,
    NamedStyle::IntenseQuote,
    NamedStyle::FootnoteText,
];

/// Style id for a heading level, clamped to the registered range.
pub fn heading_style_id(level: u8) -> String {
    format!("Heading{}", level.clamp(1, 6))
}

/// Register the reserved style set and numbering definitions.
pub fn register(docx: Docx) -> Docx {
    let mut docx = docx;

    for named in PARAGRAPH_STYLES {
        docx = docx.add_style(
            Style::new(named.style_id(), StyleType::Paragraph).name(named.display_name()),
        );
    }

    // Heading styles carry viewer-recognizable names so TOC fields over
    // levels 1-3 can resolve them.
    for level in 1u8..=6 {
        docx = docx.add_style(
            Style::new(heading_style_id(level), StyleType::Paragraph)
                .name(format!("heading {level}"))
                .bold(),
        );
    }

    docx.add_style(Style::new(TABLE_STYLE_ID, StyleType::Table).name("Light Grid Accent 1"))
        .add_abstract_numbering(AbstractNumbering::new(BULLET_NUMBERING).add_level(Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("•"),
            LevelJc::new("left"),
        )))
        .add_abstract_numbering(AbstractNumbering::new(DECIMAL_NUMBERING).add_level(Level::new(
            0,
            Start::new(1),
            NumberFormat::new("decimal"),
            LevelText::new("%1."),
            LevelJc::new("left"),
        )))
        .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING))
        .add_numbering(Numbering::new(DECIMAL_NUMBERING, DECIMAL_NUMBERING))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_style_id_clamps() {
        assert_eq!(heading_style_id(1), "Heading1");
        assert_eq!(heading_style_id(6), "Heading6");
        assert_eq!(heading_style_id(0), "Heading1");
        assert_eq!(heading_style_id(9), "Heading6");
    }
}
