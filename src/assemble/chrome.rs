//! Header and footer builder.

use crate::model::{Alignment, AssembledDocument, FieldCode, NamedStyle, Paragraph, RunStyle, TextRun};

use super::options::AssembleOptions;

/// Set the running header to the document title and the footer to a
/// centered page-number field.
///
/// The page number is a deferred instruction; nothing is computed at
/// generation time.
pub fn add_header_footer(doc: &mut AssembledDocument, options: &AssembleOptions, title: &str) {
    let header = Paragraph::with_run(TextRun::new(title, RunStyle::base(&options.base_font)))
        .styled(NamedStyle::Header);
    doc.set_header(header);

    let mut footer = Paragraph::new()
        .styled(NamedStyle::Footer)
        .align(Alignment::Center);
    footer.add_field(FieldCode::PageNumber, None);
    doc.set_footer(footer);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_carries_title() {
        let mut doc = AssembledDocument::new();
        add_header_footer(&mut doc, &AssembleOptions::default(), "Report");

        let header = doc.header.as_ref().unwrap();
        assert_eq!(header.plain_text(), "Report");
        assert_eq!(header.named_style, Some(NamedStyle::Header));
        assert_eq!(header.alignment, Alignment::Left);
    }

    #[test]
    fn test_footer_is_page_field() {
        let mut doc = AssembledDocument::new();
        add_header_footer(&mut doc, &AssembleOptions::default(), "Report");

        let footer = doc.footer.as_ref().unwrap();
        assert!(footer.has_field());
        assert_eq!(footer.alignment, Alignment::Center);
        match &footer.content[0] {
            crate::model::InlineContent::Field { code, placeholder } => {
                assert_eq!(*code, FieldCode::PageNumber);
                assert!(placeholder.is_none());
            }
            _ => panic!("expected field"),
        }
    }

    #[test]
    fn test_body_untouched() {
        let mut doc = AssembledDocument::new();
        add_header_footer(&mut doc, &AssembleOptions::default(), "Report");
        assert!(doc.is_empty());
    }
}
