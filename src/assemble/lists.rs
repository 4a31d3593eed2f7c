//! Bullet and numbered list builders.

use crate::model::{AssembledDocument, NamedStyle, Paragraph, RunStyle, TextRun};

use super::options::AssembleOptions;

fn add_list(
    doc: &mut AssembledDocument,
    options: &AssembleOptions,
    items: &[String],
    style: NamedStyle,
) {
    let base = RunStyle::base(&options.base_font);
    for item in items {
        doc.push_paragraph(Paragraph::with_run(TextRun::new(item, base.clone())).styled(style));
    }
}

/// Add one bulleted paragraph per item, order preserved.
pub fn add_bullets(doc: &mut AssembledDocument, options: &AssembleOptions, items: &[String]) {
    add_list(doc, options, items, NamedStyle::ListBullet);
}

/// Add one numbered paragraph per item, order preserved.
pub fn add_numbered_list(doc: &mut AssembledDocument, options: &AssembleOptions, items: &[String]) {
    add_list(doc, options, items, NamedStyle::ListNumber);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_bullets_preserve_order() {
        let mut doc = AssembledDocument::new();
        add_bullets(&mut doc, &AssembleOptions::default(), &items(&["a", "b", "c"]));

        assert_eq!(doc.block_count(), 3);
        for (block, expected) in doc.body.iter().zip(["a", "b", "c"]) {
            let p = block.as_paragraph().unwrap();
            assert_eq!(p.plain_text(), expected);
            assert_eq!(p.named_style, Some(NamedStyle::ListBullet));
        }
    }

    #[test]
    fn test_numbered_style() {
        let mut doc = AssembledDocument::new();
        add_numbered_list(&mut doc, &AssembleOptions::default(), &items(&["one"]));

        let p = doc.body[0].as_paragraph().unwrap();
        assert_eq!(p.named_style, Some(NamedStyle::ListNumber));
    }

    #[test]
    fn test_empty_list_adds_nothing() {
        let mut doc = AssembledDocument::new();
        add_bullets(&mut doc, &AssembleOptions::default(), &[]);
        assert!(doc.is_empty());
    }
}
