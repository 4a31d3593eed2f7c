//! Paragraph and text-level types.

use serde::Serialize;

use super::FieldCode;

/// A paragraph of inline content.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Paragraph {
    /// Inline content (text runs and field codes).
    pub content: Vec<InlineContent>,

    /// Reserved named style applied to the whole paragraph.
    pub named_style: Option<NamedStyle>,

    /// Heading level (1-based) or None for a body paragraph.
    pub heading_level: Option<u8>,

    /// Paragraph alignment.
    pub alignment: Alignment,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph containing a single text run.
    pub fn with_run(run: TextRun) -> Self {
        let mut p = Self::new();
        p.content.push(InlineContent::Text(run));
        p
    }

    /// Create a heading paragraph.
    pub fn heading(run: TextRun, level: u8) -> Self {
        let mut p = Self::with_run(run);
        p.heading_level = Some(level);
        p
    }

    /// Append a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.content.push(InlineContent::Text(run));
    }

    /// Append a deferred field instruction.
    pub fn add_field(&mut self, code: FieldCode, placeholder: Option<TextRun>) {
        self.content.push(InlineContent::Field { code, placeholder });
    }

    /// Set the reserved named style and return self.
    pub fn styled(mut self, style: NamedStyle) -> Self {
        self.named_style = Some(style);
        self
    }

    /// Set the alignment and return self.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Plain text content of the paragraph (field placeholders included).
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|c| match c {
                InlineContent::Text(run) => run.text.as_str(),
                InlineContent::Field { placeholder, .. } => {
                    placeholder.as_ref().map(|r| r.text.as_str()).unwrap_or("")
                }
            })
            .collect()
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        self.heading_level.is_some()
    }

    /// Check whether the paragraph carries a field code.
    pub fn has_field(&self) -> bool {
        self.content
            .iter()
            .any(|c| matches!(c, InlineContent::Field { .. }))
    }
}

/// Inline content within a paragraph.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineContent {
    /// A text run with explicit styling.
    Text(TextRun),

    /// A deferred field instruction with an optional placeholder run.
    Field {
        /// The instruction resolved by the viewer.
        code: FieldCode,
        /// Visible placeholder shown until the field is refreshed.
        placeholder: Option<TextRun>,
    },
}

/// A contiguous span of text sharing one explicit style.
#[derive(Debug, Clone, Serialize)]
pub struct TextRun {
    /// The text content.
    pub text: String,

    /// Explicit run style; never left to library defaults.
    pub style: RunStyle,
}

impl TextRun {
    /// Create a text run with the given style.
    pub fn new(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Explicit styling carried by every text run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStyle {
    /// Font family name, also applied as the East Asian face.
    pub font_name: String,

    /// Font size in points.
    pub size_pt: f32,

    /// Bold text.
    pub bold: bool,

    /// Italic text.
    pub italic: bool,

    /// Underlined text.
    pub underline: bool,

    /// Superscript (footnote markers).
    pub superscript: bool,
}

impl RunStyle {
    /// Body style: 11 pt regular in the given font.
    pub fn base(font_name: impl Into<String>) -> Self {
        Self {
            font_name: font_name.into(),
            size_pt: 11.0,
            bold: false,
            italic: false,
            underline: false,
            superscript: false,
        }
    }

    /// Set the size in points and return self.
    pub fn sized(mut self, size_pt: f32) -> Self {
        self.size_pt = size_pt;
        self
    }

    /// Set bold and return self.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set italic and return self.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Set underline and return self.
    pub fn underlined(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Set superscript and return self.
    pub fn superscript(mut self) -> Self {
        self.superscript = true;
        self
    }
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default).
    #[default]
    Left,
    /// Center alignment.
    Center,
    /// Right alignment.
    Right,
    /// Justified alignment.
    Justify,
}

/// Reserved named paragraph styles resolved by the style registry.
///
/// These mirror the built-in styles of conventional word-processor
/// templates; the DOCX renderer registers each one programmatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedStyle {
    /// Running header text.
    Header,
    /// Running footer text.
    Footer,
    /// Bulleted list item.
    ListBullet,
    /// Numbered list item.
    ListNumber,
    /// Emphasized blockquote.
    IntenseQuote,
    /// Footnote body text.
    FootnoteText,
}

impl NamedStyle {
    /// Style identifier used inside the OOXML package.
    pub fn style_id(&self) -> &'static str {
        match self {
            NamedStyle::Header => "Header",
            NamedStyle::Footer => "Footer",
            NamedStyle::ListBullet => "ListBullet",
            NamedStyle::ListNumber => "ListNumber",
            NamedStyle::IntenseQuote => "IntenseQuote",
            NamedStyle::FootnoteText => "FootnoteText",
        }
    }

    /// Human-readable style name shown in word processors.
    pub fn display_name(&self) -> &'static str {
        match self {
            NamedStyle::Header => "Header",
            NamedStyle::Footer => "Footer",
            NamedStyle::ListBullet => "List Bullet",
            NamedStyle::ListNumber => "List Number",
            NamedStyle::IntenseQuote => "Intense Quote",
            NamedStyle::FootnoteText => "Footnote Text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_plain_text() {
        let style = RunStyle::base("Calibri");
        let mut p = Paragraph::with_run(TextRun::new("Hello ", style.clone()));
        p.add_run(TextRun::new("world", style.clone().bold()));
        assert_eq!(p.plain_text(), "Hello world");
    }

    #[test]
    fn test_heading() {
        let h = Paragraph::heading(TextRun::new("Title", RunStyle::base("Calibri")), 1);
        assert!(h.is_heading());
        assert_eq!(h.heading_level, Some(1));
    }

    #[test]
    fn test_field_placeholder_in_plain_text() {
        let mut p = Paragraph::new();
        p.add_field(
            FieldCode::TableOfContents {
                from_level: 1,
                to_level: 3,
            },
            Some(TextRun::new("placeholder", RunStyle::base("Calibri"))),
        );
        assert!(p.has_field());
        assert_eq!(p.plain_text(), "placeholder");
    }

    #[test]
    fn test_run_style_builders() {
        let style = RunStyle::base("Calibri").sized(28.0).bold();
        assert_eq!(style.size_pt, 28.0);
        assert!(style.bold);
        assert!(!style.italic);
    }

    #[test]
    fn test_named_style_ids() {
        assert_eq!(NamedStyle::IntenseQuote.style_id(), "IntenseQuote");
        assert_eq!(NamedStyle::ListBullet.display_name(), "List Bullet");
    }
}
