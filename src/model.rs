//! Data structures describing the logical content of the report.
//!
//! The types in this module form the block model that the content builder
//! appends to and the renderer consumes.  They intentionally avoid
//! referencing the rendering crate so the document can be inspected and
//! tested without touching PDF machinery.

/// Base left indent applied per bullet level, in millimetres (0.5 in).
pub const BULLET_INDENT_MM: f64 = 12.7;

/// Returns the left indent for a bullet at `level`.
///
/// A level-0 bullet is already indented by one unit, so the indent is
/// `(level + 1)` times the base constant.
pub fn bullet_indent_mm(level: u8) -> f64 {
    BULLET_INDENT_MM * (f64::from(level) + 1.0)
}

/// Horizontal alignment of a paragraph once it is converted into
/// [`genpdf::elements`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Left aligned content.
    #[default]
    Left,
    /// Center aligned content.
    Center,
    /// Right aligned content.
    Right,
}

/// Heading rank within the document hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingLevel {
    /// The document title, emitted once at the top of the title page.
    Title,
    /// Top-level section heading, center-aligned by convention.
    Section,
    /// Subsection heading.
    Subsection,
}

/// Inline text attributes carried by a paragraph.
///
/// The font size is an override; paragraphs without one render at the body
/// size chosen by the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextStyle {
    font_size: Option<u8>,
    bold: bool,
    italic: bool,
}

impl TextStyle {
    /// Creates a style with no attributes set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the font size override, if any.
    pub fn font_size(&self) -> Option<u8> {
        self.font_size
    }

    /// Returns whether the text should be rendered in bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Returns whether the text should be rendered in italic.
    pub fn is_italic(&self) -> bool {
        self.italic
    }

    /// Sets the font size override and returns the updated style.
    pub fn with_font_size(mut self, font_size: u8) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Marks the style as bold and returns it.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Marks the style as italic and returns it.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

/// Individual content blocks that make up the report.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    /// A heading at the given level.
    Heading {
        /// Heading text.
        text: String,
        /// Rank within the document hierarchy.
        level: HeadingLevel,
    },
    /// A text paragraph.  Empty text marks a spacing paragraph.
    Paragraph {
        /// Paragraph text.
        text: String,
        /// Inline attributes.
        style: TextStyle,
        /// Horizontal alignment.
        alignment: HorizontalAlignment,
    },
    /// A bulleted list item with a left indent proportional to `level`.
    Bullet {
        /// Item text.
        text: String,
        /// Nesting level, zero-based.
        level: u8,
    },
    /// Explicit page break request.
    PageBreak,
}

/// The in-memory document being assembled: an ordered sequence of blocks.
///
/// Blocks appear in the order they were appended; there is no other
/// structural invariant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportDocument {
    blocks: Vec<Block>,
}

impl ReportDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the appended blocks in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Appends a heading block.
    pub fn add_heading(&mut self, text: impl Into<String>, level: HeadingLevel) {
        self.blocks.push(Block::Heading {
            text: text.into(),
            level,
        });
    }

    /// Appends a body paragraph (default style, left aligned).
    pub fn add_paragraph(&mut self, text: impl Into<String>) {
        self.add_styled(text, TextStyle::new());
    }

    /// Appends a left-aligned paragraph with explicit attributes.
    pub fn add_styled(&mut self, text: impl Into<String>, style: TextStyle) {
        self.blocks.push(Block::Paragraph {
            text: text.into(),
            style,
            alignment: HorizontalAlignment::Left,
        });
    }

    /// Appends a center-aligned paragraph with explicit attributes.
    pub fn add_centered(&mut self, text: impl Into<String>, style: TextStyle) {
        self.blocks.push(Block::Paragraph {
            text: text.into(),
            style,
            alignment: HorizontalAlignment::Center,
        });
    }

    /// Appends an empty spacing paragraph.
    pub fn add_spacer(&mut self) {
        self.add_paragraph("");
    }

    /// Appends a bulleted list item at the given nesting level.
    pub fn add_bullet(&mut self, text: impl Into<String>, level: u8) {
        self.blocks.push(Block::Bullet {
            text: text.into(),
            level,
        });
    }

    /// Appends a feature section: a subsection heading, a description
    /// paragraph, one bullet per item, and a trailing spacing paragraph.
    pub fn add_feature_section(&mut self, title: &str, description: &str, items: &[&str]) {
        self.add_heading(title, HeadingLevel::Subsection);
        self.add_paragraph(description);
        for item in items {
            self.add_bullet(*item, 0);
        }
        self.add_spacer();
    }

    /// Appends a page break marker.
    pub fn add_page_break(&mut self) {
        self.blocks.push(Block::PageBreak);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_style_builder_reflects_flags() {
        let style = TextStyle::new().bold().italic().with_font_size(16);
        assert!(style.is_bold());
        assert!(style.is_italic());
        assert_eq!(style.font_size(), Some(16));
        assert_eq!(TextStyle::new(), TextStyle::default());
    }

    #[test]
    fn bullet_indent_grows_with_level() {
        assert_eq!(bullet_indent_mm(0), BULLET_INDENT_MM);
        assert_eq!(bullet_indent_mm(2), 3.0 * BULLET_INDENT_MM);
    }

    #[test]
    fn nested_bullet_carries_its_level() {
        let mut document = ReportDocument::new();
        document.add_bullet("Example", 2);

        let [Block::Bullet { text, level }] = document.blocks() else {
            panic!("expected a single bullet block");
        };
        assert_eq!(text, "Example");
        assert_eq!(bullet_indent_mm(*level), 3.0 * BULLET_INDENT_MM);
    }

    #[test]
    fn spacer_is_an_empty_paragraph() {
        let mut document = ReportDocument::new();
        document.add_spacer();
        assert!(matches!(
            document.blocks(),
            [Block::Paragraph { text, .. }] if text.is_empty()
        ));
    }

    #[test]
    fn feature_section_emits_expected_block_group() {
        let mut document = ReportDocument::new();
        document.add_feature_section(
            "Templates",
            "Pre-configured templates for quick creation.",
            &["Default templates", "Custom templates", "Quick apply"],
        );

        let blocks = document.blocks();
        // 1 heading + 1 description + 3 bullets + 1 trailing spacer.
        assert_eq!(blocks.len(), 6);
        assert!(matches!(
            &blocks[0],
            Block::Heading {
                level: HeadingLevel::Subsection,
                ..
            }
        ));
        assert!(matches!(&blocks[1], Block::Paragraph { .. }));
        assert!(blocks[2..5]
            .iter()
            .all(|block| matches!(block, Block::Bullet { level: 0, .. })));
        assert!(matches!(&blocks[5], Block::Paragraph { text, .. } if text.is_empty()));
    }

    #[test]
    fn feature_section_repeats_identically() {
        let mut document = ReportDocument::new();
        document.add_feature_section("Notes", "Flexible notes field.", &["Optional", "Persistent"]);
        document.add_feature_section("Notes", "Flexible notes field.", &["Optional", "Persistent"]);

        let blocks = document.blocks();
        assert_eq!(blocks.len(), 10);
        assert_eq!(&blocks[..5], &blocks[5..]);
    }

    #[test]
    fn blocks_preserve_append_order() {
        let mut document = ReportDocument::new();
        document.add_heading("Overview", HeadingLevel::Section);
        document.add_paragraph("Intro");
        document.add_bullet("First", 0);
        document.add_page_break();

        assert!(matches!(
            document.blocks(),
            [
                Block::Heading { .. },
                Block::Paragraph { .. },
                Block::Bullet { .. },
                Block::PageBreak,
            ]
        ));
    }
}
