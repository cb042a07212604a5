//! Conversion of the block model into a rendered PDF document.

use genpdf::elements::{Break, PageBreak, Paragraph};
use genpdf::style::{Color, Style, StyledString};
use genpdf::{self, Alignment, Element, Margins, Mm, SimplePageDecorator, Size};
use log::debug;

use crate::error::ReportError;
use crate::fonts;
use crate::model::{
    bullet_indent_mm, Block, HeadingLevel, HorizontalAlignment, ReportDocument, TextStyle,
};

const LETTER_WIDTH_MM: f64 = 215.9;
const LETTER_HEIGHT_MM: f64 = 279.4;

/// Page margin on all four sides (1 in).
const PAGE_MARGIN_MM: f64 = 25.4;

const BODY_FONT_SIZE: u8 = 11;
const TITLE_FONT_SIZE: u8 = 26;
const SECTION_FONT_SIZE: u8 = 16;
const SUBSECTION_FONT_SIZE: u8 = 13;

const LINE_SPACING: f64 = 1.2;
const PARAGRAPH_GAP_MM: f64 = 1.5;
const BULLET_GAP_MM: f64 = 1.0;
const HEADING_GAP_TOP_MM: f64 = 2.0;
const HEADING_GAP_BOTTOM_MM: f64 = 1.5;

const HEADING_COLOR: Color = Color::Rgb(31, 73, 125);

fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

/// Builder for `genpdf::Document` instances pre-configured for report output.
#[derive(Default)]
pub struct DocumentBuilder {
    paper_size: Option<Size>,
    margins: Option<Margins>,
    title: Option<String>,
}

impl DocumentBuilder {
    /// Creates a new builder instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the paper size used for newly created documents.
    pub fn with_paper_size(mut self, paper_size: impl Into<Size>) -> Self {
        self.paper_size = Some(paper_size.into());
        self
    }

    /// Sets the margins applied through the page decorator.
    pub fn with_margins(mut self, margins: impl Into<Margins>) -> Self {
        self.margins = Some(margins.into());
        self
    }

    /// Sets the document title recorded in the PDF metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builds a fully configured `genpdf::Document` instance.
    ///
    /// Fails with [`ReportError::MissingFonts`] when the bundled font family
    /// cannot be loaded.
    pub fn build(self) -> Result<genpdf::Document, ReportError> {
        let font_family = fonts::default_font_family()?;
        let mut document = genpdf::Document::new(font_family);

        if let Some(title) = self.title {
            document.set_title(title);
        }
        if let Some(paper_size) = self.paper_size {
            document.set_paper_size(paper_size);
        }

        let mut decorator = SimplePageDecorator::new();
        if let Some(margins) = self.margins {
            decorator.set_margins(margins);
        }
        document.set_page_decorator(decorator);

        document.set_font_size(BODY_FONT_SIZE);
        document.set_line_spacing(LINE_SPACING);

        Ok(document)
    }
}

/// Renders the document blocks to PDF bytes.
pub fn render(report: &ReportDocument) -> Result<Vec<u8>, ReportError> {
    debug!("rendering {} blocks", report.blocks().len());

    let mut builder = DocumentBuilder::new()
        .with_paper_size(Size::new(
            mm_from_f64(LETTER_WIDTH_MM),
            mm_from_f64(LETTER_HEIGHT_MM),
        ))
        .with_margins(Margins::trbl(
            mm_from_f64(PAGE_MARGIN_MM),
            mm_from_f64(PAGE_MARGIN_MM),
            mm_from_f64(PAGE_MARGIN_MM),
            mm_from_f64(PAGE_MARGIN_MM),
        ));
    if let Some(title) = document_title(report) {
        builder = builder.with_title(title);
    }
    let mut document = builder.build()?;

    for block in report.blocks() {
        push_block(&mut document, block);
    }

    let mut buffer = Vec::new();
    document.render(&mut buffer)?;
    debug!("rendered {} bytes", buffer.len());
    Ok(buffer)
}

fn document_title(report: &ReportDocument) -> Option<&str> {
    report.blocks().iter().find_map(|block| match block {
        Block::Heading {
            text,
            level: HeadingLevel::Title,
        } => Some(text.as_str()),
        _ => None,
    })
}

fn push_block(document: &mut genpdf::Document, block: &Block) {
    match block {
        Block::Heading { text, level } => {
            let mut paragraph =
                Paragraph::new(StyledString::new(text.clone(), heading_style(*level)));
            if matches!(level, HeadingLevel::Section) {
                paragraph.set_alignment(Alignment::Center);
            }
            document.push(paragraph.padded(Margins::trbl(
                mm_from_f64(HEADING_GAP_TOP_MM),
                0,
                mm_from_f64(HEADING_GAP_BOTTOM_MM),
                0,
            )));
        }
        Block::Paragraph {
            text,
            style,
            alignment,
        } => {
            if text.is_empty() {
                document.push(Break::new(1.0));
            } else {
                let mut paragraph =
                    Paragraph::new(StyledString::new(text.clone(), to_render_style(style)));
                paragraph.set_alignment(to_render_alignment(*alignment));
                document.push(paragraph.padded(Margins::trbl(
                    0,
                    0,
                    mm_from_f64(PARAGRAPH_GAP_MM),
                    0,
                )));
            }
        }
        Block::Bullet { text, level } => {
            let paragraph = Paragraph::new(StyledString::new(
                format!("\u{2022} {text}"),
                Style::new(),
            ));
            document.push(paragraph.padded(Margins::trbl(
                0,
                0,
                mm_from_f64(BULLET_GAP_MM),
                mm_from_f64(bullet_indent_mm(*level)),
            )));
        }
        Block::PageBreak => document.push(PageBreak::new()),
    }
}

fn heading_style(level: HeadingLevel) -> Style {
    let font_size = match level {
        HeadingLevel::Title => TITLE_FONT_SIZE,
        HeadingLevel::Section => SECTION_FONT_SIZE,
        HeadingLevel::Subsection => SUBSECTION_FONT_SIZE,
    };
    let mut style = Style::new();
    style.set_font_size(font_size);
    style.set_bold();
    style.set_color(HEADING_COLOR);
    style
}

fn to_render_style(text_style: &TextStyle) -> Style {
    let mut style = Style::new();
    if let Some(font_size) = text_style.font_size() {
        style.set_font_size(font_size);
    }
    if text_style.is_bold() {
        style.set_bold();
    }
    if text_style.is_italic() {
        style.set_italic();
    }
    style
}

fn to_render_alignment(alignment: HorizontalAlignment) -> Alignment {
    match alignment {
        HorizontalAlignment::Left => Alignment::Left,
        HorizontalAlignment::Center => Alignment::Center,
        HorizontalAlignment::Right => Alignment::Right,
    }
}
