// src/infrastructure/renderer.rs
use crate::constants::{
    BODY_SIZE_PT, BOTTOM_LIMIT_MM, CONTENT_WIDTH_MM, EXPORT_FILE_NAME, GAP_AFTER_CARD_MM,
    GAP_AFTER_HEADING_MM, GAP_AFTER_LABEL_MM, GAP_AFTER_SUMMARY_MM, HEADING_SIZE_PT,
    LINE_HEIGHT_MM, MARGIN_LEFT_MM, MARGIN_TOP_MM, MM_PER_PT, MONO_GLYPH_EM, PAGE_HEIGHT_MM,
    PAGE_WIDTH_MM, TITLE_SIZE_PT,
};
use crate::domain::{DomainError, Note};
use crate::util::text::wrap;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

const DOCUMENT_HEADING: &str = "Smart Notes Summary";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// A single line of text at a fixed position. `y_mm` is measured from the top
/// edge of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x_mm: f32,
    pub y_mm: f32,
    pub size_pt: f32,
    pub weight: FontWeight,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub lines: Vec<PlacedLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub pages: Vec<PageLayout>,
}

/// How many glyphs of the export font fit into `width_mm`.
pub fn chars_per_line(width_mm: f32, size_pt: f32) -> usize {
    (width_mm / (MONO_GLYPH_EM * size_pt * MM_PER_PT)).floor() as usize
}

struct LayoutCursor {
    pages: Vec<PageLayout>,
    y: f32,
}

impl LayoutCursor {
    fn new() -> Self {
        Self {
            pages: vec![PageLayout::default()],
            y: MARGIN_TOP_MM,
        }
    }

    fn new_page(&mut self) {
        self.pages.push(PageLayout::default());
        self.y = MARGIN_TOP_MM;
    }

    fn at_page_top(&self) -> bool {
        self.y <= MARGIN_TOP_MM
    }

    fn advance(&mut self, mm: f32) {
        self.y += mm;
    }

    fn emit(&mut self, text: String, size_pt: f32, weight: FontWeight, advance_mm: f32) {
        if self.y > BOTTOM_LIMIT_MM {
            self.new_page();
        }
        let y_mm = self.y;
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(PlacedLine {
                text,
                x_mm: MARGIN_LEFT_MM,
                y_mm,
                size_pt,
                weight,
            });
        }
        self.advance(advance_mm);
    }

    /// Emit lines that belong together. The block moves to a fresh page when it
    /// would cross the bottom limit here but fits on an empty page.
    fn emit_block(&mut self, lines: Vec<(String, f32, FontWeight)>) {
        let last_offset = lines.len().saturating_sub(1) as f32 * LINE_HEIGHT_MM;
        let fits_on_fresh_page = MARGIN_TOP_MM + last_offset <= BOTTOM_LIMIT_MM;
        if fits_on_fresh_page && !self.at_page_top() && self.y + last_offset > BOTTOM_LIMIT_MM {
            self.new_page();
        }
        for (text, size_pt, weight) in lines {
            self.emit(text, size_pt, weight, LINE_HEIGHT_MM);
        }
    }

    fn finish(self) -> DocumentLayout {
        DocumentLayout { pages: self.pages }
    }
}

/// Characters of Windows-1252 outside Latin-1, i.e. the 0x80..=0x9F range.
const WIN_ANSI_EXTRAS: &str = "€‚ƒ„…†‡ˆ‰Š‹ŒŽ‘’“”•–—˜™š›œžŸ";

/// Restrict `text` to what the built-in PDF fonts can show. They use WinAnsi
/// encoding, which silently drops anything else; those characters become `?`.
pub fn win_ansi_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\t' => ' ',
            ' '..='~' | '\u{A0}'..='\u{FF}' => c,
            c if WIN_ANSI_EXTRAS.contains(c) => c,
            _ => '?',
        })
        .collect()
}

fn wrapped(text: &str, size_pt: f32, weight: FontWeight) -> Vec<(String, f32, FontWeight)> {
    wrap(&win_ansi_text(text), chars_per_line(CONTENT_WIDTH_MM, size_pt))
        .into_iter()
        .map(|line| (line, size_pt, weight))
        .collect()
}

/// Lay out heading, title, summary and flashcards onto A4 pages.
#[instrument(level = "debug", skip_all, fields(title = %note.title))]
pub fn layout_note(note: &Note) -> DocumentLayout {
    let mut cursor = LayoutCursor::new();

    cursor.emit(
        DOCUMENT_HEADING.to_string(),
        HEADING_SIZE_PT,
        FontWeight::Bold,
        GAP_AFTER_HEADING_MM,
    );
    cursor.emit_block(wrapped(&note.title, TITLE_SIZE_PT, FontWeight::Bold));
    cursor.advance(LINE_HEIGHT_MM);

    cursor.emit("Summary:".to_string(), BODY_SIZE_PT, FontWeight::Bold, GAP_AFTER_LABEL_MM);
    cursor.emit_block(wrapped(&note.summary, BODY_SIZE_PT, FontWeight::Regular));
    cursor.advance(GAP_AFTER_SUMMARY_MM);

    cursor.emit("Flashcards:".to_string(), BODY_SIZE_PT, FontWeight::Bold, GAP_AFTER_LABEL_MM);
    for (index, card) in note.flashcards.iter().enumerate() {
        let mut block = wrapped(
            &format!("Q{}: {}", index + 1, card.question),
            BODY_SIZE_PT,
            FontWeight::Bold,
        );
        block.extend(wrapped(&format!("A: {}", card.answer), BODY_SIZE_PT, FontWeight::Regular));
        cursor.emit_block(block);
        cursor.advance(GAP_AFTER_CARD_MM);
    }

    let layout = cursor.finish();
    debug!(pages = layout.pages.len(), "Laid out note");
    layout
}

/// Writes notes as PDF to the fixed export file inside `output_dir`.
#[derive(Debug, Clone)]
pub struct PdfExporter {
    output_dir: PathBuf,
}

impl PdfExporter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Exporter writing into the process working directory.
    pub fn in_current_dir() -> Result<Self, DomainError> {
        let dir = std::env::current_dir()
            .map_err(|e| DomainError::Export(format!("No working directory: {e}")))?;
        Ok(Self::new(dir))
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(EXPORT_FILE_NAME)
    }

    pub fn export(&self, note: &Note) -> Result<PathBuf, DomainError> {
        let layout = layout_note(note);
        let path = self.output_path();
        write_pdf(&layout, &path)?;
        info!(?path, pages = layout.pages.len(), "Exported PDF");
        Ok(path)
    }
}

fn write_pdf(layout: &DocumentLayout, path: &Path) -> Result<(), DomainError> {
    let export_err = |e: printpdf::Error| DomainError::Export(e.to_string());

    let (doc, first_page, first_layer) =
        PdfDocument::new(DOCUMENT_HEADING, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Page 1");
    let regular = doc.add_builtin_font(BuiltinFont::Courier).map_err(export_err)?;
    let bold = doc.add_builtin_font(BuiltinFont::CourierBold).map_err(export_err)?;

    for (index, page) in layout.pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(
                Mm(PAGE_WIDTH_MM),
                Mm(PAGE_HEIGHT_MM),
                format!("Page {}", index + 1),
            )
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        for line in &page.lines {
            let font = match line.weight {
                FontWeight::Regular => &regular,
                FontWeight::Bold => &bold,
            };
            layer.use_text(
                line.text.as_str(),
                line.size_pt,
                Mm(line.x_mm),
                Mm(PAGE_HEIGHT_MM - line.y_mm),
                font,
            );
        }
    }

    let file = File::create(path)
        .map_err(|e| DomainError::Export(format!("Failed to create {}: {e}", path.display())))?;
    doc.save(&mut BufWriter::new(file)).map_err(export_err)?;
    Ok(())
}
