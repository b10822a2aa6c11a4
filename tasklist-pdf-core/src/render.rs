//! Drawing laid-out pages with `oxidize-pdf` and writing the result.

use crate::error::{Result, TaskListError};
use crate::fonts::{FontRole, FontSetup};
use crate::layout::{PageLayout, Placed};
use crate::style::StyleSheet;
use oxidize_pdf::{Color, Document, Font, Page};
use std::path::Path;

/// Producer string stored in the document metadata.
pub const CREATOR: &str = concat!("tasklist-pdf ", env!("CARGO_PKG_VERSION"));

pub struct Renderer<'a> {
    styles: &'a StyleSheet,
    fonts: &'a FontSetup,
}

impl<'a> Renderer<'a> {
    pub fn new(styles: &'a StyleSheet, fonts: &'a FontSetup) -> Self {
        Self { styles, fonts }
    }

    /// Builds a document with one PDF page per layout page.
    pub fn document(&self, title: &str, pages: &[PageLayout]) -> Result<Document> {
        let mut doc = Document::new();
        doc.set_title(title);
        doc.set_creator(CREATOR);
        self.fonts.register(&mut doc)?;

        for layout in pages {
            doc.add_page(self.page(layout)?);
        }

        Ok(doc)
    }

    fn page(&self, layout: &PageLayout) -> Result<Page> {
        let mut page = Page::new(self.styles.page.width, self.styles.page.height);

        for item in &layout.items {
            match item {
                Placed::Text { font, font_size, x, y, text, .. } => {
                    draw_text(&mut page, font, *font_size, *x, *y, text)?
                }
                Placed::Checkbox { font_size, x, y } => {
                    self.checkbox(&mut page, *font_size, *x, *y)?
                }
            }
        }

        Ok(page)
    }

    fn checkbox(&self, page: &mut Page, font_size: f64, x: f64, y: f64) -> Result<()> {
        let glyph = self.styles.bullet.glyph;
        if self.fonts.has_glyph(glyph) {
            let glyph = glyph.to_string();
            let font = self.fonts.font_for(FontRole::Bullet, &glyph);
            return draw_text(page, &font, font_size, x, y, &glyph);
        }

        // No standard font carries the ballot box, so outline one that
        // sits on the baseline like the glyph would.
        let side = font_size * 0.6;
        page.graphics()
            .set_stroke_color(Color::black())
            .set_line_width(0.6)
            .rect(x, y, side, side)
            .stroke();
        Ok(())
    }
}

// Embedded fonts are Type0 with Identity-H encoding and need two-byte codes,
// which only the graphics text path writes. The text context is WinAnsi only.
fn draw_text(
    page: &mut Page,
    font: &Font,
    font_size: f64,
    x: f64,
    y: f64,
    text: &str,
) -> Result<()> {
    match font {
        Font::Custom(name) => {
            page.graphics()
                .set_custom_font(name, font_size)
                .draw_text(text, x, y)?;
        }
        standard => {
            page.text()
                .set_font(standard.clone(), font_size)
                .at(x, y)
                .write(text)?;
        }
    }
    Ok(())
}

/// Saves `doc` to `destination`.
///
/// The PDF is first written to a temporary file next to the destination and
/// renamed into place once complete. On any error the temporary file is
/// removed and `destination` is left untouched.
pub fn write_document(doc: &mut Document, destination: &Path) -> Result<()> {
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let staged = tempfile::Builder::new()
        .prefix(".tasklist-")
        .suffix(".pdf")
        .tempfile_in(dir)
        .map_err(|e| TaskListError::io(destination, e))?;

    doc.save(staged.path())?;

    staged
        .persist(destination)
        .map_err(|e| TaskListError::io(destination, e.error))?;

    tracing::info!(path = %destination.display(), "wrote PDF");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::DEFAULT_UNICODE_FONT;
    use crate::layout::{layout, stamp_footer};
    use crate::story::{Element, Story};
    use std::fs;

    fn sample_pages(styles: &StyleSheet, fonts: &FontSetup, task: &str) -> Vec<PageLayout> {
        let mut story = Story::default();
        story.push(Element::Title("Daily Tasks".to_string()));
        story.push(Element::Heading("Work".to_string()));
        story.push(Element::Bullet(task.to_string()));
        story.push(Element::Bullet("Stretch".to_string()));
        let mut pages = layout(&story, styles, fonts);
        stamp_footer(&mut pages, "/tmp/Tasks_Daily.pdf", styles, fonts);
        pages
    }

    // Saves without stream compression so content operators can be inspected.
    fn rendered_content(fonts: &FontSetup, task: &str) -> String {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("Tasks_Daily.pdf");
        let styles = StyleSheet::default();

        let mut doc = Renderer::new(&styles, fonts)
            .document("Daily Tasks", &sample_pages(&styles, fonts, task))
            .unwrap();
        doc.set_compress(false);
        write_document(&mut doc, &destination).unwrap();

        String::from_utf8_lossy(&fs::read(&destination).unwrap()).into_owned()
    }

    #[test]
    fn test_document_has_one_page_per_layout_page() {
        let styles = StyleSheet::default();
        let fonts = FontSetup::builtin();
        let renderer = Renderer::new(&styles, &fonts);

        let pages = vec![PageLayout::new(1), PageLayout::new(2), PageLayout::new(3)];
        let doc = renderer.document("Daily Tasks", &pages).unwrap();
        assert_eq!(doc.page_count(), 3);
    }

    #[test]
    fn test_builtin_fonts_draw_a_square_per_task() {
        let content = rendered_content(&FontSetup::builtin(), "Email");

        assert_eq!(content.matches(" re\n").count(), 2);
        assert!(content.contains("S\n"));
        assert!(content.contains("(Daily Tasks) Tj"));
        assert!(content.contains("(Email) Tj"));
        assert!(content.contains("(/tmp/Tasks_Daily.pdf) Tj"));
    }

    #[test]
    fn test_embedded_font_writes_two_byte_codes() {
        if !std::path::Path::new(DEFAULT_UNICODE_FONT).is_file() {
            return;
        }
        let fonts = FontSetup::unicode(DEFAULT_UNICODE_FONT).unwrap();
        let content = rendered_content(&fonts, "Email 日本");

        assert!(content.contains("/Identity-H"));
        // Checkbox glyph, one per task.
        assert_eq!(content.matches("<2610> Tj").count(), 2);
        // "Email 日本" as UTF-16 code units.
        assert!(content.contains("<0045006D00610069006C002065E5672C> Tj"));
        assert!(!content.contains("(?) Tj"));
        assert!(!content.contains("(Daily Tasks) Tj"));
        assert!(!content.contains(" re\n"));
        // Latin-1 headings keep the standard bold face.
        assert!(content.contains("(Work) Tj"));
    }

    #[test]
    fn test_write_document_creates_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("Tasks_Daily.pdf");
        let styles = StyleSheet::default();
        let fonts = FontSetup::builtin();

        let mut doc = Renderer::new(&styles, &fonts)
            .document("Daily Tasks", &sample_pages(&styles, &fonts, "Email"))
            .unwrap();
        write_document(&mut doc, &destination).unwrap();

        let content = fs::read(&destination).unwrap();
        assert!(content.starts_with(b"%PDF-"));

        // Only the destination remains; the staging file was renamed.
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_write_document_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("Tasks_Daily.pdf");
        fs::write(&destination, b"stale").unwrap();
        let styles = StyleSheet::default();
        let fonts = FontSetup::builtin();

        let mut doc = Renderer::new(&styles, &fonts)
            .document("Daily Tasks", &sample_pages(&styles, &fonts, "Email"))
            .unwrap();
        write_document(&mut doc, &destination).unwrap();

        assert!(fs::read(&destination).unwrap().starts_with(b"%PDF-"));
    }

    #[test]
    fn test_write_document_into_missing_directory_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("missing").join("Tasks_Daily.pdf");
        let styles = StyleSheet::default();
        let fonts = FontSetup::builtin();

        let mut doc = Renderer::new(&styles, &fonts)
            .document("Daily Tasks", &sample_pages(&styles, &fonts, "Email"))
            .unwrap();
        let err = write_document(&mut doc, &destination).unwrap_err();

        assert!(matches!(err, TaskListError::Io { .. }));
        assert!(!destination.exists());
    }
}
