//! The load → compose → layout → render → write pipeline.

use crate::catalog::TaskCatalog;
use crate::error::{Result, TaskListError};
use crate::fonts::FontSetup;
use crate::layout::{self, PageLayout};
use crate::render::{self, Renderer};
use crate::request::DocumentRequest;
use crate::story::Story;
use crate::style::StyleSheet;
use std::path::{Path, PathBuf};

/// Outcome of a successful [`TaskListBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Destination as given in the request
    pub destination: PathBuf,
    /// Absolute destination, as printed in the footer
    pub absolute_destination: PathBuf,
    pub pages: usize,
    pub elements: usize,
}

/// Turns one [`DocumentRequest`] into a PDF checklist.
///
/// ```rust,no_run
/// use tasklist_pdf::{DocumentRequest, Period, TaskListBuilder};
///
/// let report = TaskListBuilder::new(DocumentRequest::for_period(Period::Day)).build()?;
/// println!("{} pages", report.pages);
/// # Ok::<(), tasklist_pdf::TaskListError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TaskListBuilder {
    request: DocumentRequest,
    styles: StyleSheet,
    fonts: FontSetup,
}

impl TaskListBuilder {
    /// Creates a builder with the default styles. Fonts are picked once here
    /// with [`FontSetup::detect`].
    pub fn new(request: DocumentRequest) -> Self {
        Self::with_font_setup(request, FontSetup::detect())
    }

    /// Creates a builder with the default styles and the given fonts.
    pub fn with_font_setup(request: DocumentRequest, fonts: FontSetup) -> Self {
        Self {
            request,
            styles: StyleSheet::default(),
            fonts,
        }
    }

    pub fn with_styles(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_fonts(mut self, fonts: FontSetup) -> Self {
        self.fonts = fonts;
        self
    }

    pub fn request(&self) -> &DocumentRequest {
        &self.request
    }

    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    pub fn fonts(&self) -> &FontSetup {
        &self.fonts
    }

    pub fn load_catalog(&self) -> Result<TaskCatalog> {
        TaskCatalog::from_path(self.request.source())
    }

    /// Story for `catalog`, without the gap after the last category.
    pub fn compose(&self, catalog: &TaskCatalog) -> Story {
        let mut story = Story::compose(self.request.title(), catalog, &self.styles);
        story.trim_trailing_spacer();
        story
    }

    /// Pages for `story` with `footer` stamped on each one.
    pub fn layout(&self, story: &Story, footer: &str) -> Vec<PageLayout> {
        let mut pages = layout::layout(story, &self.styles, &self.fonts);
        layout::stamp_footer(&mut pages, footer, &self.styles, &self.fonts);
        pages
    }

    pub fn build(&self) -> Result<BuildReport> {
        let _span = tracing::info_span!(
            "build",
            source = %self.request.source().display(),
            destination = %self.request.destination().display(),
        )
        .entered();

        let catalog = self.load_catalog()?;
        let story = self.compose(&catalog);

        let destination = self.request.destination();
        let absolute_destination = absolute(destination)?;
        let footer = absolute_destination.display().to_string();
        let pages = self.layout(&story, &footer);

        let renderer = Renderer::new(&self.styles, &self.fonts);
        let mut doc = renderer.document(self.request.title(), &pages)?;
        render::write_document(&mut doc, destination)?;

        Ok(BuildReport {
            destination: destination.to_path_buf(),
            absolute_destination,
            pages: pages.len(),
            elements: story.len(),
        })
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| TaskListError::io(path, e))
}
