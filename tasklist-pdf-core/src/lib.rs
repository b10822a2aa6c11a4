//! # tasklist-pdf
//!
//! Turns a JSON object of categorized tasks into a printable PDF checklist.
//!
//! The input maps category names to lists of tasks. The output is a US
//! Letter document with a centered title, one heading per category, one
//! checkbox line per task, and the absolute path of the file in the footer
//! of every page. PDF encoding is handled by [`oxidize_pdf`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tasklist_pdf::{DocumentRequest, Period, TaskListBuilder};
//!
//! # fn main() -> tasklist_pdf::Result<()> {
//! // Reads example_weekly_tasks.json, writes Tasks_Weekly.pdf
//! let request = DocumentRequest::for_period(Period::Week);
//! let report = TaskListBuilder::new(request).build()?;
//! println!("wrote {} page(s) to {}", report.pages, report.destination.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Inspecting the document structure
//!
//! ```rust
//! use tasklist_pdf::{Element, Story, StyleSheet, TaskCatalog};
//!
//! let catalog: TaskCatalog = r#"{"Work": ["Email"]}"#.parse().unwrap();
//! let mut story = Story::compose("Daily Tasks", &catalog, &StyleSheet::default());
//! story.trim_trailing_spacer();
//!
//! assert_eq!(story.elements(), &[
//!     Element::Title("Daily Tasks".into()),
//!     Element::Heading("Work".into()),
//!     Element::Bullet("Email".into()),
//! ]);
//! ```

pub mod builder;
pub mod catalog;
pub mod error;
pub mod fonts;
pub mod layout;
pub mod render;
pub mod request;
pub mod story;
pub mod style;

pub use builder::{BuildReport, TaskListBuilder};
pub use catalog::{Category, TaskCatalog};
pub use error::{Result, TaskListError};
pub use fonts::{FontRole, FontSetup, DEFAULT_UNICODE_FONT};
pub use layout::{PageLayout, Placed};
pub use request::{DocumentRequest, ParsePeriodError, Period};
pub use story::{Element, Story};
pub use style::{PageSetup, ParagraphStyle, StyleSheet};

/// Current version of tasklist-pdf
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_request_is_daily() {
        let builder = TaskListBuilder::new(DocumentRequest::for_period(Period::Day));
        assert_eq!(builder.request().title(), "Daily Tasks");
        assert_eq!(builder.styles().page.width, 612.0);
    }
}
