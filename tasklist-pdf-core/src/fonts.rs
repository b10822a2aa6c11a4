//! Font selection for the rendered checklist.
//!
//! The standard PDF fonts only cover WinAnsi text, which leaves out the
//! checkbox glyph (U+2610) and most non-Latin task text. A [`FontSetup`]
//! decides once, before any page is drawn, whether a TrueType font is
//! embedded for those runs or whether the built-in Helvetica family is used
//! with a drawn checkbox instead. The same setup measures text, so lines are
//! wrapped with the metrics of the font they are drawn in.

use crate::error::{Result, TaskListError};
use oxidize_pdf::fonts::Font as FontFile;
use oxidize_pdf::{measure_text, Document, Font};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Font file used when nothing else is configured.
pub const DEFAULT_UNICODE_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// Resource name of the embedded TrueType font inside the document.
pub const UNICODE_FONT_NAME: &str = "DejaVuSans";

/// What a run of text is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Title,
    Heading,
    Body,
    Bullet,
    Footer,
}

#[derive(Debug, Clone)]
pub enum FontSetup {
    /// Standard PDF fonts only.
    Builtin,
    /// Embed the TrueType font read from `path` under `name`.
    Unicode {
        name: String,
        path: PathBuf,
        face: Arc<FontFile>,
    },
}

impl PartialEq for FontSetup {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FontSetup::Builtin, FontSetup::Builtin) => true,
            (
                FontSetup::Unicode { name, path, .. },
                FontSetup::Unicode {
                    name: other_name,
                    path: other_path,
                    ..
                },
            ) => name == other_name && path == other_path,
            _ => false,
        }
    }
}

impl Eq for FontSetup {}

impl FontSetup {
    pub fn builtin() -> Self {
        FontSetup::Builtin
    }

    /// Loads and parses the TrueType font at `path`.
    pub fn unicode(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let font_error = |reason: String| TaskListError::Font {
            path: path.clone(),
            reason,
        };

        let data = std::fs::read(&path).map_err(|e| font_error(e.to_string()))?;
        let face = FontFile::from_bytes(UNICODE_FONT_NAME, data)
            .map_err(|e| font_error(e.to_string()))?;

        Ok(FontSetup::Unicode {
            name: UNICODE_FONT_NAME.to_string(),
            path,
            face: Arc::new(face),
        })
    }

    /// Uses [`DEFAULT_UNICODE_FONT`] when it is installed, the built-in
    /// fonts otherwise.
    pub fn detect() -> Self {
        Self::detect_at(DEFAULT_UNICODE_FONT)
    }

    pub fn detect_at(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.is_file() {
            tracing::warn!(
                font = %path.display(),
                "unicode font not found, falling back to built-in fonts"
            );
            return FontSetup::Builtin;
        }

        match Self::unicode(path) {
            Ok(setup) => {
                tracing::debug!(font = %path.display(), "using unicode font");
                setup
            }
            Err(e) => {
                tracing::warn!(error = %e, "falling back to built-in fonts");
                FontSetup::Builtin
            }
        }
    }

    /// Whether `glyph` can be written as text rather than drawn.
    pub fn has_glyph(&self, glyph: char) -> bool {
        match self {
            FontSetup::Builtin => false,
            FontSetup::Unicode { face, .. } => face.has_glyph(glyph),
        }
    }

    /// Embeds the configured font into `doc`. Must run before pages that use
    /// it are drawn; a no-op for [`FontSetup::Builtin`].
    pub fn register(&self, doc: &mut Document) -> Result<()> {
        let FontSetup::Unicode { name, path, face } = self else {
            return Ok(());
        };

        doc.add_font_from_bytes(name.as_str(), face.data.clone())
            .map_err(|e| TaskListError::Font {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!(font = %path.display(), name = %name, "registered font");
        Ok(())
    }

    /// Font used to draw `text` in the given role.
    ///
    /// Chosen per paragraph: every wrapped line of `text` uses the result.
    pub fn font_for(&self, role: FontRole, text: &str) -> Font {
        match self {
            FontSetup::Builtin => standard_font(role),
            FontSetup::Unicode { name, .. } => match role {
                // Headings stay bold unless the standard font cannot show them.
                FontRole::Heading if is_latin1(text) => Font::HelveticaBold,
                _ => Font::custom(name.as_str()),
            },
        }
    }

    /// Width of `text` in points when drawn with `font`.
    pub fn text_width(&self, font: &Font, text: &str, font_size: f64) -> f64 {
        match (self, font) {
            (FontSetup::Unicode { name, face, .. }, Font::Custom(custom)) if custom == name => {
                f64::from(face.measure_text(text, font_size as f32).width)
            }
            // Custom fonts have no standard metrics.
            (_, Font::Custom(_)) => measure_text(text, Font::Helvetica, font_size),
            _ => measure_text(text, font.clone(), font_size),
        }
    }
}

fn standard_font(role: FontRole) -> Font {
    match role {
        FontRole::Heading => Font::HelveticaBold,
        _ => Font::Helvetica,
    }
}

fn is_latin1(text: &str) -> bool {
    text.chars().all(|c| (c as u32) <= 0xFF)
}
