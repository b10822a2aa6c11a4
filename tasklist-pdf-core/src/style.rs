//! Fixed page and paragraph parameters for the checklist.

use crate::fonts::FontRole;
use oxidize_pdf::{Margins, TextAlign};

/// Page size and margins in points (1/72 inch).
#[derive(Debug, Clone)]
pub struct PageSetup {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
}

impl PageSetup {
    /// US Letter (612 x 792 points) with 1 inch margins.
    pub fn letter() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margins: Margins {
                left: 72.0,
                right: 72.0,
                top: 72.0,
                bottom: 72.0,
            },
        }
    }

    pub fn frame_width(&self) -> f64 {
        self.width - self.margins.left - self.margins.right
    }

    /// Top edge of the frame content is laid out in.
    pub fn frame_top(&self) -> f64 {
        self.height - self.margins.top
    }

    /// Bottom edge of the frame content is laid out in.
    pub fn frame_bottom(&self) -> f64 {
        self.margins.bottom
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::letter()
    }
}

#[derive(Debug, Clone)]
pub struct ParagraphStyle {
    pub role: FontRole,
    pub font_size: f64,
    /// Baseline-to-baseline distance
    pub leading: f64,
    pub space_before: f64,
    pub space_after: f64,
    pub left_indent: f64,
    pub alignment: TextAlign,
}

/// The checkbox drawn in front of each task.
#[derive(Debug, Clone)]
pub struct BulletStyle {
    pub glyph: char,
    pub font_size: f64,
    /// Offset from the left margin
    pub indent: f64,
}

#[derive(Debug, Clone)]
pub struct FooterStyle {
    pub font_size: f64,
    /// Baseline height above the bottom page edge
    pub offset: f64,
}

#[derive(Debug, Clone)]
pub struct StyleSheet {
    pub page: PageSetup,
    pub title: ParagraphStyle,
    pub heading: ParagraphStyle,
    pub task: ParagraphStyle,
    pub bullet: BulletStyle,
    pub footer: FooterStyle,
    /// Gap inserted after each category
    pub category_gap: f64,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            page: PageSetup::letter(),
            title: ParagraphStyle {
                role: FontRole::Title,
                font_size: 28.0,
                leading: 32.0,
                space_before: 0.0,
                space_after: 24.0,
                left_indent: 0.0,
                alignment: TextAlign::Center,
            },
            heading: ParagraphStyle {
                role: FontRole::Heading,
                font_size: 14.0,
                leading: 18.0,
                space_before: 12.0,
                space_after: 6.0,
                left_indent: 0.0,
                alignment: TextAlign::Left,
            },
            task: ParagraphStyle {
                role: FontRole::Body,
                font_size: 10.0,
                leading: 12.0,
                space_before: 0.0,
                space_after: 2.0,
                left_indent: 12.0,
                alignment: TextAlign::Left,
            },
            bullet: BulletStyle {
                glyph: '\u{2610}',
                font_size: 13.0,
                indent: 0.0,
            },
            footer: FooterStyle {
                font_size: 8.0,
                offset: 36.0,
            },
            category_gap: 12.0,
        }
    }
}
