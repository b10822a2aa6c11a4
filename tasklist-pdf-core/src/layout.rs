//! Line wrapping and pagination.
//!
//! `oxidize-pdf` draws text at absolute positions, so the story is flowed
//! here: paragraphs are wrapped to the frame width, stacked top-down with
//! their spacing, and moved to a new page when the frame runs out. The
//! result is a list of [`PageLayout`]s with every item already positioned.

use crate::fonts::{FontRole, FontSetup};
use crate::story::{Element, Story};
use crate::style::{BulletStyle, ParagraphStyle, StyleSheet};
use oxidize_pdf::{Font, TextAlign};

// Tolerance for float comparisons against the bottom of the frame.
const EPSILON: f64 = 1e-6;

/// An item positioned on a page. Coordinates are PDF user space: origin at
/// the bottom-left corner, `y` is the text baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum Placed {
    Text {
        role: FontRole,
        font: Font,
        font_size: f64,
        x: f64,
        y: f64,
        text: String,
    },
    Checkbox {
        font_size: f64,
        x: f64,
        y: f64,
    },
}

impl Placed {
    pub fn y(&self) -> f64 {
        match self {
            Placed::Text { y, .. } | Placed::Checkbox { y, .. } => *y,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    /// 1-based page number
    pub number: usize,
    pub items: Vec<Placed>,
}

impl PageLayout {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            items: Vec::new(),
        }
    }

    /// Text of every item drawn in `role`, in placement order.
    pub fn texts(&self, role: FontRole) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(move |item| match item {
            Placed::Text { role: r, text, .. } if *r == role => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn footer(&self) -> Option<&str> {
        self.texts(FontRole::Footer).next()
    }

    pub fn checkbox_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, Placed::Checkbox { .. }))
            .count()
    }
}

/// Breaks `text` into lines no wider than `max_width` when drawn with `font`.
///
/// Whitespace runs collapse to a single space. A word wider than
/// `max_width` gets a line of its own. Empty text yields one empty line.
pub fn wrap_text(
    fonts: &FontSetup,
    font: &Font,
    text: &str,
    font_size: f64,
    max_width: f64,
) -> Vec<String> {
    let space = fonts.text_width(font, " ", font_size);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut width = 0.0;

    for word in text.split_whitespace() {
        let word_width = fonts.text_width(font, word, font_size);

        if !line.is_empty() && width + space + word_width > max_width + EPSILON {
            lines.push(std::mem::take(&mut line));
            width = 0.0;
        }

        if !line.is_empty() {
            line.push(' ');
            width += space;
        }
        line.push_str(word);
        width += word_width;
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }

    lines
}

/// Flows `story` onto pages.
///
/// Always returns at least one page, even for an empty story.
pub fn layout(story: &Story, styles: &StyleSheet, fonts: &FontSetup) -> Vec<PageLayout> {
    let mut paginator = Paginator::new(styles, fonts);

    for element in story {
        match element {
            Element::Title(text) => paginator.paragraph(text, &styles.title, None),
            Element::Heading(text) => paginator.paragraph(text, &styles.heading, None),
            Element::Bullet(text) => paginator.paragraph(text, &styles.task, Some(&styles.bullet)),
            Element::Spacer(height) => paginator.spacer(*height),
        }
    }

    let pages = paginator.finish();
    tracing::debug!(elements = story.len(), pages = pages.len(), "laid out story");
    pages
}

/// Adds `text` as the footer line of every page.
pub fn stamp_footer(pages: &mut [PageLayout], text: &str, styles: &StyleSheet, fonts: &FontSetup) {
    let font = fonts.font_for(FontRole::Footer, text);
    for page in pages {
        page.items.push(Placed::Text {
            role: FontRole::Footer,
            font: font.clone(),
            font_size: styles.footer.font_size,
            x: styles.page.margins.left,
            y: styles.footer.offset,
            text: text.to_string(),
        });
    }
}

struct Paginator<'a> {
    styles: &'a StyleSheet,
    fonts: &'a FontSetup,
    finished: Vec<PageLayout>,
    current: Option<PageLayout>,
    /// Top of the free space left in the frame
    cursor: f64,
    /// Nothing placed on the current page yet
    at_top: bool,
}

impl<'a> Paginator<'a> {
    fn new(styles: &'a StyleSheet, fonts: &'a FontSetup) -> Self {
        Self {
            styles,
            fonts,
            finished: Vec::new(),
            current: None,
            cursor: styles.page.frame_top(),
            at_top: true,
        }
    }

    fn bottom(&self) -> f64 {
        self.styles.page.frame_bottom()
    }

    fn break_page(&mut self) {
        if let Some(page) = self.current.take() {
            self.finished.push(page);
        }
        self.cursor = self.styles.page.frame_top();
        self.at_top = true;
    }

    // Pages are opened lazily so trailing space never produces an empty page.
    fn place(&mut self, item: Placed) {
        let number = self.finished.len() + 1;
        self.current
            .get_or_insert_with(|| PageLayout::new(number))
            .items
            .push(item);
        self.at_top = false;
    }

    fn paragraph(&mut self, text: &str, style: &ParagraphStyle, bullet: Option<&BulletStyle>) {
        let margin_left = self.styles.page.margins.left;
        let left = margin_left + style.left_indent;
        let width = self.styles.page.frame_width() - style.left_indent;
        let font = self.fonts.font_for(style.role, text);
        let lines = wrap_text(self.fonts, &font, text, style.font_size, width);

        if !self.at_top {
            self.cursor -= style.space_before;
        }

        for (index, line) in lines.into_iter().enumerate() {
            if !self.at_top && self.cursor - style.leading < self.bottom() - EPSILON {
                self.break_page();
            }

            let baseline = self.cursor - style.font_size;
            let line_width = self.fonts.text_width(&font, &line, style.font_size);
            let x = match style.alignment {
                TextAlign::Center => left + ((width - line_width) / 2.0).max(0.0),
                TextAlign::Right => left + (width - line_width).max(0.0),
                _ => left,
            };

            if index == 0 {
                if let Some(bullet) = bullet {
                    self.place(Placed::Checkbox {
                        font_size: bullet.font_size,
                        x: margin_left + bullet.indent,
                        y: baseline,
                    });
                }
            }

            self.place(Placed::Text {
                role: style.role,
                font: font.clone(),
                font_size: style.font_size,
                x,
                y: baseline,
                text: line,
            });
            self.cursor -= style.leading;
        }

        self.cursor -= style.space_after;
    }

    fn spacer(&mut self, height: f64) {
        if self.at_top {
            return;
        }
        // A gap that does not fit ends the page instead of spilling over.
        self.cursor = (self.cursor - height).max(self.bottom());
    }

    fn finish(mut self) -> Vec<PageLayout> {
        if let Some(page) = self.current.take() {
            self.finished.push(page);
        }
        if self.finished.is_empty() {
            self.finished.push(PageLayout::new(1));
        }
        self.finished
    }
}
