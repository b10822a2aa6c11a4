//! The element sequence a checklist is built from.

use crate::catalog::TaskCatalog;
use crate::style::StyleSheet;

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Centered page title
    Title(String),
    /// Category name
    Heading(String),
    /// One task, drawn after a checkbox
    Bullet(String),
    /// Vertical gap in points
    Spacer(f64),
}

impl Element {
    pub fn is_spacer(&self) -> bool {
        matches!(self, Element::Spacer(_))
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Element::Title(text) | Element::Heading(text) | Element::Bullet(text) => Some(text),
            Element::Spacer(_) => None,
        }
    }
}

/// Ordered list of elements, in reading order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Story {
    elements: Vec<Element>,
}

impl Story {
    /// Title, then for every category its heading, one bullet per task and a
    /// gap. The gap after the last category is still present; see
    /// [`Story::trim_trailing_spacer`].
    pub fn compose(title: &str, catalog: &TaskCatalog, styles: &StyleSheet) -> Self {
        let mut elements = Vec::with_capacity(1 + catalog.len() * 2 + catalog.task_count());
        elements.push(Element::Title(title.to_string()));

        for category in catalog {
            elements.push(Element::Heading(category.name.clone()));
            elements.extend(category.tasks.iter().cloned().map(Element::Bullet));
            elements.push(Element::Spacer(styles.category_gap));
        }

        Self { elements }
    }

    /// Drops a trailing spacer so the document does not end on a blank page.
    /// Returns whether one was removed.
    pub fn trim_trailing_spacer(&mut self) -> bool {
        if self.elements.last().is_some_and(Element::is_spacer) {
            self.elements.pop();
            true
        } else {
            false
        }
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }
}

impl<'a> IntoIterator for &'a Story {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
