//! Task catalog loading.
//!
//! A catalog is a JSON object whose keys are category names and whose values
//! are lists of task descriptions:
//!
//! ```json
//! {
//!     "Health": ["Drink water", "Stretch"],
//!     "Work": ["Email"]
//! }
//! ```
//!
//! Categories keep the order in which they appear in the source. A category
//! that appears twice keeps its first position and its last task list.

use crate::error::{Result, TaskListError};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;
use std::str::FromStr;

/// A named group of tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub tasks: Vec<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, tasks: Vec<String>) -> Self {
        Self {
            name: name.into(),
            tasks,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Ordered mapping from category name to its tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCatalog {
    categories: Vec<Category>,
}

impl TaskCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a catalog from a JSON file.
    ///
    /// A missing file is reported as [`TaskListError::SourceNotFound`] so
    /// callers can tell it apart from unreadable or malformed input.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(TaskListError::SourceNotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => return Err(TaskListError::io(path, e)),
        };

        let catalog: TaskCatalog =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                TaskListError::Json {
                    path: path.to_path_buf(),
                    source,
                }
            })?;

        tracing::debug!(
            path = %path.display(),
            categories = catalog.len(),
            tasks = catalog.task_count(),
            "loaded task catalog"
        );

        Ok(catalog)
    }

    /// Adds a category, or replaces the tasks of an existing one in place.
    pub fn insert(&mut self, name: impl Into<String>, tasks: Vec<String>) {
        let name = name.into();
        match self.categories.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.tasks = tasks,
            None => self.categories.push(Category::new(name, tasks)),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of tasks across all categories.
    pub fn task_count(&self) -> usize {
        self.categories.iter().map(|c| c.tasks.len()).sum()
    }
}

impl<'a> IntoIterator for &'a TaskCatalog {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}

impl<N: Into<String>> FromIterator<(N, Vec<String>)> for TaskCatalog {
    fn from_iter<I: IntoIterator<Item = (N, Vec<String>)>>(iter: I) -> Self {
        let mut catalog = TaskCatalog::new();
        for (name, tasks) in iter {
            catalog.insert(name, tasks);
        }
        catalog
    }
}

impl FromStr for TaskCatalog {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

// serde_json's default map type sorts its keys, so the object is walked
// entry by entry to keep declaration order.
impl<'de> Deserialize<'de> for TaskCatalog {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = TaskCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping category names to lists of task strings")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut catalog = TaskCatalog::new();
                while let Some((name, tasks)) = map.next_entry::<String, Vec<String>>()? {
                    catalog.insert(name, tasks);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
