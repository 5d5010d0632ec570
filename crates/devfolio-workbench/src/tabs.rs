//! Ordered set of open tabs.

use serde::Serialize;

/// Open identifiers in the order they were opened. Never holds duplicates.
///
/// # Examples
///
/// ```
/// use devfolio_workbench::OpenFileSet;
///
/// let mut tabs = OpenFileSet::new();
/// tabs.open("a");
/// tabs.open("b");
/// tabs.open("a");
///
/// assert_eq!(tabs.as_slice(), ["a", "b"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OpenFileSet {
    ids: Vec<String>,
}

impl OpenFileSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Appends `id` unless already open. Returns `true` if it was added.
    pub fn open(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    /// Removes `id`. Returns `true` if it was open.
    pub fn close(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|open| open != id);
        self.ids.len() != before
    }

    /// Returns `true` if `id` is open.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|open| open == id)
    }

    /// Most recently appended identifier.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.ids.last().map(String::as_str)
    }

    /// Identifiers in tab order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }

    /// Iterates identifiers in tab order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Number of open tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if no tab is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
