use core::fmt::{Debug, Formatter};
use std::fmt;

/// Ordered set of class names of an element. Classes keep the order in which they were added,
/// so writing a document is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassListImpl {
    classes: Vec<String>,
}

impl ClassListImpl {
    #[must_use]
    pub fn new() -> Self {
        Self { classes: Vec::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.classes.iter().any(|class| class == name)
    }

    /// Appends a class. Classes that are already present keep their position.
    pub fn add(&mut self, name: &str) {
        if name.is_empty() || self.contains(name) {
            return;
        }
        self.classes.push(name.to_owned());
    }

    pub fn remove(&mut self, name: &str) {
        self.classes.retain(|class| class != name);
    }

    /// Class names in insertion order
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.classes
    }
}

/// Builds a class list from a slice of class names. Duplicates are dropped.
impl From<&[&str]> for ClassListImpl {
    fn from(names: &[&str]) -> Self {
        let mut list = ClassListImpl::new();
        for name in names {
            list.add(name);
        }
        list
    }
}

/// Data of an element node
#[derive(PartialEq, Clone)]
pub struct ElementData {
    /// Tag name (e.g., div)
    pub name: String,
    pub class_list: ClassListImpl,
}

impl Debug for ElementData {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementData")
            .field("name", &self.name)
            .field("classes", &self.class_list.names())
            .finish()
    }
}

impl ElementData {
    #[must_use]
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            class_list: ClassListImpl::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    #[must_use]
    pub fn classlist(&self) -> &ClassListImpl {
        &self.class_list
    }

    pub fn classlist_mut(&mut self) -> &mut ClassListImpl {
        &mut self.class_list
    }
}
