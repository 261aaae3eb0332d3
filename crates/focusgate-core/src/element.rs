#![forbid(unsafe_code)]

//! Element and container model for focusable-set queries.
//!
//! A [`Container`] is an ordered sequence of [`Element`]s in document
//! order. Focus scopes query it for the focusable subset at activation
//! time; the container itself carries no focus state.
//!
//! # Focusable predicate
//!
//! An element is focusable iff:
//!
//! - its tab stop is not explicitly negative, and
//! - it has an interactive [`Role`], or an explicit non-negative tab stop.
//!
//! A negative tab stop always excludes, even on interactive roles.
//!
//! # Invariants
//!
//! - Element order is document order: `push` appends, `insert` places at
//!   a position, and replacing an existing id keeps its original position.
//! - `focusables()` preserves document order (it is not tab-index sorted).
//!
//! # Failure Modes
//!
//! - `get()` / `remove()` for an unknown id return `None` (no panic).

use ahash::AHashMap;

/// Identifier for an element within a container.
///
/// Ids are assigned by the host; the container only requires uniqueness
/// within itself.
pub type ElementId = u64;

/// Interactive role of an element.
///
/// The first five variants correspond to the conventional interactive
/// controls (buttons, links, form fields); `Generic` is any other node,
/// which participates in focus only via an explicit tab stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Button,
    Link,
    TextInput,
    Select,
    TextArea,
    Generic,
}

impl Role {
    /// Whether this role is inherently focusable.
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        !matches!(self, Self::Generic)
    }
}

/// A single element in a container subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    id: ElementId,
    role: Role,
    tab_index: Option<i16>,
}

impl Element {
    /// Create an element with no explicit tab stop.
    #[must_use]
    pub const fn new(id: ElementId, role: Role) -> Self {
        Self {
            id,
            role,
            tab_index: None,
        }
    }

    /// Set an explicit tab stop. Negative values exclude the element from
    /// focus entirely.
    #[must_use]
    pub const fn with_tab_index(mut self, tab_index: i16) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    #[must_use]
    pub const fn id(&self) -> ElementId {
        self.id
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub const fn tab_index(&self) -> Option<i16> {
        self.tab_index
    }

    /// The focusable predicate (see module docs).
    #[must_use]
    pub const fn is_focusable(&self) -> bool {
        match self.tab_index {
            Some(t) if t < 0 => false,
            Some(_) => true,
            None => self.role.is_interactive(),
        }
    }
}

/// Ordered element collection in document order.
#[derive(Debug, Clone, Default)]
pub struct Container {
    elements: Vec<Element>,
    index: AHashMap<ElementId, usize>,
}

impl Container {
    /// Create an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element in document order.
    ///
    /// If an element with the same id already exists it is replaced in
    /// place, keeping its original position.
    pub fn push(&mut self, element: Element) {
        if let Some(&pos) = self.index.get(&element.id) {
            self.elements[pos] = element;
            return;
        }
        self.index.insert(element.id, self.elements.len());
        self.elements.push(element);
    }

    /// Insert an element at `pos` in document order, shifting later
    /// elements down.
    ///
    /// Positions past the end append. If an element with the same id
    /// already exists it is replaced in place, keeping its original
    /// position; `pos` is ignored in that case.
    pub fn insert(&mut self, pos: usize, element: Element) {
        if let Some(&existing) = self.index.get(&element.id) {
            self.elements[existing] = element;
            return;
        }
        let pos = pos.min(self.elements.len());
        self.elements.insert(pos, element);
        for (i, el) in self.elements.iter().enumerate().skip(pos) {
            self.index.insert(el.id, i);
        }
    }

    /// Remove an element by id.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let pos = self.index.remove(&id)?;
        let removed = self.elements.remove(pos);
        for (i, el) in self.elements.iter().enumerate().skip(pos) {
            self.index.insert(el.id, i);
        }
        Some(removed)
    }

    /// Look up an element by id.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.index.get(&id).map(|&pos| &self.elements[pos])
    }

    /// Whether an element with the given id exists.
    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.index.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate elements in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Ids of all focusable elements, in document order.
    #[must_use]
    pub fn focusables(&self) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|el| el.is_focusable())
            .map(Element::id)
            .collect()
    }
}

impl FromIterator<Element> for Container {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        let mut container = Self::new();
        for element in iter {
            container.push(element);
        }
        container
    }
}
