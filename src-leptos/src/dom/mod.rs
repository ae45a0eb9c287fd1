//! Page seam: the slice of the DOM and local storage the enhancers touch.
//!
//! Enhancers are written against [`Page`] and [`KeyValueStore`] so the same
//! code drives the live document ([`WebPage`], [`LocalStore`]) and the
//! in-memory page used by the unit tests.

mod web;

#[cfg(test)]
pub(crate) mod memory;

pub use web::{listen, LocalStore, WebPage};

use secure_files_types::DomError;

/// Element queries the enhancers need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// Elements carrying a class, e.g. `.tab-content`
    Class(&'a str),
    /// `<input>` elements of a given type, e.g. `input[type="password"]`
    InputType(&'a str),
}

impl Selector<'_> {
    /// CSS selector string.
    pub fn to_css(&self) -> String {
        match self {
            Self::Class(class) => format!(".{}", class),
            Self::InputType(kind) => format!("input[type=\"{}\"]", kind),
        }
    }
}

/// Read and write access to the rendered document.
///
/// Reads are infallible and return `None`/empty for anything missing.
/// Writes that the browser can reject return a [`DomError`]; callers log it
/// and move on.
pub trait Page {
    /// Handle to one element.
    type Element: Clone;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All matching elements in document order.
    fn query_all(&self, selector: Selector<'_>) -> Vec<Self::Element>;

    fn body(&self) -> Option<Self::Element>;

    fn parent(&self, element: &Self::Element) -> Option<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn text(&self, element: &Self::Element) -> String;

    fn set_text(&self, element: &Self::Element, text: &str);

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    fn add_classes(&self, element: &Self::Element, classes: &[&str]) -> Result<(), DomError>;

    fn remove_classes(&self, element: &Self::Element, classes: &[&str]) -> Result<(), DomError>;

    /// Replace the whole `class` attribute.
    fn set_class_name(&self, element: &Self::Element, class_name: &str);

    fn set_style(&self, element: &Self::Element, property: &str, value: &str)
        -> Result<(), DomError>;

    fn set_inner_html(&self, element: &Self::Element, html: &str);

    /// Create `<tag id=id>` as the last child of `parent`.
    fn create_child(
        &self,
        parent: &Self::Element,
        tag: &str,
        id: &str,
    ) -> Result<Self::Element, DomError>;

    /// Detach the element from the document.
    fn remove(&self, element: &Self::Element);

    /// First element matching `selector`.
    fn query_first(&self, selector: Selector<'_>) -> Option<Self::Element> {
        self.query_all(selector).into_iter().next()
    }

    /// Look `id` up anywhere in the document, creating it under `parent`
    /// when absent. The flag is `true` when the element was just created.
    fn get_or_create_child(
        &self,
        parent: &Self::Element,
        tag: &str,
        id: &str,
    ) -> Result<(Self::Element, bool), DomError> {
        match self.element_by_id(id) {
            Some(existing) => Ok((existing, false)),
            None => self.create_child(parent, tag, id).map(|created| (created, true)),
        }
    }
}

/// String key-value storage that survives page reloads.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), DomError>;
}

/// Log a rejected DOM write and carry on.
pub(crate) fn warn_on_err(result: Result<(), DomError>, action: &str) {
    if let Err(e) = result {
        log::warn!("Failed to {}: {}", action, e);
    }
}
