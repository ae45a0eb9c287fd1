//! In-memory page and store for unit tests.

use super::{KeyValueStore, Page, Selector};
use secure_files_types::DomError;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeRef(usize);

#[derive(Debug, Default)]
struct Node {
    tag: String,
    id: String,
    classes: Vec<String>,
    attributes: HashMap<String, String>,
    styles: HashMap<String, String>,
    text: String,
    inner_html: String,
    parent: Option<usize>,
    detached: bool,
}

/// A flat list of nodes; index 0 is `<body>`.
pub(crate) struct MemoryPage {
    nodes: RefCell<Vec<Node>>,
}

impl MemoryPage {
    pub(crate) fn new() -> Self {
        let body = Node { tag: "body".to_string(), ..Node::default() };
        Self { nodes: RefCell::new(vec![body]) }
    }

    /// Append `<tag id=id class=classes>` under `parent` (or `<body>`).
    pub(crate) fn add(
        &self,
        tag: &str,
        id: &str,
        classes: &[&str],
        parent: Option<NodeRef>,
    ) -> NodeRef {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Node {
            tag: tag.to_string(),
            id: id.to_string(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            parent: Some(parent.map_or(0, |p| p.0)),
            ..Node::default()
        });
        NodeRef(nodes.len() - 1)
    }

    pub(crate) fn set_attribute(&self, element: NodeRef, name: &str, value: &str) {
        self.nodes.borrow_mut()[element.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub(crate) fn style(&self, element: NodeRef, property: &str) -> Option<String> {
        self.nodes.borrow()[element.0].styles.get(property).cloned()
    }

    pub(crate) fn class_name(&self, element: NodeRef) -> String {
        self.nodes.borrow()[element.0].classes.join(" ")
    }

    pub(crate) fn inner_html(&self, element: NodeRef) -> String {
        self.nodes.borrow()[element.0].inner_html.clone()
    }

    /// Attached elements carrying `id`.
    pub(crate) fn count_id(&self, id: &str) -> usize {
        (0..self.nodes.borrow().len())
            .filter(|&index| self.is_attached(index) && self.nodes.borrow()[index].id == id)
            .count()
    }

    fn is_attached(&self, index: usize) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = Some(index);
        while let Some(i) = current {
            if nodes[i].detached {
                return false;
            }
            current = nodes[i].parent;
        }
        true
    }

    fn matches(&self, index: usize, selector: Selector<'_>) -> bool {
        let nodes = self.nodes.borrow();
        let node = &nodes[index];
        match selector {
            Selector::Class(class) => node.classes.iter().any(|c| c == class),
            Selector::InputType(kind) => {
                node.tag == "input" && node.attributes.get("type").is_some_and(|t| t == kind)
            },
        }
    }
}

impl Page for MemoryPage {
    type Element = NodeRef;

    fn element_by_id(&self, id: &str) -> Option<NodeRef> {
        let len = self.nodes.borrow().len();
        (0..len)
            .find(|&index| {
                !id.is_empty() && self.nodes.borrow()[index].id == id && self.is_attached(index)
            })
            .map(NodeRef)
    }

    fn query_all(&self, selector: Selector<'_>) -> Vec<NodeRef> {
        let len = self.nodes.borrow().len();
        (0..len)
            .filter(|&index| self.is_attached(index) && self.matches(index, selector))
            .map(NodeRef)
            .collect()
    }

    fn body(&self) -> Option<NodeRef> {
        Some(NodeRef(0))
    }

    fn parent(&self, element: &NodeRef) -> Option<NodeRef> {
        self.nodes.borrow()[element.0].parent.map(NodeRef)
    }

    fn attribute(&self, element: &NodeRef, name: &str) -> Option<String> {
        self.nodes.borrow()[element.0].attributes.get(name).cloned()
    }

    fn text(&self, element: &NodeRef) -> String {
        self.nodes.borrow()[element.0].text.clone()
    }

    fn set_text(&self, element: &NodeRef, text: &str) {
        self.nodes.borrow_mut()[element.0].text = text.to_string();
    }

    fn has_class(&self, element: &NodeRef, class: &str) -> bool {
        self.nodes.borrow()[element.0].classes.iter().any(|c| c == class)
    }

    fn add_classes(&self, element: &NodeRef, classes: &[&str]) -> Result<(), DomError> {
        let mut nodes = self.nodes.borrow_mut();
        let list = &mut nodes[element.0].classes;
        for class in classes {
            if !list.iter().any(|c| c == *class) {
                list.push(class.to_string());
            }
        }
        Ok(())
    }

    fn remove_classes(&self, element: &NodeRef, classes: &[&str]) -> Result<(), DomError> {
        self.nodes.borrow_mut()[element.0]
            .classes
            .retain(|c| !classes.contains(&c.as_str()));
        Ok(())
    }

    fn set_class_name(&self, element: &NodeRef, class_name: &str) {
        self.nodes.borrow_mut()[element.0].classes =
            class_name.split_whitespace().map(str::to_string).collect();
    }

    fn set_style(&self, element: &NodeRef, property: &str, value: &str) -> Result<(), DomError> {
        self.nodes.borrow_mut()[element.0]
            .styles
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn set_inner_html(&self, element: &NodeRef, html: &str) {
        self.nodes.borrow_mut()[element.0].inner_html = html.to_string();
    }

    fn create_child(&self, parent: &NodeRef, tag: &str, id: &str) -> Result<NodeRef, DomError> {
        Ok(self.add(tag, id, &[], Some(*parent)))
    }

    fn remove(&self, element: &NodeRef) {
        self.nodes.borrow_mut()[element.0].detached = true;
    }
}

/// HashMap-backed store; `failing()` rejects every write.
#[derive(Default)]
pub(crate) struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    reject_writes: Cell<bool>,
}

impl MemoryStore {
    pub(crate) fn failing() -> Self {
        Self { reject_writes: Cell::new(true), ..Self::default() }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomError> {
        if self.reject_writes.get() {
            return Err(DomError::Js { message: "QuotaExceededError".to_string() });
        }
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
