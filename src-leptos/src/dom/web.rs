//! Live-browser implementations of the page seam over `web-sys`.

use super::{KeyValueStore, Page, Selector};
use secure_files_types::DomError;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Storage};

fn js_error(value: JsValue) -> DomError {
    DomError::Js { message: format!("{:?}", value) }
}

/// The current document.
#[derive(Clone)]
pub struct WebPage {
    document: Document,
}

impl WebPage {
    /// Bind to `window.document`.
    pub fn new() -> Result<Self, DomError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(DomError::NoDocument)?;
        Ok(Self { document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Page for WebPage {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: Selector<'_>) -> Vec<Element> {
        let css = selector.to_css();
        match self.document.query_selector_all(&css) {
            Ok(list) => (0..list.length())
                .filter_map(|index| list.item(index))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .collect(),
            Err(e) => {
                log::warn!("Invalid selector {}: {:?}", css, e);
                Vec::new()
            },
        }
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn parent(&self, element: &Element) -> Option<Element> {
        element.parent_element()
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn text(&self, element: &Element) -> String {
        element.text_content().unwrap_or_default()
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_classes(&self, element: &Element, classes: &[&str]) -> Result<(), DomError> {
        let list = element.class_list();
        for class in classes {
            list.add_1(class).map_err(js_error)?;
        }
        Ok(())
    }

    fn remove_classes(&self, element: &Element, classes: &[&str]) -> Result<(), DomError> {
        let list = element.class_list();
        for class in classes {
            list.remove_1(class).map_err(js_error)?;
        }
        Ok(())
    }

    fn set_class_name(&self, element: &Element, class_name: &str) {
        element.set_class_name(class_name);
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) -> Result<(), DomError> {
        let html = element.dyn_ref::<HtmlElement>().ok_or_else(|| DomError::Js {
            message: format!("<{}> has no inline style", element.tag_name()),
        })?;
        html.style().set_property(property, value).map_err(js_error)
    }

    fn set_inner_html(&self, element: &Element, html: &str) {
        element.set_inner_html(html);
    }

    fn create_child(&self, parent: &Element, tag: &str, id: &str) -> Result<Element, DomError> {
        let child = self.document.create_element(tag).map_err(js_error)?;
        child.set_id(id);
        parent.append_child(&child).map_err(js_error)?;
        Ok(child)
    }

    fn remove(&self, element: &Element) {
        element.remove();
    }
}

/// `window.localStorage`. Missing or blocked storage reads as empty.
#[derive(Clone, Default)]
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable, theme will not persist");
        }
        Self { storage }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomError> {
        self.storage
            .as_ref()
            .ok_or(DomError::NoDocument)?
            .set_item(key, value)
            .map_err(js_error)
    }
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), DomError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    // Listeners live as long as the page; nothing ever unregisters them.
    closure.forget();
    Ok(())
}
