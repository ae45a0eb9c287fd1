//! Mutually exclusive tab panels.

use crate::dom::{listen, warn_on_err, Page, Selector, WebPage};

pub const TAB_CONTENT_CLASS: &str = "tab-content";
pub const TAB_BUTTON_CLASS: &str = "tab-button";
pub const HIDDEN_CLASS: &str = "hidden";

/// Attribute naming the tab a button opens.
const TAB_ATTR: &str = "data-tab";

const ACTIVE_CLASSES: [&str; 2] = ["bg-blue-600", "text-white"];
const INACTIVE_CLASSES: [&str; 2] = ["bg-gray-200", "text-gray-700"];

/// Id of the panel shown for `tab_name`.
pub fn panel_id(tab_name: &str) -> String {
    format!("{}-tab", tab_name)
}

/// Show `<tab_name>-tab`, hide every other `.tab-content` and mark
/// `trigger` as the active button.
///
/// If the panel does not exist nothing changes and `false` is returned.
pub fn switch_tab<P: Page>(page: &P, tab_name: &str, trigger: Option<&P::Element>) -> bool {
    let id = panel_id(tab_name);
    let Some(target) = page.element_by_id(&id) else {
        log::warn!("No tab panel #{}, keeping the current tab", id);
        return false;
    };

    for panel in page.query_all(Selector::Class(TAB_CONTENT_CLASS)) {
        warn_on_err(page.add_classes(&panel, &[HIDDEN_CLASS]), "hide tab panel");
    }

    for button in page.query_all(Selector::Class(TAB_BUTTON_CLASS)) {
        warn_on_err(page.remove_classes(&button, &ACTIVE_CLASSES), "deactivate tab button");
        warn_on_err(page.add_classes(&button, &INACTIVE_CLASSES), "deactivate tab button");
    }

    warn_on_err(page.remove_classes(&target, &[HIDDEN_CLASS]), "show tab panel");

    if let Some(trigger) = trigger {
        warn_on_err(page.remove_classes(trigger, &INACTIVE_CLASSES), "activate tab button");
        warn_on_err(page.add_classes(trigger, &ACTIVE_CLASSES), "activate tab button");
    }

    true
}

/// Make every `.tab-button[data-tab]` switch to its tab on click.
pub fn attach_tab_listeners(page: &WebPage) -> usize {
    let mut wired_count = 0;
    for button in page.query_all(Selector::Class(TAB_BUTTON_CLASS)) {
        let Some(tab_name) = page.attribute(&button, TAB_ATTR) else {
            continue;
        };
        let page = page.clone();
        let trigger = button.clone();
        let wired = listen(&button, "click", move |_| {
            switch_tab(&page, &tab_name, Some(&trigger));
        });
        if wired.is_ok() {
            wired_count += 1;
        }
        warn_on_err(wired, "wire tab button");
    }
    wired_count
}
