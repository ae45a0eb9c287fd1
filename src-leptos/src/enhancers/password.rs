//! Live strength feedback under password fields.

use crate::dom::{listen, warn_on_err, Page, Selector, WebPage};
use secure_files_types::Strength;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// Id of the shared feedback element.
pub const FEEDBACK_ID: &str = "password-feedback";

/// Score `password` and show the result in `#password-feedback`, creating
/// it next to `input` the first time.
pub fn check_password_strength<P: Page>(
    page: &P,
    password: &str,
    input: &P::Element,
) -> Strength {
    let strength = Strength::of(password);

    let feedback = match page.element_by_id(FEEDBACK_ID) {
        Some(existing) => existing,
        None => {
            let Some(parent) = page.parent(input) else {
                log::debug!("Password input is detached, no feedback shown");
                return strength;
            };
            match page.get_or_create_child(&parent, "div", FEEDBACK_ID) {
                Ok((created, _)) => created,
                Err(e) => {
                    log::warn!("Failed to create password feedback: {}", e);
                    return strength;
                },
            }
        },
    };

    page.set_text(&feedback, &strength.feedback_text());
    page.set_class_name(&feedback, &strength.feedback_class());
    strength
}

/// Re-score on every `input` event of every password field.
pub fn attach_password_listeners(page: &WebPage) -> usize {
    let inputs = page.query_all(Selector::InputType("password"));
    for input in &inputs {
        let page = page.clone();
        let target = input.clone();
        let wired = listen(input, "input", move |_| {
            let value = target
                .dyn_ref::<HtmlInputElement>()
                .map(HtmlInputElement::value)
                .unwrap_or_default();
            check_password_strength(&page, &value, &target);
        });
        warn_on_err(wired, "wire password input");
    }
    inputs.len()
}
