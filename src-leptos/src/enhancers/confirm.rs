//! Confirmation prompt before destructive actions.

/// Ask the browser to confirm `message`; run `callback` only on "OK".
/// Without a window nothing runs.
pub fn confirm_action(message: &str, callback: impl FnOnce()) -> bool {
    confirm_with(browser_confirm, message, callback)
}

/// [`confirm_action`] with a custom prompt.
pub fn confirm_with(
    ask: impl FnOnce(&str) -> bool,
    message: &str,
    callback: impl FnOnce(),
) -> bool {
    let confirmed = ask(message);
    if confirmed {
        callback();
    }
    confirmed
}

fn browser_confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
