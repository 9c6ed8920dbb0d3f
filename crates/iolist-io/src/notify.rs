//! Blocking alerts and console diagnostics.

use iolist_client::Notifier;
use wasm_bindgen::JsValue;

/// [`Notifier`] backed by `window.alert` and `console.error`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        let shown = web_sys::window().map(|window| window.alert_with_message(message));
        match shown {
            Some(Ok(())) => {}
            Some(Err(e)) => {
                web_sys::console::error_2(&JsValue::from_str("alert failed:"), &e);
            }
            None => {
                web_sys::console::error_2(&JsValue::from_str("no window for alert:"), &message.into());
            }
        }
    }

    fn log_error(&self, context: &str, detail: &str) {
        web_sys::console::error_2(&JsValue::from_str(context), &JsValue::from_str(detail));
    }
}
