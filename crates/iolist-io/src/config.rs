//! Startup configuration from the hosting page.
//!
//! A page may define `window.IOLIST_CONFIG` as a JSON string, e.g.
//!
//! ```html
//! <script>
//!   window.IOLIST_CONFIG = '{"download_origin": "https://convert.example.com"}';
//! </script>
//! ```
//!
//! Fields it omits keep their defaults. A missing global means "all
//! defaults"; an unusable one is reported on the console and ignored.

use iolist_client::{ClientConfig, ConfigError};
use wasm_bindgen::JsValue;

/// Name of the global the configuration is read from.
pub const CONFIG_GLOBAL: &str = "IOLIST_CONFIG";

/// Load the client configuration, falling back to defaults.
#[must_use]
pub fn load() -> ClientConfig {
    let Some(json) = page_config_json() else {
        return ClientConfig::default();
    };
    parse_or_default(&json)
}

/// Parse `json`, or warn and use the defaults when it is unusable.
fn parse_or_default(json: &str) -> ClientConfig {
    match ClientConfig::from_json(json) {
        Ok(config) => config,
        Err(e) => {
            warn_ignored(&e);
            ClientConfig::default()
        }
    }
}

fn warn_ignored(error: &ConfigError) {
    web_sys::console::warn_1(
        &format!("ignoring window.{CONFIG_GLOBAL}: {error}; using defaults").into(),
    );
}

/// Read `window.IOLIST_CONFIG` as a string, if it is one.
fn page_config_json() -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    let json = value.as_string();
    if json.is_none() {
        web_sys::console::warn_1(
            &format!("ignoring window.{CONFIG_GLOBAL}: expected a JSON string").into(),
        );
    }
    json
}
