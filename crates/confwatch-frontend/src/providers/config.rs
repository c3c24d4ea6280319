use std::rc::Rc;

use yew::prelude::*;

use confwatch::config::AppConfig;
use confwatch::log::{debug, warn};

/// Id of the optional inline JSON element overriding the defaults.
pub const CONFIG_ELEMENT_ID: &str = "confwatch-config";

/// Reads `<script type="application/json" id="confwatch-config">` from the
/// host page. A missing element means defaults; a malformed one is logged
/// and ignored.
pub fn read_config() -> AppConfig {
    let source = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match source {
        Some(source) => AppConfig::from_json(&source).unwrap_or_else(|err| {
            warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, err);
            AppConfig::default()
        }),
        None => {
            debug!("No #{} element, using default config", CONFIG_ELEMENT_ID);
            AppConfig::default()
        }
    }
}

#[hook]
pub fn use_config() -> Rc<AppConfig> {
    use_context::<Rc<AppConfig>>().expect("use_config must be used within a config ContextProvider")
}
