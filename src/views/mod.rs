//! View Initializers
//!
//! Wire event handlers onto markup the router just injected.
//! Each initializer is a no-op when its elements are missing.

pub mod board;
pub mod home;

use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::route::View;

/// Services an initializer may need
#[derive(Clone, Debug)]
pub struct ViewSetup {
    pub client: ApiClient,
    pub redirect_delay_ms: u32,
}

impl ViewSetup {
    pub fn new(config: &AppConfig, client: ApiClient) -> Self {
        Self {
            client,
            redirect_delay_ms: config.redirect_delay_ms,
        }
    }
}

/// Named hook run after a view's markup is injected
#[derive(Clone, Copy)]
pub struct Initializer {
    pub name: &'static str,
    pub run: fn(&Element, &ViewSetup),
}

/// Each view gets exactly its own initializer
pub fn initializer_for(view: View) -> Initializer {
    match view {
        View::Home => Initializer { name: "registration", run: home::init },
        View::Board => Initializer { name: "board", run: board::init },
    }
}

/// Find an element by id under `root` and cast it
pub(crate) fn find<T: JsCast>(root: &Element, id: &str) -> Option<T> {
    root.query_selector(&format!("#{id}"))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Replace a message element's text and state class
pub(crate) fn show_message(target: &Element, text: &str, kind: &str) {
    target.set_text_content(Some(text));
    target.set_class_name(&format!("form-message {kind}"));
}
