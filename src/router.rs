//! Hash Router
//!
//! Listens for `hashchange`, fetches the matching view fragment, injects it
//! into the container and runs that view's initializer.

use gloo_net::http::Request;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::route::{resolve_view, NavigationGuard, NavigationTicket, View};
use crate::views::{self, ViewSetup};

pub const VIEW_LOAD_ERROR: &str = "No se pudo cargar la vista.";

/// Change the location fragment; the `hashchange` listener does the rest
pub fn navigate_to(view: View) {
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_hash(&view.hash());
    }
}

fn current_hash() -> String {
    web_sys::window()
        .and_then(|win| win.location().hash().ok())
        .unwrap_or_default()
}

#[derive(Clone)]
pub struct Router {
    container: Element,
    views_base: String,
    setup: ViewSetup,
    guard: NavigationGuard,
}

impl Router {
    pub fn new(container: Element, config: AppConfig, client: ApiClient) -> Self {
        Self {
            container,
            views_base: config.views_base.clone(),
            setup: ViewSetup::new(&config, client),
            guard: NavigationGuard::new(),
        }
    }

    /// Render the current fragment and follow every later change
    pub fn start(self) {
        self.render_current();

        let router = self.clone();
        let on_hashchange = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            router.render_current();
        });
        if let Some(win) = web_sys::window() {
            let _ = win.add_event_listener_with_callback("hashchange", on_hashchange.as_ref().unchecked_ref());
        }
        on_hashchange.forget();
    }

    pub fn render_current(&self) {
        let view = resolve_view(&current_hash());
        let ticket = self.guard.begin();
        web_sys::console::log_1(&format!("[ROUTER] Navigating to {}", view.name()).into());

        let router = self.clone();
        spawn_local(async move {
            router.load(view, ticket).await;
        });
    }

    async fn load(&self, view: View, ticket: NavigationTicket) {
        let result = fetch_fragment(&view.fragment_path(&self.views_base)).await;

        if !self.guard.is_current(ticket) {
            web_sys::console::log_1(&format!("[ROUTER] Dropping stale {} view", view.name()).into());
            return;
        }

        match result {
            Ok(markup) => {
                self.container.set_inner_html(&markup);
                self.initialize(view);
            }
            Err(err) => {
                web_sys::console::error_1(&format!("[ROUTER] Error loading {} view: {}", view.name(), err).into());
                self.container.set_inner_html(&format!("<p class=\"view-error\">{VIEW_LOAD_ERROR}</p>"));
            }
        }
    }

    fn initialize(&self, view: View) {
        let initializer = views::initializer_for(view);
        web_sys::console::log_1(&format!("[ROUTER] Running {} initializer", initializer.name).into());
        (initializer.run)(&self.container, &self.setup);
    }
}

async fn fetch_fragment(path: &str) -> Result<String, String> {
    let resp = Request::get(path).send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.text().await.map_err(|e| e.to_string())
}
