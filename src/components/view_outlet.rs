//! View Outlet Component
//!
//! Container the router injects view fragments into.

use leptos::html::Div;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::router::Router;

#[component]
pub fn ViewOutlet() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let container = NodeRef::<Div>::new();

    // Start routing once the container is mounted
    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        let Some(el) = container.get() else {
            return false;
        };
        Router::new(el.into(), ctx.config.clone(), ctx.client.clone()).start();
        true
    });

    view! {
        <div id="app" class="view-container" node_ref=container></div>
    }
}
