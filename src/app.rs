//! Portal Frontend App
//!
//! Application shell: provides config and API client, hosts the view outlet.

use leptos::prelude::*;

use crate::components::ViewOutlet;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::route::View;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new(AppConfig::from_env()));

    view! {
        <div class="app-layout">
            <nav class="app-nav">
                {View::ALL.iter().map(|route| view! {
                    <a href=route.hash()>{route.name()}</a>
                }).collect_view()}
            </nav>
            <ViewOutlet />
        </div>
    }
}
