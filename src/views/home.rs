//! Home View (Registration)
//!
//! Validates the sign-up form, posts it, then moves to the board.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

use super::{find, show_message, ViewSetup};
use crate::api::{ApiClient, RequestOptions};
use crate::models::RegistrationForm;
use crate::register::{self, REGISTER_PATH, SUCCESS_MESSAGE};
use crate::route::View;
use crate::router::navigate_to;

const JSON_ACCEPT: &str = "application/json";

const FIELD_IDS: [&str; 6] = ["username", "lastName", "age", "email", "password", "confirmPassword"];

pub fn init(root: &Element, setup: &ViewSetup) {
    let Some(form) = find::<HtmlFormElement>(root, "registerForm") else {
        return;
    };

    let client = setup.client.clone();
    let redirect_delay_ms = setup.redirect_delay_ms;
    let form_el: Element = form.clone().into();
    let on_submit = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        ev.prevent_default();
        submit(&form_el, client.clone(), redirect_delay_ms);
    });
    let _ = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref());
    on_submit.forget();
}

fn read_form(form: &Element) -> RegistrationForm {
    let [first, last, age, email, password, confirm] = FIELD_IDS.map(|id| {
        find::<HtmlInputElement>(form, id)
            .map(|input| input.value())
            .unwrap_or_default()
    });
    RegistrationForm::new(&first, &last, &age, &email, &password, &confirm)
}

fn submit(form: &Element, client: ApiClient, redirect_delay_ms: u32) {
    let message = form
        .owner_document()
        .and_then(|doc| doc.get_element_by_id("registerMessage"));
    if let Some(message) = &message {
        show_message(message, "", "");
    }

    let data = read_form(form);
    if let Err(reason) = data.validate() {
        if let Some(message) = &message {
            show_message(message, reason, "error");
        }
        return;
    }

    let button = form
        .query_selector("button[type=\"submit\"]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
    if let Some(button) = &button {
        button.set_disabled(true);
    }

    spawn_local(async move {
        let result = client.post(REGISTER_PATH, &data, RequestOptions::default().header("Accept", JSON_ACCEPT)).await;

        if let Some(button) = &button {
            button.set_disabled(false);
        }

        match result {
            Ok(_) => {
                web_sys::console::log_1(&"[HOME] Registration accepted".into());
                if let Some(message) = &message {
                    show_message(message, SUCCESS_MESSAGE, "success");
                }
                TimeoutFuture::new(redirect_delay_ms).await;
                navigate_to(View::Board);
            }
            Err(err) => {
                web_sys::console::log_1(&format!("[HOME] Registration failed: {}", err).into());
                if let Some(message) = &message {
                    show_message(message, &register::failure_message(&err), "error");
                }
            }
        }
    });
}
