//! Board View (Todo)
//!
//! In-memory todo list: add on submit, toggle/remove via a single
//! delegated click handler on the list.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement};

use super::{find, ViewSetup};
use crate::models::TodoItem;
use crate::todo::{new_item, BoardClick, TodoList, COMPLETED_CLASS, ITEM_CLASS, REMOVE_CLASS, TITLE_CLASS, TOGGLE_CLASS};

pub fn init(root: &Element, _setup: &ViewSetup) {
    let (Some(form), Some(input), Some(list)) = (
        find::<HtmlFormElement>(root, "todoForm"),
        find::<HtmlInputElement>(root, "newTodo"),
        find::<Element>(root, "todoList"),
    ) else {
        return;
    };
    let Some(document) = root.owner_document() else {
        return;
    };

    let todos = Rc::new(RefCell::new(TodoList::new()));

    // Add
    {
        let todos = todos.clone();
        let list = list.clone();
        let input = input.clone();
        let on_submit = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            ev.prevent_default();
            let Some(item) = new_item(&input.value()) else {
                return;
            };
            // Commit to the model only once the node is in the list
            let placed = render_item(&document, &item).and_then(|li| list.prepend_with_node_1(&li));
            match placed {
                Ok(()) => {
                    let mut todos = todos.borrow_mut();
                    todos.insert_top(item);
                    web_sys::console::log_1(&format!("[BOARD] {} items", todos.len()).into());
                    input.set_value("");
                }
                Err(err) => web_sys::console::error_1(&format!("[BOARD] Failed to render item: {:?}", err).into()),
            }
        });
        let _ = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref());
        on_submit.forget();
    }

    // Toggle / remove
    let list_el = list.clone();
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Some(li) = target.closest(&format!("li.{ITEM_CLASS}")).ok().flatten() else {
            return;
        };
        let Some(index) = index_of(&list_el, &li) else {
            return;
        };

        let checked = target.dyn_ref::<HtmlInputElement>().map(|input| input.checked());
        match BoardClick::classify(&target.class_name(), checked) {
            BoardClick::Remove => {
                let mut todos = todos.borrow_mut();
                if todos.remove(index).is_some() {
                    li.remove();
                    if todos.is_empty() {
                        web_sys::console::log_1(&"[BOARD] List cleared".into());
                    }
                }
            }
            BoardClick::Toggle(checked) => {
                if let Some(item) = todos.borrow_mut().toggle(index, checked) {
                    let _ = li.class_list().toggle_with_force(COMPLETED_CLASS, item.completed);
                }
            }
            BoardClick::Other => {}
        }
    });
    let _ = list.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}

/// Position of `item` among the list's element children
fn index_of(list: &Element, item: &Element) -> Option<usize> {
    let children = list.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter(|child| child.class_list().contains(ITEM_CLASS))
        .position(|child| &child == item)
}

fn render_item(document: &Document, item: &TodoItem) -> Result<Element, JsValue> {
    let li = document.create_element("li")?;
    li.set_class_name(ITEM_CLASS);
    if item.completed {
        li.class_list().add_1(COMPLETED_CLASS)?;
    }

    let checkbox = document.create_element("input")?.dyn_into::<HtmlInputElement>()?;
    checkbox.set_type("checkbox");
    checkbox.set_class_name(TOGGLE_CLASS);
    checkbox.set_checked(item.completed);

    let title = document.create_element("span")?;
    title.set_class_name(TITLE_CLASS);
    title.set_text_content(Some(&item.title));

    let remove = document.create_element("button")?;
    remove.set_attribute("type", "button")?;
    remove.set_class_name(REMOVE_CLASS);
    remove.set_text_content(Some("×"));

    li.append_child(&checkbox)?;
    li.append_child(&title)?;
    li.append_child(&remove)?;
    Ok(li)
}
