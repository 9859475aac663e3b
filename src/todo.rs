//! Todo Board Logic
//!
//! Pure list transitions mirrored by the board's DOM list.
//! Index 0 is the top (newest) item.

use crate::models::TodoItem;

/// Class on each rendered list item
pub const ITEM_CLASS: &str = "todo-item";
pub const TOGGLE_CLASS: &str = "todo-toggle";
pub const TITLE_CLASS: &str = "todo-title";
pub const REMOVE_CLASS: &str = "todo-remove";
/// Completion marker on the list item
pub const COMPLETED_CLASS: &str = "completed";

/// Build an unchecked item from raw input; blank input yields nothing.
pub fn new_item(raw: &str) -> Option<TodoItem> {
    let title = raw.trim();
    (!title.is_empty()).then(|| TodoItem::new(title))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert at the top. Duplicates are allowed.
    pub fn insert_top(&mut self, item: TodoItem) -> &TodoItem {
        self.items.insert(0, item);
        &self.items[0]
    }

    pub fn toggle(&mut self, index: usize, checked: bool) -> Option<&TodoItem> {
        let item = self.items.get_mut(index)?;
        item.completed = checked;
        Some(item)
    }

    pub fn remove(&mut self, index: usize) -> Option<TodoItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }
}

/// What a delegated click on the list means
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardClick {
    Remove,
    Toggle(bool),
    Other,
}

impl BoardClick {
    /// `class_name` is the clicked element's class attribute,
    /// `checked` its checkbox state if it is an input.
    pub fn classify(class_name: &str, checked: Option<bool>) -> Self {
        let has = |class: &str| class_name.split_whitespace().any(|c| c == class);
        if has(REMOVE_CLASS) {
            return BoardClick::Remove;
        }
        match checked {
            Some(checked) if has(TOGGLE_CLASS) => BoardClick::Toggle(checked),
            _ => BoardClick::Other,
        }
    }
}
