//! UI Components
//!
//! Leptos components of the application shell.

mod view_outlet;

pub use view_outlet::ViewOutlet;
