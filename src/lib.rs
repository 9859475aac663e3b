//! Portal Frontend
//!
//! Hash-routed single-page client: registration form, in-memory todo
//! board and a small JSON API client.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod models;
pub mod register;
pub mod route;
pub mod router;
pub mod todo;
pub mod views;
