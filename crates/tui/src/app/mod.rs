//! Core application state and behavior for the product browser.
//!
//! The [`App`] type owns the query coordinator together with the UI state
//! around it. Supporting modules partition the implementation: actions
//! (input handling), rendering, and search coordination.

mod actions;
mod render;
mod search;
mod state;

pub use state::App;
