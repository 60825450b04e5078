//! Interactive terminal front end for `vitrine`.
//!
//! [`App`] wires a [`QueryCoordinator`](vitrine_query::QueryCoordinator) to a
//! search prompt, a product list and a pager. Rendering only ever reads the
//! derived [`ListingView`](vitrine_query::ListingView); every state change
//! goes through the coordinator.

mod app;
pub mod components;
pub mod input;
pub mod logging;
mod outcome;
mod runtime;
pub mod style;

pub use app::App;
pub use input::SearchInput;
pub use outcome::SelectionOutcome;
pub use runtime::run;
pub use style::{Theme, default_theme};
