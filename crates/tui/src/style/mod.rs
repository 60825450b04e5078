//! Visual styling utilities.

pub mod theme;

pub use theme::{Theme, by_name, default_theme, names};
