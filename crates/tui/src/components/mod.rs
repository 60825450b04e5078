//! UI building blocks used by the application renderer.

/// Product list rendering.
pub mod listing;
/// Page navigation controls.
pub mod pager;
/// Search prompt and loading indicator.
pub mod prompt;

pub use listing::render_listing;
pub use pager::{PagerSegment, fitted_segments, pager_segments, render_pager};
pub use prompt::{PromptContext, render_prompt};

/// Whether the terminal cell at `(column, row)` falls inside `area`.
pub fn point_in_rect(column: u16, row: u16, area: ratatui::layout::Rect) -> bool {
	column >= area.x
		&& column < area.x.saturating_add(area.width)
		&& row >= area.y
		&& row < area.y.saturating_add(area.height)
}
