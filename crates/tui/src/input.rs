//! Single-line search prompt backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text("Search products...");
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key to the editor, returning `true` if the text changed.
	///
	/// Keys that would split the line are swallowed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let splits_line = matches!(key.code, KeyCode::Enter)
			|| (key.modifiers.contains(KeyModifiers::CONTROL)
				&& matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j')));
		if splits_line {
			return false;
		}

		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_reports_changes() {
		let mut input = SearchInput::new("");
		assert!(input.input(key(KeyCode::Char('a'))));
		assert!(input.input(key(KeyCode::Char('b'))));
		assert_eq!(input.text(), "ab");
	}

	#[test]
	fn cursor_movement_is_not_a_change() {
		let mut input = SearchInput::new("abc");
		assert!(!input.input(key(KeyCode::Left)));
		assert!(!input.input(key(KeyCode::Home)));
		assert_eq!(input.text(), "abc");
	}

	#[test]
	fn enter_never_splits_the_line() {
		let mut input = SearchInput::new("abc");
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "abc");
	}

	#[test]
	fn initial_text_places_cursor_at_end() {
		let mut input = SearchInput::new("me");
		input.input(key(KeyCode::Char('s')));
		assert_eq!(input.text(), "mes");
	}

	#[test]
	fn backspace_edits_text() {
		let mut input = SearchInput::new("abc");
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "ab");
	}
}
