use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;
use vitrine_query::view::LOADING_TEXT;

use crate::input::SearchInput;
use crate::style::Theme;

pub struct PromptContext<'a, 'b> {
	pub title: &'a str,
	pub search_input: &'a SearchInput<'b>,
	pub loading: bool,
	pub throbber_state: &'a ThrobberState,
	pub theme: &'a Theme,
}

/// Draw `<title> > <input>` with a spinner on the right while loading.
pub fn render_prompt(frame: &mut Frame, area: Rect, context: PromptContext<'_, '_>) {
	let PromptContext {
		title,
		search_input,
		loading,
		throbber_state,
		theme,
	} = context;

	let prompt = if title.is_empty() {
		String::new()
	} else {
		format!("{title} > ")
	};
	// Spinner symbol, a space, then the label.
	let status_width = if loading {
		LOADING_TEXT.width() as u16 + 2
	} else {
		0
	};

	let chunks = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Length(prompt.width() as u16),
			Constraint::Min(1),
			Constraint::Length(status_width),
		])
		.split(area);

	if !prompt.is_empty() {
		frame.render_widget(Paragraph::new(prompt).style(theme.prompt_style()), chunks[0]);
	}
	search_input.render(frame, chunks[1]);

	if loading {
		let muted = theme.empty_style();
		let spinner = Throbber::default().style(muted).throbber_style(muted);
		let line = Line::from(vec![
			spinner.to_symbol_span(throbber_state),
			Span::styled(LOADING_TEXT, muted),
		]);
		frame.render_widget(Paragraph::new(line), chunks[2]);
	}
}
