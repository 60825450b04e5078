use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Cell, HighlightSpacing, Row, Table, TableState};
use vitrine_query::ListBody;
use vitrine_query::view::{LOADING_TEXT, NO_RESULTS_TEXT};

use crate::style::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Draw the product rows (or the loading / empty placeholder) in a bordered table.
pub fn render_listing(
	frame: &mut Frame,
	area: Rect,
	body: &ListBody,
	table_state: &mut TableState,
	title: &str,
	theme: &Theme,
) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(Style::default().fg(theme.header_style().fg.unwrap_or(Color::Reset)))
		.title(title.to_string());

	let rows: Vec<Row> = match body {
		ListBody::Loading => vec![Row::new([Cell::from(LOADING_TEXT)]).style(theme.empty_style())],
		ListBody::NoResults => {
			vec![Row::new([Cell::from(NO_RESULTS_TEXT)]).style(theme.empty_style())]
		}
		ListBody::Rows(rows) => rows
			.iter()
			.map(|row| Row::new([Cell::from(row.label())]))
			.collect(),
	};

	let selectable = matches!(body, ListBody::Rows(_));
	let table = Table::new(rows, [Constraint::Fill(1)])
		.block(block)
		.row_highlight_style(if selectable {
			theme.row_highlight_style()
		} else {
			Style::default()
		})
		.highlight_symbol(HIGHLIGHT_SYMBOL)
		.highlight_spacing(HighlightSpacing::WhenSelected);

	if selectable {
		frame.render_stateful_widget(table, area, table_state);
	} else {
		frame.render_widget(table, area);
	}
}
