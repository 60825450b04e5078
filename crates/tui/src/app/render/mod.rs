use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin};
use ratatui::widgets::Paragraph;

use super::App;
use crate::components::{PromptContext, render_listing, render_pager, render_prompt};

const LOG_PANEL_PERCENT: u16 = 40;

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let view = self.view();

		let (main_area, log_area) = if self.show_logs {
			let split = Layout::default()
				.direction(Direction::Vertical)
				.constraints([
					Constraint::Percentage(100 - LOG_PANEL_PERCENT),
					Constraint::Percentage(LOG_PANEL_PERCENT),
				])
				.split(area);
			(split[0], Some(split[1]))
		} else {
			(area, None)
		};

		let notice_height = u16::from(view.notice.is_some());
		let pager_height = u16::from(view.pager.is_some());
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Min(3),
				Constraint::Length(notice_height),
				Constraint::Length(pager_height),
			])
			.split(main_area);

		render_prompt(
			frame,
			layout[0],
			PromptContext {
				title: &self.title,
				search_input: &self.search_input,
				loading: view.loading,
				throbber_state: &self.throbber_state,
				theme: &self.theme,
			},
		);

		render_listing(
			frame,
			layout[1],
			&view.body,
			&mut self.table_state,
			&self.title,
			&self.theme,
		);

		if let Some(notice) = &view.notice {
			frame.render_widget(
				Paragraph::new(notice.as_str()).style(self.theme.error_style()),
				layout[2],
			);
		}

		self.pager_hits = match &view.pager {
			Some(controls) => render_pager(frame, layout[3], controls, &self.theme),
			None => Vec::new(),
		};

		if let Some(log_area) = log_area {
			self.log_console.render(frame, log_area, &self.theme);
		}
	}
}
