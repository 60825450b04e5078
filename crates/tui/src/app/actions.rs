use std::time::Instant;

use anyhow::Result;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use vitrine_query::{PagerControl, page_controls};

use super::App;
use crate::components::point_in_rect;
use crate::outcome::SelectionOutcome;

impl<'a> App<'a> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<Option<SelectionOutcome>> {
		if key.kind == KeyEventKind::Release {
			return Ok(None);
		}

		match key.code {
			KeyCode::Esc => return Ok(Some(self.outcome(false))),
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Ok(Some(self.outcome(false)));
			}
			KeyCode::Enter => return Ok(Some(self.outcome(true))),
			KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				let query = self.coordinator.query().clone();
				self.coordinator.refresh_now(&query.search_text, query.page);
			}
			KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.show_logs = !self.show_logs;
			}
			KeyCode::Char(digit @ '1'..='9') if key.modifiers.contains(KeyModifiers::ALT) => {
				let page = digit.to_digit(10).unwrap_or(1);
				self.activate_control(PagerControl::Page(page), now);
			}
			KeyCode::PageUp => self.activate_control(PagerControl::Previous, now),
			KeyCode::PageDown => self.activate_control(PagerControl::Next, now),
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			_ => {
				if self.show_logs && self.log_console.handle_key(key) {
					return Ok(None);
				}
				if self.search_input.input(key) {
					let text = self.search_input.text().to_string();
					self.coordinator.set_search_text(text, now);
				}
			}
		}
		Ok(None)
	}

	pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				let hit = self
					.pager_hits
					.iter()
					.find(|(rect, _)| point_in_rect(mouse.column, mouse.row, *rect))
					.map(|(_, control)| *control);
				if let Some(control) = hit {
					self.activate_control(control, now);
				}
			}
			MouseEventKind::ScrollUp => self.move_selection_up(),
			MouseEventKind::ScrollDown => self.move_selection_down(),
			_ => {}
		}
	}

	/// Apply a pager control against the pager currently on screen.
	pub(crate) fn activate_control(&mut self, control: PagerControl, now: Instant) {
		let results = self.coordinator.results();
		let Some(controls) = page_controls(self.current_page(), results.total_pages) else {
			return;
		};
		if let Some(page) = controls.activate(control) {
			self.coordinator.set_page(page, now);
		}
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.table_state.selected() {
			self.table_state.select(Some(selected.saturating_sub(1)));
		}
	}

	fn move_selection_down(&mut self) {
		let len = self.coordinator.results().items.len();
		if let Some(selected) = self.table_state.selected()
			&& selected + 1 < len
		{
			self.table_state.select(Some(selected + 1));
		}
	}

	pub(crate) fn outcome(&self, accepted: bool) -> SelectionOutcome {
		let product = if accepted && !self.is_loading() {
			self.table_state
				.selected()
				.and_then(|index| self.coordinator.results().items.get(index).cloned())
		} else {
			None
		};
		SelectionOutcome {
			accepted,
			product,
			query: self.coordinator.query().search_text.clone(),
			page: self.current_page(),
		}
	}
}
