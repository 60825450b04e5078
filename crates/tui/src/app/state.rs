//! Core state container for the terminal front end.

use std::sync::mpsc::Receiver;
use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;
use vitrine_query::{
	CoordinatorOptions, FetchCompletion, FetchDispatch, ListingView, PagerControl,
	QueryCoordinator, derive_view,
};

use crate::input::SearchInput;
use crate::logging::LogConsole;
use crate::style::Theme;

pub(crate) type Dispatch = Box<dyn FetchDispatch>;

impl<'a> Drop for App<'a> {
	fn drop(&mut self) {
		self.shutdown();
	}
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	pub(crate) coordinator: QueryCoordinator<Dispatch>,
	pub(crate) completions: Option<Receiver<FetchCompletion>>,
	/// Text input widget for the search prompt.
	pub search_input: SearchInput<'a>,
	pub(crate) table_state: TableState,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) theme: Theme,
	pub(crate) title: String,
	pub(crate) initial_query: String,
	pub(crate) pager_hits: Vec<(Rect, PagerControl)>,
	pub(crate) log_console: LogConsole,
	pub(crate) show_logs: bool,
}

impl<'a> App<'a> {
	/// Create an app whose fetches go through `dispatch`.
	///
	/// Completions arrive through [`App::with_completions`] or
	/// [`App::apply_completion`].
	pub fn new(options: CoordinatorOptions, dispatch: impl FetchDispatch + 'static) -> Self {
		let dispatch: Dispatch = Box::new(dispatch);
		let mut table_state = TableState::default();
		table_state.select(Some(0));

		Self {
			coordinator: QueryCoordinator::new(options, dispatch),
			completions: None,
			search_input: SearchInput::new(""),
			table_state,
			throbber_state: ThrobberState::default(),
			theme: Theme::default(),
			title: "Products".to_string(),
			initial_query: String::new(),
			pager_hits: Vec::new(),
			log_console: LogConsole::new(),
			show_logs: false,
		}
	}

	/// Receive fetch completions from a background worker.
	#[must_use]
	pub fn with_completions(mut self, completions: Receiver<FetchCompletion>) -> Self {
		self.completions = Some(completions);
		self
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	/// Pre-fill the search prompt; the first fetch uses this text.
	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		let query = query.into();
		self.search_input = SearchInput::new(query.clone());
		self.initial_query = query;
		self
	}

	/// Start the coordinator clock: the first listing loads after the debounce delay.
	pub fn mount(&mut self, now: Instant) {
		if self.initial_query.is_empty() {
			self.coordinator.mount(now);
		} else {
			let query = self.initial_query.clone();
			self.coordinator.set_search_text(query, now);
		}
	}

	/// Tear down the coordinator. Later completions are ignored.
	pub fn shutdown(&mut self) {
		self.coordinator.teardown();
		self.completions = None;
	}

	/// Everything the renderer needs, derived from coordinator state.
	pub fn view(&self) -> ListingView {
		derive_view(self.coordinator.query(), self.coordinator.results())
	}

	pub fn current_page(&self) -> u32 {
		self.coordinator.query().page
	}

	pub fn is_loading(&self) -> bool {
		self.coordinator.results().is_loading()
	}

	/// Keep the row selection inside the current list.
	pub(crate) fn ensure_selection(&mut self) {
		let len = self.coordinator.results().items.len();
		if len == 0 {
			self.table_state.select(None);
		} else {
			match self.table_state.selected() {
				None => self.table_state.select(Some(0)),
				Some(selected) if selected >= len => {
					self.table_state.select(Some(len.saturating_sub(1)));
				}
				Some(_) => {}
			}
		}
	}
}
