//! In-app log console.
//!
//! Records are captured by `tui-logger` instead of being written to the
//! terminal, which the UI owns while it runs. [`LogConsole`] renders them on
//! demand.

use std::sync::Once;

use log::LevelFilter;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Frame, layout::Rect, widgets::Clear};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerSmartWidget, TuiWidgetEvent, TuiWidgetState};

use crate::style::Theme;

static INIT: Once = Once::new();

/// Install the `tui-logger` backend. Later calls only adjust the level.
pub fn initialize(level: LevelFilter) {
	INIT.call_once(|| {
		if let Err(err) = tui_logger::init_logger(LevelFilter::Trace) {
			eprintln!("failed to initialise logging: {err}");
		}
	});
	tui_logger::set_default_level(level);
}

pub struct LogConsole {
	widget: TuiWidgetState,
}

impl LogConsole {
	pub fn new() -> Self {
		let widget = TuiWidgetState::new().set_default_display_level(LevelFilter::Debug);
		Self { widget }
	}

	pub fn handle_key(&self, key: KeyEvent) -> bool {
		if key.kind != KeyEventKind::Press {
			return false;
		}

		let event = match key.code {
			KeyCode::Char('+') => Some(TuiWidgetEvent::PlusKey),
			KeyCode::Char('-') => Some(TuiWidgetEvent::MinusKey),
			KeyCode::Left => Some(TuiWidgetEvent::LeftKey),
			KeyCode::Right => Some(TuiWidgetEvent::RightKey),
			_ => None,
		};

		if let Some(event) = event {
			self.widget.transition(event);
			return true;
		}

		false
	}

	pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		frame.render_widget(Clear, area);
		if area.width == 0 || area.height == 0 {
			return;
		}

		let widget = TuiLoggerSmartWidget::default()
			.title_log("Runtime log")
			.title_target("Targets")
			.highlight_style(theme.highlight_style())
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.state(&self.widget);
		frame.render_widget(widget, area);
	}
}

impl Default for LogConsole {
	fn default() -> Self {
		Self::new()
	}
}
