//! Coordinator pumping.
//!
//! Completions from the background worker are drained here and the debounce
//! timer is polled once per frame.

use std::sync::mpsc::TryRecvError;
use std::time::Instant;

use log::warn;
use vitrine_query::{Applied, FetchCompletion};

use super::App;

impl App<'_> {
	/// Advance the coordinator: apply finished fetches, then fire a due timer.
	pub fn tick(&mut self, now: Instant) {
		self.pump_completions();
		self.coordinator.poll(now);
		if self.is_loading() {
			self.throbber_state.calc_next();
		}
		self.ensure_selection();
	}

	/// Hand one fetch outcome to the coordinator.
	pub fn apply_completion(&mut self, completion: FetchCompletion) -> Applied {
		let applied = self.coordinator.complete(completion);
		if applied == Applied::Ready {
			self.table_state.select(Some(0));
		}
		self.ensure_selection();
		applied
	}

	fn pump_completions(&mut self) {
		loop {
			let Some(rx) = &self.completions else {
				return;
			};
			match rx.try_recv() {
				Ok(completion) => {
					self.apply_completion(completion);
				}
				Err(TryRecvError::Empty) => return,
				Err(TryRecvError::Disconnected) => {
					warn!("fetch worker channel closed");
					self.completions = None;
					return;
				}
			}
		}
	}
}
