//! Debounced, generation-guarded fetch coordination.
//!
//! The coordinator owns the canonical [`QueryState`], the published
//! [`ResultState`], the debounce timer and the generation counter. It never
//! performs IO itself: fetches leave through a [`FetchDispatch`] as
//! [`FetchTicket`]s and come back through [`QueryCoordinator::complete`] as
//! [`FetchCompletion`]s. Only the completion carrying the latest initiated
//! generation is applied; anything older is discarded without touching state.

use std::time::{Duration, Instant};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::debounce::Debounce;
use crate::error::FetchError;
use crate::source::PageRequest;
use crate::types::{ProductPage, QueryState, ResultState, Status};

/// Quiet period before a search or page change turns into a fetch.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Identity of a dispatched fetch. Later dispatches carry larger values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
	pub const NONE: Self = Self(0);

	#[must_use]
	pub fn next(self) -> Self {
		Self(self.0.wrapping_add(1).max(1))
	}
}

/// How page changes are turned into fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageRefresh {
	/// Page changes wait out the same debounce window as search edits.
	#[default]
	Debounced,
	/// Page changes fetch immediately.
	Immediate,
}

impl PageRefresh {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Debounced => "debounced",
			Self::Immediate => "immediate",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinatorOptions {
	pub debounce: Duration,
	pub page_refresh: PageRefresh,
}

impl Default for CoordinatorOptions {
	fn default() -> Self {
		Self {
			debounce: DEFAULT_DEBOUNCE,
			page_refresh: PageRefresh::default(),
		}
	}
}

/// A fetch the coordinator wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
	pub generation: Generation,
	pub request: PageRequest,
}

/// The outcome of a dispatched fetch, tagged with the ticket's generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCompletion {
	pub generation: Generation,
	pub outcome: Result<ProductPage, FetchError>,
}

impl FetchCompletion {
	pub fn ready(generation: Generation, page: ProductPage) -> Self {
		Self {
			generation,
			outcome: Ok(page),
		}
	}

	pub fn failed(generation: Generation, error: FetchError) -> Self {
		Self {
			generation,
			outcome: Err(error),
		}
	}
}

/// What [`QueryCoordinator::complete`] did with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
	Ready,
	Failed,
	/// The completion belonged to a superseded fetch (or arrived after
	/// teardown) and was dropped.
	Stale,
}

/// Sink for fetches issued by the coordinator.
///
/// Each call to [`dispatch`](FetchDispatch::dispatch) must result in exactly
/// one network request whose outcome is eventually handed back to
/// [`QueryCoordinator::complete`] with the ticket's generation.
pub trait FetchDispatch {
	fn dispatch(&mut self, ticket: FetchTicket);

	/// Called once on teardown. Aborting transport work is optional; the
	/// coordinator already ignores every later completion.
	fn cancel(&mut self) {}
}

impl<D: FetchDispatch + ?Sized> FetchDispatch for Box<D> {
	fn dispatch(&mut self, ticket: FetchTicket) {
		(**self).dispatch(ticket);
	}

	fn cancel(&mut self) {
		(**self).cancel();
	}
}

pub struct QueryCoordinator<D: FetchDispatch> {
	options: CoordinatorOptions,
	query: QueryState,
	results: ResultState,
	timer: Debounce,
	latest: Generation,
	dispatch: D,
	torn_down: bool,
}

impl<D: FetchDispatch> QueryCoordinator<D> {
	pub fn new(options: CoordinatorOptions, dispatch: D) -> Self {
		Self {
			options,
			query: QueryState::default(),
			results: ResultState::default(),
			timer: Debounce::new(options.debounce),
			latest: Generation::NONE,
			dispatch,
			torn_down: false,
		}
	}

	/// Arm the timer for the initial listing.
	pub fn mount(&mut self, now: Instant) {
		if self.torn_down {
			return;
		}
		self.timer.arm(now);
	}

	/// Record new search text, restart at page 1 and schedule a refresh.
	pub fn set_search_text(&mut self, text: impl Into<String>, now: Instant) {
		if self.torn_down {
			return;
		}
		self.query.search_text = text.into();
		self.query.page = 1;
		self.timer.arm(now);
	}

	/// Move to `page` if it is a valid change, returning whether it was accepted.
	///
	/// Pages outside `1..=total_pages` and the current page are ignored.
	pub fn set_page(&mut self, page: u32, now: Instant) -> bool {
		if self.torn_down {
			return false;
		}
		if page < 1 || page > self.results.total_pages || page == self.query.page {
			debug!(
				"ignoring page change to {page} (current {}, total {})",
				self.query.page, self.results.total_pages
			);
			return false;
		}

		self.query.page = page;
		match self.options.page_refresh {
			PageRefresh::Debounced => self.timer.arm(now),
			PageRefresh::Immediate => {
				self.timer.cancel();
				let request = PageRequest::from(&self.query);
				self.issue(request);
			}
		}
		true
	}

	/// Dispatch a fetch for `query`/`page` right away.
	///
	/// Every call supersedes whatever was in flight before it. Returns `None`
	/// once the coordinator has been torn down.
	pub fn refresh_now(&mut self, query: &str, page: u32) -> Option<Generation> {
		self.issue(PageRequest::new(query, page))
	}

	/// Fire the debounce timer if its deadline has passed.
	pub fn poll(&mut self, now: Instant) -> Option<Generation> {
		if self.torn_down || !self.timer.fire_if_due(now) {
			return None;
		}
		let request = PageRequest::from(&self.query);
		self.issue(request)
	}

	fn issue(&mut self, request: PageRequest) -> Option<Generation> {
		if self.torn_down {
			return None;
		}
		let generation = self.latest.next();
		self.latest = generation;
		self.results.status = Status::Loading;
		debug!("dispatching fetch {} for {}", generation.0, request.path());
		self.dispatch.dispatch(FetchTicket {
			generation,
			request,
		});
		Some(generation)
	}

	/// Apply a completion if it belongs to the latest initiated fetch.
	pub fn complete(&mut self, completion: FetchCompletion) -> Applied {
		if self.torn_down || completion.generation != self.latest {
			debug!(
				"discarding stale fetch {} (latest {})",
				completion.generation.0, self.latest.0
			);
			return Applied::Stale;
		}

		match completion.outcome {
			Ok(page) => {
				self.results.total_pages = page.normalized_total_pages();
				self.results.items = page.items;
				self.results.status = Status::Ready;
				self.results.last_error = None;
				Applied::Ready
			}
			Err(error) => {
				warn!("fetch {} failed: {error}", completion.generation.0);
				self.results.status = Status::Failed;
				self.results.last_error = Some(error);
				Applied::Failed
			}
		}
	}

	/// Cancel the timer and stop accepting completions. Idempotent.
	pub fn teardown(&mut self) {
		if self.torn_down {
			return;
		}
		self.torn_down = true;
		self.timer.cancel();
		self.dispatch.cancel();
	}

	pub fn query(&self) -> &QueryState {
		&self.query
	}

	pub fn results(&self) -> &ResultState {
		&self.results
	}

	pub fn latest_generation(&self) -> Generation {
		self.latest
	}

	pub fn next_deadline(&self) -> Option<Instant> {
		self.timer.deadline()
	}

	pub fn dispatcher(&self) -> &D {
		&self.dispatch
	}
}

impl<D: FetchDispatch> Drop for QueryCoordinator<D> {
	fn drop(&mut self) {
		self.teardown();
	}
}
