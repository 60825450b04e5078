use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use log::debug;

use crate::coordinator::{FetchCompletion, FetchDispatch, FetchTicket, Generation};
use crate::source::ProductSource;

/// Runs each dispatched fetch on its own background thread.
///
/// Completions are delivered over the receiver returned by
/// [`FetchWorker::spawn`] and must be fed back to the coordinator on the UI
/// thread. Threads that finish after a newer fetch was dispatched skip
/// sending; the coordinator's generation check remains the authority.
pub struct FetchWorker<S: ProductSource + 'static> {
	source: Arc<S>,
	result_tx: Sender<FetchCompletion>,
	latest_generation: Arc<AtomicU64>,
}

impl<S: ProductSource + 'static> FetchWorker<S> {
	/// Create a worker for `source` along with the completion channel.
	pub fn spawn(source: S) -> (Self, Receiver<FetchCompletion>) {
		let (result_tx, result_rx) = mpsc::channel();
		let worker = Self {
			source: Arc::new(source),
			result_tx,
			latest_generation: Arc::new(AtomicU64::new(Generation::NONE.0)),
		};
		(worker, result_rx)
	}

	pub fn latest_generation(&self) -> Generation {
		Generation(self.latest_generation.load(AtomicOrdering::Acquire))
	}
}

impl<S: ProductSource + 'static> FetchDispatch for FetchWorker<S> {
	fn dispatch(&mut self, ticket: FetchTicket) {
		let FetchTicket {
			generation,
			request,
		} = ticket;
		self.latest_generation
			.store(generation.0, AtomicOrdering::Release);

		let source = Arc::clone(&self.source);
		let result_tx = self.result_tx.clone();
		let latest = Arc::clone(&self.latest_generation);

		thread::spawn(move || {
			let outcome = source.fetch(&request);
			if latest.load(AtomicOrdering::Acquire) != generation.0 {
				debug!("dropping superseded fetch {} for {}", generation.0, request.path());
				return;
			}
			let _ = result_tx.send(FetchCompletion {
				generation,
				outcome,
			});
		});
	}

	fn cancel(&mut self) {
		self.latest_generation
			.store(Generation::NONE.0, AtomicOrdering::Release);
	}
}

#[cfg(test)]
mod tests {
	use std::sync::{Condvar, Mutex};
	use std::time::Duration;

	use rust_decimal::Decimal;

	use super::*;
	use crate::error::FetchError;
	use crate::source::PageRequest;
	use crate::types::{Product, ProductPage};

	struct EchoSource;

	impl ProductSource for EchoSource {
		fn fetch(&self, request: &PageRequest) -> Result<ProductPage, FetchError> {
			if request.query == "boom" {
				return Err(FetchError::Network("connection reset".into()));
			}
			let item = Product::new(u64::from(request.page), request.query.clone(), Decimal::ONE);
			Ok(ProductPage::new(vec![item], 3))
		}
	}

	/// Blocks fetches for a given query until released.
	struct GatedSource {
		gate: Arc<(Mutex<bool>, Condvar)>,
	}

	impl ProductSource for GatedSource {
		fn fetch(&self, request: &PageRequest) -> Result<ProductPage, FetchError> {
			if request.query == "slow" {
				let (lock, cvar) = &*self.gate;
				let mut open = lock.lock().unwrap();
				while !*open {
					open = cvar.wait(open).unwrap();
				}
			}
			Ok(ProductPage::new(Vec::new(), 1))
		}
	}

	fn ticket(generation: u64, query: &str) -> FetchTicket {
		FetchTicket {
			generation: Generation(generation),
			request: PageRequest::new(query, 1),
		}
	}

	#[test]
	fn completions_are_forwarded_with_their_generation() {
		let (mut worker, rx) = FetchWorker::spawn(EchoSource);
		worker.dispatch(ticket(1, "abc"));

		let completion = rx
			.recv_timeout(Duration::from_secs(1))
			.expect("receive completion");
		assert_eq!(completion.generation, Generation(1));
		let page = completion.outcome.expect("successful fetch");
		assert_eq!(page.items[0].name, "abc");
		assert_eq!(page.total_pages, 3);
	}

	#[test]
	fn failures_are_forwarded_as_completions() {
		let (mut worker, rx) = FetchWorker::spawn(EchoSource);
		worker.dispatch(ticket(4, "boom"));

		let completion = rx.recv_timeout(Duration::from_secs(1)).unwrap();
		assert_eq!(
			completion.outcome,
			Err(FetchError::Network("connection reset".into()))
		);
	}

	#[test]
	fn superseded_fetches_are_not_sent() {
		let gate = Arc::new((Mutex::new(false), Condvar::new()));
		let (mut worker, rx) = FetchWorker::spawn(GatedSource {
			gate: Arc::clone(&gate),
		});

		worker.dispatch(ticket(1, "slow"));
		worker.dispatch(ticket(2, "fast"));
		assert_eq!(worker.latest_generation(), Generation(2));

		let completion = rx.recv_timeout(Duration::from_secs(1)).unwrap();
		assert_eq!(completion.generation, Generation(2));

		{
			let (lock, cvar) = &*gate;
			*lock.lock().unwrap() = true;
			cvar.notify_all();
		}
		assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
	}

	#[test]
	fn cancel_silences_in_flight_fetches() {
		let gate = Arc::new((Mutex::new(false), Condvar::new()));
		let (mut worker, rx) = FetchWorker::spawn(GatedSource {
			gate: Arc::clone(&gate),
		});

		worker.dispatch(ticket(1, "slow"));
		worker.cancel();
		{
			let (lock, cvar) = &*gate;
			*lock.lock().unwrap() = true;
			cvar.notify_all();
		}
		assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
		assert_eq!(worker.latest_generation(), Generation::NONE);
	}
}
