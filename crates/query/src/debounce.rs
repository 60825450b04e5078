//! Single-slot debounce timer.
//!
//! The timer is driven by the caller's clock: arming records a deadline and
//! [`Debounce::fire_if_due`] consumes it once that deadline has passed. Arming
//! again before then replaces the previous deadline, so at most one pending
//! firing exists at any time.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debounce {
	delay: Duration,
	deadline: Option<Instant>,
}

impl Debounce {
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			deadline: None,
		}
	}

	/// Cancel any pending deadline and schedule a new one `delay` after `now`.
	pub fn arm(&mut self, now: Instant) {
		self.deadline = Some(now + self.delay);
	}

	pub fn cancel(&mut self) {
		self.deadline = None;
	}

	pub fn is_armed(&self) -> bool {
		self.deadline.is_some()
	}

	pub fn deadline(&self) -> Option<Instant> {
		self.deadline
	}

	/// Disarm and return `true` if the deadline has been reached.
	pub fn fire_if_due(&mut self, now: Instant) -> bool {
		match self.deadline {
			Some(deadline) if now >= deadline => {
				self.deadline = None;
				true
			}
			_ => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const DELAY: Duration = Duration::from_millis(500);

	#[test]
	fn fires_once_after_delay() {
		let start = Instant::now();
		let mut timer = Debounce::new(DELAY);
		timer.arm(start);

		assert!(!timer.fire_if_due(start + Duration::from_millis(499)));
		assert!(timer.fire_if_due(start + DELAY));
		assert!(!timer.fire_if_due(start + DELAY * 2));
		assert!(!timer.is_armed());
	}

	#[test]
	fn rearming_pushes_the_deadline_back() {
		let start = Instant::now();
		let mut timer = Debounce::new(DELAY);
		timer.arm(start);
		timer.arm(start + Duration::from_millis(300));

		assert!(!timer.fire_if_due(start + DELAY));
		assert_eq!(timer.deadline(), Some(start + Duration::from_millis(800)));
		assert!(timer.fire_if_due(start + Duration::from_millis(800)));
	}

	#[test]
	fn cancelled_timer_never_fires() {
		let start = Instant::now();
		let mut timer = Debounce::new(DELAY);
		timer.arm(start);
		timer.cancel();
		assert!(!timer.fire_if_due(start + DELAY * 10));
	}
}
