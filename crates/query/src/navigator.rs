//! Pager controls derived from the current page and page count.

/// A numbered page button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
	pub number: u32,
	pub is_active: bool,
}

/// A control the user can activate on the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PagerControl {
	Previous,
	Next,
	Page(u32),
}

/// Pager state for one `(current, total)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
	pub current: u32,
	pub total: u32,
	pub prev_enabled: bool,
	pub next_enabled: bool,
	pub buttons: Vec<PageButton>,
}

/// Build pager controls, or `None` when there is at most one page.
#[must_use]
pub fn page_controls(current: u32, total: u32) -> Option<PageControls> {
	if total <= 1 {
		return None;
	}

	let buttons = (1..=total)
		.map(|number| PageButton {
			number,
			is_active: number == current,
		})
		.collect();

	Some(PageControls {
		current,
		total,
		prev_enabled: current > 1,
		next_enabled: current < total,
		buttons,
	})
}

impl PageControls {
	/// Page emitted by activating `control`, or `None` if it is disabled.
	#[must_use]
	pub fn activate(&self, control: PagerControl) -> Option<u32> {
		match control {
			PagerControl::Previous if self.prev_enabled => Some(self.current - 1),
			PagerControl::Next if self.next_enabled => Some(self.current + 1),
			PagerControl::Page(number) if (1..=self.total).contains(&number) => Some(number),
			_ => None,
		}
	}

	pub fn is_enabled(&self, control: PagerControl) -> bool {
		self.activate(control).is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn numbers(controls: &PageControls) -> Vec<u32> {
		controls.buttons.iter().map(|button| button.number).collect()
	}

	fn active(controls: &PageControls) -> Vec<u32> {
		controls
			.buttons
			.iter()
			.filter(|button| button.is_active)
			.map(|button| button.number)
			.collect()
	}

	#[test]
	fn middle_page_enables_both_directions() {
		let controls = page_controls(3, 5).expect("controls for five pages");
		assert!(controls.prev_enabled);
		assert!(controls.next_enabled);
		assert_eq!(numbers(&controls), [1, 2, 3, 4, 5]);
		assert_eq!(active(&controls), [3]);
	}

	#[test]
	fn identical_inputs_produce_identical_controls() {
		assert_eq!(page_controls(3, 5), page_controls(3, 5));
	}

	#[test]
	fn single_page_renders_nothing() {
		assert_eq!(page_controls(1, 1), None);
		assert_eq!(page_controls(1, 0), None);
	}

	#[test]
	fn boundaries_disable_the_matching_direction() {
		let first = page_controls(1, 5).unwrap();
		assert!(!first.prev_enabled);
		assert!(first.next_enabled);

		let last = page_controls(5, 5).unwrap();
		assert!(last.prev_enabled);
		assert!(!last.next_enabled);
	}

	#[test]
	fn activation_emits_target_pages() {
		let controls = page_controls(3, 5).unwrap();
		assert_eq!(controls.activate(PagerControl::Previous), Some(2));
		assert_eq!(controls.activate(PagerControl::Next), Some(4));
		assert_eq!(controls.activate(PagerControl::Page(5)), Some(5));
		assert_eq!(controls.activate(PagerControl::Page(3)), Some(3));
	}

	#[test]
	fn disabled_controls_emit_nothing() {
		let first = page_controls(1, 2).unwrap();
		assert_eq!(first.activate(PagerControl::Previous), None);
		assert!(!first.is_enabled(PagerControl::Previous));

		let last = page_controls(2, 2).unwrap();
		assert_eq!(last.activate(PagerControl::Next), None);
		assert_eq!(last.activate(PagerControl::Page(3)), None);
		assert_eq!(last.activate(PagerControl::Page(0)), None);
	}
}
