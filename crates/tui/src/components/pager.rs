use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;
use vitrine_query::{PageControls, PagerControl};

use crate::style::Theme;

const PREVIOUS_LABEL: &str = "‹ Prev";
const NEXT_LABEL: &str = "Next ›";
const ELLIPSIS_LABEL: &str = "…";
const GAP: &str = " ";

/// One piece of the pager line. Ellipses carry no control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerSegment {
	pub label: String,
	pub control: Option<PagerControl>,
	pub enabled: bool,
	pub active: bool,
}

impl PagerSegment {
	fn previous(controls: &PageControls) -> Self {
		Self {
			label: PREVIOUS_LABEL.to_string(),
			control: Some(PagerControl::Previous),
			enabled: controls.prev_enabled,
			active: false,
		}
	}

	fn next(controls: &PageControls) -> Self {
		Self {
			label: NEXT_LABEL.to_string(),
			control: Some(PagerControl::Next),
			enabled: controls.next_enabled,
			active: false,
		}
	}

	fn page(number: u32, current: u32) -> Self {
		Self {
			label: format!(" {number} "),
			control: Some(PagerControl::Page(number)),
			enabled: true,
			active: number == current,
		}
	}

	fn ellipsis() -> Self {
		Self {
			label: ELLIPSIS_LABEL.to_string(),
			control: None,
			enabled: false,
			active: false,
		}
	}
}

/// Lay the pager out left to right: previous, each page, next.
pub fn pager_segments(controls: &PageControls) -> Vec<PagerSegment> {
	let mut segments = Vec::with_capacity(controls.buttons.len() + 2);
	segments.push(PagerSegment::previous(controls));
	segments.extend(
		controls
			.buttons
			.iter()
			.map(|button| PagerSegment::page(button.number, controls.current)),
	);
	segments.push(PagerSegment::next(controls));
	segments
}

/// Segments that fit in `max_width` columns.
///
/// Every page is shown when there is room. Otherwise the first and last page
/// stay, the pages around the current one fill the remaining space, and gaps
/// are marked with an ellipsis. Previous and next are always kept.
pub fn fitted_segments(controls: &PageControls, max_width: usize) -> Vec<PagerSegment> {
	let all = pager_segments(controls);
	if line_width(&all) <= max_width {
		return all;
	}

	let mut best = windowed_segments(controls, 0, true);
	if line_width(&best) > max_width {
		return windowed_segments(controls, 0, false);
	}
	for radius in 1..controls.total {
		let candidate = windowed_segments(controls, radius, true);
		if line_width(&candidate) > max_width {
			break;
		}
		best = candidate;
	}
	best
}

fn windowed_segments(controls: &PageControls, radius: u32, with_edges: bool) -> Vec<PagerSegment> {
	let current = controls.current.clamp(1, controls.total);
	let low = current.saturating_sub(radius).max(1);
	let high = current.saturating_add(radius).min(controls.total);

	let mut pages = Vec::new();
	if with_edges && low > 1 {
		pages.push(1);
	}
	pages.extend(low..=high);
	if with_edges && high < controls.total {
		pages.push(controls.total);
	}

	let mut segments = Vec::with_capacity(pages.len() * 2 + 2);
	segments.push(PagerSegment::previous(controls));
	let mut last_shown: Option<u32> = None;
	for page in pages {
		if last_shown.is_some_and(|last| page > last + 1) {
			segments.push(PagerSegment::ellipsis());
		}
		segments.push(PagerSegment::page(page, controls.current));
		last_shown = Some(page);
	}
	segments.push(PagerSegment::next(controls));
	segments
}

fn line_width(segments: &[PagerSegment]) -> usize {
	let labels: usize = segments.iter().map(|segment| segment.label.width()).sum();
	labels.saturating_add(GAP.len().saturating_mul(segments.len().saturating_sub(1)))
}

fn segment_style(segment: &PagerSegment, theme: &Theme) -> Style {
	if segment.active {
		theme.pager_active_style()
	} else if !segment.enabled {
		theme.pager_disabled_style()
	} else {
		Style::default()
	}
}

/// Draw the pager centred in `area` and return the hit box of each visible control.
pub fn render_pager(
	frame: &mut Frame,
	area: Rect,
	controls: &PageControls,
	theme: &Theme,
) -> Vec<(Rect, PagerControl)> {
	if area.width == 0 || area.height == 0 {
		return Vec::new();
	}

	let available = usize::from(area.width);
	let segments = fitted_segments(controls, available);
	let offset = available.saturating_sub(line_width(&segments)) / 2;

	let left = usize::from(area.x);
	let right = left + available;
	let mut x = left + offset;
	let mut hits = Vec::with_capacity(segments.len());
	let mut spans = Vec::with_capacity(segments.len() * 2);

	for (index, segment) in segments.iter().enumerate() {
		if index > 0 {
			spans.push(Span::raw(GAP));
			x = x.saturating_add(GAP.len());
		}
		let width = segment.label.width();
		if let Some(control) = segment.control
			&& x < right
		{
			let visible = width.min(right - x);
			// Both values are bounded by the area, which fits in u16.
			let rect = Rect::new(x as u16, area.y, visible as u16, 1);
			hits.push((rect, control));
		}
		spans.push(Span::styled(segment.label.clone(), segment_style(segment, theme)));
		x = x.saturating_add(width);
	}

	let line_area = Rect {
		x: area.x + offset as u16,
		width: area.width - offset as u16,
		..area
	};
	frame.render_widget(Paragraph::new(Line::from(spans)), line_area);
	hits
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;
	use vitrine_query::page_controls;

	use super::*;

	fn render_hits(controls: &PageControls, width: u16) -> (Vec<(Rect, PagerControl)>, String) {
		let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
		let mut hits = Vec::new();
		terminal
			.draw(|frame| {
				hits = render_pager(frame, frame.area(), controls, &Theme::default());
			})
			.unwrap();
		let buffer = terminal.backend().buffer();
		let line = (0..width).map(|x| buffer[(x, 0)].symbol().to_string()).collect();
		(hits, line)
	}

	fn controls_of(hits: &[(Rect, PagerControl)]) -> Vec<PagerControl> {
		hits.iter().map(|(_, control)| *control).collect()
	}

	#[test]
	fn segments_wrap_page_buttons_with_direction_controls() {
		let controls = page_controls(1, 3).unwrap();
		let segments = pager_segments(&controls);

		let labels: Vec<&str> = segments.iter().map(|s| s.label.as_str()).collect();
		assert_eq!(labels, ["‹ Prev", " 1 ", " 2 ", " 3 ", "Next ›"]);
		assert!(!segments[0].enabled);
		assert!(segments[1].active);
		assert!(segments[4].enabled);
	}

	#[test]
	fn hit_boxes_line_up_with_rendered_labels() {
		let controls = page_controls(2, 3).unwrap();
		let (hits, _) = render_hits(&controls, 40);

		assert_eq!(hits.len(), 5);
		let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
		terminal
			.draw(|frame| {
				render_pager(frame, frame.area(), &controls, &Theme::default());
			})
			.unwrap();
		let buffer = terminal.backend().buffer();
		for (rect, control) in &hits {
			let text: String = (rect.x..rect.x + rect.width)
				.map(|x| buffer[(x, 0)].symbol().to_string())
				.collect();
			let expected = match control {
				PagerControl::Previous => "‹ Prev".to_string(),
				PagerControl::Next => "Next ›".to_string(),
				PagerControl::Page(n) => format!(" {n} "),
			};
			assert_eq!(text, expected);
		}
	}

	#[test]
	fn huge_page_counts_render_inside_the_line() {
		let controls = page_controls(1, 10_000).unwrap();
		let (hits, line) = render_hits(&controls, 80);

		let shown = controls_of(&hits);
		assert_eq!(shown.first(), Some(&PagerControl::Previous));
		assert_eq!(shown.last(), Some(&PagerControl::Next));
		assert!(shown.contains(&PagerControl::Page(1)));
		assert!(shown.contains(&PagerControl::Page(10_000)));
		assert!(line.contains('…'));
		for (rect, _) in &hits {
			assert!(rect.x + rect.width <= 80);
		}
	}

	#[test]
	fn next_stays_clickable_when_pages_overflow_the_line() {
		let controls = page_controls(1, 20).unwrap();
		let (hits, line) = render_hits(&controls, 80);

		let (rect, _) = hits
			.iter()
			.find(|(_, control)| *control == PagerControl::Next)
			.expect("next is visible");
		assert!(rect.x + rect.width <= 80);
		assert!(line.contains("Next ›"));
	}

	#[test]
	fn window_follows_the_current_page() {
		let controls = page_controls(10, 20).unwrap();
		let segments = fitted_segments(&controls, 40);

		assert!(line_width(&segments) <= 40);
		let pages: Vec<u32> = segments
			.iter()
			.filter_map(|segment| match segment.control {
				Some(PagerControl::Page(number)) => Some(number),
				_ => None,
			})
			.collect();
		assert_eq!(pages.first(), Some(&1));
		assert_eq!(pages.last(), Some(&20));
		assert!(pages.contains(&10));
		assert!(pages.windows(2).all(|pair| pair[0] < pair[1]));
		let ellipses = segments.iter().filter(|s| s.control.is_none()).count();
		assert_eq!(ellipses, 2);
		assert!(segments.iter().any(|s| s.active && s.label == " 10 "));
	}

	#[test]
	fn narrow_lines_keep_direction_controls_and_current_page() {
		let controls = page_controls(500, 1_000).unwrap();
		let segments = fitted_segments(&controls, 20);
		let labels: Vec<&str> = segments.iter().map(|s| s.label.as_str()).collect();
		assert_eq!(labels, ["‹ Prev", " 500 ", "Next ›"]);
	}

	#[test]
	fn small_page_counts_are_not_windowed() {
		let controls = page_controls(2, 5).unwrap();
		assert_eq!(fitted_segments(&controls, 80), pager_segments(&controls));
	}
}
