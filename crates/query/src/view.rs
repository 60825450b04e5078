//! Pure derivation of what a front end should draw.
//!
//! Nothing here performs IO or mutates coordinator state; the same
//! `(QueryState, ResultState)` pair always yields the same [`ListingView`].

use rust_decimal::{Decimal, RoundingStrategy};

use crate::navigator::{PageControls, page_controls};
use crate::types::{Product, ProductId, QueryState, ResultState, Status};

/// Text shown in place of rows while a fetch is running.
pub const LOADING_TEXT: &str = "Loading products...";
/// Text of the explicit empty-result row.
pub const NO_RESULTS_TEXT: &str = "No products found.";

/// A formatted product row, keyed by the product id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
	pub key: ProductId,
	pub name: String,
	pub price: String,
}

impl ProductRow {
	pub fn from_product(product: &Product) -> Self {
		Self {
			key: product.id,
			name: product.name.clone(),
			price: format_price(product.price),
		}
	}

	/// Single-line label, e.g. `Produto X — R$ 10.00`.
	#[must_use]
	pub fn label(&self) -> String {
		format!("{} — {}", self.name, self.price)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
	Loading,
	Rows(Vec<ProductRow>),
	NoResults,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
	pub loading: bool,
	pub body: ListBody,
	pub current_page: u32,
	pub total_pages: u32,
	pub pager: Option<PageControls>,
	/// Failure message shown alongside the last known rows.
	pub notice: Option<String>,
}

impl ListingView {
	pub fn rows(&self) -> &[ProductRow] {
		match &self.body {
			ListBody::Rows(rows) => rows,
			_ => &[],
		}
	}
}

/// Format a price the way the listing displays it: `R$ 10.00`.
#[must_use]
pub fn format_price(price: Decimal) -> String {
	let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
	format!("R$ {rounded:.2}")
}

#[must_use]
pub fn derive_view(query: &QueryState, results: &ResultState) -> ListingView {
	let loading = results.is_loading();
	let body = if loading {
		ListBody::Loading
	} else if results.items.is_empty() {
		ListBody::NoResults
	} else {
		ListBody::Rows(results.items.iter().map(ProductRow::from_product).collect())
	};

	let notice = match (&results.status, &results.last_error) {
		(Status::Failed, Some(error)) => Some(format!("Could not load products: {error}")),
		(Status::Failed, None) => Some("Could not load products.".to_string()),
		_ => None,
	};

	ListingView {
		loading,
		body,
		current_page: query.page,
		total_pages: results.total_pages,
		pager: page_controls(query.page, results.total_pages),
		notice,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::FetchError;

	fn product(id: u64, name: &str, price: Decimal) -> Product {
		Product::new(id, name, price)
	}

	fn ready(items: Vec<Product>, total_pages: u32) -> ResultState {
		ResultState {
			items,
			total_pages,
			status: Status::Ready,
			last_error: None,
		}
	}

	#[test]
	fn prices_use_two_decimal_places() {
		assert_eq!(format_price(Decimal::from(10)), "R$ 10.00");
		assert_eq!(format_price(Decimal::new(1999, 2)), "R$ 19.99");
		assert_eq!(format_price(Decimal::new(12345, 3)), "R$ 12.35");
		assert_eq!(format_price(Decimal::new(5, 1)), "R$ 0.50");
	}

	#[test]
	fn ready_page_renders_labelled_rows_and_pager() {
		let results = ready(vec![product(1, "Produto X", Decimal::from(10))], 2);
		let view = derive_view(&QueryState::new("abc"), &results);

		assert!(!view.loading);
		assert_eq!(view.rows().len(), 1);
		assert_eq!(view.rows()[0].key, ProductId(1));
		assert_eq!(view.rows()[0].label(), "Produto X — R$ 10.00");
		let pager = view.pager.expect("two pages show a pager");
		assert!(pager.next_enabled);
		assert!(!pager.prev_enabled);
	}

	#[test]
	fn empty_ready_page_shows_no_results_row() {
		let view = derive_view(&QueryState::default(), &ready(Vec::new(), 1));
		assert_eq!(view.body, ListBody::NoResults);
		assert_eq!(view.pager, None);
		assert_eq!(view.notice, None);
	}

	#[test]
	fn loading_hides_rows_but_keeps_pager() {
		let mut results = ready(vec![product(1, "Mesa", Decimal::from(300))], 3);
		results.status = Status::Loading;
		let view = derive_view(&QueryState::default(), &results);

		assert!(view.loading);
		assert_eq!(view.body, ListBody::Loading);
		assert!(view.pager.is_some());
	}

	#[test]
	fn failure_keeps_last_rows_with_a_notice() {
		let mut results = ready(vec![product(4, "Cadeira", Decimal::from(120))], 1);
		results.status = Status::Failed;
		results.last_error = Some(FetchError::Status(503));
		let view = derive_view(&QueryState::default(), &results);

		assert!(!view.loading);
		assert_eq!(view.rows()[0].name, "Cadeira");
		assert_eq!(
			view.notice.as_deref(),
			Some("Could not load products: server responded with status 503")
		);
	}

	#[test]
	fn idle_state_renders_an_empty_list() {
		let view = derive_view(&QueryState::default(), &ResultState::default());
		assert!(!view.loading);
		assert_eq!(view.body, ListBody::NoResults);
	}
}
