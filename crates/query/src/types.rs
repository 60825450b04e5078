use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Identifier of a product, used as the render key for list rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A single listed product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
	pub id: ProductId,
	pub name: String,
	pub price: Decimal,
}

impl Product {
	pub fn new(id: u64, name: impl Into<String>, price: Decimal) -> Self {
		Self {
			id: ProductId(id),
			name: name.into(),
			price,
		}
	}
}

/// One page of search results as returned by the products endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
	pub items: Vec<Product>,
	pub total_pages: u32,
}

impl ProductPage {
	pub fn new(items: Vec<Product>, total_pages: u32) -> Self {
		Self { items, total_pages }
	}

	/// Decode a page from a JSON response body.
	pub fn from_json(body: &str) -> Result<Self, FetchError> {
		let page: Self = serde_json::from_str(body)?;
		Ok(page)
	}

	/// Page count clamped to the `>= 1` invariant of [`ResultState`].
	///
	/// Backends commonly report zero pages for an empty result set.
	#[must_use]
	pub fn normalized_total_pages(&self) -> u32 {
		self.total_pages.max(1)
	}
}

/// Canonical input to fetching: what the user searched and which page they want.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
	pub search_text: String,
	pub page: u32,
}

impl QueryState {
	pub fn new(search_text: impl Into<String>) -> Self {
		Self {
			search_text: search_text.into(),
			page: 1,
		}
	}
}

impl Default for QueryState {
	fn default() -> Self {
		Self::new(String::new())
	}
}

/// Lifecycle of the most recently initiated fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
	/// Nothing has been fetched yet.
	#[default]
	Idle,
	Loading,
	Ready,
	Failed,
}

/// Everything the coordinator publishes about fetched data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultState {
	pub items: Vec<Product>,
	pub total_pages: u32,
	pub status: Status,
	pub last_error: Option<FetchError>,
}

impl ResultState {
	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.status == Status::Loading
	}
}

impl Default for ResultState {
	fn default() -> Self {
		Self {
			items: Vec::new(),
			total_pages: 1,
			status: Status::Idle,
			last_error: None,
		}
	}
}
