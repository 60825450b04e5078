use url::Url;
use url::form_urlencoded;

use crate::error::FetchError;
use crate::types::{ProductPage, QueryState};

/// Path of the products search endpoint.
pub const PRODUCTS_PATH: &str = "/api/products";

/// A request for one page of products matching a text query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageRequest {
	pub query: String,
	pub page: u32,
}

impl PageRequest {
	pub fn new(query: impl Into<String>, page: u32) -> Self {
		Self {
			query: query.into(),
			page,
		}
	}

	/// Encoded `query=..&page=..` string.
	///
	/// The search text is encoded as a URI component: spaces become `%20`
	/// and `!()~*` pass through unescaped.
	#[must_use]
	pub fn query_string(&self) -> String {
		format!("query={}&page={}", encode_component(&self.query), self.page)
	}

	/// Origin-relative target, e.g. `/api/products?query=abc&page=1`.
	#[must_use]
	pub fn path(&self) -> String {
		format!("{PRODUCTS_PATH}?{}", self.query_string())
	}

	/// Absolute URL of this request against the API base.
	pub fn url(&self, base: &Url) -> Result<Url, url::ParseError> {
		let mut url = base.join(PRODUCTS_PATH)?;
		url.set_query(Some(&self.query_string()));
		Ok(url)
	}
}

/// Escapes `form_urlencoded` applies that a URI component leaves alone.
/// `'` stays escaped since URL parsing escapes it in http queries anyway.
const COMPONENT_PASSTHROUGH: [(&str, &str); 4] =
	[("%21", "!"), ("%28", "("), ("%29", ")"), ("%7E", "~")];

fn encode_component(text: &str) -> String {
	let mut encoded: String = form_urlencoded::byte_serialize(text.as_bytes())
		.collect::<String>()
		.replace('+', "%20");
	for (escape, literal) in COMPONENT_PASSTHROUGH {
		encoded = encoded.replace(escape, literal);
	}
	encoded
}

impl From<&QueryState> for PageRequest {
	fn from(query: &QueryState) -> Self {
		Self::new(query.search_text.clone(), query.page)
	}
}

/// Transport able to resolve a [`PageRequest`] into a page of products.
///
/// Implementations block until the request completes; the
/// [`FetchWorker`](crate::FetchWorker) runs them off the UI thread.
pub trait ProductSource: Send + Sync {
	fn fetch(&self, request: &PageRequest) -> Result<ProductPage, FetchError>;
}

impl<S: ProductSource + ?Sized> ProductSource for std::sync::Arc<S> {
	fn fetch(&self, request: &PageRequest) -> Result<ProductPage, FetchError> {
		(**self).fetch(request)
	}
}
