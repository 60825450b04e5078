use serde::Serialize;
use vitrine_query::Product;

/// Result of an interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionOutcome {
	/// Whether the user confirmed a selection rather than cancelling.
	pub accepted: bool,
	pub product: Option<Product>,
	pub query: String,
	pub page: u32,
}
