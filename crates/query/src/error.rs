use thiserror::Error;

/// Reasons a product page could not be fetched.
///
/// Every variant is caught by the coordinator and turned into a failed
/// [`Status`](crate::Status); none of them reach the rendering layer as an
/// error value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
	/// The request never produced a response (connection refused, timeout, ...).
	#[error("network failure: {0}")]
	Network(String),

	/// The server answered with a non-success status code.
	#[error("server responded with status {0}")]
	Status(u16),

	/// The response body could not be decoded as a product page.
	#[error("malformed response: {0}")]
	Malformed(String),
}

impl FetchError {
	/// Whether the failure came from the response rather than the transport.
	#[must_use]
	pub fn is_invalid_response(&self) -> bool {
		matches!(self, Self::Status(_) | Self::Malformed(_))
	}
}

impl From<serde_json::Error> for FetchError {
	fn from(err: serde_json::Error) -> Self {
		Self::Malformed(err.to_string())
	}
}
