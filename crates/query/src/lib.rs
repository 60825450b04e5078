//! Query coordination for paginated, remotely searched product listings.
//!
//! The [`QueryCoordinator`] reconciles search text, the current page and the
//! lifecycle of the fetch in flight into a single sequence of requests. The
//! [`navigator`] module derives pager controls and [`view`] derives everything
//! a front end needs to draw, so neither needs a network to be tested.

pub mod coordinator;
pub mod debounce;
pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod navigator;
pub mod source;
pub mod types;
pub mod view;
pub mod worker;

pub use coordinator::{
	Applied, CoordinatorOptions, DEFAULT_DEBOUNCE, FetchCompletion, FetchDispatch, FetchTicket,
	Generation, PageRefresh, QueryCoordinator,
};
pub use error::FetchError;
#[cfg(feature = "http")]
pub use http::HttpProductSource;
pub use navigator::{PageButton, PageControls, PagerControl, page_controls};
pub use source::{PageRequest, ProductSource};
pub use types::{Product, ProductId, ProductPage, QueryState, ResultState, Status};
pub use view::{ListBody, ListingView, ProductRow, derive_view, format_price};
pub use worker::FetchWorker;
