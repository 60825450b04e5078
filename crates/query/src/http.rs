//! Blocking HTTP transport for the products endpoint.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use url::Url;

use crate::error::FetchError;
use crate::source::{PageRequest, ProductSource};
use crate::types::ProductPage;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches product pages from `GET {base_url}/api/products`.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
	client: Client,
	base_url: Url,
}

impl HttpProductSource {
	pub fn new(base_url: Url) -> Result<Self, FetchError> {
		Self::with_timeout(base_url, DEFAULT_TIMEOUT)
	}

	pub fn with_timeout(base_url: Url, timeout: Duration) -> Result<Self, FetchError> {
		let client = Client::builder()
			.timeout(timeout)
			.build()
			.map_err(|err| FetchError::Network(err.to_string()))?;
		Ok(Self { client, base_url })
	}

	pub fn base_url(&self) -> &Url {
		&self.base_url
	}
}

impl ProductSource for HttpProductSource {
	fn fetch(&self, request: &PageRequest) -> Result<ProductPage, FetchError> {
		let url = request
			.url(&self.base_url)
			.map_err(|err| FetchError::Network(format!("invalid request url: {err}")))?;
		debug!("GET {url}");

		let response = self
			.client
			.get(url)
			.header(reqwest::header::ACCEPT, "application/json")
			.send()
			.map_err(|err| FetchError::Network(err.to_string()))?;

		let status = response.status();
		if !status.is_success() {
			return Err(FetchError::Status(status.as_u16()));
		}

		let body = response
			.text()
			.map_err(|err| FetchError::Network(err.to_string()))?;
		ProductPage::from_json(&body)
	}
}

#[cfg(test)]
mod tests {
	use std::io::{BufRead, BufReader, Write};
	use std::net::TcpListener;
	use std::sync::mpsc;
	use std::thread;

	use rust_decimal::Decimal;

	use super::*;

	/// Serve a single canned response and report the request line received.
	fn serve_once(status: &'static str, body: &'static str) -> (Url, mpsc::Receiver<String>) {
		let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
		let addr = listener.local_addr().unwrap();
		let (tx, rx) = mpsc::channel();

		thread::spawn(move || {
			let (stream, _) = listener.accept().expect("accept");
			let mut reader = BufReader::new(stream.try_clone().unwrap());
			let mut request_line = String::new();
			reader.read_line(&mut request_line).unwrap();
			loop {
				let mut header = String::new();
				reader.read_line(&mut header).unwrap();
				if header == "\r\n" || header.is_empty() {
					break;
				}
			}
			let mut stream = stream;
			write!(
				stream,
				"HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
				body.len()
			)
			.unwrap();
			let _ = tx.send(request_line.trim_end().to_string());
		});

		let url = Url::parse(&format!("http://{addr}/")).unwrap();
		(url, rx)
	}

	#[test]
	fn fetches_and_decodes_a_page() {
		let (base, requests) = serve_once(
			"200 OK",
			r#"{"items":[{"id":1,"name":"Produto X","price":10}],"totalPages":2}"#,
		);
		let source = HttpProductSource::new(base).unwrap();

		let page = source.fetch(&PageRequest::new("a b", 1)).expect("fetch page");
		assert_eq!(page.total_pages, 2);
		assert_eq!(page.items[0].price, Decimal::from(10));
		assert_eq!(
			requests.recv().unwrap(),
			"GET /api/products?query=a%20b&page=1 HTTP/1.1"
		);
	}

	#[test]
	fn non_success_status_is_an_invalid_response() {
		let (base, _requests) = serve_once("500 Internal Server Error", "{}");
		let source = HttpProductSource::new(base).unwrap();

		let err = source.fetch(&PageRequest::new("x", 1)).unwrap_err();
		assert_eq!(err, FetchError::Status(500));
	}

	#[test]
	fn malformed_body_is_an_invalid_response() {
		let (base, _requests) = serve_once("200 OK", "<html>nope</html>");
		let source = HttpProductSource::new(base).unwrap();

		let err = source.fetch(&PageRequest::new("x", 1)).unwrap_err();
		assert!(matches!(err, FetchError::Malformed(_)));
	}

	#[test]
	fn refused_connection_is_a_network_failure() {
		let listener = TcpListener::bind("127.0.0.1:0").unwrap();
		let addr = listener.local_addr().unwrap();
		drop(listener);

		let base = Url::parse(&format!("http://{addr}/")).unwrap();
		let source = HttpProductSource::with_timeout(base, Duration::from_secs(2)).unwrap();
		let err = source.fetch(&PageRequest::new("x", 1)).unwrap_err();
		assert!(matches!(err, FetchError::Network(_)));
		assert!(!err.is_invalid_response());
	}
}
