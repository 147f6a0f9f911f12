//! Transport primitives for Walmart API calls.
//!
//! The client core never touches the network directly. It produces an [`HttpRequest`] with the
//! final URL (query already encoded), headers, and optional body, then hands it to a transport:
//! [`BlockingTransport`] for callers that block the current thread, or [`AsyncTransport`] for
//! callers that suspend at the network boundary. Status handling stays in the client so both
//! transports only move bytes. Timeouts belong to the transport; the reqwest adapters accept them
//! at construction.

// std
#[cfg(feature = "reqwest")] use std::time::Duration;
// self
use crate::{_prelude::*, error::TransportError};

/// Boxed future returned by [`AsyncTransport::execute`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, TransportError>> + 'a + Send>>;

/// HTTP verbs used by the affiliate API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
	/// Read-only lookups.
	Get,
	/// Calls that carry a JSON body.
	Post,
}
impl HttpMethod {
	/// Returns the canonical verb.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Fully resolved outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
	/// HTTP verb.
	pub method: HttpMethod,
	/// Absolute URL including the encoded query string.
	pub url: Url,
	/// Header name/value pairs.
	pub headers: Vec<(String, String)>,
	/// Serialized JSON body, if the endpoint takes one.
	pub body: Option<Vec<u8>>,
}

/// Raw response handed back by a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body.
	pub body: Vec<u8>,
}
impl HttpResponse {
	/// Builds a response from a status and body.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, body: body.into() }
	}

	/// Returns true for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Lossy UTF-8 view of the body, used for error reporting.
	pub fn body_text(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}
}

/// Transport that blocks the calling thread until the response arrives.
pub trait BlockingTransport
where
	Self: 'static + Send + Sync,
{
	/// Executes one request.
	fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Transport whose calls suspend until the response arrives.
///
/// Returned futures must be `Send` so callers can drive them on multi-threaded executors.
pub trait AsyncTransport
where
	Self: 'static + Send + Sync,
{
	/// Executes one request.
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_>;
}

impl<T> BlockingTransport for Arc<T>
where
	T: ?Sized + BlockingTransport,
{
	fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
		(**self).execute(request)
	}
}
impl<T> AsyncTransport for Arc<T>
where
	T: ?Sized + AsyncTransport,
{
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_> {
		(**self).execute(request)
	}
}

/// Thin wrapper around [`reqwest::Client`] implementing [`AsyncTransport`].
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport(pub reqwest::Client);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing reqwest client.
	pub fn with_client(client: reqwest::Client) -> Self {
		Self(client)
	}

	/// Builds a client with a per-request timeout.
	pub fn with_timeout(timeout: Duration) -> Result<Self, crate::error::ConfigError> {
		Ok(Self(reqwest::Client::builder().timeout(timeout).build()?))
	}
}
#[cfg(feature = "reqwest")]
impl AsyncTransport for ReqwestTransport {
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_> {
		Box::pin(async move {
			let HttpRequest { method, url, headers, body } = request;
			let mut builder = self.0.request(reqwest_method(method), url);

			for (name, value) in headers {
				builder = builder.header(name, value);
			}
			if let Some(body) = body {
				builder = builder.header(reqwest::header::CONTENT_TYPE, "application/json").body(body);
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok(HttpResponse { status, body })
		})
	}
}

/// Thin wrapper around [`reqwest::blocking::Client`] implementing [`BlockingTransport`].
///
/// reqwest's blocking client drives its own runtime; do not construct or drop it inside an async
/// context.
#[cfg(feature = "blocking")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestBlockingTransport(pub reqwest::blocking::Client);
#[cfg(feature = "blocking")]
impl ReqwestBlockingTransport {
	/// Wraps an existing blocking reqwest client.
	pub fn with_client(client: reqwest::blocking::Client) -> Self {
		Self(client)
	}

	/// Builds a client with a per-request timeout.
	pub fn with_timeout(timeout: Duration) -> Result<Self, crate::error::ConfigError> {
		Ok(Self(reqwest::blocking::Client::builder().timeout(timeout).build()?))
	}
}
#[cfg(feature = "blocking")]
impl BlockingTransport for ReqwestBlockingTransport {
	fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
		let HttpRequest { method, url, headers, body } = request;
		let mut builder = self.0.request(reqwest_method(method), url);

		for (name, value) in headers {
			builder = builder.header(name, value);
		}
		if let Some(body) = body {
			builder = builder.header(reqwest::header::CONTENT_TYPE, "application/json").body(body);
		}

		let response = builder.send()?;
		let status = response.status().as_u16();
		let body = response.bytes()?.to_vec();

		Ok(HttpResponse { status, body })
	}
}

#[cfg(feature = "reqwest")]
fn reqwest_method(method: HttpMethod) -> reqwest::Method {
	match method {
		HttpMethod::Get => reqwest::Method::GET,
		HttpMethod::Post => reqwest::Method::POST,
	}
}
