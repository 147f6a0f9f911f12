// self
use crate::{
	_prelude::*,
	auth::ConsumerId,
	endpoint::Endpoint,
	error::SigningError,
	http::HttpMethod,
	obs::{CallOutcome, count_call},
};

/// The `walmart_io.call` span; zero-sized without the `tracing` feature.
#[derive(Clone, Debug)]
pub(crate) struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	pub(crate) fn new(endpoint: Endpoint, mode: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			Self { span: tracing::info_span!("walmart_io.call", endpoint = endpoint.as_str(), mode) }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (endpoint, mode);

			Self {}
		}
	}

	pub(crate) fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
		#[cfg(feature = "tracing")]
		{
			self.span.in_scope(f)
		}
		#[cfg(not(feature = "tracing"))]
		{
			f()
		}
	}

	// The span is attached to the future, never entered across an await.
	pub(crate) async fn drive<F>(&self, fut: F) -> F::Output
	where
		F: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone()).await
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut.await
		}
	}
}

/// Logs client construction; only the last characters of the consumer id are emitted.
pub fn client_ready(mode: &'static str, consumer_id: &ConsumerId) {
	#[cfg(feature = "tracing")]
	tracing::info!(mode, consumer_id_tail = consumer_id.tail(), "walmart_io client ready");
	#[cfg(not(feature = "tracing"))]
	let _ = (mode, consumer_id);
}

/// Logs an outbound request before it reaches the transport.
pub fn request_started(endpoint: Endpoint, method: HttpMethod, path: &str) {
	#[cfg(feature = "tracing")]
	tracing::debug!(endpoint = endpoint.as_str(), method = method.as_str(), path, "sending request");
	#[cfg(not(feature = "tracing"))]
	let _ = (endpoint, method, path);
}

/// Logs the status returned by the transport.
pub fn response_received(endpoint: Endpoint, status: u16) {
	#[cfg(feature = "tracing")]
	tracing::debug!(endpoint = endpoint.as_str(), status, "response received");
	#[cfg(not(feature = "tracing"))]
	let _ = (endpoint, status);
}

/// Logs a signing failure; the key itself never reaches the log.
pub fn signing_failed(endpoint: Endpoint, error: &SigningError) {
	#[cfg(feature = "tracing")]
	tracing::warn!(endpoint = endpoint.as_str(), error = %error, "request signing failed");
	#[cfg(not(feature = "tracing"))]
	let _ = (endpoint, error);
}

/// Logs and counts a bulk chunk dropped after a failure.
pub fn chunk_skipped(chunk: usize, ids: &str, error: &Error) {
	#[cfg(feature = "tracing")]
	tracing::warn!(endpoint = Endpoint::ProductLookup.as_str(), chunk, ids, error = %error, "bulk chunk skipped");
	#[cfg(not(feature = "tracing"))]
	let _ = (chunk, ids, error);

	count_call(Endpoint::ProductLookup, CallOutcome::Skipped);
}
