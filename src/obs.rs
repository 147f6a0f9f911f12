//! Optional observability for endpoint calls.
//!
//! # Feature Flags
//!
//! - `tracing` wraps each call in a `walmart_io.call` span (`endpoint` and `mode` fields) and emits
//!   debug/warn events around the request.
//! - `metrics` counts every call on `walmart_io_call_total`, labeled by `endpoint` + `outcome`.
//!
//! Without either feature every helper compiles to nothing.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, endpoint::Endpoint};

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// A call was issued.
	Attempt,
	/// The call returned a payload.
	Success,
	/// The call failed and the error reached the caller.
	Failure,
	/// A bulk chunk was dropped after a failure.
	Skipped,
}
impl CallOutcome {
	/// Label used in span and metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
			CallOutcome::Skipped => "skipped",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Observes one endpoint call from issue to outcome.
///
/// Opening a scope counts an attempt; [`CallScope::run`] and [`CallScope::run_async`] execute the
/// call inside the span and count its success or failure.
#[derive(Debug)]
pub struct CallScope {
	endpoint: Endpoint,
	span: CallSpan,
}
impl CallScope {
	/// Opens the scope for `endpoint`; `mode` names the client flavor.
	pub fn open(endpoint: Endpoint, mode: &'static str) -> Self {
		count_call(endpoint, CallOutcome::Attempt);

		Self { endpoint, span: CallSpan::new(endpoint, mode) }
	}

	/// Runs a blocking call inside the span.
	pub fn run<T>(self, call: impl FnOnce() -> Result<T>) -> Result<T> {
		let result = self.span.in_scope(call);

		self.close(&result);

		result
	}

	/// Drives an async call inside the span.
	pub async fn run_async<T, F>(self, call: F) -> Result<T>
	where
		F: Future<Output = Result<T>>,
	{
		let result = self.span.drive(call).await;

		self.close(&result);

		result
	}

	fn close<T>(&self, result: &Result<T>) {
		let outcome = if result.is_ok() { CallOutcome::Success } else { CallOutcome::Failure };

		count_call(self.endpoint, outcome);
	}
}
