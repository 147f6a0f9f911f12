// self
use crate::{endpoint::Endpoint, obs::CallOutcome};

/// Bumps `walmart_io_call_total` for `endpoint` and `outcome`.
pub fn count_call(endpoint: Endpoint, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(
		"walmart_io_call_total",
		"endpoint" => endpoint.as_str(),
		"outcome" => outcome.as_str()
	)
	.increment(1);
	#[cfg(not(feature = "metrics"))]
	let _ = (endpoint, outcome);
}
