//! Client-level error types shared across signing, transports, and endpoint calls.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Private key could not be loaded.
	#[error(transparent)]
	KeyLoad(#[from] KeyLoadError),
	/// Request signature could not be produced.
	#[error(transparent)]
	Signing(#[from] SigningError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Caller-supplied arguments cannot form a valid request.
	#[error("Invalid request parameter: {reason}.")]
	InvalidParameter {
		/// Human-readable reason string.
		reason: String,
	},
	/// Walmart answered with a non-success status.
	#[error(
		"Walmart server answered with the following error: {reason}{}. Status code: {status}.",
		.detail.as_deref().map(|d| format!(" - {d}")).unwrap_or_default()
	)]
	Http {
		/// HTTP status code.
		status: u16,
		/// Short label describing the status.
		reason: &'static str,
		/// Vendor-supplied message extracted from `400` bodies.
		detail: Option<String>,
		/// Raw response body.
		body: String,
	},
	/// Response JSON does not have the shape the caller navigated into.
	#[error("Unexpected response shape: expected {expected}, found {found}.")]
	UnexpectedResponseShape {
		/// Shape the operation required.
		expected: &'static str,
		/// Shape that was actually present.
		found: &'static str,
	},
	/// Response body is not valid JSON or does not match the requested type.
	#[error("Response body could not be decoded.")]
	Decode {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
}
impl Error {
	/// Builds an [`Error::InvalidParameter`] from any displayable reason.
	pub fn invalid_parameter(reason: impl Into<String>) -> Self {
		Self::InvalidParameter { reason: reason.into() }
	}

	/// Builds an [`Error::Http`] from a status code and raw body.
	///
	/// `400` bodies are inspected for the vendor's `errors[0].message` detail.
	pub fn http(status: u16, body: impl Into<String>) -> Self {
		let body = body.into();
		let detail = if status == 400 { bad_request_detail(&body) } else { None };

		Self::Http { status, reason: status_reason(status), detail, body }
	}

	/// Returns the HTTP status attached to the error, if any.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Http { status, .. } => Some(*status),
			Self::Decode { status, .. } => *status,
			_ => None,
		}
	}
}

/// Failures raised while reading or parsing the private key.
#[derive(Debug, ThisError)]
pub enum KeyLoadError {
	/// Key file is missing or unreadable.
	#[error("Private key file `{}` could not be read.", .path.display())]
	Io {
		/// Path that was read.
		path: PathBuf,
		/// Underlying IO failure.
		#[source]
		source: std::io::Error,
	},
	/// Key material is not a supported RSA private key.
	#[error("Private key `{source_name}` is not a valid RSA private key: {reason}.")]
	Parse {
		/// File path or `<memory>` for in-memory keys.
		source_name: String,
		/// Parser-supplied reason string.
		reason: String,
	},
}

/// Failures raised by the RSA signing operation.
#[derive(Debug, ThisError)]
#[error("Request signature could not be produced.")]
pub struct SigningError {
	#[source]
	source: BoxError,
}
impl SigningError {
	/// Wraps a signer-specific failure.
	pub fn new(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self { source: Box::new(src) }
	}
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Base URL or endpoint URL cannot be parsed.
	#[error("URL `{url}` is invalid.")]
	InvalidUrl {
		/// Rejected URL text.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL cannot carry a path.
	#[error("Base URL `{url}` cannot be used as an API origin.")]
	CannotBeABase {
		/// Rejected URL text.
		url: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for ConfigError {
	fn from(e: reqwest::Error) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the Walmart API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the Walmart API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for TransportError {
	fn from(e: reqwest::Error) -> Self {
		Self::network(e)
	}
}

/// Maps a status code onto the label Walmart's proxy documents for it.
pub fn status_reason(status: u16) -> &'static str {
	match status {
		400 => "Bad Request",
		403 => "Forbidden",
		404 => "Wrong endpoint",
		414 => "Request URI too long",
		500 => "Internal Server Error",
		502 => "Bad Gateway",
		503 => "Service Unavailable/ API maintenance",
		504 => "Gateway Timeout",
		_ => "Error",
	}
}

fn bad_request_detail(body: &str) -> Option<String> {
	let value: Value = serde_json::from_str(body).ok()?;

	value
		.get("errors")?
		.get(0)?
		.get("message")?
		.as_str()
		.map(ToOwned::to_owned)
}
