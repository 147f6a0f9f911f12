//! Signed request construction.
//!
//! [`RequestBuilder`] is the single place where caller parameters meet credentials. Every call
//! takes a fresh [`Timestamp`], signs it, and merges `consumerId`, `signature`, and `timestamp`
//! into the query. The same values are mirrored into Walmart's `WM_*` headers so the request
//! authenticates under either scheme the proxy accepts.

pub mod params;

pub use params::*;

// self
use crate::{
	_prelude::*,
	auth::{ConsumerId, Credentials, KeyVersion, Signature, Signer, Timestamp},
	config::ClientConfig,
	endpoint::Call,
	http::{HttpMethod, HttpRequest},
	obs,
};

/// Query keys owned by the signing layer; callers cannot set them.
pub const RESERVED_PARAMS: [&str; 3] = ["consumerId", "signature", "timestamp"];

/// Ephemeral request carrying its own signature; built per call and dropped afterwards.
#[derive(Clone, Debug)]
pub struct SignedRequest {
	/// HTTP verb.
	pub method: HttpMethod,
	/// Endpoint path relative to the base URL.
	pub path: String,
	/// Normalized caller parameters (without the signing triple).
	pub params: Params,
	/// Optional JSON body.
	pub body: Option<Value>,
	/// Consumer id the request was signed for.
	pub consumer_id: ConsumerId,
	/// Key version the request was signed with.
	pub key_version: KeyVersion,
	/// Base64 signature over the canonical string.
	pub signature: Signature,
	/// Millisecond timestamp covered by the signature.
	pub timestamp: Timestamp,
}
impl SignedRequest {
	/// Query pairs sent on the wire: caller params followed by the signing triple.
	pub fn query_pairs(&self) -> Vec<(String, String)> {
		let mut pairs = self.params.to_pairs();

		pairs.push(("consumerId".into(), self.consumer_id.to_string()));
		pairs.push(("signature".into(), self.signature.expose().to_owned()));
		pairs.push(("timestamp".into(), self.timestamp.to_string()));

		pairs
	}

	/// Vendor header form of the same credentials.
	pub fn headers(&self) -> Vec<(String, String)> {
		vec![
			("WM_CONSUMER.ID".into(), self.consumer_id.to_string()),
			("WM_CONSUMER.INTIMESTAMP".into(), self.timestamp.to_string()),
			("WM_SEC.AUTH_SIGNATURE".into(), self.signature.expose().to_owned()),
			("WM_SEC.KEY_VERSION".into(), self.key_version.to_string()),
		]
	}

	/// Resolves the request against `config` into a transport-ready [`HttpRequest`].
	pub fn into_http(self, config: &ClientConfig) -> Result<HttpRequest> {
		let mut url = config.endpoint_url(&self.path)?;

		url.query_pairs_mut().extend_pairs(self.query_pairs());

		let headers = self.headers();
		let body = self
			.body
			.as_ref()
			.map(serde_json::to_vec)
			.transpose()
			.map_err(|e| Error::invalid_parameter(format!("request body is not serializable: {e}")))?;

		Ok(HttpRequest { method: self.method, url, headers, body })
	}
}

/// Merges caller parameters with credentials and client defaults.
#[derive(Clone, Debug)]
pub struct RequestBuilder {
	signer: Signer,
	config: ClientConfig,
}
impl RequestBuilder {
	/// Creates a builder for one credential set.
	pub fn new(credentials: &Credentials, config: ClientConfig) -> Self {
		Self { signer: Signer::new(credentials), config }
	}

	/// Client defaults applied by this builder.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Mutable access to the client defaults.
	pub fn config_mut(&mut self) -> &mut ClientConfig {
		&mut self.config
	}

	/// Signer used by this builder.
	pub fn signer(&self) -> &Signer {
		&self.signer
	}

	/// Builds a signed request for `call`, stamping it with the current time.
	pub fn build(&self, call: &Call) -> Result<SignedRequest> {
		self.build_at(call, Timestamp::now())
	}

	/// Builds a signed request for `call` at an explicit timestamp.
	pub fn build_at(&self, call: &Call, timestamp: Timestamp) -> Result<SignedRequest> {
		let params = self.normalize(&call.params)?;
		let signature = self.signer.sign(timestamp).inspect_err(|e| {
			obs::signing_failed(call.endpoint, e);
		})?;

		Ok(SignedRequest {
			method: call.endpoint.method(),
			path: call.path.clone(),
			params,
			body: call.body.clone(),
			consumer_id: self.signer.consumer_id().clone(),
			key_version: self.signer.key_version().clone(),
			signature,
			timestamp,
		})
	}

	fn normalize(&self, params: &Params) -> Result<Params> {
		if let Some(key) = RESERVED_PARAMS.iter().find(|key| params.contains(key)) {
			return Err(Error::invalid_parameter(format!(
				"`{key}` is set by the signing layer and cannot be passed explicitly"
			)));
		}

		let mut params = params.clone();

		// Responses are always JSON.
		params.remove("format");

		if !params.contains("richAttributes") {
			params.insert("richAttributes", self.config.rich_attributes);
		}
		if let Some(publisher_id) = &self.config.publisher_id {
			if !params.contains("publisherId") {
				params.insert("publisherId", publisher_id.to_string());
			}
		}

		Ok(params)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		auth::{PrivateKey, PublisherId},
		endpoint::Endpoint,
	};

	fn builder(config: ClientConfig) -> RequestBuilder {
		let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/test_key.pem");
		let credentials = Credentials::new(
			ConsumerId::new("consumer-1").expect("Consumer fixture should be valid."),
			KeyVersion::default(),
			PrivateKey::from_file(path).expect("Key fixture should load."),
		);

		RequestBuilder::new(&credentials, config)
	}

	fn call(params: Params) -> Call {
		Call::new(Endpoint::Taxonomy, params)
	}

	#[test]
	fn build_merges_signing_triple_and_defaults() {
		let builder = builder(ClientConfig::default());
		let caller = Params::new().with("format", "xml").with("count", 5);
		let request = builder
			.build_at(&call(caller.clone()), Timestamp::from_millis(1_700_000_000_000))
			.expect("Request should build.");
		let pairs = request.query_pairs();

		assert_eq!(caller.get("format"), Some(&ParamValue::from("xml")), "Caller params must not change.");
		assert!(!request.params.contains("format"));
		assert_eq!(request.params.get("richAttributes"), Some(&ParamValue::Bool(true)));
		assert!(pairs.contains(&("consumerId".into(), "consumer-1".into())));
		assert!(pairs.contains(&("timestamp".into(), "1700000000000".into())));
		assert!(pairs.iter().any(|(key, value)| key == "signature" && !value.is_empty()));
		assert_eq!(request.method, HttpMethod::Get);
		assert_eq!(request.path, "/affil/product/v2/taxonomy");
	}

	#[test]
	fn caller_overrides_defaults() {
		let config = ClientConfig::default()
			.with_publisher_id(PublisherId::new("default-pub").expect("Publisher should be valid."));
		let builder = builder(config);
		let request = builder
			.build(&call(Params::new().with("richAttributes", false).with("publisherId", "mine")))
			.expect("Request should build.");

		assert_eq!(request.params.get("richAttributes"), Some(&ParamValue::Bool(false)));
		assert_eq!(request.params.get("publisherId"), Some(&ParamValue::from("mine")));

		let request = builder.build(&call(Params::new())).expect("Request should build.");

		assert_eq!(request.params.get("publisherId"), Some(&ParamValue::from("default-pub")));
	}

	#[test]
	fn reserved_keys_are_rejected() {
		let builder = builder(ClientConfig::default());
		let err = builder
			.build(&call(Params::new().with("signature", "forged")))
			.expect_err("Reserved keys must be rejected.");

		assert!(matches!(err, Error::InvalidParameter { .. }));
	}

	#[test]
	fn into_http_encodes_query_and_headers() {
		let builder = builder(ClientConfig::default());
		let request = builder
			.build_at(
				&call(Params::new().with("query", "ipod nano")),
				Timestamp::from_millis(1_700_000_000_000),
			)
			.expect("Request should build.");
		let signature = request.signature.expose().to_owned();
		let http = request.into_http(&ClientConfig::default()).expect("HTTP request should resolve.");
		let query: Vec<(String, String)> = http.url.query_pairs().into_owned().collect();

		assert_eq!(http.url.path(), "/api-proxy/service/affil/product/v2/taxonomy");
		assert!(query.contains(&("query".into(), "ipod nano".into())));
		assert!(query.contains(&("signature".into(), signature.clone())));
		assert!(http.headers.contains(&("WM_SEC.AUTH_SIGNATURE".into(), signature)));
		assert!(http.headers.contains(&("WM_SEC.KEY_VERSION".into(), "1".into())));
		assert!(http.headers.contains(&("WM_CONSUMER.INTIMESTAMP".into(), "1700000000000".into())));
		assert!(http.body.is_none());
	}
}
